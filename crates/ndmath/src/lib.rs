//! # ndmath — data-parallel math kernels for flat N-D buffers
//!
//! A library of stateless element-wise, reduction, complex-conversion, and
//! periodic-convolution kernels over contiguous N-dimensional buffers of real
//! or complex scalars. It is the computational layer beneath an array/image
//! abstraction: callers hold a flat buffer plus per-axis extents, and every
//! operation consumes one or more buffers of matching element count.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndmath::prelude::*;
//!
//! let x = NdBuffer::from_vec(&[4], vec![1.0_f64, 2.0, 3.0, 4.0]).unwrap();
//! let y = NdBuffer::from_vec(&[4], vec![10.0, 20.0, 30.0, 40.0]).unwrap();
//!
//! // Out-of-place: r = x + y
//! let mut r = NdBuffer::zeros(&[4]);
//! add(Operand::Buffer(&x), Operand::Buffer(&y), &mut r)?;
//! assert_eq!(r.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
//!
//! // In-place: the output buffer doubles as the first operand (r += y)
//! add(Operand::Output, Operand::Buffer(&y), &mut r)?;
//! assert_eq!(r.as_slice(), &[21.0, 42.0, 63.0, 84.0]);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! Complex buffers run through the same kernels:
//!
//! ```rust
//! use ndmath::prelude::*;
//!
//! let x = NdBuffer::from_vec(
//!     &[2],
//!     vec![Complex::new(3.0_f64, 4.0), Complex::new(0.0, 1.0)],
//! )
//! .unwrap();
//!
//! assert_eq!(norm1(&x), 6.0); // |3+4i| + |i|
//! let d = dotc(&x, &x)?; // conj(x) . x = |x|^2
//! assert!((d.re - 26.0).abs() < 1e-12 && d.im.abs() < 1e-12);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Aliasing
//!
//! Binary operations classify which operand, if any, shares storage with the
//! result, and pick a loop that never clobbers unread input. Passing
//! [`Operand::Output`](prelude::Operand) marks an operand as the result
//! buffer itself; the numeric outcome is bit-identical to the out-of-place
//! form. Non-commutative operations stay `x op y` even when the result
//! reuses `y`'s storage.
//!
//! ## Parallelism
//!
//! With the `parallel` feature (default), loops over buffers of at least a
//! few thousand elements fan out over rayon's worker pool in disjoint
//! contiguous chunks; smaller buffers and `parallel`-less builds run the
//! identical serial loops. Element-wise results never depend on the split.
//! Sum-reductions may differ in the final bits between splits; this is
//! accepted ULP-level nondeterminism.
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<_, KernelError>`; the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use ndmath::prelude::*;
//!
//! let x = NdBuffer::from_vec(&[3], vec![1.0_f64, 2.0, 3.0]).unwrap();
//! let y = NdBuffer::zeros(&[4]);
//! let mut r = NdBuffer::zeros(&[3]);
//!
//! match add(Operand::Buffer(&x), Operand::Buffer(&y), &mut r) {
//!     Err(KernelError::ShapeMismatch { expected, got }) => {
//!         assert_eq!((expected, got), (3, 4));
//!     }
//!     other => panic!("expected a shape mismatch, got {other:?}"),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library and rayon dependencies; every
//! kernel then runs its serial loop:
//!
//! ```toml
//! [dependencies]
//! ndmath = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - buffers, errors, aliasing classification.
pub mod primitives;

// Layer 2: Scalar - real/complex element trait.
pub mod scalar;

// Layer 3: Exec - partitioning and parallel fan-out policy.
pub mod exec;

// Layer 4: Ops - the public kernel operations.
pub mod ops;

// Standard kernel prelude.
pub mod prelude {
    pub use num_complex::Complex;

    pub use crate::ops::conv::{conv2, conv3};
    pub use crate::ops::convert::{
        absolute, argument, complex_to_imag, complex_to_real, complex_to_real_imag,
        real_imag_to_complex,
    };
    pub use crate::ops::elementwise::{
        add, add_epsilon, axpy, axpy_inplace, clear, conjugate, divide, fill, inv, multiply,
        multiply_conj, scal, scal_real, sqrt, subtract,
    };
    pub use crate::ops::reduction::{dotc, dotu, max_abs, min_abs, norm1, norm2};
    pub use crate::ops::sorting::sort;
    pub use crate::primitives::alias::{classify, AliasClass, Operand};
    pub use crate::primitives::buffer::NdBuffer;
    pub use crate::primitives::errors::{KernelError, KernelResult};
    pub use crate::scalar::Scalar;
}
