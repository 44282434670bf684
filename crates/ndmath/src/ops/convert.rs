//! Complex packing/unpacking and complex-to-real projections.
//!
//! ## Purpose
//!
//! Lossless conversion between a packed complex buffer and a pair of real
//! component buffers, plus the one-sided projections: real part, imaginary
//! part, magnitude, and phase angle.
//!
//! ## Design notes
//!
//! * **Structural degeneracy**: All conversions are written once over the
//!   scalar trait. For a real-valued element type the imaginary component is
//!   structurally zero, so projecting the imaginary part of a "real complex"
//!   buffer yields all zeros instead of erroring.
//! * **Allocation rule**: Outputs are reallocated to the input's shape only
//!   when their element counts disagree, like every other kernel.
//! * **Split writes**: `complex_to_real_imag` writes both component outputs
//!   in a single pass; the two destinations are disjoint, so the pass
//!   parallelizes like any element-wise loop.
//!
//! ## Invariants
//!
//! * `real_imag_to_complex` followed by `complex_to_real_imag` is an exact
//!   round trip (component copies, no arithmetic).
//! * `argument` values lie in `(-pi, pi]`.
//!
//! ## Non-goals
//!
//! * No polar packing (`magnitude + phase -> complex`).

// Internal dependencies
use crate::exec;
use crate::ops::ensure_like;
use crate::primitives::buffer::NdBuffer;
use crate::primitives::errors::{KernelError, KernelResult};
use crate::scalar::Scalar;

// ============================================================================
// Packing
// ============================================================================

/// `out[i] = (re[i], im[i])` as one packed scalar.
///
/// The component buffers must agree in shape; real element types keep the
/// real component and drop the imaginary one.
pub fn real_imag_to_complex<T: Scalar>(
    re: &NdBuffer<T::Real>,
    im: &NdBuffer<T::Real>,
    out: &mut NdBuffer<T>,
) -> KernelResult<()> {
    if !re.shapes_equal(im) {
        return Err(KernelError::ShapeMismatch {
            expected: re.len(),
            got: im.len(),
        });
    }
    ensure_like(re, out);
    exec::zip_map_into(re.as_slice(), im.as_slice(), out.as_mut_slice(), |a, b| {
        T::from_parts(a, b)
    });
    Ok(())
}

/// Split `x` into its real and imaginary component buffers.
pub fn complex_to_real_imag<T: Scalar>(
    x: &NdBuffer<T>,
    re: &mut NdBuffer<T::Real>,
    im: &mut NdBuffer<T::Real>,
) -> KernelResult<()> {
    ensure_like(x, re);
    ensure_like(x, im);
    exec::unzip_into(x.as_slice(), re.as_mut_slice(), im.as_mut_slice(), |v| {
        (v.re(), v.im())
    });
    Ok(())
}

// ============================================================================
// Projections
// ============================================================================

/// `re[i] = x[i].re`.
pub fn complex_to_real<T: Scalar>(x: &NdBuffer<T>, re: &mut NdBuffer<T::Real>) -> KernelResult<()> {
    ensure_like(x, re);
    exec::map_into(x.as_slice(), re.as_mut_slice(), |v| v.re());
    Ok(())
}

/// `im[i] = x[i].im` (all zeros for real element types).
pub fn complex_to_imag<T: Scalar>(x: &NdBuffer<T>, im: &mut NdBuffer<T::Real>) -> KernelResult<()> {
    ensure_like(x, im);
    exec::map_into(x.as_slice(), im.as_mut_slice(), |v| v.im());
    Ok(())
}

/// `r[i] = |x[i]|`.
pub fn absolute<T: Scalar>(x: &NdBuffer<T>, r: &mut NdBuffer<T::Real>) -> KernelResult<()> {
    ensure_like(x, r);
    exec::map_into(x.as_slice(), r.as_mut_slice(), |v| v.abs());
    Ok(())
}

/// `r[i] = arg(x[i])`, the phase angle in `(-pi, pi]`.
pub fn argument<T: Scalar>(x: &NdBuffer<T>, r: &mut NdBuffer<T::Real>) -> KernelResult<()> {
    ensure_like(x, r);
    exec::map_into(x.as_slice(), r.as_mut_slice(), |v| v.arg());
    Ok(())
}
