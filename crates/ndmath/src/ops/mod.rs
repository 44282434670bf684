//! Layer 4: Ops
//!
//! # Purpose
//!
//! This layer holds the public kernel operations, grouped by data-flow shape:
//! element-wise transforms, scalar-producing reductions, complex
//! packing/unpacking, sorting, and periodic convolution. Each group is
//! stateless; no group depends on another beyond the buffer-clear primitive.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Ops ← You are here
//!   ↓
//! Layer 3: Exec
//!   ↓
//! Layer 2: Scalar
//!   ↓
//! Layer 1: Primitives
//! ```

// Internal dependencies
use crate::primitives::buffer::NdBuffer;
use crate::scalar::Scalar;

/// Same-shape binary/unary element-wise transforms.
pub mod elementwise;

/// Scalar-producing folds (norms, dot products, magnitude scans).
pub mod reduction;

/// Complex packing/unpacking and complex-to-real projections.
pub mod convert;

/// Sorting of real-valued buffers.
pub mod sorting;

/// Periodic-boundary 2-D and 3-D convolution.
pub mod conv;

/// Reallocate `r` to `x`'s shape when the element counts disagree.
///
/// Shared allocation-on-mismatch rule: reallocation happens only on a count
/// change, so an output of the right size is reused untouched.
#[inline]
pub(crate) fn ensure_like<T: Scalar, U: Scalar>(x: &NdBuffer<T>, r: &mut NdBuffer<U>) {
    if r.len() != x.len() {
        r.resize_to(x.dims());
    }
}
