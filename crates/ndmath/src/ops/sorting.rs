//! Sorting of real-valued buffers.
//!
//! ## Purpose
//!
//! Copy-then-sort of a real scalar buffer into an output buffer, ascending or
//! descending.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort so equal values keep their relative
//!   order, which makes results deterministic across runs.
//! * **Real only**: The `PartialOrd` bound restricts sorting to real scalars;
//!   complex buffers have no total order and are rejected at compile time.
//! * **Non-finite values**: NaN compares as equal to everything under the
//!   partial-comparison fallback and therefore keeps its input position
//!   relative to its neighbors rather than being specially placed.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::buffer::NdBuffer;
use crate::primitives::errors::KernelResult;
use crate::scalar::Scalar;

// ============================================================================
// Sort
// ============================================================================

/// Sort `x` into `r`, ascending or descending.
///
/// `r` is reallocated to `x`'s shape when the element counts disagree; the
/// input buffer is never modified.
pub fn sort<T>(x: &NdBuffer<T>, r: &mut NdBuffer<T>, ascending: bool) -> KernelResult<()>
where
    T: Scalar + PartialOrd,
{
    if r.len() != x.len() {
        r.resize_to(x.dims());
    }
    r.as_mut_slice().copy_from_slice(x.as_slice());

    let s = r.as_mut_slice();
    if ascending {
        s.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    } else {
        s.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    }

    Ok(())
}
