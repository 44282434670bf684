//! Scalar-producing folds over a buffer.
//!
//! ## Purpose
//!
//! This module collapses buffers to scalars: the 1- and 2-norms, the
//! conjugate and plain dot products, and the min/max-by-magnitude scans.
//!
//! ## Design notes
//!
//! * **Fold order**: Sum-reductions combine per-chunk partials through the
//!   exec layer; the order is unspecified, so floating-point results may vary
//!   in the last bits between parallel splits. This is accepted ULP-level
//!   nondeterminism, not a correctness bug.
//! * **Magnitude scans**: `min_abs`/`max_abs` run sequentially and keep the
//!   first-occurring index on magnitude ties.
//!
//! ## Invariants
//!
//! * Empty buffers reduce to the operator's identity: `0` for the norms and
//!   dot products, `None` for the magnitude scans.
//!
//! ## Non-goals
//!
//! * No axis-wise (partial) reductions; every fold consumes the whole buffer.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::exec;
use crate::primitives::buffer::NdBuffer;
use crate::primitives::errors::{KernelError, KernelResult};
use crate::scalar::Scalar;

// ============================================================================
// Norms
// ============================================================================

/// Euclidean norm: `sqrt(Σ |x[i]|²)`. Empty input yields 0.
pub fn norm2<T: Scalar>(x: &NdBuffer<T>) -> T::Real {
    let sum: T::Real = exec::sum_map(x.as_slice(), |v| {
        let m = v.abs();
        m * m
    });
    Float::sqrt(sum)
}

/// Sum of magnitudes: `Σ |x[i]|`. Empty input yields 0.
pub fn norm1<T: Scalar>(x: &NdBuffer<T>) -> T::Real {
    exec::sum_map(x.as_slice(), |v| v.abs())
}

// ============================================================================
// Dot Products
// ============================================================================

/// Conjugate-linear dot product: `Σ conj(x[i]) * y[i]`.
///
/// Hermitian in the first argument; for real scalars this equals [`dotu`].
/// Empty inputs yield the additive identity.
pub fn dotc<T: Scalar>(x: &NdBuffer<T>, y: &NdBuffer<T>) -> KernelResult<T> {
    if x.len() != y.len() {
        return Err(KernelError::ShapeMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    Ok(exec::sum_zip_map(x.as_slice(), y.as_slice(), |a, b| {
        a.conj() * b
    }))
}

/// Unconjugated dot product: `Σ x[i] * y[i]`. Empty inputs yield 0.
pub fn dotu<T: Scalar>(x: &NdBuffer<T>, y: &NdBuffer<T>) -> KernelResult<T> {
    if x.len() != y.len() {
        return Err(KernelError::ShapeMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    Ok(exec::sum_zip_map(x.as_slice(), y.as_slice(), |a, b| a * b))
}

// ============================================================================
// Magnitude Scans
// ============================================================================

/// Element of minimal magnitude and its index, or `None` for an empty buffer.
///
/// Returns the raw element, not its magnitude. Ties keep the first
/// occurrence.
pub fn min_abs<T: Scalar>(x: &NdBuffer<T>) -> Option<(T, usize)> {
    let s = x.as_slice();
    let (first, rest) = s.split_first()?;
    let mut best = first.abs();
    let mut idx = 0usize;
    for (i, &v) in rest.iter().enumerate() {
        let m = v.abs();
        if m < best {
            best = m;
            idx = i + 1;
        }
    }
    Some((s[idx], idx))
}

/// Element of maximal magnitude and its index, or `None` for an empty buffer.
///
/// Returns the raw element, not its magnitude. Ties keep the first
/// occurrence.
pub fn max_abs<T: Scalar>(x: &NdBuffer<T>) -> Option<(T, usize)> {
    let s = x.as_slice();
    let (first, rest) = s.split_first()?;
    let mut best = first.abs();
    let mut idx = 0usize;
    for (i, &v) in rest.iter().enumerate() {
        let m = v.abs();
        if m > best {
            best = m;
            idx = i + 1;
        }
    }
    Some((s[idx], idx))
}
