//! Flat N-dimensional buffer carrier.
//!
//! ## Purpose
//!
//! This module provides `NdBuffer`, the contiguous storage every kernel
//! operation consumes: a flat element vector plus an ordered list of per-axis
//! extents. Axis 0 is the fastest-varying ("contiguous") axis.
//!
//! ## Design notes
//!
//! * **Minimal contract**: Operations see only the element count, the per-axis
//!   extents, and flat slices. Iteration order, strides, and views are the
//!   caller's concern.
//! * **Caller-owned**: Kernels borrow buffers; the only internally created
//!   buffers are short-lived scratch (e.g., the flipped convolution kernel),
//!   discarded on return.
//! * **Reallocation rule**: `resize_to` reallocates zero-filled storage only
//!   when the element count actually changes; a same-count reshape just swaps
//!   the extents. The core never silently truncates.
//!
//! ## Invariants
//!
//! * `len() == dims().iter().product()` at all times.
//! * A zero-axis buffer (`dims == []`) holds a single scalar element (the
//!   empty product), while any zero extent yields an empty buffer.
//!
//! ## Non-goals
//!
//! * No strided views, broadcasting, or dimension-permutation logic.
//! * No growth-without-reallocation buffer recycling.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// ============================================================================
// NdBuffer
// ============================================================================

/// Contiguous N-dimensional buffer of scalar elements.
///
/// The element at multi-index `(i0, i1, ..)` lives at flat offset
/// `i0 + i1*d0 + i2*d0*d1 + ..` where `d` are the per-axis extents.
#[derive(Debug, Clone, PartialEq)]
pub struct NdBuffer<T> {
    data: Vec<T>,
    dims: Vec<usize>,
}

impl<T: Zero + Clone> NdBuffer<T> {
    /// Create a zero-filled buffer with the given per-axis extents.
    pub fn zeros(dims: &[usize]) -> Self {
        let count = dims.iter().product();
        Self {
            data: vec![T::zero(); count],
            dims: dims.to_vec(),
        }
    }

    /// Create a buffer with every element set to `value`.
    pub fn from_elem(dims: &[usize], value: T) -> Self {
        let count = dims.iter().product();
        Self {
            data: vec![value; count],
            dims: dims.to_vec(),
        }
    }

    /// Wrap an existing element vector.
    ///
    /// Returns `None` when the vector length disagrees with the extents.
    pub fn from_vec(dims: &[usize], data: Vec<T>) -> Option<Self> {
        let count: usize = dims.iter().product();
        if data.len() != count {
            return None;
        }
        Some(Self {
            data,
            dims: dims.to_vec(),
        })
    }

    /// Reallocate to the given extents if the element count differs.
    ///
    /// On reallocation the contents are reset to zero; a same-count call only
    /// replaces the extents and preserves the elements.
    pub fn resize_to(&mut self, dims: &[usize]) {
        let count: usize = dims.iter().product();
        if count != self.data.len() {
            self.data.clear();
            self.data.resize(count, T::zero());
        }
        self.dims.clear();
        self.dims.extend_from_slice(dims);
    }
}

impl<T> NdBuffer<T> {
    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Per-axis extents, axis 0 first.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Extent of axis `axis`, or 1 for axes beyond `ndim()`.
    ///
    /// Treating missing trailing axes as singleton lets a 2-D plane pass
    /// through batched entry points unchanged.
    #[inline]
    pub fn axis_extent(&self, axis: usize) -> usize {
        self.dims.get(axis).copied().unwrap_or(1)
    }

    /// `true` when both buffers have identical per-axis extents.
    #[inline]
    pub fn shapes_equal(&self, other: &Self) -> bool {
        self.dims == other.dims
    }

    /// Read-only flat element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat element slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
