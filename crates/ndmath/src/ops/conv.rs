//! Periodic-boundary 2-D and 3-D convolution.
//!
//! ## Purpose
//!
//! Single-shot convolution of a batched stack of same-shaped planes (2-D) or
//! volumes (3-D) against a small kernel, with out-of-range neighbor samples
//! wrapping around to the opposite edge of the same axis.
//!
//! ## Design notes
//!
//! * **Kernel flip**: The stored kernel is treated as correlation-oriented;
//!   a zero-initialized scratch buffer of extents `2*half+1` per axis receives
//!   each tap at its mirrored multi-index, turning the accumulation loop into
//!   true convolution. The scratch lives for one call only.
//! * **Single wrap**: A sample index out of range on an axis is folded back by
//!   exactly one extent. This requires every kernel half-extent to be at most
//!   the corresponding plane extent; larger kernels are rejected rather than
//!   silently misindexed (no general modulo).
//! * **Batching**: The input holds `len / block` independent blocks, axis 0
//!   fastest. Blocks are the parallel unit; within a block positions are
//!   computed serially. A finer per-axis fan-out would be equally correct —
//!   no output position is ever written twice — but adds nothing once the
//!   stack is deep enough to occupy the pool.
//! * **No in-place form**: Convolution reads neighbor samples of the block it
//!   is writing, so input and output must be distinct buffers. The `&`/`&mut`
//!   signature enforces this at compile time.
//!
//! ## Invariants
//!
//! * Each accumulator starts from the additive identity; absent kernel taps
//!   contribute zero through the zero-initialized flip scratch.
//! * Output extents always match the input's after a successful call.
//!
//! ## Non-goals
//!
//! * No zero-padded or clamped boundary modes; the boundary is periodic only.
//! * No FFT-based fast path; this is the direct-sum portable kernel.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::ops::ensure_like;
use crate::primitives::buffer::NdBuffer;
use crate::primitives::errors::{KernelError, KernelResult};
use crate::scalar::Scalar;

// ============================================================================
// Kernel Flipping
// ============================================================================

/// Flip-buffer extent for a kernel axis: `2*half + 1`, checked.
#[inline]
fn flip_extent(half: usize) -> KernelResult<usize> {
    half.checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| KernelError::ComputeError(format!("kernel half-extent {half} overflows")))
}

/// Build the flipped 2-D kernel scratch buffer.
fn flip_kernel_2d<T: Scalar>(
    kernel: &NdBuffer<T>,
    half_ro: usize,
    half_e1: usize,
) -> KernelResult<NdBuffer<T>> {
    let k_ro = kernel.axis_extent(0);
    let k_e1 = kernel.axis_extent(1);
    let f_ro = flip_extent(half_ro)?;
    let f_e1 = flip_extent(half_e1)?;

    let mut flipped = NdBuffer::zeros(&[f_ro, f_e1]);
    let src = kernel.as_slice();
    let dst = flipped.as_mut_slice();
    for e1 in 0..k_e1 {
        let flip_e1 = 2 * half_e1 - e1;
        for ro in 0..k_ro {
            let flip_ro = 2 * half_ro - ro;
            dst[flip_ro + flip_e1 * f_ro] = src[ro + e1 * k_ro];
        }
    }
    Ok(flipped)
}

/// Build the flipped 3-D kernel scratch buffer.
fn flip_kernel_3d<T: Scalar>(
    kernel: &NdBuffer<T>,
    half_ro: usize,
    half_e1: usize,
    half_e2: usize,
) -> KernelResult<NdBuffer<T>> {
    let k_ro = kernel.axis_extent(0);
    let k_e1 = kernel.axis_extent(1);
    let k_e2 = kernel.axis_extent(2);
    let f_ro = flip_extent(half_ro)?;
    let f_e1 = flip_extent(half_e1)?;
    let f_e2 = flip_extent(half_e2)?;

    let mut flipped = NdBuffer::zeros(&[f_ro, f_e1, f_e2]);
    let src = kernel.as_slice();
    let dst = flipped.as_mut_slice();
    for e2 in 0..k_e2 {
        let flip_e2 = 2 * half_e2 - e2;
        for e1 in 0..k_e1 {
            let flip_e1 = 2 * half_e1 - e1;
            for ro in 0..k_ro {
                let flip_ro = 2 * half_ro - ro;
                dst[flip_ro + flip_e1 * f_ro + flip_e2 * f_ro * f_e1] =
                    src[ro + e1 * k_ro + e2 * k_ro * k_e1];
            }
        }
    }
    Ok(flipped)
}

// ============================================================================
// Wrap Helper
// ============================================================================

/// Fold `pos + off` back into `[0, extent)` by exactly one extent.
#[inline]
fn wrap(pos: usize, off: isize, extent: usize) -> usize {
    let mut d = pos as isize + off;
    if d < 0 {
        d += extent as isize;
    } else if d >= extent as isize {
        d -= extent as isize;
    }
    d as usize
}

/// Reject kernels whose half-extent breaks the single-wrap assumption.
#[inline]
fn check_half(half: usize, extent: usize, axis: &'static str) -> KernelResult<()> {
    if half > extent {
        return Err(KernelError::ComputeError(format!(
            "kernel half-extent {half} exceeds {axis} extent {extent}; periodic wrap is single-fold"
        )));
    }
    Ok(())
}

// ============================================================================
// 2-D Convolution
// ============================================================================

/// Periodic 2-D convolution of every `(RO, E1)` plane in `x` against `kernel`.
///
/// `x` is a contiguous stack of `len / (RO*E1)` planes; `out` is reallocated
/// to `x`'s shape when the element counts disagree. Input and output are
/// necessarily distinct buffers.
pub fn conv2<T: Scalar>(
    x: &NdBuffer<T>,
    kernel: &NdBuffer<T>,
    out: &mut NdBuffer<T>,
) -> KernelResult<()> {
    if x.is_empty() {
        return Err(KernelError::NullBuffer { operand: "input" });
    }
    if kernel.is_empty() {
        return Err(KernelError::NullBuffer { operand: "kernel" });
    }

    let ro_n = x.axis_extent(0);
    let e1_n = x.axis_extent(1);
    let plane = ro_n * e1_n;

    let half_ro = kernel.axis_extent(0) / 2;
    let half_e1 = kernel.axis_extent(1) / 2;
    check_half(half_ro, ro_n, "axis-0")?;
    check_half(half_e1, e1_n, "axis-1")?;

    let flipped = flip_kernel_2d(kernel, half_ro, half_e1)?;
    ensure_like(x, out);

    let ker = flipped.as_slice();
    let ker_ro = 2 * half_ro + 1;
    let xs = x.as_slice();
    let zs = out.as_mut_slice();

    #[cfg(feature = "parallel")]
    if xs.len() / plane > 1 {
        zs.par_chunks_mut(plane)
            .zip(xs.par_chunks(plane))
            .for_each(|(z_block, x_block)| {
                conv2_block(x_block, z_block, ro_n, e1_n, half_ro, half_e1, ker, ker_ro);
            });
        return Ok(());
    }

    for (z_block, x_block) in zs.chunks_mut(plane).zip(xs.chunks(plane)) {
        conv2_block(x_block, z_block, ro_n, e1_n, half_ro, half_e1, ker, ker_ro);
    }
    Ok(())
}

/// Direct convolution sum over one `(RO, E1)` plane.
#[allow(clippy::too_many_arguments)]
fn conv2_block<T: Scalar>(
    x: &[T],
    z: &mut [T],
    ro_n: usize,
    e1_n: usize,
    half_ro: usize,
    half_e1: usize,
    ker: &[T],
    ker_ro: usize,
) {
    let h_ro = half_ro as isize;
    let h_e1 = half_e1 as isize;

    for e1 in 0..e1_n {
        for ro in 0..ro_n {
            let mut acc = T::zero();
            for ke1 in -h_e1..=h_e1 {
                let de1 = wrap(e1, ke1, e1_n);
                let ker_row = (ke1 + h_e1) as usize * ker_ro;
                for kro in -h_ro..=h_ro {
                    let dro = wrap(ro, kro, ro_n);
                    let tap = ker[(kro + h_ro) as usize + ker_row];
                    acc = acc + tap * x[dro + de1 * ro_n];
                }
            }
            z[ro + e1 * ro_n] = acc;
        }
    }
}

// ============================================================================
// 3-D Convolution
// ============================================================================

/// Periodic 3-D convolution of every `(RO, E1, E2)` volume in `x` against
/// `kernel`.
///
/// Same contract as [`conv2`] with a third convolved axis.
pub fn conv3<T: Scalar>(
    x: &NdBuffer<T>,
    kernel: &NdBuffer<T>,
    out: &mut NdBuffer<T>,
) -> KernelResult<()> {
    if x.is_empty() {
        return Err(KernelError::NullBuffer { operand: "input" });
    }
    if kernel.is_empty() {
        return Err(KernelError::NullBuffer { operand: "kernel" });
    }

    let ro_n = x.axis_extent(0);
    let e1_n = x.axis_extent(1);
    let e2_n = x.axis_extent(2);
    let volume = ro_n * e1_n * e2_n;

    let half_ro = kernel.axis_extent(0) / 2;
    let half_e1 = kernel.axis_extent(1) / 2;
    let half_e2 = kernel.axis_extent(2) / 2;
    check_half(half_ro, ro_n, "axis-0")?;
    check_half(half_e1, e1_n, "axis-1")?;
    check_half(half_e2, e2_n, "axis-2")?;

    let flipped = flip_kernel_3d(kernel, half_ro, half_e1, half_e2)?;
    ensure_like(x, out);

    let ker = flipped.as_slice();
    let ker_ro = 2 * half_ro + 1;
    let ker_e1 = 2 * half_e1 + 1;
    let xs = x.as_slice();
    let zs = out.as_mut_slice();

    #[cfg(feature = "parallel")]
    if xs.len() / volume > 1 {
        zs.par_chunks_mut(volume)
            .zip(xs.par_chunks(volume))
            .for_each(|(z_block, x_block)| {
                conv3_block(
                    x_block, z_block, ro_n, e1_n, e2_n, half_ro, half_e1, half_e2, ker, ker_ro,
                    ker_e1,
                );
            });
        return Ok(());
    }

    for (z_block, x_block) in zs.chunks_mut(volume).zip(xs.chunks(volume)) {
        conv3_block(
            x_block, z_block, ro_n, e1_n, e2_n, half_ro, half_e1, half_e2, ker, ker_ro, ker_e1,
        );
    }
    Ok(())
}

/// Direct convolution sum over one `(RO, E1, E2)` volume.
#[allow(clippy::too_many_arguments)]
fn conv3_block<T: Scalar>(
    x: &[T],
    z: &mut [T],
    ro_n: usize,
    e1_n: usize,
    e2_n: usize,
    half_ro: usize,
    half_e1: usize,
    half_e2: usize,
    ker: &[T],
    ker_ro: usize,
    ker_e1: usize,
) {
    let h_ro = half_ro as isize;
    let h_e1 = half_e1 as isize;
    let h_e2 = half_e2 as isize;
    let plane = ro_n * e1_n;
    let ker_plane = ker_ro * ker_e1;

    for e2 in 0..e2_n {
        for e1 in 0..e1_n {
            for ro in 0..ro_n {
                let mut acc = T::zero();
                for ke2 in -h_e2..=h_e2 {
                    let de2 = wrap(e2, ke2, e2_n);
                    let ker_slab = (ke2 + h_e2) as usize * ker_plane;
                    for ke1 in -h_e1..=h_e1 {
                        let de1 = wrap(e1, ke1, e1_n);
                        let ker_row = ker_slab + (ke1 + h_e1) as usize * ker_ro;
                        for kro in -h_ro..=h_ro {
                            let dro = wrap(ro, kro, ro_n);
                            let tap = ker[(kro + h_ro) as usize + ker_row];
                            acc = acc + tap * x[dro + de1 * ro_n + de2 * plane];
                        }
                    }
                }
                z[ro + e1 * ro_n + e2 * plane] = acc;
            }
        }
    }
}
