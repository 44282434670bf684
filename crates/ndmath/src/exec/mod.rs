//! Layer 3: Exec
//!
//! # Purpose
//!
//! This layer owns the execution policy shared by every kernel: partition the
//! flat index range into disjoint contiguous chunks, fan the chunks out over
//! the worker pool, and fall back to the identical serial loop for small
//! buffers or `parallel`-less builds. Each worker writes only its own output
//! chunk; read-only inputs are shared freely.
//!
//! # Design notes
//!
//! * **Parallelization threshold**: Below `PARALLEL_THRESHOLD` elements the
//!   fan-out overhead exceeds the benefit, so the serial loop runs instead.
//! * **Determinism**: Element-wise results are identical for every split.
//!   Sum-reductions combine per-chunk partials with the additive identity;
//!   only the floating-point rounding of the combination order may vary.
//! * **No synchronization**: No worker suspends, blocks, or communicates
//!   mid-operation, and there is no cancellation; operations run to
//!   completion.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Ops
//!   ↓
//! Layer 3: Exec ← You are here
//!   ↓
//! Layer 2: Scalar
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Zero;

// ============================================================================
// Partition Policy
// ============================================================================

/// Element count below which every operation runs its serial loop.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Contiguous chunk length handed to each worker.
pub const CHUNK: usize = 4096;

// ============================================================================
// Element-wise Drivers
// ============================================================================

/// `r[i] = f(x[i])` over the whole range.
///
/// Lengths must match; callers guarantee this after their shape checks.
pub fn map_into<X, R, F>(x: &[X], r: &mut [R], f: F)
where
    X: Copy + Sync,
    R: Send,
    F: Fn(X) -> R + Sync,
{
    debug_assert_eq!(x.len(), r.len());

    #[cfg(feature = "parallel")]
    if x.len() >= PARALLEL_THRESHOLD {
        r.par_chunks_mut(CHUNK)
            .zip(x.par_chunks(CHUNK))
            .for_each(|(r_chunk, x_chunk)| {
                for (ri, &xi) in r_chunk.iter_mut().zip(x_chunk) {
                    *ri = f(xi);
                }
            });
        return;
    }

    for (ri, &xi) in r.iter_mut().zip(x) {
        *ri = f(xi);
    }
}

/// `r[i] = f(x[i], y[i])` over the whole range.
pub fn zip_map_into<X, Y, R, F>(x: &[X], y: &[Y], r: &mut [R], f: F)
where
    X: Copy + Sync,
    Y: Copy + Sync,
    R: Send,
    F: Fn(X, Y) -> R + Sync,
{
    debug_assert_eq!(x.len(), y.len());
    debug_assert_eq!(x.len(), r.len());

    #[cfg(feature = "parallel")]
    if x.len() >= PARALLEL_THRESHOLD {
        r.par_chunks_mut(CHUNK)
            .zip(x.par_chunks(CHUNK).zip(y.par_chunks(CHUNK)))
            .for_each(|(r_chunk, (x_chunk, y_chunk))| {
                for ((ri, &xi), &yi) in r_chunk.iter_mut().zip(x_chunk).zip(y_chunk) {
                    *ri = f(xi, yi);
                }
            });
        return;
    }

    for ((ri, &xi), &yi) in r.iter_mut().zip(x).zip(y) {
        *ri = f(xi, yi);
    }
}

/// `r[i] = f(r[i])` in place.
pub fn update<T, F>(r: &mut [T], f: F)
where
    T: Copy + Send,
    F: Fn(T) -> T + Sync,
{
    #[cfg(feature = "parallel")]
    if r.len() >= PARALLEL_THRESHOLD {
        r.par_chunks_mut(CHUNK).for_each(|r_chunk| {
            for ri in r_chunk.iter_mut() {
                *ri = f(*ri);
            }
        });
        return;
    }

    for ri in r.iter_mut() {
        *ri = f(*ri);
    }
}

/// `r[i] = f(r[i], y[i])` in place against a second operand.
pub fn zip_update<T, Y, F>(r: &mut [T], y: &[Y], f: F)
where
    T: Copy + Send,
    Y: Copy + Sync,
    F: Fn(T, Y) -> T + Sync,
{
    debug_assert_eq!(r.len(), y.len());

    #[cfg(feature = "parallel")]
    if r.len() >= PARALLEL_THRESHOLD {
        r.par_chunks_mut(CHUNK)
            .zip(y.par_chunks(CHUNK))
            .for_each(|(r_chunk, y_chunk)| {
                for (ri, &yi) in r_chunk.iter_mut().zip(y_chunk) {
                    *ri = f(*ri, yi);
                }
            });
        return;
    }

    for (ri, &yi) in r.iter_mut().zip(y) {
        *ri = f(*ri, yi);
    }
}

/// `(a[i], b[i]) = f(x[i])`: one pass writing two component outputs.
pub fn unzip_into<X, A, B, F>(x: &[X], a: &mut [A], b: &mut [B], f: F)
where
    X: Copy + Sync,
    A: Send,
    B: Send,
    F: Fn(X) -> (A, B) + Sync,
{
    debug_assert_eq!(x.len(), a.len());
    debug_assert_eq!(x.len(), b.len());

    #[cfg(feature = "parallel")]
    if x.len() >= PARALLEL_THRESHOLD {
        a.par_chunks_mut(CHUNK)
            .zip(b.par_chunks_mut(CHUNK))
            .zip(x.par_chunks(CHUNK))
            .for_each(|((a_chunk, b_chunk), x_chunk)| {
                for ((ai, bi), &xi) in a_chunk.iter_mut().zip(b_chunk.iter_mut()).zip(x_chunk) {
                    let (va, vb) = f(xi);
                    *ai = va;
                    *bi = vb;
                }
            });
        return;
    }

    for ((ai, bi), &xi) in a.iter_mut().zip(b.iter_mut()).zip(x) {
        let (va, vb) = f(xi);
        *ai = va;
        *bi = vb;
    }
}

// ============================================================================
// Reduction Drivers
// ============================================================================

/// `Σ f(x[i])`, combining per-chunk partials with the additive identity.
///
/// The fold order across chunks is unspecified; for floating-point
/// accumulators the result may differ in the last bits between splits.
pub fn sum_map<X, A, F>(x: &[X], f: F) -> A
where
    X: Copy + Sync,
    A: Zero + Send,
    F: Fn(X) -> A + Sync,
{
    #[cfg(feature = "parallel")]
    if x.len() >= PARALLEL_THRESHOLD {
        return x
            .par_chunks(CHUNK)
            .map(|chunk| {
                let mut acc = A::zero();
                for &xi in chunk {
                    acc = acc + f(xi);
                }
                acc
            })
            .reduce(A::zero, |a, b| a + b);
    }

    let mut acc = A::zero();
    for &xi in x {
        acc = acc + f(xi);
    }
    acc
}

/// `Σ f(x[i], y[i])` over paired inputs, same combination contract as
/// [`sum_map`].
pub fn sum_zip_map<X, Y, A, F>(x: &[X], y: &[Y], f: F) -> A
where
    X: Copy + Sync,
    Y: Copy + Sync,
    A: Zero + Send,
    F: Fn(X, Y) -> A + Sync,
{
    debug_assert_eq!(x.len(), y.len());

    #[cfg(feature = "parallel")]
    if x.len() >= PARALLEL_THRESHOLD {
        return x
            .par_chunks(CHUNK)
            .zip(y.par_chunks(CHUNK))
            .map(|(x_chunk, y_chunk)| {
                let mut acc = A::zero();
                for (&xi, &yi) in x_chunk.iter().zip(y_chunk) {
                    acc = acc + f(xi, yi);
                }
                acc
            })
            .reduce(A::zero, |a, b| a + b);
    }

    let mut acc = A::zero();
    for (&xi, &yi) in x.iter().zip(y) {
        acc = acc + f(xi, yi);
    }
    acc
}
