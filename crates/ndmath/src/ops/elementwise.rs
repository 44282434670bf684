//! Element-wise arithmetic over flat buffers.
//!
//! ## Purpose
//!
//! This module provides the same-shape binary and unary transforms: add,
//! subtract, multiply, divide, multiply-by-conjugate, conjugate, reciprocal,
//! square root, fill, clear, epsilon flooring, scaling, and the fused
//! scale-and-add (`axpy`).
//!
//! ## Design notes
//!
//! * **Aliasing dispatch**: Binary operations accept their inputs as
//!   [`Operand`] values so the result buffer may double as either operand.
//!   [`classify`] picks one of three loops; the compound forms preserve the
//!   `x op y` operand order, so non-commutative subtract and divide stay
//!   correct when the result reuses `y`'s storage.
//! * **Reallocation**: An output whose element count mismatches the operands
//!   is reallocated before the loops run, so it can never alias stale
//!   storage of the wrong size.
//! * **Partial writes**: A failing call performs no writes (all validation
//!   happens up front), but the general contract remains: outputs of a failed
//!   call are unspecified in content and must not be read.
//!
//! ## Invariants
//!
//! * Binary operations require equal operand element counts.
//! * Every loop body is free of cross-element dependencies and runs under the
//!   exec layer's partitioning policy.
//!
//! ## Non-goals
//!
//! * No broadcasting; operands must agree in element count exactly.
//! * No vendor-BLAS substitution; these are the portable loops.

// Internal dependencies
use crate::exec;
use crate::ops::ensure_like;
use crate::primitives::alias::{classify, AliasClass, Operand};
use crate::primitives::buffer::NdBuffer;
use crate::primitives::errors::{KernelError, KernelResult};
use crate::scalar::Scalar;

// ============================================================================
// Binary Dispatch
// ============================================================================

/// Shared driver for every binary element-wise operation.
///
/// `f` is always evaluated as `f(x_element, y_element)`; the three aliasing
/// paths only change where those elements are read from.
fn binary_op<T, F>(x: Operand<'_, T>, y: Operand<'_, T>, r: &mut NdBuffer<T>, f: F) -> KernelResult<()>
where
    T: Scalar,
    F: Fn(T, T) -> T + Sync,
{
    let nx = x.len(r);
    let ny = y.len(r);
    if nx != ny {
        return Err(KernelError::ShapeMismatch {
            expected: nx,
            got: ny,
        });
    }

    match classify(&x, &y) {
        AliasClass::Distinct => {
            let (Operand::Buffer(xb), Operand::Buffer(yb)) = (&x, &y) else {
                unreachable!("distinct classification implies two borrowed operands");
            };
            if r.len() != nx {
                r.resize_to(xb.dims());
            }
            exec::zip_map_into(xb.as_slice(), yb.as_slice(), r.as_mut_slice(), f);
        }
        AliasClass::AliasesX => match y {
            // r holds x: compound form r[i] = f(r[i], y[i]).
            Operand::Buffer(yb) => {
                exec::zip_update(r.as_mut_slice(), yb.as_slice(), &f);
            }
            // Both operands are the output: r[i] = f(r[i], r[i]).
            Operand::Output => {
                exec::update(r.as_mut_slice(), |v| f(v, v));
            }
        },
        AliasClass::AliasesY => {
            let Operand::Buffer(xb) = x else {
                unreachable!("aliases-y classification implies a borrowed first operand");
            };
            // r holds y: swapped compound form r[i] = f(x[i], r[i]).
            exec::zip_update(r.as_mut_slice(), xb.as_slice(), move |ri, xi| f(xi, ri));
        }
    }

    Ok(())
}

// ============================================================================
// Binary Operations
// ============================================================================

/// `r[i] = x[i] + y[i]`.
pub fn add<T: Scalar>(x: Operand<'_, T>, y: Operand<'_, T>, r: &mut NdBuffer<T>) -> KernelResult<()> {
    binary_op(x, y, r, |a, b| a + b)
}

/// `r[i] = x[i] - y[i]`.
pub fn subtract<T: Scalar>(
    x: Operand<'_, T>,
    y: Operand<'_, T>,
    r: &mut NdBuffer<T>,
) -> KernelResult<()> {
    binary_op(x, y, r, |a, b| a - b)
}

/// `r[i] = x[i] * y[i]`.
pub fn multiply<T: Scalar>(
    x: Operand<'_, T>,
    y: Operand<'_, T>,
    r: &mut NdBuffer<T>,
) -> KernelResult<()> {
    binary_op(x, y, r, |a, b| a * b)
}

/// `r[i] = x[i] / y[i]`.
///
/// Division by zero follows IEEE semantics (infinity or NaN); callers wanting
/// a floor should run [`add_epsilon`] on the divisor first.
pub fn divide<T: Scalar>(
    x: Operand<'_, T>,
    y: Operand<'_, T>,
    r: &mut NdBuffer<T>,
) -> KernelResult<()> {
    binary_op(x, y, r, |a, b| a / b)
}

/// `r[i] = x[i] * conj(y[i])`.
pub fn multiply_conj<T: Scalar>(
    x: Operand<'_, T>,
    y: Operand<'_, T>,
    r: &mut NdBuffer<T>,
) -> KernelResult<()> {
    binary_op(x, y, r, |a, b| a * b.conj())
}

/// `r[i] = a * x[i] + y[i]`.
pub fn axpy<T: Scalar>(
    a: T,
    x: &NdBuffer<T>,
    y: &NdBuffer<T>,
    r: &mut NdBuffer<T>,
) -> KernelResult<()> {
    if x.len() != y.len() {
        return Err(KernelError::ShapeMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    if r.len() != x.len() {
        r.resize_to(x.dims());
    }
    exec::zip_map_into(x.as_slice(), y.as_slice(), r.as_mut_slice(), move |xi, yi| {
        a * xi + yi
    });
    Ok(())
}

/// `y[i] += a * x[i]`, the aliased call form of [`axpy`].
pub fn axpy_inplace<T: Scalar>(a: T, x: &NdBuffer<T>, y: &mut NdBuffer<T>) -> KernelResult<()> {
    if x.len() != y.len() {
        return Err(KernelError::ShapeMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    exec::zip_update(y.as_mut_slice(), x.as_slice(), move |yi, xi| a * xi + yi);
    Ok(())
}

// ============================================================================
// Unary Operations
// ============================================================================

/// `r[i] = conj(x[i])` (identity for real scalars).
pub fn conjugate<T: Scalar>(x: &NdBuffer<T>, r: &mut NdBuffer<T>) -> KernelResult<()> {
    ensure_like(x, r);
    exec::map_into(x.as_slice(), r.as_mut_slice(), |v| v.conj());
    Ok(())
}

/// `r[i] = 1 / x[i]`.
pub fn inv<T: Scalar>(x: &NdBuffer<T>, r: &mut NdBuffer<T>) -> KernelResult<()> {
    ensure_like(x, r);
    let one = T::one();
    exec::map_into(x.as_slice(), r.as_mut_slice(), move |v| one / v);
    Ok(())
}

/// `r[i] = sqrt(x[i])`.
pub fn sqrt<T: Scalar>(x: &NdBuffer<T>, r: &mut NdBuffer<T>) -> KernelResult<()> {
    ensure_like(x, r);
    exec::map_into(x.as_slice(), r.as_mut_slice(), |v| v.sqrt());
    Ok(())
}

// ============================================================================
// In-place Operations
// ============================================================================

/// Overwrite every element with `value`.
pub fn fill<T: Scalar>(x: &mut NdBuffer<T>, value: T) {
    exec::update(x.as_mut_slice(), move |_| value);
}

/// Zero every element.
///
/// Writes the additive identity, which for every supported scalar type is
/// the all-zero-bits representation (so a bulk byte-clear backend would be
/// behaviorally identical).
pub fn clear<T: Scalar>(x: &mut NdBuffer<T>) {
    exec::update(x.as_mut_slice(), |_| T::zero());
}

/// Add machine epsilon to every element whose magnitude is below it.
///
/// Elements at or above epsilon are untouched. This floors near-zero values
/// ahead of a division.
pub fn add_epsilon<T: Scalar>(x: &mut NdBuffer<T>) {
    let eps = T::epsilon();
    let eps_scalar = T::from_real(eps);
    exec::update(x.as_mut_slice(), move |v| {
        if v.abs() < eps {
            v + eps_scalar
        } else {
            v
        }
    });
}

/// Scale every element by the scalar `a` in place.
pub fn scal<T: Scalar>(a: T, x: &mut NdBuffer<T>) {
    exec::update(x.as_mut_slice(), move |v| v * a);
}

/// Scale every element by a real factor, applied to both components of a
/// complex scalar.
pub fn scal_real<T: Scalar>(a: T::Real, x: &mut NdBuffer<T>) {
    exec::update(x.as_mut_slice(), move |v| v.scale_real(a));
}
