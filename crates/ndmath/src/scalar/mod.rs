//! Layer 2: Scalar
//!
//! # Purpose
//!
//! This layer maps every supported element type to its real/magnitude type
//! and the handful of scalar operations the kernels need: magnitude,
//! conjugation, square root, phase angle, and component access. Real and
//! complex scalars share one trait, so every kernel is written exactly once.
//!
//! # Design notes
//!
//! * **Identity conjugate**: For real scalars `conj` is the identity and the
//!   imaginary component is structurally zero, which lets complex-to-real
//!   projections degrade gracefully instead of needing per-type overloads.
//! * **Real scaling**: `scale_real` applies a real factor to both components
//!   of a complex scalar (a plain multiply for real scalars).
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Ops
//!   ↓
//! Layer 3: Exec
//!   ↓
//! Layer 2: Scalar ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};
use num_complex::Complex;
use num_traits::{Float, One, Zero};

// ============================================================================
// Scalar Trait
// ============================================================================

/// Element type accepted by every kernel: a real float or a complex float.
///
/// `Real` is the associated real/magnitude type used for norms, absolute
/// values, phase angles, and machine epsilon (identity for real scalars, the
/// component type for complex ones).
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Real/magnitude type associated with this scalar.
    ///
    /// Real types are their own `Real` (`f64::Real == f64`), so buffers of
    /// magnitudes and phases are themselves valid kernel operands.
    type Real: Float + Scalar<Real = Self::Real> + Send + Sync + Debug + 'static;

    /// Magnitude `|self|`.
    fn abs(self) -> Self::Real;

    /// Complex conjugate (identity for real scalars).
    fn conj(self) -> Self;

    /// Square root (NaN for negative real inputs, principal root for complex).
    fn sqrt(self) -> Self;

    /// Phase angle in `(-pi, pi]` (0 or pi for real scalars).
    fn arg(self) -> Self::Real;

    /// Real component.
    fn re(self) -> Self::Real;

    /// Imaginary component (structurally zero for real scalars).
    fn im(self) -> Self::Real;

    /// Build a scalar from real and imaginary components.
    ///
    /// Real scalars keep the real component and drop the imaginary one.
    fn from_parts(re: Self::Real, im: Self::Real) -> Self;

    /// Build a scalar from a real value alone.
    fn from_real(re: Self::Real) -> Self;

    /// Scale by a real factor, applied to every component.
    fn scale_real(self, a: Self::Real) -> Self;

    /// Machine epsilon of the associated real type.
    #[inline]
    fn epsilon() -> Self::Real {
        <Self::Real as Float>::epsilon()
    }
}

// ============================================================================
// Real Implementations
// ============================================================================

macro_rules! impl_real_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn abs(self) -> $t {
                Float::abs(self)
            }

            #[inline]
            fn conj(self) -> $t {
                self
            }

            #[inline]
            fn sqrt(self) -> $t {
                Float::sqrt(self)
            }

            #[inline]
            fn arg(self) -> $t {
                // atan2(0, x): 0 for x >= 0, pi for x < 0
                Float::atan2(<$t>::zero(), self)
            }

            #[inline]
            fn re(self) -> $t {
                self
            }

            #[inline]
            fn im(self) -> $t {
                <$t>::zero()
            }

            #[inline]
            fn from_parts(re: $t, _im: $t) -> $t {
                re
            }

            #[inline]
            fn from_real(re: $t) -> $t {
                re
            }

            #[inline]
            fn scale_real(self, a: $t) -> $t {
                self * a
            }
        }
    };
}

impl_real_scalar!(f32);
impl_real_scalar!(f64);

// ============================================================================
// Complex Implementations
// ============================================================================

macro_rules! impl_complex_scalar {
    ($t:ty) => {
        impl Scalar for Complex<$t> {
            type Real = $t;

            #[inline]
            fn abs(self) -> $t {
                self.norm()
            }

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                Complex::sqrt(self)
            }

            #[inline]
            fn arg(self) -> $t {
                Complex::arg(self)
            }

            #[inline]
            fn re(self) -> $t {
                self.re
            }

            #[inline]
            fn im(self) -> $t {
                self.im
            }

            #[inline]
            fn from_parts(re: $t, im: $t) -> Self {
                Complex::new(re, im)
            }

            #[inline]
            fn from_real(re: $t) -> Self {
                Complex::new(re, <$t>::zero())
            }

            #[inline]
            fn scale_real(self, a: $t) -> Self {
                Complex::new(self.re * a, self.im * a)
            }
        }
    };
}

impl_complex_scalar!(f32);
impl_complex_scalar!(f64);
