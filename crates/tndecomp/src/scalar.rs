//! Scalar trait for tensor element types.

use faer_traits::ComplexField;
use faer_traits::math_utils::{abs, mul_real};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

pub use faer::c64;

/// Element types that can be stored in a tensor and handed to faer.
///
/// Wraps faer's `ComplexField` with a real type of `f64`, so singular
/// values and norms come out as plain `f64`. Conjugation, moduli and
/// finiteness checks go through `faer_traits::math_utils`.
pub trait Scalar:
    ComplexField<Real = f64>
    + Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// `x / |x|`, or one for zero.
    fn phase(self) -> Self {
        let r = abs(&self);
        if r == 0.0 {
            Self::one()
        } else {
            mul_real(&self, &r.recip())
        }
    }
}

impl Scalar for f64 {
    fn one() -> Self {
        1.0
    }
}

impl Scalar for c64 {
    fn one() -> Self {
        c64::new(1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_is_real() {
        assert!(<f64 as ComplexField>::IS_REAL);
    }

    #[test]
    fn test_c64_is_not_real() {
        assert!(!<c64 as ComplexField>::IS_REAL);
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(c64::zero(), c64::new(0.0, 0.0));
        assert_eq!(c64::one(), c64::new(1.0, 0.0));
    }

    #[test]
    fn test_real_type_is_f64() {
        let z = c64::new(3.0, -4.0);
        let modulus: f64 = abs(&z);
        assert_eq!(modulus, 5.0);
        assert_eq!(faer_traits::math_utils::abs2(&-2.0f64), 4.0);
    }

    #[test]
    fn test_phase() {
        assert_eq!((-3.0f64).phase(), -1.0);
        assert_eq!(0.0f64.phase(), 1.0);

        let p = c64::new(0.0, 2.0).phase();
        assert_eq!(p, c64::new(0.0, 1.0));
        assert_eq!(c64::zero().phase(), c64::one());
    }

    #[test]
    fn test_phase_has_unit_modulus() {
        let p = c64::new(3.0, -4.0).phase();
        assert!((p.re - 0.6).abs() < 1e-15);
        assert!((p.im + 0.8).abs() < 1e-15);
        assert!((abs(&p) - 1.0).abs() < 1e-15);
    }
}
