//! Strongly-typed numeric primitives for pitch dimensions (zero-cost newtypes).
//!
//! Marking dimensions are carried as [`Meters`] so that a raw axis coordinate
//! can never be confused with a physical length on the pitch. Ratios between
//! two lengths are [`Scalar`]s.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use thiserror::Error;

/// Error type for invalid numeric values
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is zero when non-zero required
    #[error("value is zero")]
    Zero,
    /// Value is negative when positive required
    #[error("value is negative")]
    Negative,
}

/// Reject NaN and infinities.
#[inline]
pub(crate) fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Tolerance-based float comparison (relative 1e-9, absolute 1e-12).
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff <= (1e-9 * a.abs().max(b.abs())).max(1e-12)
}

/// A physical length on the pitch, in meters.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Meters(pub f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    /// Create a length from meters (const-friendly, unchecked).
    /// Use `try_non_negative` / `try_positive` for user-provided values.
    #[inline]
    pub(crate) const fn meters(val: f64) -> Meters {
        Meters(val)
    }

    /// Create a non-negative length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Meters, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Meters(val))
        }
    }

    /// Create a strictly positive length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Meters, NumericError> {
        let val = check_finite(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Meters(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Checked division returning None if divisor is zero
    #[inline]
    pub fn checked_div(self, rhs: Meters) -> Option<Scalar> {
        if rhs.0 == 0.0 {
            None
        } else {
            Some(Scalar(self.0 / rhs.0))
        }
    }

    /// Tolerance-based equality, see [`approx_eq`].
    #[inline]
    pub fn approx_eq(self, other: Meters) -> bool {
        approx_eq(self.0, other.0)
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters { Meters(self.0 + rhs.0) }
}
impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters { Meters(self.0 - rhs.0) }
}
impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters { Meters(self.0 * rhs) }
}
impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters { Meters(self.0 / rhs) }
}

// NOTE: Meters / Meters is intentionally NOT implemented as a trait.
// Use Meters::checked_div() which returns Option<Scalar>.

impl Neg for Meters {
    type Output = Meters;
    fn neg(self) -> Meters { Meters(-self.0) }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// Unitless scalar (length ratios, axis scale factors)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub const ONE: Scalar = Scalar(1.0);

    /// Create a strictly positive, finite scalar with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Scalar, NumericError> {
        Meters::try_positive(val).map(|m| Scalar(m.0))
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scalar * Meters = Meters (scaling a length)
impl Mul<Meters> for Scalar {
    type Output = Meters;
    fn mul(self, rhs: Meters) -> Meters {
        Meters(self.0 * rhs.0)
    }
}

/// Meters * Scalar = Meters (scaling a length)
impl Mul<Scalar> for Meters {
    type Output = Meters;
    fn mul(self, rhs: Scalar) -> Meters {
        Meters(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meters_try_non_negative_valid() {
        assert!(Meters::try_non_negative(1.0).is_ok());
        assert!(Meters::try_non_negative(0.0).is_ok());
    }

    #[test]
    fn meters_try_non_negative_rejects_negative() {
        assert_eq!(Meters::try_non_negative(-1.0), Err(NumericError::Negative));
    }

    #[test]
    fn meters_try_positive_rejects_zero_and_nan() {
        assert_eq!(Meters::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Meters::try_positive(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Meters::try_positive(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Meters::try_positive(-3.0), Err(NumericError::Negative));
    }

    #[test]
    fn meters_arithmetic() {
        let a = Meters(3.0);
        let b = Meters(2.0);

        assert_eq!(a + b, Meters(5.0));
        assert_eq!(a - b, Meters(1.0));
        assert_eq!(a * 2.0, Meters(6.0));
        assert_eq!(a / 2.0, Meters(1.5));
        assert_eq!(-a, Meters(-3.0));
        assert_eq!(a - a, Meters::ZERO);
        assert_eq!(Meters::try_non_negative(0.0), Ok(Meters::ZERO));
    }

    #[test]
    fn meters_checked_div() {
        assert_eq!(Meters(6.0).checked_div(Meters(2.0)), Some(Scalar(3.0)));
        assert_eq!(Meters(6.0).checked_div(Meters(0.0)), None);
    }

    #[test]
    fn scalar_mul_meters() {
        let s = Scalar(2.0);
        let l = Meters(3.0);
        assert_eq!(s * l, Meters(6.0));
        assert_eq!(l * s, Meters(6.0));
    }

    #[test]
    fn approx_eq_tolerates_float_noise() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(0.0, 1e-13));
        assert!(!approx_eq(9.15, 9.16));
        assert!(Meters(0.1 + 0.2).approx_eq(Meters(0.3)));
    }
}
