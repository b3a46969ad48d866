//! Signed 16.16 fixed-point arithmetic
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A real number stored as `value * 65536` in an `i32`.
///
/// Multiplication and division go through `i64` so the 16 fractional bits
/// survive the operation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i32);

impl Fixed {
    pub const FRAC_BITS: u32 = 16;
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(1 << Self::FRAC_BITS);
    pub const HALF: Fixed = Fixed(1 << (Self::FRAC_BITS - 1));

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn from_int(value: i32) -> Self {
        Self(value << Self::FRAC_BITS)
    }

    /// Truncates toward zero, saturating at the `i32` range.
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::ONE.0 as f64) as i32)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE.0 as f64
    }

    /// Integer part, rounded toward negative infinity
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    pub const fn frac(self) -> Fixed {
        Self(self.0 & (Self::ONE.0 - 1))
    }

    pub const fn abs(self) -> Fixed {
        Self(self.0.saturating_abs())
    }

    /// `1 / n`, truncated. `None` for `n == 0`.
    pub const fn recip(n: i32) -> Option<Fixed> {
        if n == 0 {
            return None;
        }
        Some(Self(Self::ONE.0 / n))
    }

    /// `numerator / denominator` without going through `recip`, so
    /// `ratio(n, n)` is exactly `ONE`. `None` for a zero denominator.
    pub const fn ratio(numerator: i32, denominator: i32) -> Option<Fixed> {
        if denominator == 0 {
            return None;
        }
        let scaled = ((numerator as i64) << Self::FRAC_BITS) / denominator as i64;
        Some(Self(scaled as i32))
    }

    /// Scale an integer by this value and drop the fraction
    pub const fn mul_int(self, n: i32) -> i32 {
        ((self.0 as i64 * n as i64) >> Self::FRAC_BITS) as i32
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({:#x} ~ {})", self.0, self.to_f64())
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = *self - rhs;
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl Mul for Fixed {
    type Output = Fixed;
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((self.0 as i64 * rhs.0 as i64) >> Self::FRAC_BITS) as i32)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    /// Panics on a zero divisor, like integer division.
    fn div(self, rhs: Fixed) -> Fixed {
        Fixed((((self.0 as i64) << Self::FRAC_BITS) / rhs.0 as i64) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_65536() {
        assert_eq!(Fixed::ONE.raw(), 0x10000);
        assert_eq!(Fixed::from_int(3).raw(), 3 * 0x10000);
        assert_eq!(Fixed::HALF, Fixed::from_f64(0.5));
    }

    #[test]
    fn from_f64_truncates_toward_zero() {
        assert_eq!(Fixed::from_f64(1.0 / 3.0).raw(), 21845);
        assert_eq!(Fixed::from_f64(-1.0 / 3.0).raw(), -21845);
    }

    #[test]
    fn to_int_floors() {
        assert_eq!(Fixed::from_f64(2.75).to_int(), 2);
        assert_eq!(Fixed::from_f64(-0.25).to_int(), -1);
        assert_eq!(Fixed::from_f64(2.75).frac(), Fixed::from_f64(0.75));
    }

    #[test]
    fn recip_matches_truncated_division() {
        assert_eq!(Fixed::recip(10), Some(Fixed::from_raw(6553)));
        assert_eq!(Fixed::recip(1), Some(Fixed::ONE));
        assert_eq!(Fixed::recip(0), None);
    }

    #[test]
    fn ratio_of_equal_terms_is_exactly_one() {
        assert_eq!(Fixed::ratio(7, 7), Some(Fixed::ONE));
        assert_eq!(Fixed::ratio(1, 4), Some(Fixed::from_f64(0.25)));
        assert_eq!(Fixed::ratio(5, 0), None);
    }

    #[test]
    fn multiplication_keeps_the_scale() {
        let a = Fixed::from_f64(1.5);
        let b = Fixed::from_f64(2.25);
        assert_eq!(a * b, Fixed::from_f64(3.375));
        assert_eq!((a * b) / b, a);
        assert_eq!(Fixed::from_f64(0.5).mul_int(41), 20);
    }

    #[test]
    fn mul_int_does_not_overflow_large_radii() {
        assert_eq!(Fixed::ONE.mul_int(100_000), 100_000);
    }
}
