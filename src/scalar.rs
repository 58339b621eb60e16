use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Component type of a [`Vector`](crate::Vector).
///
/// Implemented for all primitive integer and floating point types.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    const ZERO: Self;
}

/// Floating point scalars, which additionally support the square root based
/// operations (`length`, `normalize`, `angle_between`).
pub trait Real: Scalar + Neg<Output = Self> + Div<Output = Self> + PartialOrd {
    const ONE: Self;

    fn sqrt(self) -> Self;
    fn acos(self) -> Self;
    fn abs(self) -> Self;
    /// NaN is passed through unchanged.
    fn clamp(self, min: Self, max: Self) -> Self;
    fn is_finite(self) -> bool;
}

macro_rules! impl_scalar {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_scalar!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(0.0 => f32, f64);

macro_rules! impl_real {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                const ONE: Self = 1.0;

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline]
                fn acos(self) -> Self {
                    <$t>::acos(self)
                }

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn clamp(self, min: Self, max: Self) -> Self {
                    <$t>::clamp(self, min, max)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_real!(f32, f64);

#[cfg(test)]
mod test {
    use super::{Real, Scalar};

    #[test]
    fn test_zero() {
        assert_eq!(0, <i32 as Scalar>::ZERO);
        assert_eq!(0, <u8 as Scalar>::ZERO);
        assert_eq!(0.0, <f64 as Scalar>::ZERO);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(1.0, Real::clamp(1.0000001_f64, -1.0, 1.0));
        assert_eq!(-1.0, Real::clamp(-3.0_f32, -1.0, 1.0));
        assert_eq!(0.25, Real::clamp(0.25_f64, -1.0, 1.0));
        assert!(Real::clamp(f64::NAN, -1.0, 1.0).is_nan());
    }

    #[test]
    fn test_abs_and_finite() {
        assert_eq!(2.5, Real::abs(-2.5_f64));
        assert_eq!(2.5, Real::abs(2.5_f32));
        assert!(Real::is_finite(1e300_f64));
        assert!(!Real::is_finite(f64::INFINITY));
        assert!(!Real::is_finite(f32::NAN));
    }
}
