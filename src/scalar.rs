//! Element types and their precision promotion rules.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions.
///
/// Angles are given and returned in radians. The [`crate::angle`] module wraps these in typed
/// [`Radian`][crate::Radian] values.
pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] (so a NaN
/// operand loses against a number). Integers use [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// An element type that can be stored in a [`MathArray`][crate::MathArray].
///
/// Every scalar names a [`Scalar::Precision`] type: the floating-point type used whenever a
/// result needs fractional precision (division results, square roots, trigonometry). The rules
/// are:
///
/// - 8- and 16-bit integers promote to [`f32`], which represents all of their values exactly.
/// - 32- and 64-bit integers (and `isize`/`usize`) promote to [`f64`].
/// - [`f32`] and [`f64`] are their own precision type.
pub trait Scalar:
    Zero
    + One
    + MinMax
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + PartialEq
    + PartialOrd
    + Copy
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// The floating-point type used for precision-sensitive results.
    type Precision: Float;

    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Relative tolerance used by [`scalar_eq`]; `0.0` for integers.
    const EQ_EPSILON: f64;

    /// Converts `self` into its precision type.
    fn to_precision(self) -> Self::Precision;

    /// Converts a precision value back, with the semantics of an `as` cast.
    fn from_precision(value: Self::Precision) -> Self;

    fn to_f64(self) -> f64;

    /// Widens an integer losslessly (floats are truncated, like `as`).
    fn to_i128(self) -> i128;
}

/// A floating-point [`Scalar`], which is its own precision type.
pub trait Float: Scalar<Precision = Self> + ops::Neg<Output = Self> + Sqrt + Trig {
    /// The difference between `1.0` and the next larger representable number.
    const EPSILON: Self;
    const PI: Self;
    const TAU: Self;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn is_finite(self) -> bool;

    /// Converts from an [`f64`], rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Returns `0.5`.
    fn half() -> Self {
        Self::ONE / (Self::ONE + Self::ONE)
    }
}

/// Element conversion with the semantics of Rust's `as` operator.
///
/// Implemented between every pair of primitive numeric types, including each type with itself.
pub trait AsScalar<U> {
    fn as_scalar(self) -> U;
}

/// Compares two scalars, possibly of different types.
///
/// Integers are compared exactly. As soon as either side is a float, the values are compared in
/// [`f64`] with a relative tolerance of the coarser type's [`Scalar::EQ_EPSILON`] (and an absolute
/// tolerance of the same size around zero). NaN never compares equal, infinities only equal
/// themselves.
pub fn scalar_eq<T: Scalar, U: Scalar>(a: T, b: U) -> bool {
    if !T::IS_FLOAT && !U::IS_FLOAT {
        return a.to_i128() == b.to_i128();
    }

    let (a, b) = (a.to_f64(), b.to_f64());
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let epsilon = f64::max(T::EQ_EPSILON, U::EQ_EPSILON);
    let largest = f64::max(1.0, f64::max(a.abs(), b.abs()));
    (a - b).abs() <= epsilon * largest
}

macro_rules! integer_scalar {
    ($($t:ty => $precision:ty),+ $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }

            impl One for $t {
                const ONE: Self = 1;
            }

            impl MinMax for $t {
                #[inline]
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $t {
                type Precision = $precision;
                const IS_FLOAT: bool = false;
                const EQ_EPSILON: f64 = 0.0;

                #[inline]
                fn to_precision(self) -> $precision {
                    self as $precision
                }

                #[inline]
                fn from_precision(value: $precision) -> Self {
                    value as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )+
    };
}

integer_scalar!(
    i8 => f32,
    u8 => f32,
    i16 => f32,
    u16 => f32,
    i32 => f64,
    u32 => f64,
    i64 => f64,
    u64 => f64,
    isize => f64,
    usize => f64,
);

macro_rules! float_scalar {
    ($($t:ident),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }

            impl One for $t {
                const ONE: Self = 1.0;
            }

            impl MinMax for $t {
                #[inline]
                fn min(self, other: Self) -> Self {
                    $t::min(self, other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    $t::max(self, other)
                }
            }

            impl Sqrt for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    $t::sqrt(self)
                }
            }

            impl Trig for $t {
                fn sin(self) -> Self {
                    $t::sin(self)
                }

                fn cos(self) -> Self {
                    $t::cos(self)
                }

                fn tan(self) -> Self {
                    $t::tan(self)
                }

                fn asin(self) -> Self {
                    $t::asin(self)
                }

                fn acos(self) -> Self {
                    $t::acos(self)
                }

                fn atan(self) -> Self {
                    $t::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $t::atan2(self, other)
                }
            }

            impl Scalar for $t {
                type Precision = $t;
                const IS_FLOAT: bool = true;
                const EQ_EPSILON: f64 = $t::EPSILON as f64;

                #[inline]
                fn to_precision(self) -> $t {
                    self
                }

                #[inline]
                fn from_precision(value: $t) -> Self {
                    value
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }

            impl Float for $t {
                const EPSILON: Self = $t::EPSILON;
                const PI: Self = std::$t::consts::PI;
                const TAU: Self = std::$t::consts::TAU;

                #[inline]
                fn abs(self) -> Self {
                    $t::abs(self)
                }

                #[inline]
                fn floor(self) -> Self {
                    $t::floor(self)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    $t::is_finite(self)
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )+
    };
}

float_scalar!(f32, f64);

macro_rules! as_scalar {
    (@to $src:ty: $($dst:ty),+) => {
        $(
            impl AsScalar<$dst> for $src {
                #[inline]
                fn as_scalar(self) -> $dst {
                    self as $dst
                }
            }
        )+
    };
    ($($src:ty),+) => {
        $(
            as_scalar!(@to $src: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
        )+
    };
}

as_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion() {
        fn precision_of<T: Scalar>(_: T) -> &'static str {
            std::any::type_name::<T::Precision>()
        }

        assert_eq!(precision_of(1u8), "f32");
        assert_eq!(precision_of(1i16), "f32");
        assert_eq!(precision_of(1i32), "f64");
        assert_eq!(precision_of(1usize), "f64");
        assert_eq!(precision_of(1.0f32), "f32");
        assert_eq!(precision_of(1.0f64), "f64");

        assert_eq!(7i32.to_precision(), 7.0);
        assert_eq!(i32::from_precision(7.9), 7);
    }

    #[test]
    fn mixed_equality() {
        assert!(scalar_eq(3i32, 3u8));
        assert!(!scalar_eq(3i32, 4u8));
        assert!(scalar_eq(-1i64, -1i8));
        assert!(!scalar_eq(u64::MAX, -1i64));

        assert!(scalar_eq(1.0f32, 1i32));
        assert!(scalar_eq(0.1f32, 0.1f64));
        assert!(scalar_eq(1.0f64, 1.0 + f64::EPSILON));
        assert!(!scalar_eq(1.0f64, 1.001f64));
        assert!(scalar_eq(0.0f32, -0.0f32));
    }

    #[test]
    fn non_finite_equality() {
        assert!(!scalar_eq(f32::NAN, f32::NAN));
        assert!(scalar_eq(f32::INFINITY, f64::INFINITY));
        assert!(!scalar_eq(f32::INFINITY, f32::NEG_INFINITY));
        assert!(!scalar_eq(f64::INFINITY, 1.0e300f64));
    }

    #[test]
    fn conversions() {
        assert_eq!(AsScalar::<u8>::as_scalar(300i32), 44);
        assert_eq!(AsScalar::<i32>::as_scalar(-2.7f32), -2);
        assert_eq!(AsScalar::<f64>::as_scalar(0.5f32), 0.5);
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::max(3, 5), 5);
        assert_eq!(MinMax::clamp(9u8, 1, 4), 4);
        assert_eq!(MinMax::min(f32::NAN, 1.0), 1.0);
    }
}
