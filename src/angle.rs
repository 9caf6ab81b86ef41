//! Typed angles and trigonometric functions.

use std::{fmt, ops};

use crate::scalar::Float;

/// An angle measured in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radian<T>(pub T);

/// An angle measured in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degree<T>(pub T);

impl<T: Float> Radian<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// Returns the length of a full turn (2π).
    #[inline]
    pub fn turn() -> Self {
        Self(T::TAU)
    }

    pub fn to_degrees(self) -> Degree<T> {
        Degree(self.0 * (T::from_f64(180.0) / T::PI))
    }

    /// Wraps the angle into the range `[0, 2π)`.
    pub fn wrap(self) -> Self {
        Self(wrap(self.0, T::TAU))
    }

    /// Wraps the angle into the range `[-π, π)`.
    pub fn wrap_signed(self) -> Self {
        Self(wrap_signed(self.0, T::TAU))
    }

    pub fn sin(self) -> T {
        self.0.sin()
    }

    pub fn cos(self) -> T {
        self.0.cos()
    }

    pub fn tan(self) -> T {
        self.0.tan()
    }
}

impl<T: Float> Degree<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// Returns the length of a full turn (360°).
    #[inline]
    pub fn turn() -> Self {
        Self(T::from_f64(360.0))
    }

    pub fn to_radians(self) -> Radian<T> {
        Radian(self.0 * (T::PI / T::from_f64(180.0)))
    }

    /// Wraps the angle into the range `[0°, 360°)`.
    pub fn wrap(self) -> Self {
        Self(wrap(self.0, Self::turn().0))
    }

    /// Wraps the angle into the range `[-180°, 180°)`.
    pub fn wrap_signed(self) -> Self {
        Self(wrap_signed(self.0, Self::turn().0))
    }
}

fn wrap<T: Float>(value: T, turn: T) -> T {
    let wrapped = value - turn * (value / turn).floor();
    // Rounding can land exactly on `turn` for tiny negative inputs.
    if wrapped >= turn {
        wrapped - turn
    } else {
        wrapped
    }
}

fn wrap_signed<T: Float>(value: T, turn: T) -> T {
    let half = turn * T::half();
    wrap(value + half, turn) - half
}

impl<T: Float> From<Degree<T>> for Radian<T> {
    #[inline]
    fn from(degrees: Degree<T>) -> Self {
        degrees.to_radians()
    }
}

impl<T: Float> From<Radian<T>> for Degree<T> {
    #[inline]
    fn from(radians: Radian<T>) -> Self {
        radians.to_degrees()
    }
}

macro_rules! angle_ops {
    ($($angle:ident),+) => {
        $(
            impl<T: Float> ops::Add for $angle<T> {
                type Output = Self;

                fn add(self, rhs: Self) -> Self {
                    Self(self.0 + rhs.0)
                }
            }

            impl<T: Float> ops::AddAssign for $angle<T> {
                fn add_assign(&mut self, rhs: Self) {
                    self.0 += rhs.0;
                }
            }

            impl<T: Float> ops::Sub for $angle<T> {
                type Output = Self;

                fn sub(self, rhs: Self) -> Self {
                    Self(self.0 - rhs.0)
                }
            }

            impl<T: Float> ops::SubAssign for $angle<T> {
                fn sub_assign(&mut self, rhs: Self) {
                    self.0 -= rhs.0;
                }
            }

            impl<T: Float> ops::Mul<T> for $angle<T> {
                type Output = Self;

                fn mul(self, rhs: T) -> Self {
                    Self(self.0 * rhs)
                }
            }

            impl<T: Float> ops::Div<T> for $angle<T> {
                type Output = Self;

                fn div(self, rhs: T) -> Self {
                    Self(self.0 / rhs)
                }
            }

            impl<T: Float> ops::Neg for $angle<T> {
                type Output = Self;

                fn neg(self) -> Self {
                    Self(-self.0)
                }
            }

            impl<T: approx::AbsDiffEq> approx::AbsDiffEq for $angle<T> {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> T::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                    self.0.abs_diff_eq(&other.0, epsilon)
                }
            }

            impl<T: approx::RelativeEq> approx::RelativeEq for $angle<T> {
                fn default_max_relative() -> T::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
                    self.0.relative_eq(&other.0, epsilon, max_relative)
                }
            }

            impl<T: approx::UlpsEq> approx::UlpsEq for $angle<T> {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
                    self.0.ulps_eq(&other.0, epsilon, max_ulps)
                }
            }
        )+
    };
}

angle_ops!(Radian, Degree);

impl<T: fmt::Display> fmt::Display for Radian<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl<T: fmt::Display> fmt::Display for Degree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

pub fn sin<T: Float>(angle: impl Into<Radian<T>>) -> T {
    angle.into().0.sin()
}

pub fn cos<T: Float>(angle: impl Into<Radian<T>>) -> T {
    angle.into().0.cos()
}

pub fn tan<T: Float>(angle: impl Into<Radian<T>>) -> T {
    angle.into().0.tan()
}

pub fn asin<T: Float>(value: T) -> Radian<T> {
    Radian(value.asin())
}

pub fn acos<T: Float>(value: T) -> Radian<T> {
    Radian(value.acos())
}

pub fn atan<T: Float>(value: T) -> Radian<T> {
    Radian(value.atan())
}

/// Computes the four-quadrant arctangent of `y / x`.
pub fn atan2<T: Float>(y: T, x: T) -> Radian<T> {
    Radian(y.atan2(x))
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn conversion() {
        assert_relative_eq!(Radian::from(Degree(180.0f64)), Radian(std::f64::consts::PI));
        assert_relative_eq!(Degree::from(Radian(std::f32::consts::FRAC_PI_2)), Degree(90.0));
    }

    #[test]
    fn wrapping() {
        assert_relative_eq!(Degree(370.0f32).wrap(), Degree(10.0));
        assert_relative_eq!(Degree(-90.0f32).wrap(), Degree(270.0));
        assert_relative_eq!(Degree(270.0f64).wrap_signed(), Degree(-90.0));
        assert_relative_eq!(Degree(180.0f64).wrap_signed(), Degree(-180.0));
        assert_relative_eq!(Degree(-180.0f64).wrap_signed(), Degree(-180.0));
        assert_relative_eq!(Radian(-0.5f64).wrap(), Radian(std::f64::consts::TAU - 0.5));

        let tiny = Degree(-1.0e-20f64).wrap();
        assert!(tiny.0 >= 0.0 && tiny.0 < 360.0);
    }

    #[test]
    fn arithmetic() {
        let mut a = Degree(30.0f32) + Degree(60.0) - Degree(10.0);
        a += Degree(5.0);
        a -= Degree(15.0);
        assert_eq!(a, Degree(70.0));
        assert_eq!(a * 2.0, Degree(140.0));
        assert_eq!(a / 2.0, Degree(35.0));
        assert_eq!(-a, Degree(-70.0));
    }

    #[test]
    fn trig() {
        assert_abs_diff_eq!(sin(Degree(90.0f64)), 1.0);
        assert_abs_diff_eq!(cos(Radian(0.0f32)), 1.0);
        assert_abs_diff_eq!(tan(Degree(45.0f64)), 1.0, epsilon = 1e-12);
        assert_relative_eq!(asin(1.0f64).to_degrees(), Degree(90.0));
        assert_relative_eq!(acos(0.0f64), Radian(std::f64::consts::FRAC_PI_2));
        assert_relative_eq!(atan(1.0f64).to_degrees(), Degree(45.0));
        assert_relative_eq!(atan2(1.0f64, -1.0).to_degrees(), Degree(135.0));
    }

    #[test]
    fn display() {
        assert_eq!(Radian(1.5).to_string(), "1.5 rad");
        assert_eq!(Degree(90).to_string(), "90°");
    }
}
