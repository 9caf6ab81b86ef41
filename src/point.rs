use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    linear::LinearArray,
    role,
    scalar::{Float, Scalar, Sqrt},
    MathArray, Vector,
};

/// A position in `D`-dimensional space.
///
/// Subtracting two points yields the [`Vector`] between them, and points can be offset by vectors.
/// Adding two points together is allowed as well (it is needed for weighted averages).
pub type Point<T, const D: usize> = MathArray<T, 1, D, role::Point>;

/// Barycentric coordinates `(s, t, u)` of a point relative to a triangle `(a, b, c)`.
///
/// `s` is the weight of `b`, `t` the weight of `c` and `u = 1 - s - t` the weight of `a`.
pub type Barycentric3<T> = LinearArray<T, 3>;

/// Creates a 2-dimensional point.
pub const fn point2<T>(x: T, y: T) -> Point<T, 2> {
    MathArray::from_columns([[x, y]])
}

/// Creates a 3-dimensional point.
pub const fn point3<T>(x: T, y: T, z: T) -> Point<T, 3> {
    MathArray::from_columns([[x, y, z]])
}

impl<T: Scalar, const D: usize> Point<T, D> {
    /// The origin of the coordinate system.
    pub const ORIGIN: Self = Self::ZERO;

    /// Returns the vector pointing from the origin to `self`.
    #[inline]
    pub fn to_vector(self) -> Vector<T, D> {
        self.into_role()
    }

    #[inline]
    pub fn as_vector(&self) -> &Vector<T, D> {
        self.reinterpret()
    }

    /// Returns the squared distance between `self` and `other`, in the precision type.
    ///
    /// The coordinates are promoted before subtracting, so unsigned points never underflow.
    pub fn distance_squared(self, other: Self) -> T::Precision {
        let (a, b) = (self.map(T::to_precision), other.map(T::to_precision));
        (b - a).magnitude_squared()
    }

    /// Returns the distance between `self` and `other`, in the precision type.
    pub fn distance(self, other: Self) -> T::Precision {
        self.distance_squared(other).sqrt()
    }
}

impl<T: Float, const D: usize> Point<T, D> {
    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, T::half())
    }

    /// Computes the barycentric coordinates of `self` with respect to the triangle `a, b, c`.
    ///
    /// `self` is assumed to lie in the plane of the triangle. Degenerate triangles produce
    /// infinite or NaN coordinates.
    pub fn barycentric(self, a: Self, b: Self, c: Self) -> Barycentric3<T> {
        let (v0, v1, v2) = (b - a, c - a, self - a);
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let inv = T::ONE / (d00 * d11 - d01 * d01);

        let s = (d11 * d20 - d01 * d21) * inv;
        let t = (d00 * d21 - d01 * d20) * inv;
        [s, t, T::ONE - s - t].into()
    }
}

/// The difference of two points is the vector between them.
impl<T: Scalar, const D: usize> Sub for Point<T, D> {
    type Output = Vector<T, D>;

    fn sub(self, rhs: Self) -> Vector<T, D> {
        self.to_vector() - rhs.to_vector()
    }
}

/// Offsets a point by a vector.
impl<T: Scalar, const D: usize> Add<Vector<T, D>> for Point<T, D> {
    type Output = Self;

    fn add(mut self, rhs: Vector<T, D>) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const D: usize> AddAssign<Vector<T, D>> for Point<T, D> {
    fn add_assign(&mut self, rhs: Vector<T, D>) {
        *self.reinterpret_mut::<role::Vector>() += rhs;
    }
}

impl<T: Scalar, const D: usize> Sub<Vector<T, D>> for Point<T, D> {
    type Output = Self;

    fn sub(mut self, rhs: Vector<T, D>) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const D: usize> SubAssign<Vector<T, D>> for Point<T, D> {
    fn sub_assign(&mut self, rhs: Vector<T, D>) {
        *self.reinterpret_mut::<role::Vector>() -= rhs;
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::vec2;

    use super::*;

    #[test]
    fn point_difference_is_a_vector() {
        let a = point2(1, 2);
        let b = point2(4, 6);
        let v: Vector<i32, 2> = b - a;
        assert_eq!(v, [3, 4]);
        assert_eq!(a + v, b);
        assert_eq!(b - v, a);

        let mut c = a;
        c += vec2(1, 1);
        c -= vec2(0, 2);
        assert_eq!(c, [2, 1]);
    }

    #[test]
    fn distance() {
        let a = point2(1u8, 1);
        let b = point2(4u8, 5);
        assert_eq!(a.distance(b), 5.0f32);
        assert_eq!(b.distance_squared(a), 25.0f32);
        assert_eq!(Point::<f64, 3>::ORIGIN.distance(point3(2.0, 3.0, 6.0)), 7.0);
    }

    #[test]
    fn interpolation() {
        let a = point3(0.0f32, 2.0, -4.0);
        let b = point3(10.0f32, 4.0, 4.0);
        assert_eq!(a.midpoint(b), [5.0, 3.0, 0.0]);
        assert_eq!(a.lerp(b, 0.25), [2.5, 2.5, -2.0]);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn barycentric() {
        let (a, b, c) = (point2(0.0f64, 0.0), point2(4.0, 0.0), point2(0.0, 4.0));

        assert_abs_diff_eq!(a.barycentric(a, b, c), Barycentric3::from([0.0, 0.0, 1.0]));
        assert_abs_diff_eq!(b.barycentric(a, b, c), Barycentric3::from([1.0, 0.0, 0.0]));
        assert_abs_diff_eq!(c.barycentric(a, b, c), Barycentric3::from([0.0, 1.0, 0.0]));

        let p = point2(1.0, 2.0);
        let [s, t, u] = p.barycentric(a, b, c).into_array();
        assert_relative_eq!(s + t + u, 1.0);
        assert_relative_eq!(a.to_vector() * u + b.to_vector() * s + c.to_vector() * t, p.to_vector());
    }

    #[test]
    fn degenerate_barycentric() {
        let a = point2(0.0f32, 0.0);
        let b = point2(1.0, 1.0);
        let c = point2(2.0, 2.0);
        let coords = point2(0.5, 0.5).barycentric(a, b, c);
        assert!(coords.as_flat().iter().any(|e| !e.is_finite()));
    }
}
