use crate::{
    scalar::{Float, MinMax, Scalar},
    Line, Point, Vector,
};

/// A half-line starting at `origin` and extending along `direction`.
///
/// `direction` does not need to be normalized; the ray is parameterized by multiples of it.
#[derive(Debug, Clone, Copy)]
pub struct Ray<T, const D: usize> {
    pub origin: Point<T, D>,
    pub direction: Vector<T, D>,
}

impl<T: Scalar, const D: usize> Ray<T, D> {
    #[inline]
    pub fn new(origin: Point<T, D>, direction: Vector<T, D>) -> Self {
        Self { origin, direction }
    }

    /// Returns `origin + direction * t`.
    pub fn point_at(&self, t: T) -> Point<T, D> {
        self.origin + self.direction * t
    }

    /// Returns the segment from `origin` to `point_at(length)`.
    ///
    /// The segment is only `length` long if `direction` has unit length.
    pub fn to_line(&self, length: T) -> Line<T, D> {
        Line::new(self.origin, self.point_at(length))
    }
}

impl<T: Float, const D: usize> Ray<T, D> {
    /// Returns the point on the ray that is closest to `point`.
    pub fn closest_point(&self, point: Point<T, D>) -> Point<T, D> {
        let length_squared = self.direction.dot(self.direction);
        if length_squared == T::ZERO {
            return self.origin;
        }
        let t = (point - self.origin).dot(self.direction) / length_squared;
        self.point_at(MinMax::max(t, T::ZERO))
    }

    /// Returns the distance between `point` and the closest point on the ray.
    pub fn distance_to(&self, point: Point<T, D>) -> T {
        self.closest_point(point).distance(point)
    }
}

impl<T: Scalar, const D: usize> PartialEq for Ray<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}

#[cfg(test)]
mod tests {
    use crate::{point2, vec2};

    use super::*;

    #[test]
    fn point_at() {
        let ray = Ray::new(point2(1, 2), vec2(2, -1));
        assert_eq!(ray.point_at(0), point2(1, 2));
        assert_eq!(ray.point_at(3), point2(7, -1));
        assert_eq!(ray.to_line(2), Line::new(point2(1, 2), point2(5, 0)));
    }

    #[test]
    fn closest_point() {
        let ray = Ray::new(point2(0.0f32, 0.0), vec2(0.0, 2.0));
        assert_eq!(ray.closest_point(point2(3.0, 5.0)), point2(0.0, 5.0));
        assert_eq!(ray.closest_point(point2(3.0, -5.0)), point2(0.0, 0.0));
        assert_eq!(ray.distance_to(point2(-3.0, -4.0)), 5.0);
    }
}
