use crate::{
    scalar::{Float, MinMax, Scalar, Sqrt},
    Point, Vector,
};

/// A line segment between two points.
#[derive(Debug, Clone, Copy)]
pub struct Line<T, const D: usize> {
    pub start: Point<T, D>,
    pub end: Point<T, D>,
}

impl<T: Scalar, const D: usize> Line<T, D> {
    #[inline]
    pub fn new(start: Point<T, D>, end: Point<T, D>) -> Self {
        Self { start, end }
    }

    /// Returns the vector from `start` to `end`.
    pub fn to_vector(&self) -> Vector<T, D> {
        self.end - self.start
    }

    pub fn length_squared(&self) -> T::Precision {
        self.start.distance_squared(self.end)
    }

    pub fn length(&self) -> T::Precision {
        self.length_squared().sqrt()
    }
}

impl<T: Float, const D: usize> Line<T, D> {
    /// Returns the unit vector pointing from `start` to `end`.
    pub fn direction(&self) -> Vector<T, D> {
        self.to_vector().normalize()
    }

    pub fn midpoint(&self) -> Point<T, D> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t`, where `t = 0` is `start` and `t = 1` is `end`.
    ///
    /// `t` is not clamped, so this also reaches points on the infinite line through the segment.
    pub fn point_at(&self, t: T) -> Point<T, D> {
        self.start.lerp(self.end, t)
    }

    /// Returns the point on the segment that is closest to `point`.
    pub fn closest_point(&self, point: Point<T, D>) -> Point<T, D> {
        let v = self.to_vector();
        let length_squared = v.dot(v);
        if length_squared == T::ZERO {
            return self.start;
        }
        let t = (point - self.start).dot(v) / length_squared;
        self.point_at(MinMax::clamp(t, T::ZERO, T::ONE))
    }

    /// Returns the distance between `point` and the closest point on the segment.
    pub fn distance_to(&self, point: Point<T, D>) -> T {
        self.closest_point(point).distance(point)
    }
}

impl<T: Scalar, const D: usize> PartialEq for Line<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{point2, point3, vec2};

    use super::*;

    #[test]
    fn measurements() {
        let line = Line::new(point2(1, 1), point2(4, 5));
        assert_eq!(line.to_vector(), vec2(3, 4));
        assert_eq!(line.length_squared(), 25.0);
        assert_eq!(line.length(), 5.0);
    }

    #[test]
    fn parameterization() {
        let line = Line::new(point2(0.0f32, 0.0), point2(4.0, 2.0));
        assert_eq!(line.midpoint(), point2(2.0, 1.0));
        assert_eq!(line.point_at(0.25), point2(1.0, 0.5));
        assert_eq!(line.point_at(2.0), point2(8.0, 4.0));
        assert_relative_eq!(line.direction().magnitude(), 1.0);
    }

    #[test]
    fn closest_point() {
        let line = Line::new(point2(0.0f64, 0.0), point2(10.0, 0.0));
        assert_eq!(line.closest_point(point2(3.0, 5.0)), point2(3.0, 0.0));
        assert_eq!(line.closest_point(point2(-4.0, 1.0)), point2(0.0, 0.0));
        assert_eq!(line.closest_point(point2(14.0, -3.0)), point2(10.0, 0.0));
        assert_eq!(line.distance_to(point2(13.0, 4.0)), 5.0);

        let degenerate = Line::new(point3(1.0f64, 1.0, 1.0), point3(1.0, 1.0, 1.0));
        assert_eq!(degenerate.closest_point(point3(0.0, 0.0, 0.0)), point3(1.0, 1.0, 1.0));
    }
}
