use crate::{
    scalar::{Float, Scalar},
    vec2, Point, Rect,
};

/// A `D`-dimensional ball with a center and a radius.
#[derive(Debug, Clone, Copy)]
pub struct NSphere<T, const D: usize> {
    pub center: Point<T, D>,
    pub radius: T,
}

/// A circle (a 2-dimensional [`NSphere`]).
pub type Circle<T> = NSphere<T, 2>;
/// A sphere (a 3-dimensional [`NSphere`]).
pub type Sphere<T> = NSphere<T, 3>;

impl<T: Scalar, const D: usize> NSphere<T, D> {
    #[inline]
    pub fn new(center: Point<T, D>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Returns whether `point` lies inside the ball or on its surface.
    pub fn contains(&self, point: Point<T, D>) -> bool {
        let radius = self.radius.to_precision();
        self.center.distance_squared(point) <= radius * radius
    }

    /// Returns whether `self` and `other` overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius.to_precision() + other.radius.to_precision();
        self.center.distance_squared(other.center) <= reach * reach
    }
}

impl<T: Float, const D: usize> NSphere<T, D> {
    /// Returns the volume of the ball (the area of a circle).
    pub fn volume(&self) -> T {
        unit_ball_volume::<T>(D) * powi(self.radius, D)
    }

    /// Returns the surface area of the ball (the circumference of a circle).
    pub fn surface_area(&self) -> T {
        T::from_f64(D as f64) * unit_ball_volume::<T>(D) * powi(self.radius, D - 1)
    }
}

impl<T: Scalar> Circle<T> {
    /// Returns the smallest axis-aligned rectangle containing the circle.
    pub fn bounding_rect(&self) -> Rect<T> {
        let extent = vec2(self.radius, self.radius);
        Rect::from_corners(self.center - extent, self.center + extent)
    }
}

impl<T: Scalar, const D: usize> PartialEq for NSphere<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

/// Volume of the `n`-dimensional unit ball, through `V(n) = V(n - 2) * 2π / n`.
fn unit_ball_volume<T: Float>(n: usize) -> T {
    let mut volume = if n % 2 == 0 {
        T::ONE
    } else {
        T::ONE + T::ONE
    };
    let mut dim = n % 2;
    while dim < n {
        dim += 2;
        volume = volume * T::TAU / T::from_f64(dim as f64);
    }
    volume
}

fn powi<T: Float>(base: T, exp: usize) -> T {
    (0..exp).fold(T::ONE, |acc, _| acc * base)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use crate::{point2, point3};

    use super::*;

    #[test]
    fn unit_balls() {
        assert_eq!(unit_ball_volume::<f64>(0), 1.0);
        assert_eq!(unit_ball_volume::<f64>(1), 2.0);
        assert_relative_eq!(unit_ball_volume::<f64>(2), PI, max_relative = 1e-12);
        assert_relative_eq!(unit_ball_volume::<f64>(3), 4.0 / 3.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(unit_ball_volume::<f64>(4), PI * PI / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn circle() {
        let circle = Circle::new(point2(1.0f64, 1.0), 2.0);
        assert_relative_eq!(circle.volume(), 4.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(circle.surface_area(), 4.0 * PI, max_relative = 1e-12);
        assert_eq!(
            circle.bounding_rect(),
            Rect::from_corners(point2(-1.0, -1.0), point2(3.0, 3.0))
        );
    }

    #[test]
    fn sphere() {
        let sphere = Sphere::new(point3(0.0f32, 0.0, 0.0), 3.0);
        assert_relative_eq!(sphere.volume(), 36.0 * std::f32::consts::PI, max_relative = 1e-5);
        assert_relative_eq!(
            sphere.surface_area(),
            36.0 * std::f32::consts::PI,
            max_relative = 1e-5
        );
    }

    #[test]
    fn containment() {
        let circle = Circle::new(point2(0, 0), 5);
        assert!(circle.contains(point2(3, 4)));
        assert!(circle.contains(point2(0, 0)));
        assert!(!circle.contains(point2(4, 4)));

        let other = Circle::new(point2(9, 0), 4);
        assert!(circle.intersects(&other));
        assert!(!circle.intersects(&Circle::new(point2(9, 1), 4)));
    }
}
