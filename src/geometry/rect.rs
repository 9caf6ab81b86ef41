use std::fmt;

use crate::{
    point2,
    scalar::{Float, Scalar},
    Point, Vector,
};

/// An axis-aligned rectangle in 2D space, stored as its minimum and maximum corners.
///
/// Rectangles are allowed to have zero height and/or width. The constructors guarantee that
/// `min <= max` on both axes.
#[derive(Clone, Copy)]
pub struct Rect<T> {
    min: Point<T, 2>,
    max: Point<T, 2>,
}

impl<T: Scalar> Rect<T> {
    /// Creates the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point<T, 2>, b: Point<T, 2>) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a rectangle from its minimum corner and its size.
    ///
    /// Negative size components extend the rectangle towards smaller coordinates instead.
    pub fn from_origin_size(origin: Point<T, 2>, size: Vector<T, 2>) -> Self {
        Self::from_corners(origin, origin + size)
    }

    /// Computes the bounding rectangle that encompasses `points`.
    ///
    /// Returns [`None`] if `points` is an empty iterator.
    pub fn bounding<I: IntoIterator<Item = Point<T, 2>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_corners(first, first), |rect, pt| Self {
            min: rect.min.min(pt),
            max: rect.max.max(pt),
        }))
    }

    #[inline]
    pub fn min(&self) -> Point<T, 2> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point<T, 2> {
        self.max
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    /// Returns the size of the rectangle as a `(width, height)` vector.
    pub fn size(&self) -> Vector<T, 2> {
        self.max - self.min
    }

    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    /// Returns whether `point` lies inside the rectangle or on its border.
    pub fn contains(&self, point: Point<T, 2>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Returns whether `self` and `other` overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Returns the overlapping area of `self` and `other`, or [`None`] if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Moves the rectangle by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vector<T, 2>) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns the corners in counterclockwise order, starting at `min`.
    pub fn corners(&self) -> [Point<T, 2>; 4] {
        [
            self.min,
            point2(self.max.x, self.min.y),
            self.max,
            point2(self.min.x, self.max.y),
        ]
    }
}

impl<T: Float> Rect<T> {
    pub fn center(&self) -> Point<T, 2> {
        self.min.midpoint(self.max)
    }
}

impl<T: Scalar> PartialEq for Rect<T> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<T: fmt::Debug> fmt::Debug for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect @ {:?}-{:?}", self.min, self.max)
    }
}

impl<T> approx::AbsDiffEq for Rect<T>
where
    T: Scalar + approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl<T> approx::RelativeEq for Rect<T>
where
    T: Scalar + approx::RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
    }
}
