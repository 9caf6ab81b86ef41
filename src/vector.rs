use crate::{
    angle::Radian,
    role::{self, Euclidean},
    scalar::{AsScalar, Float, MinMax, One, Scalar, Sqrt, Zero},
    MathArray, Matrix,
};

/// A `D`-dimensional vector: a direction and magnitude.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are
///   unit vectors pointing in the given direction.
///
/// All other constructors of [`MathArray`] are available as well.
pub type Vector<T, const D: usize> = MathArray<T, 1, D, role::Vector>;

/// Creates a 2-dimensional vector.
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    MathArray::from_columns([[x, y]])
}

/// Creates a 3-dimensional vector.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    MathArray::from_columns([[x, y, z]])
}

/// Creates a 4-dimensional vector.
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    MathArray::from_columns([[x, y, z, w]])
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = MathArray::from_columns([[T::ONE]]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec2(T::ONE, T::ZERO);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec2(T::ZERO, T::ONE);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec3(T::ONE, T::ZERO, T::ZERO);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec3(T::ZERO, T::ONE, T::ZERO);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec3(T::ZERO, T::ZERO, T::ONE);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec4(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec4(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// A unit vector pointing in the W direction.
    pub const W: Self = vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

/// Norm-related operations, shared by vectors and quaternions.
impl<T: Scalar, const D: usize, R: Euclidean> MathArray<T, 1, D, R> {
    /// Computes the dot product of `self` and `other`, accumulating in the element type.
    ///
    /// Integer element types may overflow; use [`MathArray::dot_as`] to accumulate in a wider
    /// type.
    ///
    /// ```
    /// # use zaru_math::*;
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0[0]
            .iter()
            .zip(&other.0[0])
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Computes the dot product of `self` and `other`, accumulating in `A`.
    ///
    /// ```
    /// # use zaru_math::*;
    /// let v = vec2(200u8, 200);
    /// assert_eq!(v.dot_as::<u32>(v), 80_000);
    /// ```
    pub fn dot_as<A: Scalar>(self, other: Self) -> A
    where
        T: AsScalar<A>,
    {
        self.0[0].iter().zip(&other.0[0]).fold(A::ZERO, |acc, (&a, &b)| {
            acc + a.as_scalar() * b.as_scalar()
        })
    }

    /// Returns the squared length of this vector, computed in its precision type.
    pub fn magnitude_squared(self) -> T::Precision {
        self.dot_precision(self)
    }

    /// Returns the length of this vector, computed in its precision type.
    pub fn magnitude(self) -> T::Precision {
        self.magnitude_squared().sqrt()
    }

    /// Returns a copy of this vector scaled to unit length, in its precision type.
    ///
    /// A zero-length vector results in NaN elements.
    pub fn normalize(self) -> MathArray<T::Precision, 1, D, R> {
        let magnitude = self.magnitude();
        self.map(|elem| elem.to_precision() / magnitude)
    }

    fn dot_precision(self, other: Self) -> T::Precision {
        self.0[0]
            .iter()
            .zip(&other.0[0])
            .fold(<T::Precision as Zero>::ZERO, |acc, (&a, &b)| {
                acc + a.to_precision() * b.to_precision()
            })
    }
}

impl<T: Float, const D: usize, R: Euclidean> MathArray<T, 1, D, R> {
    /// Scales this vector to unit length in place.
    pub fn normalize_mut(&mut self) {
        let magnitude = self.magnitude();
        for elem in &mut self.0[0] {
            *elem /= magnitude;
        }
    }
}

impl<T: Float, const D: usize> Vector<T, D> {
    /// Projects `self` onto the line spanned by `axis`.
    pub fn project_onto(self, axis: Self) -> Self {
        axis * (self.dot(axis) / axis.dot(axis))
    }

    /// Reflects `self` across the hyperplane orthogonal to `axis`, reversing the component along
    /// `axis`.
    ///
    /// If `unit_axis` is `true`, `axis` is assumed to have unit length and the projection step
    /// is skipped. This is not validated.
    pub fn reflect_onto(self, axis: Self, unit_axis: bool) -> Self {
        let two = T::ONE + T::ONE;
        if unit_axis {
            self - axis * (two * self.dot(axis))
        } else {
            self - self.project_onto(axis) * two
        }
    }

    /// Returns the unsigned angle between `self` and `other`.
    pub fn angle_to(self, other: Self) -> Radian<T> {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        Radian(MinMax::clamp(cos, -T::ONE, T::ONE).acos())
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Computes the scalar cross product (the Z component of the 3D cross product).
    pub fn cross(self, other: Self) -> T {
        self[0] * other[1] - self[1] * other[0]
    }
}

impl<T: Float> Vector<T, 2> {
    /// Rotates this vector clockwise by `angle`.
    pub fn rotate_clockwise(self, angle: impl Into<Radian<T>>) -> Self {
        Matrix::rotation_clockwise(angle) * self
    }

    /// Rotates this vector counterclockwise by `angle`.
    pub fn rotate_counterclockwise(self, angle: impl Into<Radian<T>>) -> Self {
        Matrix::rotation_counterclockwise(angle) * self
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// ```
    /// # use zaru_math::*;
    /// assert_eq!(Vector3i::X.cross(Vector3i::Y), Vector3i::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [x1, y1, z1] = self.into_array();
        let [x2, y2, z2] = other.into_array();
        vec3(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2)
    }
}

impl<T: Float> Vector<T, 4> {
    /// Divides every component by `w`.
    pub fn homogenize(self) -> Self {
        let w = self[3];
        self / w
    }
}
