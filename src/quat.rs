use std::ops::{Mul, MulAssign, Neg};

use crate::{
    angle::Radian,
    role::{self, Versor},
    scalar::{Float, MinMax, Scalar},
    vec3, MathArray, Matrix, Vector,
};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Quaternions are stored like a 4-dimensional vector: `x`, `y` and `z` are the `i`, `j` and `k`
/// imaginary parts (the *vector part*), `w` is the real number part (the *scalar part*).
///
/// Multiplying quaternions with `*` computes the Hamilton product.
pub type Quaternion<T> = MathArray<T, 1, 4, role::Quaternion>;

/// A unit quaternion representing a rotation in 3D space.
///
/// Rotors are expected to have unit length, which allows [`Rotor::rotate`] to use the conjugate
/// instead of the inverse. This is not validated.
pub type Rotor<T> = MathArray<T, 1, 4, role::Rotor>;

impl<T: Scalar, R: Versor> MathArray<T, 1, 4, R> {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self::from_columns([[T::ZERO, T::ZERO, T::ZERO, T::ONE]]);

    /// Creates a quaternion from its vector part and its scalar part.
    pub fn from_parts(vector: Vector<T, 3>, scalar: T) -> Self {
        vector.into_role::<R>().extend(scalar)
    }

    /// Returns the vector part `(x, y, z)`.
    pub fn vector(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        vec3(x, y, z)
    }

    /// Returns the scalar part `w`.
    pub fn scalar(self) -> T {
        self[3]
    }

    /// Negates the vector part.
    pub fn conjugate(self) -> Self
    where
        T: Neg<Output = T>,
    {
        Self::from_parts(-self.vector(), self.scalar())
    }
}

impl<T: Float, R: Versor> MathArray<T, 1, 4, R> {
    /// Returns the multiplicative inverse, the conjugate divided by the squared magnitude.
    pub fn inverse(self) -> Self {
        let magnitude_squared = self.magnitude_squared();
        self.conjugate().map(|elem| elem / magnitude_squared)
    }
}

fn hamilton<T: Scalar, R: Versor>(
    lhs: MathArray<T, 1, 4, R>,
    rhs: MathArray<T, 1, 4, R>,
) -> MathArray<T, 1, 4, R> {
    let (v1, s1) = (lhs.vector(), lhs.scalar());
    let (v2, s2) = (rhs.vector(), rhs.scalar());
    MathArray::from_parts(v2 * s1 + v1 * s2 + v1.cross(v2), s1 * s2 - v1.dot(v2))
}

macro_rules! hamilton_product {
    ($($role:ident),+) => {
        $(
            /// Hamilton product.
            impl<T: Scalar> Mul for MathArray<T, 1, 4, role::$role> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    hamilton(self, rhs)
                }
            }

            impl<T: Scalar> MulAssign for MathArray<T, 1, 4, role::$role> {
                #[inline]
                fn mul_assign(&mut self, rhs: Self) {
                    *self = hamilton(*self, rhs);
                }
            }
        )+
    };
}

hamilton_product!(Quaternion, Rotor);

impl<T: Float> Quaternion<T> {
    /// Rotates `vector` by computing `q * v * q⁻¹`.
    ///
    /// Non-unit quaternions still produce a pure rotation, since the inverse cancels their scale.
    pub fn rotate(self, vector: Vector<T, 3>) -> Vector<T, 3> {
        (self * Self::from_parts(vector, T::ZERO) * self.inverse()).vector()
    }
}

impl<T: Float> Rotor<T> {
    /// Creates a rotor that rotates counterclockwise by `angle` around `axis`.
    ///
    /// `axis` does not need to be normalized, but must not be zero.
    pub fn from_axis_angle(axis: Vector<T, 3>, angle: impl Into<Radian<T>>) -> Self {
        let half = angle.into() * T::half();
        Self::from_parts(axis.normalize() * half.sin(), half.cos())
    }

    pub fn from_rotation_x(angle: impl Into<Radian<T>>) -> Self {
        Self::from_axis_angle(Vector::<T, 3>::X, angle)
    }

    pub fn from_rotation_y(angle: impl Into<Radian<T>>) -> Self {
        Self::from_axis_angle(Vector::<T, 3>::Y, angle)
    }

    pub fn from_rotation_z(angle: impl Into<Radian<T>>) -> Self {
        Self::from_axis_angle(Vector::<T, 3>::Z, angle)
    }

    /// Returns the normalized rotation axis.
    ///
    /// The axis of the identity rotation is undefined and results in NaN components.
    pub fn axis(self) -> Vector<T, 3> {
        self.vector().normalize()
    }

    /// Returns the rotation angle around [`Rotor::axis`], in `[0, 2π]`.
    pub fn angle(self) -> Radian<T> {
        let w = MinMax::clamp(self.scalar(), -T::ONE, T::ONE);
        Radian(w.acos() * (T::ONE + T::ONE))
    }

    /// Rotates `vector` by computing `r * v * r*` (using the conjugate `r*`).
    pub fn rotate(self, vector: Vector<T, 3>) -> Vector<T, 3> {
        (self * Self::from_parts(vector, T::ZERO) * self.conjugate()).vector()
    }

    /// Converts this rotor into a 3×3 rotation matrix.
    pub fn to_matrix(self) -> Matrix<T, 3, 3> {
        let [x, y, z, w] = self.into_array();
        let two = T::ONE + T::ONE;
        let one = T::ONE;
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [one - two * (y * y + z * z), two * (x * y - z * w), two * (x * z + y * w)],
            [two * (x * y + z * w), one - two * (x * x + z * z), two * (y * z - x * w)],
            [two * (x * z - y * w), two * (y * z + x * w), one - two * (x * x + y * y)],
        ]);
        m
    }

    /// Views this rotor as a general [`Quaternion`].
    pub fn as_quaternion(&self) -> &Quaternion<T> {
        self.reinterpret()
    }

    pub fn to_quaternion(self) -> Quaternion<T> {
        self.into_role()
    }
}
