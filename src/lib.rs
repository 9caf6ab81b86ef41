//! Fixed-size, type-generic vectors, matrices, angles and geometric primitives.
//!
//! All array-like types in this library are the same type, [`MathArray`], tagged with a zero-sized
//! *role* that gives the storage its meaning. [`Vector`], [`Point`], [`Matrix`], [`Quaternion`]
//! and [`Rotor`] are aliases that pick a role, and the role decides which operators and methods
//! are available:
//!
//! - Every role gets element-wise `+ - * /` with scalars.
//! - Element-wise operators between two arrays are available unless the role replaces them:
//!   `Matrix * Matrix` is the matrix product, `Point - Point` is a [`Vector`], and
//!   `Quaternion * Quaternion` is the Hamilton product.
//! - Roles can be changed without copying via [`MathArray::reinterpret`] and
//!   [`MathArray::into_role`].
//!
//! ```
//! use zaru_math::*;
//!
//! let a = point2(1.0f32, 2.0);
//! let b = point2(4.0f32, 6.0);
//! let v: Vector2f = b - a;
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(a + v, b);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized arrays. Dimensions are const generics, and dimension
//!   mismatches are type errors.
//! - Support only a single, column-major, unpadded data layout. Arrays are indexed by
//!   `(column, row)`.
//! - Be generic over the primitive numeric types. Results that need fractional precision
//!   (magnitudes, determinants, inverses) are computed in the element type's
//!   [precision type][Scalar::Precision].
//! - Never allocate.
//!
//! # Debug Checks
//!
//! Checked accessors like [`MathArray::at`] and constructors like [`MathArray::from_slice`] only
//! validate their inputs when `debug_assertions` are enabled, and report violations as an
//! [`OutOfRangeError`]. Release builds skip the checks.

mod aliases;
pub mod angle;
mod array;
mod error;
pub mod geometry;
mod linear;
mod matrix;
mod point;
mod quat;
pub mod role;
mod scalar;
mod vector;

pub use aliases::*;
pub use angle::{Degree, Radian};
pub use array::{array_convert, MathArray};
pub use error::OutOfRangeError;
pub use geometry::{Circle, Line, NSphere, Ray, Rect, Sphere};
pub use linear::{LinearArray, X, XY, XYZ, XYZW};
pub use matrix::{Cofactor, Matrix, Minor};
pub use point::{point2, point3, Barycentric3, Point};
pub use quat::{Quaternion, Rotor};
pub use scalar::{scalar_eq, AsScalar, Float, MinMax, One, Scalar, Sqrt, Trig, Zero};
pub use vector::{vec2, vec3, vec4, Vector};
