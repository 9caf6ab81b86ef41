//! Dimension- and element-specific type aliases.
//!
//! Suffixes name the element type: `b` = [`i8`], `ub` = [`u8`], `s` = [`i16`], `us` = [`u16`],
//! `i` = [`i32`], `u` = [`u32`], `l` = [`i64`], `ul` = [`u64`], `f` = [`f32`], `d` = [`f64`].

use crate::{Matrix, Point, Quaternion, Rotor, Vector};

/// A 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;

/// A 2-dimensional point.
pub type Point2<T> = Point<T, 2>;
/// A 3-dimensional point.
pub type Point3<T> = Point<T, 3>;
/// A 4-dimensional point.
pub type Point4<T> = Point<T, 4>;

/// A 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// A 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// A 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

macro_rules! aliases {
    ($($generic:ident => $($alias:ident: $t:ty),+;)+) => {
        $($(
            #[doc = concat!("A [`", stringify!($generic), "`] with [`", stringify!($t), "`] elements.")]
            pub type $alias = $generic<$t>;
        )+)+
    };
}

aliases! {
    Vector2 => Vector2b: i8, Vector2ub: u8, Vector2s: i16, Vector2us: u16, Vector2i: i32,
        Vector2u: u32, Vector2l: i64, Vector2ul: u64, Vector2f: f32, Vector2d: f64;
    Vector3 => Vector3b: i8, Vector3ub: u8, Vector3s: i16, Vector3us: u16, Vector3i: i32,
        Vector3u: u32, Vector3l: i64, Vector3ul: u64, Vector3f: f32, Vector3d: f64;
    Vector4 => Vector4b: i8, Vector4ub: u8, Vector4s: i16, Vector4us: u16, Vector4i: i32,
        Vector4u: u32, Vector4l: i64, Vector4ul: u64, Vector4f: f32, Vector4d: f64;
    Point2 => Point2b: i8, Point2ub: u8, Point2s: i16, Point2us: u16, Point2i: i32,
        Point2u: u32, Point2l: i64, Point2ul: u64, Point2f: f32, Point2d: f64;
    Point3 => Point3b: i8, Point3ub: u8, Point3s: i16, Point3us: u16, Point3i: i32,
        Point3u: u32, Point3l: i64, Point3ul: u64, Point3f: f32, Point3d: f64;
    Point4 => Point4b: i8, Point4ub: u8, Point4s: i16, Point4us: u16, Point4i: i32,
        Point4u: u32, Point4l: i64, Point4ul: u64, Point4f: f32, Point4d: f64;
    Matrix2 => Matrix2b: i8, Matrix2ub: u8, Matrix2s: i16, Matrix2us: u16, Matrix2i: i32,
        Matrix2u: u32, Matrix2l: i64, Matrix2ul: u64, Matrix2f: f32, Matrix2d: f64;
    Matrix3 => Matrix3b: i8, Matrix3ub: u8, Matrix3s: i16, Matrix3us: u16, Matrix3i: i32,
        Matrix3u: u32, Matrix3l: i64, Matrix3ul: u64, Matrix3f: f32, Matrix3d: f64;
    Matrix4 => Matrix4b: i8, Matrix4ub: u8, Matrix4s: i16, Matrix4us: u16, Matrix4i: i32,
        Matrix4u: u32, Matrix4l: i64, Matrix4ul: u64, Matrix4f: f32, Matrix4d: f64;
    Quaternion => Quaternionf: f32, Quaterniond: f64;
    Rotor => Rotorf: f32, Rotord: f64;
}
