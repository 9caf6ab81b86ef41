//! Randomized checks of algebraic identities across the public API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use zaru_math::*;

const ROUNDS: usize = 200;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rand_f64(rng: &mut fastrand::Rng) -> f64 {
    rng.f64() * 20.0 - 10.0
}

fn rand_vec3(rng: &mut fastrand::Rng) -> Vector3d {
    vec3(rand_f64(rng), rand_f64(rng), rand_f64(rng))
}

/// A diagonally dominant matrix, which is never singular.
fn rand_invertible<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N, N> {
    Matrix::from_fn(|x, y| {
        if x == y {
            (N as f64) * 10.0 + rng.f64() * 10.0
        } else {
            rng.f64() * 2.0 - 1.0
        }
    })
}

#[test]
fn inverse_is_identity() {
    init();
    let mut rng = fastrand::Rng::with_seed(0x6a1c3f0e9b52d847);
    for _ in 0..ROUNDS {
        let m = rand_invertible::<3>(&mut rng);
        assert_abs_diff_eq!(m * m.invert(), Matrix3d::IDENTITY, epsilon = 1e-9);
        assert_abs_diff_eq!(m.invert() * m, Matrix3d::IDENTITY, epsilon = 1e-9);

        let m = rand_invertible::<4>(&mut rng);
        assert_abs_diff_eq!(m * m.invert(), Matrix4d::IDENTITY, epsilon = 1e-9);
    }
}

#[test]
fn determinant_of_product() {
    init();
    let mut rng = fastrand::Rng::with_seed(0x1f0d55c7a3e2b964);
    for _ in 0..ROUNDS {
        let a = rand_invertible::<4>(&mut rng);
        let b = rand_invertible::<4>(&mut rng);
        assert_relative_eq!(
            (a * b).determinant(),
            a.determinant() * b.determinant(),
            max_relative = 1e-9
        );
        assert_relative_eq!(a.transpose().determinant(), a.determinant(), max_relative = 1e-9);
    }
}

#[test]
fn transpose_is_involution() {
    let mut rng = fastrand::Rng::with_seed(0x44e7a90b1c6d2f38);
    for _ in 0..ROUNDS {
        let m = Matrix::<i32, 3, 2>::from_fn(|_, _| rng.i32(-100..100));
        let t: Matrix<i32, 2, 3> = m.transpose();
        assert_eq!(t.transpose(), m);
        assert_eq!(t[(1, 2)], m[(2, 1)]);
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = fastrand::Rng::with_seed(0x9d2b7e4150c8fa63);
    for _ in 0..ROUNDS {
        let v = rand_vec3(&mut rng);
        if v.magnitude() < 1e-6 {
            continue;
        }
        assert_relative_eq!(v.normalize().magnitude(), 1.0, max_relative = 1e-12);

        let v = vec2(rng.i32(1..1000), rng.i32(-1000..1000));
        let n: Vector2d = v.normalize();
        assert_relative_eq!(n.magnitude(), 1.0, max_relative = 1e-12);
    }
}

#[test]
fn dot_and_cross_products() {
    let mut rng = fastrand::Rng::with_seed(0x2c81f5d39ae04b76);
    for _ in 0..ROUNDS {
        let a = rand_vec3(&mut rng);
        let b = rand_vec3(&mut rng);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(b), -b.cross(a));

        let c = a.cross(b);
        let scale = a.magnitude() * b.magnitude() * c.magnitude();
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-12 * scale.max(1.0));
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-12 * scale.max(1.0));
    }
}

#[test]
fn rotors_preserve_length() {
    let mut rng = fastrand::Rng::with_seed(0x5be3a17d40c29f18);
    for _ in 0..ROUNDS {
        let axis = rand_vec3(&mut rng);
        if axis.magnitude() < 1e-6 {
            continue;
        }
        let angle = Radian(rng.f64() * std::f64::consts::TAU);
        let rotor = Rotord::from_axis_angle(axis, angle);
        let v = rand_vec3(&mut rng);
        let rotated = rotor.rotate(v);
        assert_relative_eq!(rotated.magnitude(), v.magnitude(), max_relative = 1e-9);
        assert_abs_diff_eq!(
            rotor.to_matrix() * v,
            rotated,
            epsilon = 1e-9 * v.magnitude().max(1.0)
        );
    }
}

#[test]
fn barycentric_of_vertices() {
    let mut rng = fastrand::Rng::with_seed(0x73f04a9e1d6cb285);
    for _ in 0..ROUNDS {
        let a = point3(rand_f64(&mut rng), rand_f64(&mut rng), rand_f64(&mut rng));
        let b = point3(rand_f64(&mut rng), rand_f64(&mut rng), rand_f64(&mut rng));
        let c = point3(rand_f64(&mut rng), rand_f64(&mut rng), rand_f64(&mut rng));
        if (b - a).cross(c - a).magnitude() < 1e-3 {
            continue;
        }

        assert_abs_diff_eq!(a.barycentric(a, b, c), Barycentric3::from([0.0, 0.0, 1.0]), epsilon = 1e-6);
        assert_abs_diff_eq!(b.barycentric(a, b, c), Barycentric3::from([1.0, 0.0, 0.0]), epsilon = 1e-6);
        assert_abs_diff_eq!(c.barycentric(a, b, c), Barycentric3::from([0.0, 1.0, 0.0]), epsilon = 1e-6);

        let centroid = a.lerp(b.midpoint(c), 2.0 / 3.0);
        assert_abs_diff_eq!(centroid.barycentric(a, b, c).sum(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn conversions_settle_after_one_round() {
    let mut rng = fastrand::Rng::with_seed(0xe81b6d2c05fa9347);
    for _ in 0..ROUNDS {
        let v = vec4(
            rand_f64(&mut rng) * 100.0,
            rand_f64(&mut rng) * 100.0,
            rand_f64(&mut rng) * 100.0,
            rand_f64(&mut rng) * 100.0,
        );
        let once: Vector4i = v.convert();
        let back: Vector4d = once.convert();
        assert_eq!(back.convert::<i32>(), once);
        assert_eq!(array_convert::<f64, _, 1, 4, _>(once), back);
    }
}

#[test]
fn mixed_type_equality() {
    let mut rng = fastrand::Rng::with_seed(0x0b9c4e7f2a61d538);
    for _ in 0..ROUNDS {
        let v = vec3(rng.i16(..), rng.i16(..), rng.i16(..));
        assert_eq!(v, v.convert::<f32>());
        assert_eq!(v.convert::<i64>(), v.convert::<f64>());
    }
}

#[test]
fn checked_access_matches_indexing() {
    init();
    let mut rng = fastrand::Rng::with_seed(0xc4a2e9170d3bf856);
    let m = Matrix::<u8, 4, 3>::from_fn(|_, _| rng.u8(..));
    for x in 0..4 {
        for y in 0..3 {
            assert_eq!(m.at(x, y), Ok(&m[(x, y)]));
            assert_eq!(m.at_linear(x * 3 + y), Ok(&m[(x, y)]));
        }
    }
    if cfg!(debug_assertions) {
        assert_eq!(m.at(4, 0), Err(OutOfRangeError { index: 4, len: 4 }));
        assert_eq!(m.at(0, 3), Err(OutOfRangeError { index: 3, len: 3 }));
        assert_eq!(m.at_linear(12), Err(OutOfRangeError { index: 12, len: 12 }));
    }
}
