//! Matrix products.

use std::ops::{Mul, MulAssign};

use crate::{scalar::Scalar, Vector};

use super::Matrix;

/// Matrix multiplication.
///
/// A `W×H` matrix can be multiplied with a `P×W` matrix, producing a `P×H` matrix.
impl<T, const W: usize, const H: usize, const P: usize> Mul<Matrix<T, P, W>> for Matrix<T, W, H>
where
    T: Scalar,
{
    type Output = Matrix<T, P, H>;

    fn mul(self, rhs: Matrix<T, P, W>) -> Self::Output {
        Matrix::from_fn(|x, y| {
            (0..W).fold(T::ZERO, |acc, i| acc + self[(i, y)] * rhs[(x, i)])
        })
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix-vector multiplication, treating the vector as a single column.
impl<T, const W: usize, const H: usize> Mul<Vector<T, W>> for Matrix<T, W, H>
where
    T: Scalar,
{
    type Output = Vector<T, H>;

    fn mul(self, rhs: Vector<T, W>) -> Self::Output {
        Vector::from_fn(|_, y| (0..W).fold(T::ZERO, |acc, i| acc + self[(i, y)] * rhs[i]))
    }
}
