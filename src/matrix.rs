use crate::{
    angle::Radian,
    role,
    scalar::{Float, Scalar},
    MathArray, Vector,
};

mod ops;

/// A column-major matrix with `W` columns, `H` rows and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`MathArray::from_columns`] fill a matrix with raw elements.
/// - [`MathArray::from_fn`] creates each element by invoking a closure with its column and row.
/// - For square matrices, [`Matrix::from_diagonal`] creates a matrix with the given diagonal and
///   zero everywhere else, and [`Matrix::IDENTITY`] is the identity matrix.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] create 2D rotation
///   matrices.
///
/// # Algebra
///
/// Multiplying two matrices with `*` computes the matrix product; the inner dimensions have to
/// match at compile time. Square matrices additionally support [`Matrix::determinant`], and the
/// [`Minor`] and [`Cofactor`] traits, which provide inversion for sizes up to 6×6.
///
/// ```
/// # use zaru_math::*;
/// let m = Matrix2f::from_rows([
///     [4.0, 7.0],
///     [2.0, 6.0],
/// ]);
/// assert_eq!(m.determinant(), 10.0);
/// assert_eq!(m.invert(), Matrix2f::from_rows([
///     [0.6, -0.7],
///     [-0.2, 0.4],
/// ]));
/// ```
///
/// Multiplying matrices whose inner dimensions differ does not compile:
///
/// ```compile_fail
/// # use zaru_math::*;
/// let a = Matrix::<i32, 2, 3>::from_fn(|x, y| (x * y) as i32);
/// let b = Matrix::<i32, 2, 3>::from_fn(|x, y| (x + y) as i32);
/// let _ = a * b;
/// ```
pub type Matrix<T, const W: usize, const H: usize> = MathArray<T, W, H, role::Matrix>;

impl<T: Copy, const W: usize, const H: usize> Matrix<T, W, H> {
    /// Creates a matrix from an array of rows.
    ///
    /// This allows writing matrix literals in their natural orientation, even though storage is
    /// column-major.
    pub fn from_rows(rows: [[T; W]; H]) -> Self {
        Self::from_fn(|x, y| rows[y][x])
    }

    /// Returns row `y` as a vector.
    pub fn row(&self, y: usize) -> Vector<T, W> {
        Vector::from_fn(|_, x| self[(x, y)])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self::from_columns(columns)
    };

    /// Creates a square matrix with the given diagonal, and zero everywhere else.
    pub fn from_diagonal(diagonal: [T; N]) -> Self {
        Self::from_fn(|x, y| if x == y { diagonal[x] } else { T::ZERO })
    }

    /// Returns the elements on the diagonal, from the top left to the bottom right.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|_, i| self[(i, i)])
    }

    /// Returns the sum of the diagonal.
    pub fn trace(&self) -> T {
        self.diagonal().sum()
    }

    /// Computes the determinant.
    ///
    /// The matrix is promoted to its precision type first. 1×1 and 2×2 matrices use the closed
    /// formulas; larger matrices are [reduced][Matrix::reduce] to upper-triangular form.
    pub fn determinant(&self) -> T::Precision {
        let mut m = self.map(T::to_precision);
        match N {
            1 => m[(0, 0)],
            2 => m[(0, 0)] * m[(1, 1)] - m[(1, 0)] * m[(0, 1)],
            _ => {
                let factor = m.reduce();
                m.diagonal().product() * factor
            }
        }
    }

    /// Computes the determinant of a matrix that is already upper-triangular.
    ///
    /// This is the product of the diagonal. No reduction is performed, so the result is wrong
    /// for matrices that have non-zero elements below the diagonal.
    pub fn superior_determinant(&self) -> T::Precision {
        self.diagonal().map(T::to_precision).product()
    }
}

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Reduces the matrix to upper-triangular form in place, using Gaussian elimination.
    ///
    /// Returns the factor the determinant of the original matrix has to be multiplied with:
    /// `1`, negated for every row swap. The determinant of the original matrix is then the
    /// product of the reduced diagonal times that factor.
    ///
    /// Zero pivots are swapped with the first lower row that has a non-zero entry in the pivot
    /// column. If there is none, the column is already reduced and is skipped, so singular
    /// matrices end up with a zero on the diagonal.
    pub fn reduce(&mut self) -> T {
        let mut factor = T::ONE;
        for c in 0..N {
            if self[(c, c)] == T::ZERO {
                match (c + 1..N).find(|&y| self[(c, y)] != T::ZERO) {
                    Some(y) => {
                        log::trace!("reduce: swapping rows {c} and {y}");
                        self.swap_rows(c, y);
                        factor = -factor;
                    }
                    None => continue,
                }
            }

            let pivot = self[(c, c)];
            for y in c + 1..N {
                let elem = self[(c, y)];
                if elem == T::ZERO {
                    continue;
                }
                let scale = elem / pivot;
                for x in c..N {
                    let above = self[(x, c)];
                    self[(x, y)] -= scale * above;
                }
            }
        }
        factor
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for column in self.as_grid_mut() {
            column.swap(a, b);
        }
    }
}

impl<T: Float> Matrix<T, 2, 2> {
    /// Creates a 2D rotation matrix that rotates a vector clockwise by `angle`.
    pub fn rotation_clockwise(angle: impl Into<Radian<T>>) -> Self {
        let angle: Radian<T> = angle.into();
        Self::rotation_counterclockwise(-angle)
    }

    /// Creates a 2D rotation matrix that rotates a vector counterclockwise by `angle`.
    pub fn rotation_counterclockwise(angle: impl Into<Radian<T>>) -> Self {
        let angle = angle.into();
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

struct MinorSize<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> MinorSize<N, M> {
    const OK: () = assert!(M + 1 == N, "a minor is one row and column smaller");
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Copies the matrix without column `x` and row `y`.
    fn strip<const M: usize>(&self, x: usize, y: usize) -> Matrix<T, M, M> {
        let () = MinorSize::<N, M>::OK;
        assert!(x < N && y < N, "minor ({x}, {y}) out of range for a {N}x{N} matrix");
        Matrix::from_fn(|mx, my| {
            let sx = if mx < x { mx } else { mx + 1 };
            let sy = if my < y { my } else { my + 1 };
            self[(sx, sy)]
        })
    }
}

/// Square matrices with a minor.
pub trait Minor {
    /// The matrix type that is one row and one column smaller.
    type Output;

    /// Returns the submatrix without column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` are out of range.
    fn minor(&self, x: usize, y: usize) -> Self::Output;
}

/// Inversion through the adjugate.
///
/// All results are computed in the precision type of the element type. Inverting a singular
/// matrix divides by zero and produces infinite or NaN elements.
pub trait Cofactor {
    type Output;

    /// Returns the matrix of cofactors `(-1)^(x+y) * det(minor(x, y))`.
    fn cofactor(&self) -> Self::Output;

    /// Returns the transposed cofactor matrix.
    fn adjugate(&self) -> Self::Output;

    /// Returns the inverse, computed as the adjugate divided by the determinant.
    fn invert(&self) -> Self::Output;

    /// Returns the inverse of an upper-triangular matrix.
    ///
    /// Uses [`Matrix::superior_determinant`] instead of [`Matrix::determinant`].
    fn invert_superior(&self) -> Self::Output;
}

fn checkerboard<T: Float>(x: usize, y: usize, value: T) -> T {
    if (x + y) % 2 == 0 {
        value
    } else {
        -value
    }
}

macro_rules! square_algebra {
    ($($n:literal => $m:literal),+) => {
        $(
            impl<T: Copy> Minor for Matrix<T, $n, $n> {
                type Output = Matrix<T, $m, $m>;

                fn minor(&self, x: usize, y: usize) -> Self::Output {
                    self.strip(x, y)
                }
            }

            impl<T: Scalar> Cofactor for Matrix<T, $n, $n> {
                type Output = Matrix<T::Precision, $n, $n>;

                fn cofactor(&self) -> Self::Output {
                    Matrix::from_fn(|x, y| checkerboard(x, y, self.minor(x, y).determinant()))
                }

                fn adjugate(&self) -> Self::Output {
                    self.cofactor().transpose()
                }

                fn invert(&self) -> Self::Output {
                    self.adjugate() / self.determinant()
                }

                fn invert_superior(&self) -> Self::Output {
                    self.adjugate() / self.superior_determinant()
                }
            }
        )+
    };
}

square_algebra!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5);

impl<T: Scalar> Cofactor for Matrix<T, 1, 1> {
    type Output = Matrix<T::Precision, 1, 1>;

    fn cofactor(&self) -> Self::Output {
        Matrix::<T::Precision, 1, 1>::IDENTITY
    }

    fn adjugate(&self) -> Self::Output {
        Matrix::<T::Precision, 1, 1>::IDENTITY
    }

    fn invert(&self) -> Self::Output {
        self.adjugate() / self.determinant()
    }

    fn invert_superior(&self) -> Self::Output {
        self.adjugate() / self.superior_determinant()
    }
}
