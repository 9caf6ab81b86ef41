use std::{array, fmt, hash::Hash, marker::PhantomData};

use bytemuck::TransparentWrapper;
use itertools::Itertools;

use crate::{
    error::check_range,
    role::{Plain, Role},
    scalar::{scalar_eq, AsScalar, MinMax, Scalar, Zero},
    OutOfRangeError,
};

mod ops;

/// A fixed-size, column-major grid of `W` columns and `H` rows with element type `T`.
///
/// The `R` parameter is a zero-sized [`Role`] tag that gives the array a meaning: the same storage
/// can be a [`Vector`][crate::Vector], a [`Point`][crate::Point], a [`Matrix`][crate::Matrix] or a
/// [`Quaternion`][crate::Quaternion]. The role decides which operators and methods are available.
/// Untagged arrays use [`Plain`].
///
/// # Construction
///
/// - [`MathArray::from_columns`] and [`MathArray::from_fn`] fill the whole grid.
/// - [`MathArray::splat`] broadcasts a single value.
/// - [`MathArray::from_slice`] and [`MathArray::try_from_iter`] fill the array in storage order,
///   zero-filling the cells that are not provided.
/// - [`MathArray::convert`] converts the element type with `as` semantics.
///
/// # Element Access
///
/// Arrays are indexed by `(x, y)`, where `x` is the column and `y` is the row. Linear arrays (with
/// a single column) can also be indexed with a single `usize`.
///
/// ```
/// # use zaru_math::*;
/// let mut m = Matrix2i::from_rows([
///     [1, 2],
///     [3, 4],
/// ]);
/// assert_eq!(m[(1, 0)], 2);
/// m[(0, 1)] = 9;
/// assert_eq!(m.as_flat(), &[1, 9, 2, 4]);
/// ```
///
/// The [`MathArray::at`] accessor returns a [`Result`] and validates the index in debug builds.
///
/// # Layout
///
/// [`MathArray`] is `#[repr(transparent)]` over `[[T; H]; W]`, so it can be reinterpreted as a
/// flat slice of `W * H` elements, and as an array with a different role.
///
/// Arrays need at least one column and one row. Constructing an empty shape does not compile:
///
/// ```compile_fail
/// # use zaru_math::*;
/// let _ = MathArray::<i32, 0, 2>::from_columns([]);
/// ```
#[repr(transparent)]
pub struct MathArray<T, const W: usize, const H: usize, R = Plain>(
    pub(crate) [[T; H]; W],
    PhantomData<R>,
);

impl<T: Clone, const W: usize, const H: usize, R> Clone for MathArray<T, W, H, R> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T: Copy, const W: usize, const H: usize, R> Copy for MathArray<T, W, H, R> {}

impl<T: Hash, const W: usize, const H: usize, R> Hash for MathArray<T, W, H, R> {
    fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
        self.0.hash(state);
    }
}

unsafe impl<T: bytemuck::Zeroable, const W: usize, const H: usize, R> bytemuck::Zeroable
    for MathArray<T, W, H, R>
{
}
unsafe impl<T: bytemuck::Pod, const W: usize, const H: usize, R: Role> bytemuck::Pod
    for MathArray<T, W, H, R>
{
}

// Safety: `MathArray` is `#[repr(transparent)]` and its only other field is a ZST.
unsafe impl<T, const W: usize, const H: usize, R> TransparentWrapper<[[T; H]; W]>
    for MathArray<T, W, H, R>
{
}

impl<T, const W: usize, const H: usize, R> MathArray<T, W, H, R> {
    const SHAPE: () = assert!(W >= 1 && H >= 1, "arrays need at least one column and one row");

    /// The number of elements in the array.
    pub const LEN: usize = W * H;

    /// Creates an array from its columns.
    pub const fn from_columns(columns: [[T; H]; W]) -> Self {
        let () = Self::SHAPE;
        Self(columns, PhantomData)
    }

    /// Creates an array by invoking a closure with the `(x, y)` coordinates of each cell.
    ///
    /// Cells are produced in storage order (column by column).
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut cb: F) -> Self {
        Self::from_columns(array::from_fn(|x| array::from_fn(|y| cb(x, y))))
    }

    /// Returns the number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        W
    }

    /// Returns the number of rows.
    #[inline]
    pub const fn height(&self) -> usize {
        H
    }

    /// Returns a reference to the element at column `x`, row `y`.
    ///
    /// With `debug_assertions` enabled, an out-of-range coordinate results in an
    /// [`OutOfRangeError`]. Release builds skip the validation and address the flat storage at
    /// `x * H + y`: a coordinate that lands inside the storage yields a different element, one
    /// beyond it panics.
    pub fn at(&self, x: usize, y: usize) -> Result<&T, OutOfRangeError> {
        check_range(x, W)?;
        check_range(y, H)?;
        Ok(&self.as_flat()[x * H + y])
    }

    /// Mutable version of [`MathArray::at`].
    pub fn at_mut(&mut self, x: usize, y: usize) -> Result<&mut T, OutOfRangeError> {
        check_range(x, W)?;
        check_range(y, H)?;
        Ok(&mut self.as_flat_mut()[x * H + y])
    }

    /// Returns a reference to the element at position `index` in storage order.
    pub fn at_linear(&self, index: usize) -> Result<&T, OutOfRangeError> {
        check_range(index, W * H)?;
        Ok(&self.as_flat()[index])
    }

    /// Mutable version of [`MathArray::at_linear`].
    pub fn at_linear_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        check_range(index, W * H)?;
        Ok(&mut self.as_flat_mut()[index])
    }

    /// Returns a reference to column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= W`.
    #[inline]
    pub fn column(&self, x: usize) -> &[T; H] {
        &self.0[x]
    }

    #[inline]
    pub fn column_mut(&mut self, x: usize) -> &mut [T; H] {
        &mut self.0[x]
    }

    /// Views the elements as a flat slice in storage (column-major) order.
    #[inline]
    pub fn as_flat(&self) -> &[T] {
        self.0.as_flattened()
    }

    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Views the elements as an array of columns.
    #[inline]
    pub fn as_grid(&self) -> &[[T; H]; W] {
        &self.0
    }

    #[inline]
    pub fn as_grid_mut(&mut self) -> &mut [[T; H]; W] {
        &mut self.0
    }

    #[inline]
    pub fn into_grid(self) -> [[T; H]; W] {
        self.0
    }

    /// Views this array as an array with the same storage and a different role.
    #[inline]
    pub fn reinterpret<R2>(&self) -> &MathArray<T, W, H, R2> {
        MathArray::<T, W, H, R2>::wrap_ref(Self::peel_ref(self))
    }

    #[inline]
    pub fn reinterpret_mut<R2>(&mut self) -> &mut MathArray<T, W, H, R2> {
        MathArray::<T, W, H, R2>::wrap_mut(Self::peel_mut(self))
    }

    /// Converts this array into one with the same storage and a different role.
    #[inline]
    pub fn into_role<R2>(self) -> MathArray<T, W, H, R2> {
        MathArray::from_columns(self.0)
    }

    /// Applies a closure to each element, creating a new array from the results.
    pub fn map<U, F: FnMut(T) -> U>(self, mut cb: F) -> MathArray<U, W, H, R> {
        MathArray::from_columns(self.0.map(|column| column.map(&mut cb)))
    }

    /// Combines the elements of `self` and `other` pairwise.
    pub fn zip_with<U, V, F: FnMut(T, U) -> V>(
        self,
        other: MathArray<U, W, H, R>,
        mut cb: F,
    ) -> MathArray<V, W, H, R>
    where
        T: Copy,
        U: Copy,
    {
        MathArray::from_fn(|x, y| cb(self.0[x][y], other.0[x][y]))
    }

    /// Swaps columns and rows, turning a `W×H` array into an `H×W` array.
    pub fn transpose(self) -> MathArray<T, H, W, R>
    where
        T: Copy,
    {
        MathArray::from_fn(|x, y| self.0[y][x])
    }
}

impl<T: Copy, const W: usize, const H: usize, R> MathArray<T, W, H, R> {
    /// Creates an array with every element set to `value`.
    pub const fn splat(value: T) -> Self {
        Self::from_columns([[value; H]; W])
    }

    /// Converts each element to `U` with the semantics of an `as` cast.
    ///
    /// ```
    /// # use zaru_math::*;
    /// let v = vec3(1.9f32, -2.5, 300.0);
    /// assert_eq!(v.convert::<i32>(), vec3(1, -2, 300));
    /// assert_eq!(v.convert::<u8>(), vec3(1, 0, 255));
    /// ```
    pub fn convert<U>(self) -> MathArray<U, W, H, R>
    where
        T: AsScalar<U>,
    {
        self.map(AsScalar::as_scalar)
    }
}

/// Converts `array` element by element into an array of `U` of the same shape and role.
pub fn array_convert<U, T, const W: usize, const H: usize, R>(
    array: MathArray<T, W, H, R>,
) -> MathArray<U, W, H, R>
where
    T: AsScalar<U> + Copy,
{
    array.convert()
}

impl<T: Zero + Copy, const W: usize, const H: usize, R> MathArray<T, W, H, R> {
    /// An array with every element set to zero.
    pub const ZERO: Self = Self::splat(T::ZERO);

    /// Creates an array from a flat slice of elements in storage order.
    ///
    /// Cells not covered by `values` are set to zero. If `values` has more than `W * H`
    /// elements, an [`OutOfRangeError`] is returned in debug builds; release builds ignore the
    /// excess elements.
    pub fn from_slice(values: &[T]) -> Result<Self, OutOfRangeError> {
        Self::try_from_iter(values.iter().copied())
    }

    /// Creates an array from an iterator of elements in storage order.
    ///
    /// Follows the same rules as [`MathArray::from_slice`].
    pub fn try_from_iter<I: IntoIterator<Item = T>>(values: I) -> Result<Self, OutOfRangeError> {
        let mut this = Self::ZERO;
        let mut values = values.into_iter();
        for cell in this.as_flat_mut() {
            match values.next() {
                Some(value) => *cell = value,
                None => return Ok(this),
            }
        }
        if values.next().is_some() {
            check_range(W * H, W * H)?;
        }
        Ok(this)
    }
}

impl<T: Scalar, const W: usize, const H: usize, R> MathArray<T, W, H, R> {
    /// Returns the sum of all elements.
    pub fn sum(&self) -> T {
        self.as_flat().iter().fold(T::ZERO, |acc, &elem| acc + elem)
    }

    /// Returns the product of all elements.
    pub fn product(&self) -> T {
        self.as_flat().iter().fold(T::ONE, |acc, &elem| acc * elem)
    }
}

impl<T: MinMax + Copy, const W: usize, const H: usize, R> MathArray<T, W, H, R> {
    /// Computes the element-wise minimum of `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, MinMax::min)
    }

    /// Computes the element-wise maximum of `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, MinMax::max)
    }

    /// Clamps each element between the corresponding elements of `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

impl<T: Default, const W: usize, const H: usize, R> Default for MathArray<T, W, H, R> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const W: usize, const H: usize, R> From<[[T; H]; W]> for MathArray<T, W, H, R> {
    #[inline]
    fn from(columns: [[T; H]; W]) -> Self {
        Self::from_columns(columns)
    }
}

impl<T, const W: usize, const H: usize, R> From<MathArray<T, W, H, R>> for [[T; H]; W] {
    #[inline]
    fn from(array: MathArray<T, W, H, R>) -> Self {
        array.0
    }
}

impl<T, U, const W: usize, const H: usize, R, R2> PartialEq<MathArray<U, W, H, R2>>
    for MathArray<T, W, H, R>
where
    T: Scalar,
    U: Scalar,
{
    fn eq(&self, other: &MathArray<U, W, H, R2>) -> bool {
        self.as_flat()
            .iter()
            .zip(other.as_flat())
            .all(|(&a, &b)| scalar_eq(a, b))
    }
}

impl<T, U, const H: usize, R> PartialEq<[U; H]> for MathArray<T, 1, H, R>
where
    T: Scalar,
    U: Scalar,
{
    fn eq(&self, other: &[U; H]) -> bool {
        self.0[0].iter().zip(other).all(|(&a, &b)| scalar_eq(a, b))
    }
}

impl<T: fmt::Debug, const W: usize, const H: usize, R> fmt::Debug for MathArray<T, W, H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if W == 1 {
            let mut tuple = f.debug_tuple("");
            for elem in &self.0[0] {
                tuple.field(elem);
            }
            return tuple.finish();
        }

        struct Row<'a, T, const W: usize, const H: usize>(&'a [[T; H]; W], usize);

        impl<T: fmt::Debug, const W: usize, const H: usize> fmt::Debug for Row<'_, T, W, H> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries(self.0.iter().map(|column| &column[self.1]))
                    .finish()
            }
        }

        f.debug_list()
            .entries((0..H).map(|y| Row(&self.0, y)))
            .finish()
    }
}

impl<T: fmt::Display, const W: usize, const H: usize, R> fmt::Display for MathArray<T, W, H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if W == 1 {
            return write!(f, "{{ {} }}", self.0[0].iter().format(", "));
        }

        f.write_str("[ ")?;
        for y in 0..H {
            if y != 0 {
                f.write_str("\n  ")?;
            }
            write!(f, "{}", self.0.iter().map(|column| &column[y]).format(", "))?;
        }
        f.write_str(" ]")
    }
}

impl<T, const W: usize, const H: usize, R> approx::AbsDiffEq for MathArray<T, W, H, R>
where
    T: Scalar + approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_flat()
            .iter()
            .zip(other.as_flat())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const W: usize, const H: usize, R> approx::RelativeEq for MathArray<T, W, H, R>
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
        self.as_flat()
            .iter()
            .zip(other.as_flat())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const W: usize, const H: usize, R> approx::UlpsEq for MathArray<T, W, H, R>
where
    T: Scalar + approx::UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_flat()
            .iter()
            .zip(other.as_flat())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::{role, Matrix, Vector};

    use super::*;

    #[test]
    fn storage_order() {
        let m = MathArray::<i32, 2, 3>::from_fn(|x, y| (x * 10 + y) as i32);
        assert_eq!(m.as_flat(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(m.as_grid(), &[[0, 1, 2], [10, 11, 12]]);
        assert_eq!(m.column(1), &[10, 11, 12]);
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 3);
        assert_eq!(MathArray::<i32, 2, 3>::LEN, 6);
    }

    #[test]
    fn checked_access() {
        let mut m = MathArray::<u8, 2, 2>::from_columns([[1, 2], [3, 4]]);
        assert_eq!(m.at(1, 0), Ok(&3));
        assert_eq!(m.at_linear(3), Ok(&4));
        *m.at_mut(0, 1).unwrap() = 7;
        *m.at_linear_mut(2).unwrap() = 8;
        assert_eq!(m.as_flat(), &[1, 7, 8, 4]);
    }

    #[test]
    #[cfg(debug_assertions)]
    fn checked_access_out_of_range() {
        let m = MathArray::<u8, 2, 2>::ZERO;
        assert_eq!(m.at(2, 0), Err(OutOfRangeError { index: 2, len: 2 }));
        assert_eq!(m.at(0, 5), Err(OutOfRangeError { index: 5, len: 2 }));
        assert_eq!(m.at_linear(4), Err(OutOfRangeError { index: 4, len: 4 }));
    }

    #[test]
    fn from_slice() {
        let v = MathArray::<i16, 1, 4>::from_slice(&[1, 2]).unwrap();
        assert_eq!(v, [1, 2, 0, 0]);
        let v = MathArray::<i16, 1, 4>::from_slice(&[]).unwrap();
        assert_eq!(v, [0, 0, 0, 0]);
        let v = MathArray::<i16, 1, 2>::try_from_iter(5..7).unwrap();
        assert_eq!(v, [5, 6]);
    }

    #[test]
    #[cfg(debug_assertions)]
    fn from_slice_overflow() {
        let err = MathArray::<i16, 1, 2>::from_slice(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, OutOfRangeError { index: 2, len: 2 });
        assert!(MathArray::<i16, 2, 2>::try_from_iter(0..).is_err());
    }

    #[test]
    fn mixed_type_equality() {
        let a = MathArray::<i32, 1, 3>::from([1, 2, 3]);
        let b = MathArray::<u8, 1, 3>::from([1, 2, 3]);
        let c = MathArray::<f32, 1, 3>::from([1.0, 2.0, 3.0 + 1e-7]);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(c, a);
        assert_ne!(a, MathArray::<f64, 1, 3>::from([1.0, 2.0, 3.1]));

        let v: Vector<i32, 3> = a.into_role();
        assert_eq!(v, a);
    }

    #[test]
    fn conversion() {
        let a = MathArray::<f64, 1, 3>::from([-1.5, 0.25, 1000.0]);
        let b = array_convert::<i16, _, 1, 3, _>(a);
        assert_eq!(b, [-1, 0, 1000]);
        assert_eq!(b.convert::<u8>(), [255, 0, 232]);
    }

    #[test]
    fn reinterpretation() {
        let mut v = MathArray::<f32, 1, 2>::from([1.0, 2.0]);
        let vector: &Vector<f32, 2> = v.reinterpret();
        assert_eq!(vector.magnitude_squared(), 5.0);
        v.reinterpret_mut::<role::Vector>().normalize_mut();
        approx::assert_relative_eq!(v.sum(), 3.0 / 5.0f32.sqrt());
    }

    #[test]
    fn folds() {
        let m = MathArray::<i32, 2, 2>::from_columns([[1, 2], [3, 4]]);
        assert_eq!(m.sum(), 10);
        assert_eq!(m.product(), 24);
    }

    #[test]
    fn min_max() {
        let a = MathArray::<i32, 1, 3>::from([1, 5, -2]);
        let b = MathArray::<i32, 1, 3>::from([3, 2, -4]);
        assert_eq!(a.min(b), [1, 2, -4]);
        assert_eq!(a.max(b), [3, 5, -2]);
        assert_eq!(
            a.clamp(MathArray::splat(0), MathArray::splat(4)),
            [1, 4, 0]
        );
    }

    #[test]
    fn transpose() {
        #[rustfmt::skip]
        let m = Matrix::<i32, 3, 2>::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        #[rustfmt::skip]
        let t = Matrix::<i32, 2, 3>::from_rows([
            [1, 4],
            [2, 5],
            [3, 6],
        ]);
        assert_eq!(m.transpose(), t);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn display() {
        let v = MathArray::<i32, 1, 3>::from([1, 2, 3]);
        assert_eq!(v.to_string(), "{ 1, 2, 3 }");

        #[rustfmt::skip]
        let m = Matrix::<i32, 2, 2>::from_rows([
            [1, 2],
            [3, 4],
        ]);
        assert_eq!(m.to_string(), "[ 1, 2\n  3, 4 ]");
    }

    #[test]
    fn debug() {
        let v = MathArray::<i32, 1, 2>::from([1, 2]);
        assert_eq!(format!("{v:?}"), "(1, 2)");

        #[rustfmt::skip]
        let m = Matrix::<i32, 2, 2>::from_rows([
            [1, 2],
            [3, 4],
        ]);
        assert_eq!(format!("{m:?}"), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn pod() {
        let m = MathArray::<u16, 2, 2>::from_columns([[1, 2], [3, 4]]);
        let bytes: &[u8] = bytemuck::bytes_of(&m);
        assert_eq!(bytes.len(), 8);
        let back: MathArray<u16, 2, 2> = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(back, m);
    }
}
