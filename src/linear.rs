//! Operations on single-column arrays.

use crate::{role::Plain, MathArray};

mod view;

pub use view::{X, XY, XYZ, XYZW};

/// A length-`D` sequence: a [`MathArray`] with a single column.
pub type LinearArray<T, const D: usize, R = Plain> = MathArray<T, 1, D, R>;

struct Span<const START: usize, const LEN: usize, const D: usize>;

impl<const START: usize, const LEN: usize, const D: usize> Span<START, LEN, D> {
    const SPLICE: () = assert!(
        LEN >= 1 && START + LEN <= D,
        "splice range is empty or exceeds the array length"
    );
    const NARROWING: () = assert!(
        START == 0 && LEN >= 1 && LEN < D,
        "narrowing requires a strictly shorter target"
    );
}

impl<T, const D: usize, R> MathArray<T, 1, D, R> {
    /// Returns a view of the `LEN` elements starting at `START`.
    ///
    /// The view shares storage with `self`. Ranges that do not fit are rejected at compile time.
    ///
    /// ```
    /// # use zaru_math::*;
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(*v.splice::<1, 2>(), [2, 3]);
    /// ```
    ///
    /// A range extending past the end does not compile:
    ///
    /// ```compile_fail
    /// # use zaru_math::*;
    /// let v = vec3(1, 2, 3);
    /// let _ = v.splice::<2, 2>();
    /// ```
    pub fn splice<const START: usize, const LEN: usize>(&self) -> &MathArray<T, 1, LEN, R> {
        let () = Span::<START, LEN, D>::SPLICE;
        let elems = &self.0[0][START..START + LEN];
        // Safety: `elems` is exactly `LEN` contiguous `T`s, which is the layout of the
        // `#[repr(transparent)]` target type. The borrow of `self` is carried over.
        unsafe { &*elems.as_ptr().cast::<MathArray<T, 1, LEN, R>>() }
    }

    /// Mutable version of [`MathArray::splice`].
    pub fn splice_mut<const START: usize, const LEN: usize>(
        &mut self,
    ) -> &mut MathArray<T, 1, LEN, R> {
        let () = Span::<START, LEN, D>::SPLICE;
        let elems = &mut self.0[0][START..START + LEN];
        // Safety: see `splice`.
        unsafe { &mut *elems.as_mut_ptr().cast::<MathArray<T, 1, LEN, R>>() }
    }

    /// Returns a view of the first `LEN` elements, where `LEN` must be less than `D`.
    pub fn leading<const LEN: usize>(&self) -> &MathArray<T, 1, LEN, R> {
        let () = Span::<0, LEN, D>::NARROWING;
        self.splice::<0, LEN>()
    }

    /// Mutable version of [`MathArray::leading`].
    pub fn leading_mut<const LEN: usize>(&mut self) -> &mut MathArray<T, 1, LEN, R> {
        let () = Span::<0, LEN, D>::NARROWING;
        self.splice_mut::<0, LEN>()
    }

    /// Copies the first `LEN` elements into a shorter linear array.
    ///
    /// ```
    /// # use zaru_math::*;
    /// assert_eq!(vec3(1, 2, 3).narrow::<2>(), [1, 2]);
    /// ```
    ///
    /// The target has to be strictly shorter:
    ///
    /// ```compile_fail
    /// # use zaru_math::*;
    /// let _ = vec3(1, 2, 3).narrow::<3>();
    /// ```
    pub fn narrow<const LEN: usize>(&self) -> MathArray<T, 1, LEN, R>
    where
        T: Copy,
    {
        *self.leading::<LEN>()
    }

    #[inline]
    pub fn as_array(&self) -> &[T; D] {
        &self.0[0]
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; D] {
        &mut self.0[0]
    }

    #[inline]
    pub fn into_array(self) -> [T; D] {
        let [elems] = self.0;
        elems
    }
}

impl<T, const D: usize, R> From<[T; D]> for MathArray<T, 1, D, R> {
    #[inline]
    fn from(elems: [T; D]) -> Self {
        Self::from_columns([elems])
    }
}

impl<T, const D: usize, R> From<MathArray<T, 1, D, R>> for [T; D] {
    #[inline]
    fn from(array: MathArray<T, 1, D, R>) -> Self {
        array.into_array()
    }
}

impl<T, R> MathArray<T, 1, 1, R> {
    /// Appends an element, creating a 2-element linear array.
    pub fn extend(self, y: T) -> MathArray<T, 1, 2, R> {
        let [x] = self.into_array();
        [x, y].into()
    }
}

impl<T, R> MathArray<T, 1, 2, R> {
    /// Appends an element, creating a 3-element linear array.
    pub fn extend(self, z: T) -> MathArray<T, 1, 3, R> {
        let [x, y] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, R> MathArray<T, 1, 3, R> {
    /// Appends an element, creating a 4-element linear array.
    pub fn extend(self, w: T) -> MathArray<T, 1, 4, R> {
        let [x, y, z] = self.into_array();
        [x, y, z, w].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splices_alias_storage() {
        let mut a = LinearArray::<i32, 5>::from([1, 2, 3, 4, 5]);
        assert_eq!(*a.splice::<0, 5>(), [1, 2, 3, 4, 5]);
        assert_eq!(*a.splice::<4, 1>(), [5]);

        let middle = a.splice_mut::<1, 3>();
        middle[0] = 20;
        *middle *= 2;
        assert_eq!(a, [1, 40, 6, 8, 5]);
    }

    #[test]
    fn narrowing() {
        let mut a = LinearArray::<f32, 4>::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.narrow::<3>(), [1.0, 2.0, 3.0]);
        assert_eq!(*a.leading::<1>(), [1.0]);
        a.leading_mut::<2>()[1] = 7.0;
        assert_eq!(a, [1.0, 7.0, 3.0, 4.0]);
    }

    #[test]
    fn extend() {
        let a = LinearArray::<u8, 1>::from([1]);
        assert_eq!(a.extend(2).extend(3).extend(4), [1, 2, 3, 4]);
    }

    #[test]
    fn components() {
        let mut a = LinearArray::<i32, 4>::from([1, 2, 3, 4]);
        assert_eq!((a.x, a.y, a.z, a.w), (1, 2, 3, 4));
        a.z = 30;
        assert_eq!(a.into_array(), [1, 2, 30, 4]);

        let b = LinearArray::<i32, 2>::from([5, 6]);
        assert_eq!(b.x + b.y, 11);
    }
}
