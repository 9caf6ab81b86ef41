//! Implementations of `std::ops`.
//!
//! Every arithmetic operator here is gated by a [`DefaultOp`] capability of the array's role.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    role::{AddOp, ArrayRhs, DefaultOp, DivOp, MulOp, ScalarLhs, ScalarRhs, SubOp},
    scalar::Scalar,
};

use super::MathArray;

/// Indexing by `(column, row)`.
impl<T, const W: usize, const H: usize, R> Index<(usize, usize)> for MathArray<T, W, H, R> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.0[x][y]
    }
}

impl<T, const W: usize, const H: usize, R> IndexMut<(usize, usize)> for MathArray<T, W, H, R> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.0[x][y]
    }
}

/// Linear arrays can be indexed with a single `usize`.
impl<T, const D: usize, R> Index<usize> for MathArray<T, 1, D, R> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[0][index]
    }
}

impl<T, const D: usize, R> IndexMut<usize> for MathArray<T, 1, D, R> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[0][index]
    }
}

/// Element-wise negation.
impl<T, const W: usize, const H: usize, R> Neg for MathArray<T, W, H, R>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    fn neg(mut self) -> Self {
        for elem in self.as_flat_mut() {
            *elem = -*elem;
        }
        self
    }
}

macro_rules! elementwise_ops {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $marker:ty) => {
        /// Element-wise operation between arrays of the same shape and role.
        impl<T, const W: usize, const H: usize, R> $Op for MathArray<T, W, H, R>
        where
            T: Scalar,
            R: DefaultOp<$marker, ArrayRhs>,
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T, const W: usize, const H: usize, R> $OpAssign for MathArray<T, W, H, R>
        where
            T: Scalar,
            R: DefaultOp<$marker, ArrayRhs>,
        {
            fn $op_assign(&mut self, rhs: Self) {
                self.as_flat_mut()
                    .iter_mut()
                    .zip(rhs.as_flat())
                    .for_each(|(lhs, &rhs)| $OpAssign::$op_assign(lhs, rhs));
            }
        }

        /// Applies the operation between every element and a scalar.
        impl<T, const W: usize, const H: usize, R> $Op<T> for MathArray<T, W, H, R>
        where
            T: Scalar,
            R: DefaultOp<$marker, ScalarRhs>,
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: T) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T, const W: usize, const H: usize, R> $OpAssign<T> for MathArray<T, W, H, R>
        where
            T: Scalar,
            R: DefaultOp<$marker, ScalarRhs>,
        {
            fn $op_assign(&mut self, rhs: T) {
                self.as_flat_mut()
                    .iter_mut()
                    .for_each(|lhs| $OpAssign::$op_assign(lhs, rhs));
            }
        }
    };
}

elementwise_ops!(Add::add, AddAssign::add_assign, AddOp);
elementwise_ops!(Sub::sub, SubAssign::sub_assign, SubOp);
elementwise_ops!(Mul::mul, MulAssign::mul_assign, MulOp);
elementwise_ops!(Div::div, DivAssign::div_assign, DivOp);

// Coherence forbids a blanket `impl<T> Add<MathArray<T, ..>> for T`, so the scalar-on-the-left
// forms are spelled out for each primitive.
macro_rules! scalar_lhs_ops {
    ($($t:ty),+) => {
        $(
            impl<const W: usize, const H: usize, R> Add<MathArray<$t, W, H, R>> for $t
            where
                R: DefaultOp<AddOp, ScalarLhs> + DefaultOp<AddOp, ScalarRhs>,
            {
                type Output = MathArray<$t, W, H, R>;

                #[inline]
                fn add(self, rhs: MathArray<$t, W, H, R>) -> Self::Output {
                    rhs + self
                }
            }

            impl<const W: usize, const H: usize, R> Sub<MathArray<$t, W, H, R>> for $t
            where
                R: DefaultOp<SubOp, ScalarLhs>,
            {
                type Output = MathArray<$t, W, H, R>;

                #[inline]
                fn sub(self, rhs: MathArray<$t, W, H, R>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const W: usize, const H: usize, R> Mul<MathArray<$t, W, H, R>> for $t
            where
                R: DefaultOp<MulOp, ScalarLhs> + DefaultOp<MulOp, ScalarRhs>,
            {
                type Output = MathArray<$t, W, H, R>;

                #[inline]
                fn mul(self, rhs: MathArray<$t, W, H, R>) -> Self::Output {
                    rhs * self
                }
            }

            impl<const W: usize, const H: usize, R> Div<MathArray<$t, W, H, R>> for $t
            where
                R: DefaultOp<DivOp, ScalarLhs>,
            {
                type Output = MathArray<$t, W, H, R>;

                #[inline]
                fn div(self, rhs: MathArray<$t, W, H, R>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
