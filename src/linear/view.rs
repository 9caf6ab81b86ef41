//! Named component access for short linear arrays.

use std::ops::{Deref, DerefMut};

use crate::MathArray;

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

macro_rules! component_view {
    ($($len:literal => $view:ident),+) => {
        $(
            impl<T, R> Deref for MathArray<T, 1, $len, R> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: the view is `#[repr(C)]` with `$len` fields of type `T` followed by
                    // a ZST, which matches the layout of `[T; $len]`.
                    unsafe { &*(self as *const Self).cast::<$view<T>>() }
                }
            }

            impl<T, R> DerefMut for MathArray<T, 1, $len, R> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see `deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
                }
            }
        )+
    };
}

component_view!(1 => X, 2 => XY, 3 => XYZ, 4 => XYZW);
