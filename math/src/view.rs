//! Named-field views of vector storage, reached through [`Deref`] and [`DerefMut`].
//!
//! `Vector<T, 3>` dereferences to [`Xyz<T>`], which dereferences to [`Rgb<T>`], so both `v.x`
//! and `v.r` name component 0 of the same storage.

use core::{
    ops::{Deref, DerefMut},
    ptr,
};

use crate::{Scalar, Vector};

// Positional names:

#[repr(C)]
pub struct Xy<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct Xyz<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct Xyzw<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// Color names:

#[repr(C)]
pub struct Rg<T> {
    pub r: T,
    pub g: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct Rgb<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct Rgba<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

/// Implements `Deref` and `DerefMut` from `$from` to `$to`, which must have the layout of
/// `[T; $n]`.
macro_rules! impl_view {
    ($n:literal, $from:ty => $to:ident) => {
        impl<T: Scalar> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // SAFETY: `Vector<T, N>` is a transparent wrapper of `[T; N]`, and every view
                // struct is `repr(C)` with N fields of type `T` followed by a zero-sized field,
                // so all of them have the size, alignment, and field offsets of `[T; N]`.
                unsafe { &*ptr::from_ref(self).cast::<$to<T>>() }
            }
        }

        impl<T: Scalar> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see `deref()`; the mutable borrow of `self` is reborrowed, not aliased.
                unsafe { &mut *ptr::from_mut(self).cast::<$to<T>>() }
            }
        }

        const _: () = assert!(size_of::<$to<u64>>() == size_of::<[u64; $n]>());
    };
}

impl_view!(2, Vector<T, 2> => Xy);
impl_view!(3, Vector<T, 3> => Xyz);
impl_view!(4, Vector<T, 4> => Xyzw);
impl_view!(2, Xy<T> => Rg);
impl_view!(3, Xyz<T> => Rgb);
impl_view!(4, Xyzw<T> => Rgba);
