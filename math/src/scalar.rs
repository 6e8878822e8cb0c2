use core::fmt;

use crate::Vector;

mod sealed {
    pub trait Sealed {}
}

/// Element types a [`Vector`] may have: [`bool`], [`i32`], [`u32`], [`i64`], [`f32`], and
/// [`f64`].
///
/// This trait is sealed; it cannot be implemented outside of this crate.
pub trait Scalar:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + sealed::Sealed + 'static
{
}

macro_rules! impl_scalar {
    ($($scalar:ty)*) => {
        $(
            impl sealed::Sealed for $scalar {}
            impl Scalar for $scalar {}
        )*
    };
}
impl_scalar!(bool i32 u32 i64 f32 f64);

/// Helper trait to pick a vector type given a scalar type and component count.
pub trait Splat<const N: usize> {
    /// The vector type with `N` components of type `Self`.
    type Vec;

    /// Creates a vector with every component set to `self`.
    fn splat(self) -> Self::Vec;
}

impl<T: Scalar, const N: usize> Splat<N> for T {
    type Vec = Vector<T, N>;

    #[inline(always)]
    fn splat(self) -> Self::Vec {
        // calls the inherent method, not this trait method
        Vector::splat(self)
    }
}

macro_rules! splat_fns {
    ($($n:literal)*) => {
        paste::paste! {
            $(
                #[doc = "Creates a " $n "-component vector with every component set to `value`."]
                #[inline(always)]
                pub fn [<splat $n>]<T: Splat<$n>>(value: T) -> <T as Splat<$n>>::Vec {
                    <T as Splat<$n>>::splat(value)
                }
            )*
        }
    };
}
splat_fns!(2 3 4);
