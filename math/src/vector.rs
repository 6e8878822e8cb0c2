use core::{array, fmt, ops};

use num_traits::{ConstOne, ConstZero};

use crate::Scalar;

/// A 2-component vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-component vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-component vector.
pub type Vec4<T> = Vector<T, 4>;

macro_rules! concrete_aliases {
    ($($prefix:ident $scalar:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "A 2-component vector of [`" $scalar "`]."]
                pub type [<$prefix Vec2>] = Vec2<$scalar>;
                #[doc = "A 3-component vector of [`" $scalar "`]."]
                pub type [<$prefix Vec3>] = Vec3<$scalar>;
                #[doc = "A 4-component vector of [`" $scalar "`]."]
                pub type [<$prefix Vec4>] = Vec4<$scalar>;
            )*
        }
    };
}
concrete_aliases!(B bool, I i32, U u32, I64 i64, F f32, D f64);

/// An `N`-component vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions, and the `new` functions of
///   [`Vec2`], [`Vec3`] and [`Vec4`], take exactly one value per component.
/// - [`Vector::splat`] copies one value into each component.
/// - [`Vector::from_fn`] invokes a closure with the index of each component.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - For numeric `T`, [`Vector::ZERO`], [`Vector::ONE`], and the unit vectors `X`, `Y`, `Z`
///   and `W`.
///
/// # Component access
///
/// - For vectors of 2 to 4 components, components are fields `x`, `y`, `z` and `w`, with the
///   aliases `r`, `g`, `b` and `a`. These are readable and writable.
/// - The [`Index`](ops::Index) and [`IndexMut`](ops::IndexMut) impls work just like on arrays.
/// - Swizzle accessors such as `v.zyx()` or `v.rrgg()` return a new vector built from any
///   selection of 2, 3, or 4 components, in any order and with repetition. Every such accessor
///   exists in both the `xyzw` and the `rgba` spelling; `SWIZZLE_NAMES` lists them.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Vector<T: Scalar, const N: usize>(pub(crate) [T; N]);

impl<T: Scalar + ConstZero, const N: usize> Vector<T, N> {
    /// A vector with each component 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Scalar + ConstOne, const N: usize> Vector<T, N> {
    /// A vector with each component 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Scalar + ConstZero + ConstOne> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Scalar + ConstZero + ConstOne> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Scalar + ConstZero + ConstOne> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The number of components.
    pub const LEN: usize = N;

    /// Creates a vector with each component set to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Creates a vector where each component is initialized by invoking a closure with its
    /// index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each component, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
        U: Scalar,
    {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the components as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the components as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub const fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    /// Appends a component, yielding a vector of 3 components.
    #[inline]
    pub const fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// Appends a component, yielding a vector of 4 components.
    #[inline]
    pub const fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, w])
    }

    /// Removes the last component, yielding a vector of 2 components.
    #[inline]
    pub const fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    /// Removes the last component, yielding a vector of 3 components.
    #[inline]
    pub const fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Scalar, const N: usize> ops::Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T: Scalar, const N: usize> ops::IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: Scalar, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

/// Constructs a [`Vec2`] from its two components.
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four components.
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
