use crate::{Scalar, Vec2, Vec3, Vec4};

/// Construction of a vector from a tuple of exactly as many values as it has components.
pub trait New {
    /// The tuple of component values.
    type Args;

    /// Creates the vector from its component values.
    fn new(args: Self::Args) -> Self;
}

impl<T: Scalar> New for Vec2<T> {
    type Args = (T, T);
    fn new((x, y): Self::Args) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> New for Vec3<T> {
    type Args = (T, T, T);
    fn new((x, y, z): Self::Args) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> New for Vec4<T> {
    type Args = (T, T, T, T);
    fn new((x, y, z, w): Self::Args) -> Self {
        Self::new(x, y, z, w)
    }
}

/// Creates a value of type `T` from its [`New::Args`].
pub fn new<T: New>(args: T::Args) -> T {
    T::new(args)
}
