use crate::{Scalar, Vector};

/// Returns `t` if `cond` is true, and `f` otherwise.
///
/// The argument order is that of the `select()` built-in of shading languages.
pub const fn select<T: Copy>(f: T, t: T, cond: bool) -> T {
    if cond { t } else { f }
}

macro_rules! impl_cmp {
    ($($name:ident $op:tt $doc:literal;)*) => {
        impl<T: Scalar, const N: usize> Vector<T, N> {
            $(
                #[doc = concat!("Component-wise `", $doc, "`, producing a vector of [`bool`].")]
                #[must_use]
                pub fn $name(self, other: Self) -> Vector<bool, N> {
                    Vector::from_fn(|i| self.0[i] $op other.0[i])
                }
            )*
        }
    };
}

impl_cmp! {
    cmpeq == "==";
    cmpne != "!=";
    cmplt < "<";
    cmple <= "<=";
    cmpgt > ">";
    cmpge >= ">=";
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Builds a vector taking each component from `if_true` where `mask` is true,
    /// and from `if_false` elsewhere.
    #[must_use]
    pub fn select(mask: Vector<bool, N>, if_true: Self, if_false: Self) -> Self {
        Self::from_fn(|i| select(if_false.0[i], if_true.0[i], mask.0[i]))
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Whether any component is true.
    #[must_use]
    pub fn any(self) -> bool {
        self.0.contains(&true)
    }

    /// Whether every component is true.
    #[must_use]
    pub fn all(self) -> bool {
        !self.0.contains(&false)
    }
}
