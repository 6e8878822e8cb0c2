use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::Alphabet;

/// Configuration/builder for options for swizzle code generation.
///
/// # Requirements on the vector type
///
/// The generated code is an inherent `impl` block on the type named by
/// [`vector_path()`](Self::vector_path), so it must be placed in the crate defining that type.
/// The type must take the element type and the component count as its two generic
/// parameters, as in `Vector<T, const N: usize>`, and must be a tuple struct whose only field
/// is the `[T; N]` array of components, visible to the generated code.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) flags: WriterFlags,
    pub(crate) vector_path: Cow<'static, str>,
    pub(crate) element_bound: Cow<'static, str>,
    pub(crate) alphabets: Cow<'static, [Alphabet]>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a [`Config`] with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: WriterFlags::DOCS
                .union(WriterFlags::INLINE)
                .union(WriterFlags::MUST_USE)
                .union(WriterFlags::CONST)
                .union(WriterFlags::PUBLIC)
                .union(WriterFlags::NAME_TABLE),
            vector_path: Cow::Borrowed("crate::Vector"),
            element_bound: Cow::Borrowed("crate::Scalar"),
            alphabets: Cow::Borrowed(&[Alphabet::POSITION, Alphabet::COLOR]),
        }
    }

    /// Sets whether each accessor gets a doc comment.
    ///
    /// The default is `true`.
    #[must_use]
    pub fn docs(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::DOCS, value);
        self
    }

    /// Sets whether each accessor is marked `#[inline]`.
    ///
    /// The default is `true`.
    #[must_use]
    pub fn inline(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::INLINE, value);
        self
    }

    /// Sets whether each accessor is marked `#[must_use]`.
    ///
    /// The default is `true`.
    #[must_use]
    pub fn must_use(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::MUST_USE, value);
        self
    }

    /// Sets whether accessors are `const fn`.
    ///
    /// The default is `true`.
    #[must_use]
    pub fn const_fns(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::CONST, value);
        self
    }

    /// Sets whether accessors have `pub` visibility instead of private.
    ///
    /// The default is `true`.
    #[must_use]
    pub fn public_items(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::PUBLIC, value);
        self
    }

    /// Sets whether a `SWIZZLE_NAMES` associated constant listing every accessor name, in
    /// declaration order, is generated.
    ///
    /// The default is `true`.
    #[must_use]
    pub fn name_table(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::NAME_TABLE, value);
        self
    }

    /// Sets the Rust path to the vector type.
    ///
    /// The default is `"crate::Vector"`.
    ///
    /// # Panics
    ///
    /// May panic if the path is not syntactically valid or not an absolute path.
    #[must_use]
    pub fn vector_path(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        assert!(
            value.starts_with("::") || value.starts_with("crate::"),
            "path should be an absolute path"
        );
        self.vector_path = value;
        self
    }

    /// Sets the trait bound placed on the element type parameter `T`.
    ///
    /// It must imply [`Copy`]. The default is `"crate::Scalar"`.
    #[must_use]
    pub fn element_bound(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.element_bound = value.into();
        self
    }

    /// Sets the alphabets accessors are named in.
    ///
    /// The first alphabet names the accessors that gather components; accessors named in the
    /// others delegate to them.
    /// The default is [`Alphabet::POSITION`] followed by [`Alphabet::COLOR`].
    #[must_use]
    pub fn alphabets(mut self, value: impl IntoIterator<Item = Alphabet>) -> Self {
        self.alphabets = Cow::Owned(value.into_iter().collect::<Vec<_>>());
        self
    }
}

bitflags::bitflags! {
    /// Options for what Rust code is generated.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct WriterFlags: u32 {
        /// Write a doc comment on each accessor.
        const DOCS = 0x1;

        /// Mark each accessor `#[inline]`.
        const INLINE = 0x2;

        /// Mark each accessor `#[must_use]`.
        const MUST_USE = 0x4;

        /// Generate `const fn` accessors.
        const CONST = 0x8;

        /// Generate accessors with `pub` visibility instead of private.
        const PUBLIC = 0x10;

        /// Generate the `SWIZZLE_NAMES` table.
        const NAME_TABLE = 0x20;
    }
}
