use alloc::string::String;
use core::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::{Alphabet, Error, MAX_SIZE, MIN_SIZE};

/// The component selection of one swizzle accessor.
///
/// Element `k` of a pattern is the index of the source component which becomes component `k`
/// of the result. Indices may repeat and appear in any order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pattern {
    indices: ArrayVec<u8, 4>,
}

impl Pattern {
    /// Creates a pattern from its component indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSize`] if `indices` does not have between 2 and 4 elements,
    /// and [`Error::IndexOutOfRange`] if an index is 4 or greater.
    pub fn new(indices: &[u8]) -> Result<Self, Error> {
        let len = u8::try_from(indices.len()).unwrap_or(u8::MAX);
        crate::check_size(len)?;
        let pattern = Self {
            indices: indices.iter().copied().collect(),
        };
        pattern.check_source_size(MAX_SIZE)?;
        Ok(pattern)
    }

    /// Checks that every index names a component of a `source_size`-component vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for the first index that does not.
    pub fn check_source_size(&self, source_size: u8) -> Result<(), Error> {
        match self.indices.iter().find(|&&index| index >= source_size) {
            Some(&index) => Err(Error::IndexOutOfRange {
                index,
                size: source_size,
            }),
            None => Ok(()),
        }
    }

    /// Returns the source component indices, in result order.
    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the number of components of the result.
    #[must_use]
    pub fn len(&self) -> u8 {
        // cannot truncate; capacity is 4
        self.indices.len() as u8
    }

    /// Always `false`; patterns have at least two components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the accessor name of this pattern in the given alphabet.
    #[must_use]
    pub fn name(&self, alphabet: &Alphabet) -> String {
        self.indices.iter().map(|&i| alphabet.letter(i)).collect()
    }

    /// Whether this pattern selects every component of a `source_size`-component vector in
    /// order, and so returns a copy of the source.
    #[must_use]
    pub fn is_identity(&self, source_size: u8) -> bool {
        self.len() == source_size && self.indices.iter().copied().eq(0..source_size)
    }
}

/// Returns every pattern of `len` components over a source vector of `source_size` components.
///
/// There are `source_size` to the power of `len` of them; they are produced in lexicographic
/// order of their indices, so for `source_size = 2, len = 2` the names are `xx`, `xy`, `yx`,
/// `yy`.
///
/// # Panics
///
/// Panics if either argument is outside of [`MIN_SIZE`]`..=`[`MAX_SIZE`].
#[must_use]
pub fn patterns(source_size: u8, len: u8) -> Patterns {
    assert!(
        (MIN_SIZE..=MAX_SIZE).contains(&source_size),
        "source size {source_size} out of range"
    );
    assert!(
        (MIN_SIZE..=MAX_SIZE).contains(&len),
        "pattern length {len} out of range"
    );
    Patterns {
        source_size,
        next: (0..len).map(|_| 0).collect(),
        remaining: usize::from(source_size).pow(u32::from(len)),
    }
}

/// Iterator returned by [`patterns()`].
#[derive(Clone, Debug)]
pub struct Patterns {
    source_size: u8,
    next: ArrayVec<u8, 4>,
    remaining: usize,
}

impl Iterator for Patterns {
    type Item = Pattern;

    fn next(&mut self) -> Option<Pattern> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = Pattern {
            indices: self.next.clone(),
        };

        // Advance like an odometer: the last index moves fastest.
        for slot in self.next.iter_mut().rev() {
            *slot += 1;
            if *slot < self.source_size {
                break;
            }
            *slot = 0;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Patterns {}
impl FusedIterator for Patterns {}
