//! Generator for the swizzle accessors of the `atma-math` vector types.
//!
//! A swizzle accessor builds a new vector out of a reordered or repeated selection of another
//! vector’s components: `v.zyx()` reverses a 3-component vector, and `v.rrgg()` turns the first
//! two components of any vector into a 4-component one.
//! For a source vector of `N` components there is one accessor for every sequence of 2, 3, or 4
//! component letters, in each configured [`Alphabet`], which adds up to hundreds of methods.
//! This crate writes their Rust source text so nobody has to.
//!
//! The `atma-math` library obtains its accessors from the `swizzles!` macro in
//! `atma-math-macros`, which is a thin wrapper around [`write_string`].
//! You can also call this library from a build script to give your own vector type
//! the same set of accessors.
//!
//! # Example
//!
//! ```
//! use atma_math_codegen::{Config, write_string};
//!
//! let source = write_string(2, Config::new())?;
//! assert!(source.contains("pub const fn yx(&self) -> crate::Vector<T, 2> {"));
//! assert!(source.contains("pub const fn gr(&self) -> crate::Vector<T, 2> {"));
//! # Ok::<(), atma_math_codegen::Error>(())
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

// -------------------------------------------------------------------------------------------------

mod alphabet;
mod config;
mod pattern;
mod util;
mod writer;

pub use alphabet::Alphabet;
pub use config::Config;
pub use pattern::{Pattern, Patterns, patterns};
pub use writer::Writer;

// -------------------------------------------------------------------------------------------------

/// The smallest component count of a source vector or of a swizzle result.
pub const MIN_SIZE: u8 = 2;

/// The largest component count of a source vector or of a swizzle result.
pub const MAX_SIZE: u8 = 4;

/// Errors returned by the swizzle generator.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The provided [`fmt::Write`] implementation returned an error.
    FmtError(fmt::Error),

    /// The requested vector size is outside of [`MIN_SIZE`]`..=`[`MAX_SIZE`].
    UnsupportedSize(u8),

    /// A component index does not name a component of a vector of `size` components.
    IndexOutOfRange {
        /// The offending index.
        index: u8,
        /// The number of components of the source vector.
        size: u8,
    },

    /// An alphabet was given with a number of letters other than 4.
    AlphabetLength(usize),

    /// An alphabet letter is not an ASCII lowercase letter.
    InvalidLetter(char),

    /// An alphabet contains the same letter twice.
    DuplicateLetter(char),

    /// An accessor name would be a keyword which cannot be written as a raw identifier.
    ReservedName(String),

    /// Two alphabets produce the same accessor name.
    DuplicateName(String),

    /// The configuration contains no alphabets, so there is nothing to name accessors with.
    NoAlphabets,
}

impl From<fmt::Error> for Error {
    fn from(value: fmt::Error) -> Self {
        Self::FmtError(value)
    }
}

impl core::error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FmtError(fmt::Error) => write!(f, "formatting cancelled"),
            Error::UnsupportedSize(size) => write!(
                f,
                "vectors of {size} components are not supported; \
                    size must be between {MIN_SIZE} and {MAX_SIZE}"
            ),
            Error::IndexOutOfRange { index, size } => write!(
                f,
                "component index {index} is out of range for a vector of {size} components"
            ),
            Error::AlphabetLength(len) => {
                write!(f, "an alphabet must have exactly 4 letters, not {len}")
            }
            Error::InvalidLetter(letter) => {
                write!(f, "alphabet letter {letter:?} is not an ASCII lowercase letter")
            }
            Error::DuplicateLetter(letter) => {
                write!(f, "alphabet letter {letter:?} appears more than once")
            }
            Error::ReservedName(name) => {
                write!(f, "accessor name “{name}” is a reserved Rust keyword")
            }
            Error::DuplicateName(name) => {
                write!(f, "accessor name “{name}” is produced by more than one alphabet")
            }
            Error::NoAlphabets => write!(f, "at least one alphabet must be configured"),
        }
    }
}

/// Returns the number of swizzle accessors generated for a source vector of `size` components
/// when `alphabets` alphabets are configured.
///
/// This is `alphabets × (size² + size³ + size⁴)`.
///
/// ```
/// assert_eq!(atma_math_codegen::accessor_count(4, 2), 672);
/// ```
#[must_use]
pub const fn accessor_count(size: u8, alphabets: usize) -> usize {
    let mut per_alphabet = 0;
    let mut len = MIN_SIZE;
    while len <= MAX_SIZE {
        per_alphabet += (size as usize).pow(len as u32);
        len += 1;
    }
    alphabets * per_alphabet
}

/// Generates the swizzle accessors for a source vector of `size` components as a string of
/// Rust code.
///
/// The code is a single inherent `impl` block; see [`Config`] for what it expects of the
/// vector type.
///
/// # Errors
///
/// Returns an error if `size` is unsupported or the configured alphabets cannot name the
/// accessors unambiguously.
pub fn write_string(size: u8, config: Config) -> Result<String, Error> {
    let mut w = Writer::new(String::new(), config);
    w.write(size)?;
    let output = w.finish();
    Ok(output)
}

pub(crate) fn check_size(size: u8) -> Result<(), Error> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(Error::UnsupportedSize(size))
    }
}
