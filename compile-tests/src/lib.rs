//! Code generated by the build script of this crate, for use by its tests.
//!
//! [`Texel`] is deliberately not an `atma_math::Vector`: it has a different name, element
//! bound, and set of alphabets, so that the tests exercise the generator's configuration.

#![allow(missing_docs)]

/// A stand-in vector type whose swizzle accessors are generated by `build.rs`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct Texel<T, const N: usize>(pub [T; N]);

include!(concat!(env!("OUT_DIR"), "/texel_swizzles.rs"));
