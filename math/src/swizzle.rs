//! Swizzle accessors of [`Vector`](crate::Vector).
//!
//! For a vector of `N` components, every sequence of 2, 3, or 4 component letters names an
//! accessor, in each of the `xyzw` and `rgba` alphabets: `2 × (N² + N³ + N⁴)` accessors in
//! all. Each returns a new vector; none of them borrows from or modifies the source.

atma_math_macros::swizzles!(2, 3, 4);
