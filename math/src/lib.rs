//! Fixed-size vectors of 2, 3, or 4 components, with every swizzle accessor.
//!
//! The single vector type is [`Vector<T, N>`], with the aliases [`Vec2`], [`Vec3`], and
//! [`Vec4`], and concrete aliases such as [`FVec3`] (`f32`) or [`BVec2`] (`bool`).
//! Its element type is one of the [`Scalar`] types.
//!
//! ```
//! use atma_math::{vec2, vec3, vec4};
//!
//! let v = vec3(1.0, 2.0, 3.0);
//! assert_eq!(v.zyx(), vec3(3.0, 2.0, 1.0));
//! assert_eq!(v.xxyy(), vec4(1.0, 1.0, 2.0, 2.0));
//! assert_eq!(v.rg(), vec2(v.r, v.g));
//! ```
//!
//! Swizzle accessors are generated by `atma-math-macros` at compile time, so a name that does
//! not exist, such as `v.xyq()` or `vec2(1, 2).z()`, is a compile error rather than a
//! runtime failure.

#![no_std]

mod cmp;
mod construct;
mod scalar;
mod swizzle;
mod vector;
mod view;

pub use cmp::select;
pub use construct::{New, new};
pub use scalar::{Scalar, Splat, splat2, splat3, splat4};
pub use vector::*;
pub use view::{Rg, Rgb, Rgba, Xy, Xyz, Xyzw};
