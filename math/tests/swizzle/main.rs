//! Tests of vector construction, component access, and swizzle accessors.

mod components;
mod properties;
mod scenarios;
