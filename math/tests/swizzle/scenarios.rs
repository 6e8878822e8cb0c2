//! Worked examples, one per element type.

use pretty_assertions::assert_eq;

use atma_math::{BVec2, IVec2, UVec3, Vec4, vec2, vec3, vec4};

#[test]
fn reverse_int_vec2() {
    let v: IVec2 = vec2(3, 7);
    assert_eq!(v.yx(), vec2(7, 3));
}

#[test]
fn reverse_float_vec3() {
    let v = vec3(1.0f32, 2.0, 3.0);
    assert_eq!(v.zyx(), vec3(3.0, 2.0, 1.0));
}

#[test]
fn repeat_pairs_of_int_vec4() {
    let v = vec4(1, 2, 3, 4);
    assert_eq!(v.xxyy(), vec4(1, 1, 2, 2));
}

#[test]
fn color_identity_of_uint_vec3() {
    let v: UVec3 = vec3(5, 6, 7);
    assert_eq!(v.rgb(), vec3(5, 6, 7));
}

#[test]
fn widen_bool_vec2() {
    let v: BVec2 = vec2(true, false);
    assert_eq!(v.xxxx(), vec4(true, true, true, true));
}

#[test]
fn reverse_long_vec4() {
    let v: Vec4<i64> = vec4(10, 20, 30, 40);
    assert_eq!(v.wzyx(), vec4(40, 30, 20, 10));
}

#[test]
fn reverse_double_vec4_by_color() {
    let v = vec4(0.25f64, 0.5, 0.75, 1.0);
    assert_eq!(v.abgr(), vec4(1.0, 0.75, 0.5, 0.25));
}
