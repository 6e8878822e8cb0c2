//! Properties that hold for every swizzle accessor.

use exhaust::Exhaust as _;
use pretty_assertions::assert_eq;

use atma_math::{BVec2, BVec3, BVec4, FVec4, Vec2, Vec3, Vec4, vec2, vec3, vec4};

fn assert_names_valid(names: &[&str], size: usize) {
    for (i, name) in names.iter().enumerate() {
        assert!((2..=4).contains(&name.len()), "{name}");
        let positional = name.chars().all(|c| "xyzw"[..size].contains(c));
        let color = name.chars().all(|c| "rgba"[..size].contains(c));
        assert!(positional != color, "{name} must use exactly one alphabet");
        assert!(!names[..i].contains(name), "{name} is listed twice");
    }
}

#[test]
fn accessor_count() {
    assert_eq!(Vec2::<i32>::SWIZZLE_NAMES.len(), 2 * (4 + 8 + 16));
    assert_eq!(Vec3::<f32>::SWIZZLE_NAMES.len(), 2 * (9 + 27 + 81));
    assert_eq!(Vec4::<bool>::SWIZZLE_NAMES.len(), 2 * (16 + 64 + 256));
}

#[test]
fn accessor_names() {
    assert_names_valid(Vec2::<u32>::SWIZZLE_NAMES, 2);
    assert_names_valid(Vec3::<u32>::SWIZZLE_NAMES, 3);
    assert_names_valid(Vec4::<u32>::SWIZZLE_NAMES, 4);

    assert_eq!(&Vec2::<u32>::SWIZZLE_NAMES[..4], ["xx", "rr", "xy", "rg"]);
    assert_eq!(Vec4::<u32>::SWIZZLE_NAMES.last(), Some(&"aaaa"));
}

#[test]
fn identity_patterns_copy_the_source() {
    let v2 = vec2(-1, 5);
    let v3 = vec3(0.5, -0.0, 8.0);
    let v4 = vec4(1u32, 2, 3, u32::MAX);
    assert_eq!(v2.xy(), v2);
    assert_eq!(v2.rg(), v2);
    assert_eq!(v3.xyz(), v3);
    assert_eq!(v3.rgb(), v3);
    assert_eq!(v4.xyzw(), v4);
    assert_eq!(v4.rgba(), v4);
}

#[test]
fn repeated_components_are_equal() {
    let v = vec4(1i64, 2, 3, 4);
    assert_eq!(v.zzzz(), Vec4::splat(3));
    assert_eq!(v.ww(), vec2(4, 4));
    assert_eq!(v.xwx(), vec3(1, 4, 1));
    let r = v.yyy();
    assert!(r.as_array().iter().all(|&c| c == v.y));
}

#[test]
fn order_is_preserved() {
    let v = vec3(1, 2, 3);
    assert_eq!(v.xy(), vec2(1, 2));
    assert_eq!(v.yx(), vec2(2, 1));
    assert_ne!(v.xy(), v.yx());
    assert_eq!(v.zxy(), vec3(3, 1, 2));
    assert_eq!(v.yzxz(), vec4(2, 3, 1, 3));
}

#[test]
fn source_is_not_modified() {
    let v = vec4(1.5f64, 2.5, 3.5, 4.5);
    let before = v;
    let _ = v.wwzz();
    let _ = v.bgr();
    let _ = v.xy();
    assert_eq!(v, before);
}

#[test]
fn result_is_independent_of_source() {
    let mut v = vec3(1, 2, 3);
    let copy = v.xyz();
    let swizzled = v.zyx();
    v.x = 100;
    v.b = 300;
    assert_eq!(copy, vec3(1, 2, 3));
    assert_eq!(swizzled, vec3(3, 2, 1));
    assert_eq!(v, vec3(100, 2, 300));
}

#[test]
fn alphabets_agree_bit_for_bit() {
    let v: FVec4 = vec4(f32::NAN, -0.0, f32::INFINITY, f32::MIN_POSITIVE);
    let bits = |v: Vec4<f32>| v.map(f32::to_bits);
    assert_eq!(bits(v.wzyx()), bits(v.abgr()));
    assert_eq!(bits(v.xyzw()), bits(v));
    assert_eq!(v.yx().map(f32::to_bits), v.gr().map(f32::to_bits));
    assert_eq!(v.zxw().map(f32::to_bits), v.bra().map(f32::to_bits));
    assert_eq!(v.xx().x.to_bits(), f32::NAN.to_bits());
    assert_eq!(v.yy().y.to_bits(), (-0.0f32).to_bits());
}

#[test]
fn every_bool_vec2() {
    for [a, b] in <[bool; 2]>::exhaust() {
        let v = BVec2::from([a, b]);
        assert_eq!(v.yx(), vec2(b, a));
        assert_eq!(v.gr(), v.yx());
        assert_eq!(v.xyx(), vec3(a, b, a));
        assert_eq!(v.rgr(), v.xyx());
        assert_eq!(v.yyxx(), vec4(b, b, a, a));
        assert_eq!(v.ggrr(), v.yyxx());
    }
}

#[test]
fn every_bool_vec3() {
    for [a, b, c] in <[bool; 3]>::exhaust() {
        let v = BVec3::from([a, b, c]);
        assert_eq!(v.zx(), vec2(c, a));
        assert_eq!(v.br(), v.zx());
        assert_eq!(v.zyx(), vec3(c, b, a));
        assert_eq!(v.bgr(), v.zyx());
        assert_eq!(v.xzyz(), vec4(a, c, b, c));
        assert_eq!(v.rbgb(), v.xzyz());
    }
}

#[test]
fn every_bool_vec4() {
    for [a, b, c, d] in <[bool; 4]>::exhaust() {
        let v = BVec4::from([a, b, c, d]);
        assert_eq!(v.wx(), vec2(d, a));
        assert_eq!(v.ar(), v.wx());
        assert_eq!(v.wyw(), vec3(d, b, d));
        assert_eq!(v.aga(), v.wyw());
        assert_eq!(v.wzyx(), vec4(d, c, b, a));
        assert_eq!(v.abgr(), v.wzyx());
        assert_eq!(v.xyzw(), v);
    }
}
