//! Construction, component access, and the helpers around them.

use pretty_assertions::assert_eq;

use atma_math::{
    BVec3, DVec3, FVec2, FVec4, I64Vec2, IVec3, UVec4, Vec2, Vec3, Vec4, Vector, select,
    splat2, splat3, splat4, vec2, vec3, vec4,
};

#[test]
fn constructors_agree() {
    assert_eq!(Vec3::new(1, 2, 3), vec3(1, 2, 3));
    assert_eq!(Vector::from([1, 2, 3]), vec3(1, 2, 3));
    assert_eq!(atma_math::new::<IVec3>((1, 2, 3)), vec3(1, 2, 3));
    assert_eq!(<Vec2<u32> as atma_math::New>::new((4, 5)), vec2(4, 5));
    assert_eq!(<[i64; 4]>::from(vec4(1, 2, 3, 4)), [1, 2, 3, 4]);
    assert_eq!(vec2(1.5f32, 2.5).into_array(), [1.5, 2.5]);
}

#[test]
fn splat() {
    assert_eq!(splat2(7u32), vec2(7, 7));
    assert_eq!(splat3(true), vec3(true, true, true));
    assert_eq!(splat4(0.5f64), Vec4::splat(0.5));
}

#[test]
fn constants() {
    assert_eq!(FVec2::ZERO, vec2(0.0, 0.0));
    assert_eq!(UVec4::ONE, vec4(1, 1, 1, 1));
    assert_eq!(DVec3::Z, vec3(0.0, 0.0, 1.0));
    assert_eq!(I64Vec2::Y, vec2(0, 1));
    assert_eq!(FVec4::W.w, 1.0);
    assert_eq!(Vec3::<i32>::LEN, 3);
    assert_eq!(BVec3::default(), vec3(false, false, false));
}

#[test]
fn access() {
    let mut v = vec2(0, 1);
    assert_eq!(v.x, 0);
    assert_eq!(v.y, 1);
    assert_eq!(v.r, 0);
    assert_eq!(v.g, 1);
    assert_eq!(v[0], 0);
    assert_eq!(v[1], 1);

    v.r = 777;
    assert_eq!(v.x, 777);
    assert_eq!(v[0], 777);
    v.y = 9;
    assert_eq!(v.g, 9);
    v[1] = 10;
    assert_eq!(v.g, 10);

    let mut w = vec4(1.0, 2.0, 3.0, 4.0);
    w.a = -1.0;
    w.z += 0.5;
    assert_eq!(w, vec4(1.0, 2.0, 3.5, -1.0));
    assert_eq!(w.b, w.z);
    assert_eq!(w.as_slice(), &[1.0, 2.0, 3.5, -1.0]);
}

#[test]
fn accepts_any_value() {
    let v = vec3(f32::NAN, f32::NEG_INFINITY, -0.0);
    assert!(v.x.is_nan());
    assert_eq!(v.y, f32::NEG_INFINITY);
    assert!(v.z.is_sign_negative());
    assert_eq!(vec2(i64::MIN, i64::MAX).yx(), vec2(i64::MAX, i64::MIN));
}

#[test]
fn resize() {
    assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
    assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
    assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
    assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
}

#[test]
fn map() {
    assert_eq!(vec3(1, 2, 3).map(|c| c * 10), vec3(10, 20, 30));
    assert_eq!(vec2(1, -1).map(|c| c > 0), vec2(true, false));
}

#[test]
fn fmt() {
    assert_eq!(format!("{}", FVec4::W), "(0, 0, 0, 1)");
    assert_eq!(format!("{:?}", FVec4::W), "(0.0, 0.0, 0.0, 1.0)");
    assert_eq!(format!("{}", vec2(true, false)), "(true, false)");
}

#[test]
fn comparison() {
    let a = vec4(1.0, 2.0, 3.0, 4.0);
    let b = Vec4::splat(2.0);
    assert_eq!(a.cmple(b), vec4(true, true, false, false));
    assert_eq!(a.cmpgt(b), vec4(false, false, true, true));
    assert_eq!(a.cmpeq(b), vec4(false, true, false, false));
    assert_eq!(a.cmpne(b), vec4(true, false, true, true));
    assert_eq!(a.cmplt(b), vec4(true, false, false, false));
    assert_eq!(a.cmpge(b), vec4(false, true, true, true));

    assert!(a.cmpeq(b).any());
    assert!(!a.cmpeq(b).all());
    assert!(a.cmpeq(a).all());
    assert!(!vec3(1, 2, 3).cmpeq(vec3(4, 5, 6)).any());
}

#[test]
fn selection() {
    assert_eq!(select(1, 2, true), 2);
    assert_eq!(select(1, 2, false), 1);

    let mask = vec3(true, false, true);
    assert_eq!(
        Vector::select(mask, vec3(1, 2, 3), vec3(-1, -2, -3)),
        vec3(1, -2, 3)
    );
}

#[test]
fn equality_and_hash_are_component_wise() {
    use std::collections::HashSet;

    let set: HashSet<_> = [vec2(1, 2), vec2(2, 1), vec2(1, 2).yx().yx()]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&vec2(2, 1)));
}
