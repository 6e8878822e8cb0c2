use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs};

use atma_math_codegen::{Alphabet, Config, MAX_SIZE, MIN_SIZE, accessor_count, patterns};

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());

    // Swizzles for a vector type defined in this crate rather than in `atma-math`.
    let config = Config::new()
        .vector_path("crate::Texel")
        .element_bound("Copy")
        .alphabets([Alphabet::POSITION, Alphabet::COLOR, Alphabet::TEXTURE]);
    let mut texel_source = String::new();
    for size in MIN_SIZE..=MAX_SIZE {
        let block = atma_math_codegen::write_string(size, config.clone())
            .expect("texel swizzle generation failed");
        texel_source.push_str(&block);
    }
    fs::write(out_dir.join("texel_swizzles.rs"), texel_source).unwrap();

    fs::write(out_dir.join("exhaustive.rs"), exhaustive_tests()).unwrap();

    // signal that our only dependencies are our own source
    println!("cargo::rerun-if-changed=build.rs");
}

/// Source of one test per vector size, calling every swizzle accessor of `atma_math::Vector`
/// in both alphabets and comparing the result with the expected components.
///
/// Component `i` of the source vector holds `10 + i`, so every result is fully determined by
/// the accessor's name.
fn exhaustive_tests() -> String {
    let alphabets = [Alphabet::POSITION, Alphabet::COLOR];
    let mut out = String::new();

    for size in MIN_SIZE..=MAX_SIZE {
        let components: Vec<String> = (0..size).map(|i| (10 + i).to_string()).collect();
        writeln!(out, "#[test]").unwrap();
        writeln!(out, "fn every_accessor_of_vec{size}() {{").unwrap();
        writeln!(
            out,
            "    let v = atma_math::Vec{size}::<i64>::from([{}]);",
            components.join(", ")
        )
        .unwrap();
        writeln!(out, "    let before = v;").unwrap();

        let mut names = Vec::with_capacity(accessor_count(size, alphabets.len()));
        for len in MIN_SIZE..=MAX_SIZE {
            for pattern in patterns(size, len) {
                let expected: Vec<String> = pattern
                    .indices()
                    .iter()
                    .map(|&i| (10 + i).to_string())
                    .collect();
                for alphabet in &alphabets {
                    let name = pattern.name(alphabet);
                    writeln!(
                        out,
                        "    assert_eq!(v.{name}().into_array(), [{}]);",
                        expected.join(", ")
                    )
                    .unwrap();
                    names.push(name);
                }
            }
        }

        writeln!(out, "    assert_eq!(v, before);").unwrap();
        writeln!(
            out,
            "    assert_eq!(atma_math::Vec{size}::<i64>::SWIZZLE_NAMES, &{names:?});"
        )
        .unwrap();
        writeln!(out, "}}").unwrap();
        writeln!(out).unwrap();
    }

    out
}
