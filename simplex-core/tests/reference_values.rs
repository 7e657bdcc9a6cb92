//! Regression tests against pinned noise values.
//!
//! `reference_values.json` holds outputs for every evaluation method at several seeds
//! (including `i64::MIN` and `i64::MAX`) and points. Any change to constants, gradient
//! tables, hashing or vertex selection shows up here. The same methods are compared
//! against the published `opensimplex2` crate in `cross_check.rs`.

use std::fmt::Write;

use serde::Deserialize;
use simplex_core::{NoiseSampler, OpenSimplex2, Orientation2D, Orientation3D};

#[derive(Deserialize)]
struct ReferenceValuesJson {
    tolerance: f64,
    cases: Vec<ReferenceCase>,
}

#[derive(Deserialize)]
struct ReferenceCase {
    method: String,
    seed: i64,
    point: Vec<f64>,
    value: f64,
}

fn load_reference_values() -> ReferenceValuesJson {
    let json_str = include_str!("../test_assets/reference_values.json");
    serde_json::from_str(json_str).expect("Failed to parse reference_values.json")
}

/// Evaluate `method` by name, or `None` if the name or arity is unknown.
fn evaluate(noise: &OpenSimplex2, method: &str, point: &[f64]) -> Option<f64> {
    let value = match (method, point) {
        ("noise2", &[x, y]) => noise.noise2(x, y),
        ("noise2_improve_x", &[x, y]) => noise.noise2_improve_x(x, y),
        ("noise3", &[x, y, z]) => noise.noise3(x, y, z),
        ("noise3_improve_xy", &[x, y, z]) => noise.noise3_improve_xy(x, y, z),
        ("noise3_improve_xz", &[x, y, z]) => noise.noise3_improve_xz(x, y, z),
        ("noise3_fallback", &[x, y, z]) => noise.noise3_fallback(x, y, z),
        ("noise4_improve_xyz_improve_xy", &[x, y, z, w]) => {
            noise.noise4_improve_xyz_improve_xy(x, y, z, w)
        }
        ("noise4_improve_xyz_improve_xz", &[x, y, z, w]) => {
            noise.noise4_improve_xyz_improve_xz(x, y, z, w)
        }
        ("noise4_improve_xyz", &[x, y, z, w]) => noise.noise4_improve_xyz(x, y, z, w),
        ("noise4_improve_xy_improve_zw", &[x, y, z, w]) => {
            noise.noise4_improve_xy_improve_zw(x, y, z, w)
        }
        ("noise4_improve_xz_improve_yw", &[x, y, z, w]) => {
            noise.noise4_improve_xz_improve_yw(x, y, z, w)
        }
        ("noise4_fallback", &[x, y, z, w]) => noise.noise4_fallback(x, y, z, w),
        _ => return None,
    };
    Some(value)
}

/// The same method reached through a runtime-dimension sampler.
fn sampler_for(method: &str, seed: i64) -> Option<NoiseSampler> {
    let sampler = match method {
        "noise2" => NoiseSampler::plane(seed, Orientation2D::Standard),
        "noise3" => NoiseSampler::volume(seed, Orientation3D::Standard),
        _ => {
            let name = method.strip_prefix("noise")?;
            let (dims, orientation) = name.split_once('_')?;
            match dims {
                "2" => NoiseSampler::plane(seed, orientation.parse().ok()?),
                "3" => NoiseSampler::volume(seed, orientation.parse().ok()?),
                "4" => NoiseSampler::hyper(seed, orientation.parse().ok()?),
                _ => return None,
            }
        }
    };
    Some(sampler)
}

#[test]
fn kernel_matches_reference_values() {
    let expected = load_reference_values();
    let mut mismatches = Vec::new();

    for case in &expected.cases {
        let noise = OpenSimplex2::new(case.seed);
        let actual = evaluate(&noise, &case.method, &case.point)
            .unwrap_or_else(|| panic!("Unknown method {} for {:?}", case.method, case.point));
        if (actual - case.value).abs() > expected.tolerance {
            mismatches.push((case, actual));
        }
    }

    if !mismatches.is_empty() {
        let total = expected.cases.len();
        let failed = mismatches.len();
        let mut msg = format!("{failed}/{total} reference values MISMATCHED:\n");
        for (case, actual) in &mismatches {
            let _ = writeln!(
                msg,
                "  {}(seed {}, {:?}): expected {} got {actual}",
                case.method, case.seed, case.point, case.value
            );
        }
        panic!("{msg}");
    }
}

#[test]
#[allow(clippy::float_cmp, reason = "samplers must return the exact kernel value")]
fn samplers_match_reference_values() {
    let expected = load_reference_values();

    for case in &expected.cases {
        let sampler = sampler_for(&case.method, case.seed)
            .unwrap_or_else(|| panic!("No sampler for {}", case.method));
        let noise = OpenSimplex2::new(case.seed);
        let direct = evaluate(&noise, &case.method, &case.point);
        assert_eq!(sampler.sample(&case.point).ok(), direct, "{}", case.method);
    }
}

#[test]
fn seed_42_origin_is_zero() {
    let noise = OpenSimplex2::new(42);
    assert!(noise.noise2(0.0, 0.0).abs() < f64::EPSILON);
}

#[test]
fn every_method_is_covered() {
    let expected = load_reference_values();
    let names = [
        "noise2",
        "noise2_improve_x",
        "noise3",
        "noise3_improve_xy",
        "noise3_improve_xz",
        "noise3_fallback",
        "noise4_improve_xyz_improve_xy",
        "noise4_improve_xyz_improve_xz",
        "noise4_improve_xyz",
        "noise4_improve_xy_improve_zw",
        "noise4_improve_xz_improve_yw",
        "noise4_fallback",
    ];
    for name in names {
        assert!(
            expected.cases.iter().any(|case| case.method == name),
            "no reference values for {name}"
        );
    }
}
