//! Output range and robustness tests across every evaluation method.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplex_core::OpenSimplex2;

/// Every evaluation method at the given 4D point, using as many coordinates as it takes.
fn all_methods(noise: &OpenSimplex2, [x, y, z, w]: [f64; 4]) -> [(&'static str, f64); 13] {
    [
        ("noise2", noise.noise2(x, y)),
        ("noise2_improve_x", noise.noise2_improve_x(x, y)),
        ("noise3", noise.noise3(x, y, z)),
        ("noise3_improve_xy", noise.noise3_improve_xy(x, y, z)),
        ("noise3_improve_xz", noise.noise3_improve_xz(x, y, z)),
        ("noise3_fallback", noise.noise3_fallback(x, y, z)),
        ("noise4", noise.noise4(x, y, z, w)),
        (
            "noise4_improve_xyz_improve_xy",
            noise.noise4_improve_xyz_improve_xy(x, y, z, w),
        ),
        (
            "noise4_improve_xyz_improve_xz",
            noise.noise4_improve_xyz_improve_xz(x, y, z, w),
        ),
        ("noise4_improve_xyz", noise.noise4_improve_xyz(x, y, z, w)),
        (
            "noise4_improve_xy_improve_zw",
            noise.noise4_improve_xy_improve_zw(x, y, z, w),
        ),
        (
            "noise4_improve_xz_improve_yw",
            noise.noise4_improve_xz_improve_yw(x, y, z, w),
        ),
        ("noise4_fallback", noise.noise4_fallback(x, y, z, w)),
    ]
}

#[test]
fn random_points_stay_in_range() {
    let noise = OpenSimplex2::new(1337);
    let mut rng = StdRng::seed_from_u64(1337);

    for _ in 0..100 {
        let point = [
            rng.random_range(0.0..1080.0),
            rng.random_range(0.0..1080.0),
            rng.random_range(0.0..1080.0),
            rng.random_range(0.0..1080.0),
        ];
        for (method, value) in all_methods(&noise, point) {
            assert!(
                (-1.0..=1.0).contains(&value),
                "{method}{point:?} = {value} is out of range"
            );
        }
    }
}

#[test]
fn output_is_not_constant() {
    let noise = OpenSimplex2::new(1337);
    let mut rng = StdRng::seed_from_u64(7);
    let mut positive = [false; 13];
    let mut negative = [false; 13];

    for _ in 0..500 {
        let point = [
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
        ];
        for (i, (_, value)) in all_methods(&noise, point).into_iter().enumerate() {
            positive[i] |= value > 0.05;
            negative[i] |= value < -0.05;
        }
    }

    assert!(positive.iter().all(|&p| p), "{positive:?}");
    assert!(negative.iter().all(|&n| n), "{negative:?}");
}

#[test]
fn far_coordinates_stay_in_range() {
    let noise = OpenSimplex2::new(-3);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..1000 {
        let point: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1e6..1e6));
        for (method, value) in all_methods(&noise, point) {
            assert!((-1.0..=1.0).contains(&value), "{method}{point:?} = {value}");
        }
    }
}

#[test]
fn extreme_inputs_do_not_panic() {
    let extremes = [
        f64::MAX,
        -f64::MAX,
        f64::MIN_POSITIVE,
        5e-324,
        1e300,
        -1e300,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ];

    for seed in [0, 42, i64::MIN, i64::MAX] {
        let noise = OpenSimplex2::new(seed);
        for &a in &extremes {
            for &b in &extremes {
                for (method, value) in all_methods(&noise, [a, b, -a, b]) {
                    assert!(
                        value.is_nan() || (-1.0..=1.0).contains(&value),
                        "{method}({a}, {b}) with seed {seed} = {value}"
                    );
                }
            }
        }
    }
}

#[test]
fn lattice_index_saturation_does_not_panic() {
    // Past the i32 lattice range the field is no longer bounded, only well-defined.
    let edges = [2_147_483_647.5, -2_147_483_648.5, 4e9, -4e9, 1e12];
    for seed in [i64::MIN, i64::MAX] {
        let noise = OpenSimplex2::new(seed);
        for &a in &edges {
            for &b in &edges {
                for (_, value) in all_methods(&noise, [a, b, a, -b]) {
                    assert!(!value.is_nan());
                }
            }
        }
    }
}

#[test]
fn field_is_continuous() {
    let noise = OpenSimplex2::new(2024);
    let mut rng = StdRng::seed_from_u64(99);
    let eps = 1e-7;

    for _ in 0..200 {
        let point: [f64; 4] = std::array::from_fn(|_| rng.random_range(-100.0..100.0));
        let nudged = point.map(|c| c + eps);
        let here = all_methods(&noise, point);
        let there = all_methods(&noise, nudged);
        for ((method, a), (_, b)) in here.into_iter().zip(there) {
            assert!((a - b).abs() < 1e-4, "{method} jumps at {point:?}: {a} vs {b}");
        }
    }
}

#[test]
fn seeds_give_different_fields() {
    let a = OpenSimplex2::new(1);
    let b = OpenSimplex2::new(2);
    let point = [10.25, -3.5, 7.75, 0.125];
    let differing = all_methods(&a, point)
        .into_iter()
        .zip(all_methods(&b, point))
        .filter(|((_, x), (_, y))| (x - y).abs() > 1e-9)
        .count();
    assert!(differing >= 10, "only {differing} methods depend on the seed");
}
