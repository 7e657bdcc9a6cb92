//! Shared generators must give identical results from any thread.

use std::thread;

use glam::DVec2;
use simplex_core::{
    NoiseSampler, OpenSimplex2, Orientation2D, Orientation4D, PlaneGrid, PlaneSampler,
};

fn sweep(noise: &OpenSimplex2) -> Vec<f64> {
    (0..2000)
        .map(|i| {
            let t = f64::from(i) * 0.0731;
            noise.noise4_improve_xy_improve_zw(t, -t * 0.5, t.sin() * 9.0, 40.0 - t)
                + noise.noise3_improve_xz(t, t * 0.25, -t)
                + noise.noise2(t * 1.5, 3.0)
        })
        .collect()
}

#[test]
#[allow(clippy::float_cmp, reason = "evaluation is a pure function")]
fn threads_share_one_generator() {
    let noise = OpenSimplex2::new(i64::MIN);
    let expected = sweep(&noise);

    let results: Vec<Vec<f64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| sweep(&noise))).collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("sampling thread panicked"))
            .collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
#[allow(clippy::float_cmp, reason = "evaluation is a pure function")]
fn dynamic_sampler_is_shareable() {
    let sampler = NoiseSampler::hyper(9, Orientation4D::ImproveXYZ);
    let points: Vec<[f64; 4]> = (0..256)
        .map(|i| {
            let t = f64::from(i);
            [t * 0.3, t * -0.7, 5.0, t * 0.01]
        })
        .collect();

    let sequential: Vec<f64> = points
        .iter()
        .map(|p| sampler.sample(p).expect("4D sampler takes 4 coordinates"))
        .collect();

    let threaded: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> = points
            .chunks(64)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|p| sampler.sample(p).expect("4D sampler takes 4 coordinates"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("sampling thread panicked"))
            .collect()
    });

    assert_eq!(threaded, sequential);
}

#[test]
#[allow(clippy::float_cmp, reason = "evaluation is a pure function")]
fn parallel_grid_is_repeatable() {
    let sampler = PlaneSampler::new(1337, Orientation2D::Standard);
    let grid = PlaneGrid::new(DVec2::new(0.0, 0.0), 1.0 / 16.0, 128, 96);

    let first = grid.sample(&sampler).expect("grid fits in memory");
    let second = grid.sample(&sampler).expect("grid fits in memory");
    assert_eq!(first, second);
    assert!(first.iter().all(|v| (-1.0..=1.0).contains(v)));
}
