//! Lattice hash and falloff kernel.
//!
//! The hash XORs the seed with prime-premultiplied lattice coordinates, multiplies by
//! [`HASH_MULTIPLIER`], folds the high bits back down and masks out a gradient row. Every
//! integer step wraps modulo 2^64 and must stay that way: no checked or widening arithmetic.

use super::gradients::{GRADIENTS_2D, GRADIENTS_3D, GRADIENTS_4D};
use super::{
    HASH_MULTIPLIER, N_GRADS_2D, N_GRADS_2D_EXPONENT, N_GRADS_3D, N_GRADS_3D_EXPONENT,
    N_GRADS_4D, N_GRADS_4D_EXPONENT,
};

/// Gradient row selected for a 2D lattice vertex.
///
/// `xsvp` / `ysvp` are the vertex coordinates already multiplied by their axis primes.
#[inline]
#[must_use]
pub const fn hash2(seed: i64, xsvp: i64, ysvp: i64) -> usize {
    let mut hash = (seed ^ xsvp ^ ysvp).wrapping_mul(HASH_MULTIPLIER);
    hash ^= hash >> (64 - N_GRADS_2D_EXPONENT + 1);
    (hash as usize >> 1) & (N_GRADS_2D - 1)
}

/// Gradient row selected for a 3D lattice vertex.
#[inline]
#[must_use]
pub const fn hash3(seed: i64, xrvp: i64, yrvp: i64, zrvp: i64) -> usize {
    let mut hash = ((seed ^ xrvp) ^ (yrvp ^ zrvp)).wrapping_mul(HASH_MULTIPLIER);
    hash ^= hash >> (64 - N_GRADS_3D_EXPONENT + 2);
    (hash as usize >> 2) & (N_GRADS_3D - 1)
}

/// Gradient row selected for a 4D lattice vertex.
#[inline]
#[must_use]
pub const fn hash4(seed: i64, xsvp: i64, ysvp: i64, zsvp: i64, wsvp: i64) -> usize {
    let mut hash = (seed ^ (xsvp ^ ysvp) ^ (zsvp ^ wsvp)).wrapping_mul(HASH_MULTIPLIER);
    hash ^= hash >> (64 - N_GRADS_4D_EXPONENT + 2);
    (hash as usize >> 2) & (N_GRADS_4D - 1)
}

/// Dot product of the vertex gradient with the offset `(dx, dy)`.
#[inline]
#[must_use]
pub fn grad2(seed: i64, xsvp: i64, ysvp: i64, dx: f64, dy: f64) -> f64 {
    let g = &GRADIENTS_2D[hash2(seed, xsvp, ysvp)];
    g[0] * dx + g[1] * dy
}

/// Dot product of the vertex gradient with the offset `(dx, dy, dz)`.
#[inline]
#[must_use]
pub fn grad3(seed: i64, xrvp: i64, yrvp: i64, zrvp: i64, dx: f64, dy: f64, dz: f64) -> f64 {
    let g = &GRADIENTS_3D[hash3(seed, xrvp, yrvp, zrvp)];
    g[0] * dx + g[1] * dy + g[2] * dz
}

/// Dot product of the vertex gradient with the offset `(dx, dy, dz, dw)`.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments, reason = "one primed coordinate and offset per axis")]
pub fn grad4(
    seed: i64,
    xsvp: i64,
    ysvp: i64,
    zsvp: i64,
    wsvp: i64,
    dx: f64,
    dy: f64,
    dz: f64,
    dw: f64,
) -> f64 {
    let g = &GRADIENTS_4D[hash4(seed, xsvp, ysvp, zsvp, wsvp)];
    (g[0] * dx + g[1] * dy) + (g[2] * dz + g[3] * dw)
}

/// Contribution weight for an attenuation `a = r² - d²`.
///
/// Callers only reach this with `a > 0`, so the result is `max(0, r² - d²)^4`.
#[inline]
#[must_use]
pub const fn falloff(a: f64) -> f64 {
    let a = a * a;
    a * a
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::noise::{PRIME_W, PRIME_X, PRIME_Y, PRIME_Z};

    // Row = upstream flat index `(h as i32) & ((N - 1) << k)` shifted right by `k`.
    #[test]
    fn hash2_matches_reference_rows() {
        assert_eq!(hash2(42, 0, 0), 110);
        assert_eq!(hash2(0, PRIME_X, PRIME_Y), 38);
        assert_eq!(
            hash2(
                i64::MIN,
                (-5_i64).wrapping_mul(PRIME_X),
                9_i64.wrapping_mul(PRIME_Y)
            ),
            20
        );
    }

    #[test]
    fn hash3_matches_reference_rows() {
        assert_eq!(hash3(42, 0, 0, 0), 247);
        assert_eq!(hash3(1337, PRIME_X, PRIME_Y, PRIME_Z), 148);
        assert_eq!(
            hash3(
                i64::MAX,
                (-3_i64).wrapping_mul(PRIME_X),
                0,
                7_i64.wrapping_mul(PRIME_Z)
            ),
            209
        );
    }

    #[test]
    fn hash4_matches_reference_rows() {
        assert_eq!(hash4(42, 0, 0, 0, 0), 251);
        assert_eq!(hash4(1337, PRIME_X, PRIME_Y, PRIME_Z, PRIME_W), 100);
        assert_eq!(
            hash4(
                -1,
                0,
                (-2_i64).wrapping_mul(PRIME_Y),
                0,
                11_i64.wrapping_mul(PRIME_W)
            ),
            158
        );
    }

    #[test]
    fn hash_rows_stay_in_table() {
        let extremes = [i64::MIN, -1, 0, 1, i64::MAX, PRIME_X, PRIME_W];
        for &seed in &extremes {
            for &a in &extremes {
                for &b in &extremes {
                    assert!(hash2(seed, a, b) < N_GRADS_2D);
                    assert!(hash3(seed, a, b, a) < N_GRADS_3D);
                    assert!(hash4(seed, a, b, b, a) < N_GRADS_4D);
                }
            }
        }
    }

    #[test]
    fn hash_depends_on_seed() {
        let rows: Vec<usize> = (0..64).map(|seed| hash2(seed, PRIME_X, 0)).collect();
        assert!(rows.iter().any(|&row| row != rows[0]));
    }

    #[test]
    fn gradient_dot_is_linear_in_offset() {
        let one = grad3(7, PRIME_X, PRIME_Y, PRIME_Z, 0.1, -0.2, 0.3);
        let two = grad3(7, PRIME_X, PRIME_Y, PRIME_Z, 0.2, -0.4, 0.6);
        assert!((two - 2.0 * one).abs() < 1e-12);
        assert!(grad4(7, 1, 2, 3, 4, 0.0, 0.0, 0.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn falloff_is_fourth_power() {
        assert!((falloff(0.5) - 0.0625).abs() < f64::EPSILON);
        assert!((falloff(0.1) - 0.0001).abs() < 1e-15);
    }

    #[test]
    fn random_vertices_reach_every_row() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hits_2d = [0_u32; N_GRADS_2D];
        let mut hits_3d = [0_u32; N_GRADS_3D];
        let mut hits_4d = [0_u32; N_GRADS_4D];

        for _ in 0..20_000 {
            let [x, y, z, w]: [i64; 4] =
                std::array::from_fn(|_| rng.random_range(-1_000_000..=1_000_000));
            let (xp, yp) = (x.wrapping_mul(PRIME_X), y.wrapping_mul(PRIME_Y));
            let (zp, wp) = (z.wrapping_mul(PRIME_Z), w.wrapping_mul(PRIME_W));
            hits_2d[hash2(1337, xp, yp)] += 1;
            hits_3d[hash3(1337, xp, yp, zp)] += 1;
            hits_4d[hash4(1337, xp, yp, zp, wp)] += 1;
        }

        assert!(hits_2d.iter().all(|&n| n > 0));
        assert!(hits_3d.iter().all(|&n| n > 0));
        assert!(hits_4d.iter().all(|&n| n > 0));
    }
}
