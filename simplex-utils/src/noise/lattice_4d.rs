//! 4D base evaluator over five interleaved copies of the A4 lattice.

use super::hash::{falloff, grad4};
use super::{
    LATTICE_STEP_4D, PRIME_W, PRIME_X, PRIME_Y, PRIME_Z, RSQUARED_4D, SEED_OFFSET_4D, UNSKEW_4D,
};
use crate::math::fast_floor;

/// Sum the contributions around the skewed point `(xs, ys, zs, ws)`.
///
/// Each lattice copy is shifted by `-LATTICE_STEP_4D` on every axis relative to the
/// previous one and contributes the vertex of its base 4-simplex closest to the point.
pub(super) fn noise4_unskewed_base(seed: i64, xs: f64, ys: f64, zs: f64, ws: f64) -> f64 {
    // Get base points and offsets.
    let xsb = fast_floor(xs);
    let ysb = fast_floor(ys);
    let zsb = fast_floor(zs);
    let wsb = fast_floor(ws);
    let mut xsi = xs - f64::from(xsb);
    let mut ysi = ys - f64::from(ysb);
    let mut zsi = zs - f64::from(zsb);
    let mut wsi = ws - f64::from(wsb);

    // Pick the copy whose base simplex is certain to hold a contributing vertex,
    // judged by which diagonal slab the point falls between.
    let si_sum = (xsi + ysi) + (zsi + wsi);
    let starting_lattice = (si_sum * 1.25) as i32;

    let mut seed = seed.wrapping_add(i64::from(starting_lattice).wrapping_mul(SEED_OFFSET_4D));

    // Relative positions (skewed) in the starting copy.
    let starting_lattice_offset = f64::from(starting_lattice) * -LATTICE_STEP_4D;
    xsi += starting_lattice_offset;
    ysi += starting_lattice_offset;
    zsi += starting_lattice_offset;
    wsi += starting_lattice_offset;

    let mut ssi = (si_sum + starting_lattice_offset * 4.0) * UNSKEW_4D;

    // Prime pre-multiplication for hash.
    let mut xsvp = i64::from(xsb).wrapping_mul(PRIME_X);
    let mut ysvp = i64::from(ysb).wrapping_mul(PRIME_Y);
    let mut zsvp = i64::from(zsb).wrapping_mul(PRIME_Z);
    let mut wsvp = i64::from(wsb).wrapping_mul(PRIME_W);

    let mut value = 0.0;
    for i in 0..5 {
        // Closest vertex of the 4-simplex on this copy's base vertex.
        let score0 = 1.0 + ssi * (-1.0 / UNSKEW_4D);
        if xsi >= ysi && xsi >= zsi && xsi >= wsi && xsi >= score0 {
            xsvp = xsvp.wrapping_add(PRIME_X);
            xsi -= 1.0;
            ssi -= UNSKEW_4D;
        } else if ysi > xsi && ysi >= zsi && ysi >= wsi && ysi >= score0 {
            ysvp = ysvp.wrapping_add(PRIME_Y);
            ysi -= 1.0;
            ssi -= UNSKEW_4D;
        } else if zsi > xsi && zsi > ysi && zsi >= wsi && zsi >= score0 {
            zsvp = zsvp.wrapping_add(PRIME_Z);
            zsi -= 1.0;
            ssi -= UNSKEW_4D;
        } else if wsi > xsi && wsi > ysi && wsi > zsi && wsi >= score0 {
            wsvp = wsvp.wrapping_add(PRIME_W);
            wsi -= 1.0;
            ssi -= UNSKEW_4D;
        }

        let dx = xsi + ssi;
        let dy = ysi + ssi;
        let dz = zsi + ssi;
        let dw = wsi + ssi;
        let a = (dx * dx + dy * dy) + (dz * dz + dw * dw);
        if a < RSQUARED_4D {
            value += falloff(RSQUARED_4D - a) * grad4(seed, xsvp, ysvp, zsvp, wsvp, dx, dy, dz, dw);
        }

        if i == 4 {
            break;
        }

        // Next copy, shifted down by <-0.2, -0.2, -0.2, -0.2>.
        xsi += LATTICE_STEP_4D;
        ysi += LATTICE_STEP_4D;
        zsi += LATTICE_STEP_4D;
        wsi += LATTICE_STEP_4D;
        ssi += LATTICE_STEP_4D * 4.0 * UNSKEW_4D;
        seed = seed.wrapping_sub(SEED_OFFSET_4D);

        // Copies wrap around: after the starting copy, return to the cell's base vertex.
        if i == starting_lattice {
            xsvp = xsvp.wrapping_sub(PRIME_X);
            ysvp = ysvp.wrapping_sub(PRIME_Y);
            zsvp = zsvp.wrapping_sub(PRIME_Z);
            wsvp = wsvp.wrapping_sub(PRIME_W);
            seed = seed.wrapping_add(SEED_OFFSET_4D.wrapping_mul(5));
        }
    }

    value
}
