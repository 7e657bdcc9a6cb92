//! 2D base evaluator over the A2 (triangular) lattice.

use super::hash::{falloff, grad2};
use super::{PRIME_X, PRIME_Y, RSQUARED_2D, UNSKEW_2D};
use crate::math::fast_floor;

/// Sum the contributions of the simplex containing the skewed point `(xs, ys)`.
///
/// The base vertex and its diagonal neighbour are always candidates; `dy0 > dx0` picks
/// which of the two remaining vertices closes the triangle.
pub(super) fn noise2_unskewed_base(seed: i64, xs: f64, ys: f64) -> f64 {
    // Get base points and offsets.
    let xsb = fast_floor(xs);
    let ysb = fast_floor(ys);
    let xi = xs - f64::from(xsb);
    let yi = ys - f64::from(ysb);

    // Prime pre-multiplication for hash.
    let xsbp = i64::from(xsb).wrapping_mul(PRIME_X);
    let ysbp = i64::from(ysb).wrapping_mul(PRIME_Y);

    // Unskew.
    let t = (xi + yi) * UNSKEW_2D;
    let dx0 = xi + t;
    let dy0 = yi + t;

    // First vertex.
    let mut value = 0.0;
    let a0 = RSQUARED_2D - dx0 * dx0 - dy0 * dy0;
    if a0 > 0.0 {
        value = falloff(a0) * grad2(seed, xsbp, ysbp, dx0, dy0);
    }

    // Second vertex, diagonally opposite. Its attenuation follows from a0 and t.
    let a1 = (2.0 * (1.0 + 2.0 * UNSKEW_2D) * (1.0 / UNSKEW_2D + 2.0)) * t
        + ((-2.0 * (1.0 + 2.0 * UNSKEW_2D) * (1.0 + 2.0 * UNSKEW_2D)) + a0);
    if a1 > 0.0 {
        let dx1 = dx0 - (1.0 + 2.0 * UNSKEW_2D);
        let dy1 = dy0 - (1.0 + 2.0 * UNSKEW_2D);
        value += falloff(a1)
            * grad2(
                seed,
                xsbp.wrapping_add(PRIME_X),
                ysbp.wrapping_add(PRIME_Y),
                dx1,
                dy1,
            );
    }

    // Third vertex.
    if dy0 > dx0 {
        let dx2 = dx0 - UNSKEW_2D;
        let dy2 = dy0 - (UNSKEW_2D + 1.0);
        let a2 = RSQUARED_2D - dx2 * dx2 - dy2 * dy2;
        if a2 > 0.0 {
            value += falloff(a2) * grad2(seed, xsbp, ysbp.wrapping_add(PRIME_Y), dx2, dy2);
        }
    } else {
        let dx2 = dx0 - (UNSKEW_2D + 1.0);
        let dy2 = dy0 - UNSKEW_2D;
        let a2 = RSQUARED_2D - dx2 * dx2 - dy2 * dy2;
        if a2 > 0.0 {
            value += falloff(a2) * grad2(seed, xsbp.wrapping_add(PRIME_X), ysbp, dx2, dy2);
        }
    }

    value
}
