//! 3D base evaluator over the BCC lattice.
//!
//! The BCC lattice is two interleaved cubic lattices, the second offset by half a cell on
//! every axis and hashed with a flipped seed. Each cubic lattice contributes its closest
//! vertex and the next vertex along the axis where the point sits furthest from centre.

use super::hash::{falloff, grad3};
use super::{PRIME_X, PRIME_Y, PRIME_Z, RSQUARED_3D, SEED_FLIP_3D};
use crate::math::fast_round;

/// Sum the contributions around the rotated point `(xr, yr, zr)`.
pub(super) fn noise3_unrotated_base(mut seed: i64, xr: f64, yr: f64, zr: f64) -> f64 {
    // Get base points and offsets.
    let xrb = fast_round(xr);
    let yrb = fast_round(yr);
    let zrb = fast_round(zr);
    let mut xri = xr - f64::from(xrb);
    let mut yri = yr - f64::from(yrb);
    let mut zri = zr - f64::from(zrb);

    // -1 if positive, 1 if negative.
    let mut x_nsign = (-1.0 - xri) as i32 | 1;
    let mut y_nsign = (-1.0 - yri) as i32 | 1;
    let mut z_nsign = (-1.0 - zri) as i32 | 1;

    // Absolute offsets, via the sign indicators above.
    let mut ax0 = f64::from(x_nsign) * -xri;
    let mut ay0 = f64::from(y_nsign) * -yri;
    let mut az0 = f64::from(z_nsign) * -zri;

    // Prime pre-multiplication for hash.
    let mut xrbp = i64::from(xrb).wrapping_mul(PRIME_X);
    let mut yrbp = i64::from(yrb).wrapping_mul(PRIME_Y);
    let mut zrbp = i64::from(zrb).wrapping_mul(PRIME_Z);

    let mut value = 0.0;
    let mut a = (RSQUARED_3D - xri * xri) - (yri * yri + zri * zri);
    for lattice in 0..2 {
        // Closest point on the cube.
        if a > 0.0 {
            value += falloff(a) * grad3(seed, xrbp, yrbp, zrbp, xri, yri, zri);
        }

        // Second-closest point, one step along the dominant axis.
        if ax0 >= ay0 && ax0 >= az0 {
            let b = a + ax0 + ax0;
            if b > 1.0 {
                value += falloff(b - 1.0)
                    * grad3(
                        seed,
                        xrbp.wrapping_sub(i64::from(x_nsign).wrapping_mul(PRIME_X)),
                        yrbp,
                        zrbp,
                        xri + f64::from(x_nsign),
                        yri,
                        zri,
                    );
            }
        } else if ay0 > ax0 && ay0 >= az0 {
            let b = a + ay0 + ay0;
            if b > 1.0 {
                value += falloff(b - 1.0)
                    * grad3(
                        seed,
                        xrbp,
                        yrbp.wrapping_sub(i64::from(y_nsign).wrapping_mul(PRIME_Y)),
                        zrbp,
                        xri,
                        yri + f64::from(y_nsign),
                        zri,
                    );
            }
        } else {
            let b = a + az0 + az0;
            if b > 1.0 {
                value += falloff(b - 1.0)
                    * grad3(
                        seed,
                        xrbp,
                        yrbp,
                        zrbp.wrapping_sub(i64::from(z_nsign).wrapping_mul(PRIME_Z)),
                        xri,
                        yri,
                        zri + f64::from(z_nsign),
                    );
            }
        }

        if lattice == 1 {
            break;
        }

        // Move to the half-offset lattice.
        ax0 = 0.5 - ax0;
        ay0 = 0.5 - ay0;
        az0 = 0.5 - az0;

        xri = f64::from(x_nsign) * ax0;
        yri = f64::from(y_nsign) * ay0;
        zri = f64::from(z_nsign) * az0;

        a += (0.75 - ax0) - (ay0 + az0);

        xrbp = xrbp.wrapping_add(i64::from(x_nsign >> 1) & PRIME_X);
        yrbp = yrbp.wrapping_add(i64::from(y_nsign >> 1) & PRIME_Y);
        zrbp = zrbp.wrapping_add(i64::from(z_nsign >> 1) & PRIME_Z);

        x_nsign = -x_nsign;
        y_nsign = -y_nsign;
        z_nsign = -z_nsign;

        seed ^= SEED_FLIP_3D;
    }

    value
}
