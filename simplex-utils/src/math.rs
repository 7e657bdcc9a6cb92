//! Float-to-lattice conversions used by the noise evaluators.
//!
//! Both functions rely on `as i32` saturating (and mapping NaN to 0), so any input,
//! finite or not, produces some lattice index without panicking.

/// Floor `x` to an `i32`.
///
/// Inputs below `i32::MIN` wrap to `i32::MAX` on the correction step instead of
/// overflowing.
#[inline]
#[must_use]
pub fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi.wrapping_sub(1)
    } else {
        xi
    }
}

/// Round `x` to the nearest `i32`, halves away from zero.
#[inline]
#[must_use]
pub fn fast_round(x: f64) -> i32 {
    if x < 0.0 {
        (x - 0.5) as i32
    } else {
        (x + 0.5) as i32
    }
}
