//! Seeded OpenSimplex2 generator and its orientation variants.
//!
//! Every method applies a fixed linear transform to the caller's coordinates and hands
//! the result to the matching base evaluator. The transforms decide which axes of the
//! output look isotropic; all numeric work happens in the evaluators.

use super::lattice_2d::noise2_unskewed_base;
use super::lattice_3d::noise3_unrotated_base;
use super::lattice_4d::noise4_unskewed_base;
use super::{FALLBACK_ROTATE_3D, ROOT2OVER2, ROOT3OVER3, ROTATE_3D_ORTHOGONALIZER, SKEW_2D, SKEW_4D};

/// OpenSimplex2 gradient noise generator.
///
/// Holds only the seed, so it is `Copy` and can be shared freely between threads. Any
/// `i64` is a valid seed.
///
/// Outputs lie in `[-1, 1]` while the transformed coordinates stay inside the `i32`
/// lattice range (about `±2.1e9`). Past that the lattice index saturates and the output
/// is some float with no range guarantee. No input panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenSimplex2 {
    seed: i64,
}

impl OpenSimplex2 {
    /// Create a generator for `seed`.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// 2D noise, standard lattice orientation.
    #[must_use]
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let s = SKEW_2D * (x + y);
        noise2_unskewed_base(self.seed, x + s, y + s)
    }

    /// 2D noise with Y pointing down the main diagonal.
    ///
    /// Suits side-view worlds where Y is vertical. Heightmaps and continent maps are
    /// usually better served by [`noise2`](Self::noise2).
    #[must_use]
    pub fn noise2_improve_x(&self, x: f64, y: f64) -> f64 {
        // Skew transform and rotation baked into one.
        let xx = x * ROOT2OVER2;
        let yy = y * (ROOT2OVER2 * (1.0 + 2.0 * SKEW_2D));
        noise2_unskewed_base(self.seed, yy + xx, yy - xx)
    }

    /// 3D noise on the axis-aligned BCC lattice.
    ///
    /// Cheapest 3D variant, but lattice planes line up with the coordinate axes. Prefer
    /// one of the rotated variants for anything visible.
    #[must_use]
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        noise3_unrotated_base(self.seed, x, y, z)
    }

    /// 3D noise with better visual isotropy in `(x, y)`.
    ///
    /// Z should be the "different" coordinate: the vertical axis of a Z-up world, or time
    /// in an animated 2D texture.
    #[must_use]
    pub fn noise3_improve_xy(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = improve_xy_3d(x, y, z);
        noise3_unrotated_base(self.seed, xr, yr, zr)
    }

    /// 3D noise with better visual isotropy in `(x, z)`.
    ///
    /// Y should be the "different" coordinate, typically the vertical axis of a Y-up world.
    #[must_use]
    pub fn noise3_improve_xz(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = improve_xz_3d(x, y, z);
        noise3_unrotated_base(self.seed, xr, yr, zr)
    }

    /// 3D noise with the classic look, for when no axis needs special treatment.
    #[must_use]
    pub fn noise3_fallback(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = fallback_3d(x, y, z);
        noise3_unrotated_base(self.seed, xr, yr, zr)
    }

    /// 4D noise, standard A4 lattice orientation. Same field as
    /// [`noise4_fallback`](Self::noise4_fallback).
    #[must_use]
    pub fn noise4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.noise4_fallback(x, y, z, w)
    }

    /// 4D noise with XYZ oriented like [`noise3_improve_xy`](Self::noise3_improve_xy)
    /// and W as an extra degree of freedom. W repeats eventually.
    ///
    /// For time-varied animations texturing a 3D object in a Z-up space (W = time).
    #[must_use]
    pub fn noise4_improve_xyz_improve_xy(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let xy = x + y;
        let s2 = xy * -0.21132486540518699998;
        let zz = z * 0.28867513459481294226;
        let ww = w * 0.2236067977499788;
        let xr = x + (zz + ww + s2);
        let yr = y + (zz + ww + s2);
        let zr = xy * -0.57735026918962599998 + (zz + ww);
        let wr = z * -0.866025403784439 + ww;
        noise4_unskewed_base(self.seed, xr, yr, zr, wr)
    }

    /// 4D noise with XYZ oriented like [`noise3_improve_xz`](Self::noise3_improve_xz)
    /// and W as an extra degree of freedom. W repeats eventually.
    ///
    /// For time-varied animations texturing a 3D object in a Y-up space (W = time).
    #[must_use]
    pub fn noise4_improve_xyz_improve_xz(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let xz = x + z;
        let s2 = xz * -0.21132486540518699998;
        let yy = y * 0.28867513459481294226;
        let ww = w * 0.2236067977499788;
        let xr = x + (yy + ww + s2);
        let zr = z + (yy + ww + s2);
        let yr = xz * -0.57735026918962599998 + (yy + ww);
        let wr = y * -0.866025403784439 + ww;
        noise4_unskewed_base(self.seed, xr, yr, zr, wr)
    }

    /// 4D noise with XYZ oriented like [`noise3_fallback`](Self::noise3_fallback) and W
    /// as an extra degree of freedom. W repeats eventually.
    #[must_use]
    pub fn noise4_improve_xyz(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let xyz = x + y + z;
        let ww = w * 0.2236067977499788;
        let s2 = xyz * -0.16666666666666666 + ww;
        let xs = x + s2;
        let ys = y + s2;
        let zs = z + s2;
        let ws = -0.5 * xyz + ww;
        noise4_unskewed_base(self.seed, xs, ys, zs, ws)
    }

    /// 4D noise with the XY and ZW planes both isotropic.
    ///
    /// Suited to two 2D coordinate pairs, e.g. a looping 2D animation sampled on a circle
    /// in ZW.
    #[must_use]
    pub fn noise4_improve_xy_improve_zw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let s2 = (x + y) * -0.178275657951399372 + (z + w) * 0.215623393288842828;
        let t2 = (z + w) * -0.403949762580207112 + (x + y) * -0.375199083010075342;
        let xs = x + s2;
        let ys = y + s2;
        let zs = z + t2;
        let ws = w + t2;
        noise4_unskewed_base(self.seed, xs, ys, zs, ws)
    }

    /// 4D noise with the XZ and YW planes both isotropic.
    ///
    /// The Y-up counterpart of
    /// [`noise4_improve_xy_improve_zw`](Self::noise4_improve_xy_improve_zw).
    #[must_use]
    pub fn noise4_improve_xz_improve_yw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let s2 = (x + z) * -0.178275657951399372 + (y + w) * 0.215623393288842828;
        let t2 = (y + w) * -0.403949762580207112 + (x + z) * -0.375199083010075342;
        let xs = x + s2;
        let ys = y + t2;
        let zs = z + s2;
        let ws = w + t2;
        noise4_unskewed_base(self.seed, xs, ys, zs, ws)
    }

    /// 4D noise with the plain A4 skew, for when no axis needs special treatment.
    #[must_use]
    pub fn noise4_fallback(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let s = SKEW_4D * (x + y + z + w);
        noise4_unskewed_base(self.seed, x + s, y + s, z + s, w + s)
    }
}

// Orthonormal rotations (not skews) that re-orient the cubic lattices.

/// Z up the main lattice diagonal; XY planes moved out of alignment with the cube faces.
#[inline]
fn improve_xy_3d(x: f64, y: f64, z: f64) -> [f64; 3] {
    let xy = x + y;
    let s2 = xy * ROTATE_3D_ORTHOGONALIZER;
    let zz = z * ROOT3OVER3;
    [x + s2 + zz, y + s2 + zz, xy * -ROOT3OVER3 + zz]
}

/// Y up the main lattice diagonal; XZ planes moved out of alignment with the cube faces.
#[inline]
fn improve_xz_3d(x: f64, y: f64, z: f64) -> [f64; 3] {
    let xz = x + z;
    let s2 = xz * ROTATE_3D_ORTHOGONALIZER;
    let yy = y * ROOT3OVER3;
    [x + s2 + yy, xz * -ROOT3OVER3 + yy, z + s2 + yy]
}

#[inline]
fn fallback_3d(x: f64, y: f64, z: f64) -> [f64; 3] {
    let r = FALLBACK_ROTATE_3D * (x + y + z);
    [r - x, r - y, r - z]
}
