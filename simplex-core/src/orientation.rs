//! Named lattice orientations for each dimensionality.
//!
//! An orientation picks which [`OpenSimplex2`] method evaluates a point. The names are
//! stable: they appear in settings files (`snake_case`) and parse back case-insensitively
//! with either `_` or `-` as separator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use simplex_utils::noise::OpenSimplex2;

use crate::error::NoiseError;

/// Lowercase `name` and turn `-` into `_`.
fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

macro_rules! orientation_names {
    ($ty:ident, $dims:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every orientation, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The `snake_case` name used in settings.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = NoiseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match normalize(s).as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(NoiseError::UnknownOrientation {
                        dimensions: $dims,
                        name: s.to_owned(),
                    }),
                }
            }
        }
    };
}

/// Orientation of the 2D lattice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation2D {
    /// Plain skew. Good for heightmaps and top-down maps.
    #[default]
    Standard,
    /// Y down the main diagonal, for side-view worlds.
    ImproveX,
}

orientation_names!(Orientation2D, 2, {
    Standard => "standard",
    ImproveX => "improve_x",
});

impl Orientation2D {
    /// Evaluate `noise` at `(x, y)` in this orientation.
    #[inline]
    #[must_use]
    pub fn evaluate(self, noise: &OpenSimplex2, x: f64, y: f64) -> f64 {
        match self {
            Self::Standard => noise.noise2(x, y),
            Self::ImproveX => noise.noise2_improve_x(x, y),
        }
    }
}

/// Orientation of the 3D BCC lattice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation3D {
    /// Axis-aligned lattice.
    Standard,
    /// XY planes isotropic; Z is vertical or time.
    #[serde(rename = "improve_xy")]
    ImproveXY,
    /// XZ planes isotropic; Y is vertical.
    #[serde(rename = "improve_xz")]
    ImproveXZ,
    /// Rotated so no axis is special.
    #[default]
    Fallback,
}

orientation_names!(Orientation3D, 3, {
    Standard => "standard",
    ImproveXY => "improve_xy",
    ImproveXZ => "improve_xz",
    Fallback => "fallback",
});

impl Orientation3D {
    /// Evaluate `noise` at `(x, y, z)` in this orientation.
    #[inline]
    #[must_use]
    pub fn evaluate(self, noise: &OpenSimplex2, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Self::Standard => noise.noise3(x, y, z),
            Self::ImproveXY => noise.noise3_improve_xy(x, y, z),
            Self::ImproveXZ => noise.noise3_improve_xz(x, y, z),
            Self::Fallback => noise.noise3_fallback(x, y, z),
        }
    }
}

/// Orientation of the 4D lattice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation4D {
    /// XYZ like [`Orientation3D::ImproveXY`], W extra.
    #[serde(rename = "improve_xyz_improve_xy")]
    ImproveXYZImproveXY,
    /// XYZ like [`Orientation3D::ImproveXZ`], W extra.
    #[serde(rename = "improve_xyz_improve_xz")]
    ImproveXYZImproveXZ,
    /// XYZ isotropic, W extra.
    #[serde(rename = "improve_xyz")]
    ImproveXYZ,
    /// XY and ZW planes isotropic.
    #[serde(rename = "improve_xy_improve_zw")]
    ImproveXYImproveZW,
    /// XZ and YW planes isotropic.
    #[serde(rename = "improve_xz_improve_yw")]
    ImproveXZImproveYW,
    /// Plain A4 skew.
    #[default]
    #[serde(rename = "fallback")]
    Fallback,
}

orientation_names!(Orientation4D, 4, {
    ImproveXYZImproveXY => "improve_xyz_improve_xy",
    ImproveXYZImproveXZ => "improve_xyz_improve_xz",
    ImproveXYZ => "improve_xyz",
    ImproveXYImproveZW => "improve_xy_improve_zw",
    ImproveXZImproveYW => "improve_xz_improve_yw",
    Fallback => "fallback",
});

impl Orientation4D {
    /// Evaluate `noise` at `(x, y, z, w)` in this orientation.
    #[inline]
    #[must_use]
    pub fn evaluate(self, noise: &OpenSimplex2, x: f64, y: f64, z: f64, w: f64) -> f64 {
        match self {
            Self::ImproveXYZImproveXY => noise.noise4_improve_xyz_improve_xy(x, y, z, w),
            Self::ImproveXYZImproveXZ => noise.noise4_improve_xyz_improve_xz(x, y, z, w),
            Self::ImproveXYZ => noise.noise4_improve_xyz(x, y, z, w),
            Self::ImproveXYImproveZW => noise.noise4_improve_xy_improve_zw(x, y, z, w),
            Self::ImproveXZImproveYW => noise.noise4_improve_xz_improve_yw(x, y, z, w),
            Self::Fallback => noise.noise4_fallback(x, y, z, w),
        }
    }
}
