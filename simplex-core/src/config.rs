//! JSON5 noise settings.
//!
//! ```json5
//! {
//!     seed: "my world",          // or an integer, or "" for a random seed
//!     noise: { dimensions: "3d", orientation: "improve_xz" },
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::orientation::{Orientation2D, Orientation3D, Orientation4D};
use crate::sampler::NoiseSampler;

/// Seed as written in a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedSetting {
    /// A literal seed.
    Number(i64),
    /// Text: a decimal seed, a phrase to hash, or empty for a random seed.
    Text(String),
}

impl Default for SeedSetting {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl SeedSetting {
    /// Resolve to a concrete seed.
    ///
    /// Decimal text is used as is, other text is hashed. Empty text draws a fresh random
    /// seed on every call.
    #[must_use]
    pub fn resolve(&self) -> i64 {
        match self {
            Self::Number(seed) => *seed,
            Self::Text(text) if text.is_empty() => {
                let seed: i64 = rand::random();
                tracing::info!(seed, "No seed configured, using a random one");
                seed
            }
            Self::Text(text) => text.parse().unwrap_or_else(|_| hash_seed(text)),
        }
    }
}

/// 31-multiplier string hash over the UTF-8 bytes, wrapping on overflow.
#[must_use]
pub fn hash_seed(text: &str) -> i64 {
    let mut hash: i64 = 0;
    for byte in text.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(i64::from(byte));
    }
    hash
}

/// Dimensionality and orientation of the configured noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dimensions")]
pub enum NoiseKind {
    /// 2D noise.
    #[serde(rename = "2d")]
    Plane {
        /// Lattice orientation.
        #[serde(default)]
        orientation: Orientation2D,
    },
    /// 3D noise.
    #[serde(rename = "3d")]
    Volume {
        /// Lattice orientation.
        #[serde(default)]
        orientation: Orientation3D,
    },
    /// 4D noise.
    #[serde(rename = "4d")]
    Hyper {
        /// Lattice orientation.
        #[serde(default)]
        orientation: Orientation4D,
    },
}

impl Default for NoiseKind {
    fn default() -> Self {
        Self::Plane {
            orientation: Orientation2D::default(),
        }
    }
}

/// Settings describing one noise sampler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseSettings {
    /// Seed of the generator.
    #[serde(default)]
    pub seed: SeedSetting,
    /// Dimensionality and orientation.
    #[serde(default)]
    pub noise: NoiseKind,
}

impl NoiseSettings {
    /// Parse settings from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, NoiseError> {
        serde_json5::from_str(text).map_err(|e| NoiseError::Settings(e.to_string()))
    }

    /// Build the configured sampler, resolving the seed.
    #[must_use]
    pub fn build(&self) -> NoiseSampler {
        let seed = self.seed.resolve();
        match self.noise {
            NoiseKind::Plane { orientation } => NoiseSampler::plane(seed, orientation),
            NoiseKind::Volume { orientation } => NoiseSampler::volume(seed, orientation),
            NoiseKind::Hyper { orientation } => NoiseSampler::hyper(seed, orientation),
        }
    }
}
