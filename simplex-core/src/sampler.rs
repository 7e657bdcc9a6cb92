//! Samplers pairing a seeded generator with a lattice orientation.
//!
//! The typed samplers ([`PlaneSampler`], [`VolumeSampler`], [`HyperSampler`]) are what
//! hot loops should hold. [`NoiseSampler`] wraps one of them when the dimensionality is
//! only known at runtime, e.g. after loading [`NoiseSettings`](crate::config::NoiseSettings).

use glam::{DVec2, DVec3, DVec4};
use simplex_utils::noise::OpenSimplex2;

use crate::error::NoiseError;
use crate::orientation::{Orientation2D, Orientation3D, Orientation4D};

/// 2D noise sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneSampler {
    noise: OpenSimplex2,
    orientation: Orientation2D,
}

impl PlaneSampler {
    /// Create a 2D sampler for `seed`.
    #[must_use]
    pub fn new(seed: i64, orientation: Orientation2D) -> Self {
        tracing::trace!(seed, %orientation, "Creating 2D noise sampler");
        Self {
            noise: OpenSimplex2::new(seed),
            orientation,
        }
    }

    /// The underlying generator.
    #[must_use]
    pub const fn noise(&self) -> &OpenSimplex2 {
        &self.noise
    }

    /// The lattice orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation2D {
        self.orientation
    }

    /// Noise value at `(x, y)`, in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.orientation.evaluate(&self.noise, x, y)
    }

    /// Noise value at `pos`.
    #[inline]
    #[must_use]
    pub fn sample_vec(&self, pos: DVec2) -> f64 {
        self.sample(pos.x, pos.y)
    }
}

/// 3D noise sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeSampler {
    noise: OpenSimplex2,
    orientation: Orientation3D,
}

impl VolumeSampler {
    /// Create a 3D sampler for `seed`.
    #[must_use]
    pub fn new(seed: i64, orientation: Orientation3D) -> Self {
        tracing::trace!(seed, %orientation, "Creating 3D noise sampler");
        Self {
            noise: OpenSimplex2::new(seed),
            orientation,
        }
    }

    /// The underlying generator.
    #[must_use]
    pub const fn noise(&self) -> &OpenSimplex2 {
        &self.noise
    }

    /// The lattice orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation3D {
        self.orientation
    }

    /// Noise value at `(x, y, z)`, in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.orientation.evaluate(&self.noise, x, y, z)
    }

    /// Noise value at `pos`.
    #[inline]
    #[must_use]
    pub fn sample_vec(&self, pos: DVec3) -> f64 {
        self.sample(pos.x, pos.y, pos.z)
    }
}

/// 4D noise sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyperSampler {
    noise: OpenSimplex2,
    orientation: Orientation4D,
}

impl HyperSampler {
    /// Create a 4D sampler for `seed`.
    #[must_use]
    pub fn new(seed: i64, orientation: Orientation4D) -> Self {
        tracing::trace!(seed, %orientation, "Creating 4D noise sampler");
        Self {
            noise: OpenSimplex2::new(seed),
            orientation,
        }
    }

    /// The underlying generator.
    #[must_use]
    pub const fn noise(&self) -> &OpenSimplex2 {
        &self.noise
    }

    /// The lattice orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation4D {
        self.orientation
    }

    /// Noise value at `(x, y, z, w)`, in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.orientation.evaluate(&self.noise, x, y, z, w)
    }

    /// Noise value at `pos`.
    #[inline]
    #[must_use]
    pub fn sample_vec(&self, pos: DVec4) -> f64 {
        self.sample(pos.x, pos.y, pos.z, pos.w)
    }
}

/// A sampler whose dimensionality is chosen at runtime.
///
/// Uses enum dispatch rather than `dyn`, so matching once per call is the only overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoiseSampler {
    /// 2D sampler.
    Plane(PlaneSampler),
    /// 3D sampler.
    Volume(VolumeSampler),
    /// 4D sampler.
    Hyper(HyperSampler),
}

impl NoiseSampler {
    /// Create a 2D sampler.
    #[must_use]
    pub fn plane(seed: i64, orientation: Orientation2D) -> Self {
        Self::Plane(PlaneSampler::new(seed, orientation))
    }

    /// Create a 3D sampler.
    #[must_use]
    pub fn volume(seed: i64, orientation: Orientation3D) -> Self {
        Self::Volume(VolumeSampler::new(seed, orientation))
    }

    /// Create a 4D sampler.
    #[must_use]
    pub fn hyper(seed: i64, orientation: Orientation4D) -> Self {
        Self::Hyper(HyperSampler::new(seed, orientation))
    }

    /// Number of coordinates [`sample`](Self::sample) expects.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        match self {
            Self::Plane(_) => 2,
            Self::Volume(_) => 3,
            Self::Hyper(_) => 4,
        }
    }

    /// The seed of the underlying generator.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        match self {
            Self::Plane(s) => s.noise().seed(),
            Self::Volume(s) => s.noise().seed(),
            Self::Hyper(s) => s.noise().seed(),
        }
    }

    /// Noise value at `coords`.
    ///
    /// Fails with [`NoiseError::DimensionMismatch`] if `coords.len()` differs from
    /// [`dimensions`](Self::dimensions).
    pub fn sample(&self, coords: &[f64]) -> Result<f64, NoiseError> {
        match (self, coords) {
            (Self::Plane(s), &[x, y]) => Ok(s.sample(x, y)),
            (Self::Volume(s), &[x, y, z]) => Ok(s.sample(x, y, z)),
            (Self::Hyper(s), &[x, y, z, w]) => Ok(s.sample(x, y, z, w)),
            _ => Err(NoiseError::DimensionMismatch {
                expected: self.dimensions(),
                actual: coords.len(),
            }),
        }
    }
}
