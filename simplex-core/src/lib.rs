//! Caller-facing OpenSimplex2 noise: orientations, samplers, grids and settings.
//!
//! The noise kernel lives in [`simplex_utils::noise`]; this crate adds:
//! - [`orientation`] - Named lattice orientations per dimensionality
//! - [`sampler`] - Typed and runtime-dimension samplers
//! - [`grid`] - Parallel sampling over regular 2D grids
//! - [`config`] - JSON5 settings that build a sampler
//!
//! ```
//! use simplex_core::{NoiseSampler, Orientation3D};
//!
//! let sampler = NoiseSampler::volume(42, Orientation3D::ImproveXZ);
//! let value = sampler.sample(&[1.0, 64.0, -3.5]).unwrap();
//! assert!((-1.0..=1.0).contains(&value));
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod sampler;

pub use config::{NoiseKind, NoiseSettings, SeedSetting};
pub use error::NoiseError;
pub use grid::PlaneGrid;
pub use orientation::{Orientation2D, Orientation3D, Orientation4D};
pub use sampler::{HyperSampler, NoiseSampler, PlaneSampler, VolumeSampler};
pub use simplex_utils::noise::OpenSimplex2;
