//! OpenSimplex2 gradient noise over 2, 3 and 4 dimensional space.
//!
//! This module provides the noise kernel and its public entry point:
//!
//! - [`OpenSimplex2`] - Seeded generator exposing every dimension/orientation variant
//! - [`gradients`] - Compile-time gradient tables shared by every seed
//! - [`hash`] - Seed-mixing lattice hash and falloff kernel
//!
//! The base lattice evaluators (`lattice_2d`, `lattice_3d`, `lattice_4d`) take coordinates
//! that are already skewed or rotated into lattice space; the orientation transforms on
//! [`OpenSimplex2`] produce those coordinates from caller space.
//!
//! Evaluation is a pure function of `(seed, variant, coordinates)`. Output is symmetric
//! around zero and bounded by `[-1, 1]` while lattice cells fit in an `i32`.

pub mod gradients;
pub mod hash;
mod lattice_2d;
mod lattice_3d;
mod lattice_4d;
mod open_simplex;

pub use open_simplex::OpenSimplex2;

// Per-axis hash primes. Lattice coordinates are multiplied by these before hashing.
pub(crate) const PRIME_X: i64 = 0x5205402B9270C86F;
pub(crate) const PRIME_Y: i64 = 0x598CD327003817B5;
pub(crate) const PRIME_Z: i64 = 0x5BCC226E9FA0BACB;
pub(crate) const PRIME_W: i64 = 0x56CC5227E58F554B;
pub(crate) const HASH_MULTIPLIER: i64 = 0x53A3F72DEEC546F5;

/// XORed into the seed to evaluate the second cubic lattice of the 3D BCC lattice.
pub(crate) const SEED_FLIP_3D: i64 = -0x52D547B2E96ED629;
/// Seed step between the five interleaved 4D lattice copies.
pub(crate) const SEED_OFFSET_4D: i64 = 0xE83DC3E0DA7164D;

pub(crate) const ROOT2OVER2: f64 = 0.7071067811865476;
/// Skewing factor for 2D: `(sqrt(3) - 1) / 2`
pub(crate) const SKEW_2D: f64 = 0.366025403784439;
/// Unskewing factor for 2D: `(1 / sqrt(3) - 1) / 2`
pub(crate) const UNSKEW_2D: f64 = -0.21132486540518713;

pub(crate) const ROOT3OVER3: f64 = 0.5773502691896257;
pub(crate) const FALLBACK_ROTATE_3D: f64 = 2.0 / 3.0;
pub(crate) const ROTATE_3D_ORTHOGONALIZER: f64 = UNSKEW_2D;

/// Skewing factor for 4D: `(1 / sqrt(5) - 1) / 4`
pub(crate) const SKEW_4D: f64 = -0.138196601125011;
/// Unskewing factor for 4D: `(sqrt(5) - 1) / 4`
pub(crate) const UNSKEW_4D: f64 = 0.309016994374947;
pub(crate) const LATTICE_STEP_4D: f64 = 0.2;

pub(crate) const N_GRADS_2D_EXPONENT: u32 = 7;
pub(crate) const N_GRADS_3D_EXPONENT: u32 = 8;
pub(crate) const N_GRADS_4D_EXPONENT: u32 = 9;
/// Row count of [`gradients::GRADIENTS_2D`].
pub const N_GRADS_2D: usize = 1 << N_GRADS_2D_EXPONENT;
/// Row count of [`gradients::GRADIENTS_3D`].
pub const N_GRADS_3D: usize = 1 << N_GRADS_3D_EXPONENT;
/// Row count of [`gradients::GRADIENTS_4D`].
pub const N_GRADS_4D: usize = 1 << N_GRADS_4D_EXPONENT;

pub(crate) const NORMALIZER_2D: f64 = 0.01001634121365712;
pub(crate) const NORMALIZER_3D: f64 = 0.07969837668935331;
pub(crate) const NORMALIZER_4D: f64 = 0.0220065933241897;

// Squared falloff radii.
pub(crate) const RSQUARED_2D: f64 = 0.5;
pub(crate) const RSQUARED_3D: f64 = 0.6;
pub(crate) const RSQUARED_4D: f64 = 0.6;
