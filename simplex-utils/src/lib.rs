//! Deterministic OpenSimplex2 noise kernel.
//!
//! Everything here is a pure function of its inputs: no allocation, no I/O, no global
//! state. Higher-level sampling and configuration live in `simplex-core`.

pub mod math;
pub mod noise;
