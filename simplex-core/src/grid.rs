//! Regular 2D grids of noise samples.

use glam::DVec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::sampler::PlaneSampler;

/// An axis-aligned `width` x `height` grid of points spaced `step` apart.
///
/// Point `(i, j)` sits at `origin + step * (i, j)`, with `i` the column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneGrid {
    /// Position of the first sample.
    pub origin: DVec2,
    /// Spacing between neighbouring samples on both axes.
    pub step: f64,
    /// Samples per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl PlaneGrid {
    /// Create a grid.
    #[must_use]
    pub const fn new(origin: DVec2, step: f64, width: usize, height: usize) -> Self {
        Self {
            origin,
            step,
            width,
            height,
        }
    }

    /// Number of samples in the grid, or `None` if `width * height` overflows.
    #[must_use]
    pub const fn len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Whether the grid has no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Position of sample `(column, row)`.
    #[must_use]
    pub fn point(&self, column: usize, row: usize) -> DVec2 {
        self.origin + self.step * DVec2::new(column as f64, row as f64)
    }

    /// Sample every point, row-major.
    ///
    /// Rows are filled in parallel on the rayon pool. The result is identical to
    /// sampling each point in order. Fails with [`NoiseError::GridTooLarge`] if the
    /// output buffer cannot be allocated.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(width = self.width, height = self.height)
    )]
    pub fn sample(&self, sampler: &PlaneSampler) -> Result<Vec<f64>, NoiseError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let too_large = || NoiseError::GridTooLarge {
            width: self.width,
            height: self.height,
        };
        let len = self.len().ok_or_else(too_large)?;
        let mut values = Vec::new();
        values.try_reserve_exact(len).map_err(|_| too_large())?;
        values.resize(len, 0.0);

        values
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(row, out)| {
                for (column, value) in out.iter_mut().enumerate() {
                    *value = sampler.sample_vec(self.point(column, row));
                }
            });
        Ok(values)
    }
}
