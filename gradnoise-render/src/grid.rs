//! Grid driver: evaluates the kernel once per pixel of a `z = depth` slice.

use gradnoise_core::{GradientSource, NoiseTables};
use rayon::prelude::*;

use crate::config::{Execution, GradientStrategy, RenderConfig};
use crate::normalize::FieldRange;

/// A row-major field of noise samples.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl NoiseGrid {
    /// Width in samples.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in samples.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All samples, row by row.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Sample at column `i`, row `j`.
    #[must_use]
    pub fn get(&self, i: u32, j: u32) -> Option<f32> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.values
            .get(j as usize * self.width as usize + i as usize)
            .copied()
    }

    /// Minimum and maximum sample, `None` for an empty grid.
    #[must_use]
    pub fn range(&self) -> Option<FieldRange> {
        FieldRange::of(&self.values)
    }

    /// Whether both grids hold exactly the same bits.
    #[must_use]
    pub fn is_bit_identical(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

/// Samples the slice described by `config`.
///
/// Pixel `(i, j)` maps to `(i / width * frequency, j / height * frequency, depth)`.
/// The gradient strategy is resolved here, once, so the per-pixel loop is
/// monomorphized for it.
#[must_use]
pub fn sample_grid(tables: &NoiseTables, config: &RenderConfig) -> NoiseGrid {
    match config.gradients {
        GradientStrategy::Table => fill(tables, &tables.table_gradients(), config),
        GradientStrategy::Fibonacci => fill(tables, &tables.fibonacci(), config),
    }
}

fn fill<G: GradientSource + Sync>(
    tables: &NoiseTables,
    gradients: &G,
    config: &RenderConfig,
) -> NoiseGrid {
    let width = config.width as usize;
    let height = config.height as usize;
    let dx = config.frequency / config.width as f32;
    let dy = config.frequency / config.height as f32;
    let depth = config.depth;
    let octaves = config.octaves;

    let fill_row = |j: usize, row: &mut [f32]| {
        let y = j as f32 * dy;
        for (i, value) in row.iter_mut().enumerate() {
            *value = tables.sample_octaves_with(i as f32 * dx, y, depth, gradients, octaves);
        }
    };

    let mut values = vec![0.0; width * height];
    if width > 0 {
        match config.execution {
            Execution::Serial => values
                .chunks_mut(width)
                .enumerate()
                .for_each(|(j, row)| fill_row(j, row)),
            Execution::Parallel => values
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(j, row)| fill_row(j, row)),
        }
    }

    NoiseGrid {
        width: config.width,
        height: config.height,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(execution: Execution) -> RenderConfig {
        RenderConfig {
            width: 48,
            height: 32,
            octaves: 5,
            execution,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn serial_and_parallel_are_bit_identical() {
        let tables = small_config(Execution::Serial)
            .build_tables()
            .expect("valid tables");
        let serial = sample_grid(&tables, &small_config(Execution::Serial));
        let parallel = sample_grid(&tables, &small_config(Execution::Parallel));
        assert!(serial.is_bit_identical(&parallel));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn pixels_map_to_expected_coordinates() {
        let config = small_config(Execution::Serial);
        let tables = config.build_tables().expect("valid tables");
        let grid = sample_grid(&tables, &config);
        assert_eq!(grid.values().len(), 48 * 32);
        let expected = tables.sample_octaves(7.0 * (1.0 / 48.0), 3.0 * (1.0 / 32.0), 0.0, 5);
        assert_eq!(grid.get(7, 3), Some(expected));
        assert_eq!(grid.get(48, 0), None);
        // The origin is a lattice point, and every octave samples it there.
        assert_eq!(grid.get(0, 0), Some(0.0));
    }

    #[test]
    fn fibonacci_strategy_changes_the_field() {
        let tables = small_config(Execution::Serial)
            .build_tables()
            .expect("valid tables");
        let table = sample_grid(&tables, &small_config(Execution::Parallel));
        let fibonacci = sample_grid(
            &tables,
            &RenderConfig {
                gradients: GradientStrategy::Fibonacci,
                ..small_config(Execution::Parallel)
            },
        );
        assert!(!table.is_bit_identical(&fibonacci));
        assert!(fibonacci.values().iter().all(|v| v.abs() < 1.0));
    }
}
