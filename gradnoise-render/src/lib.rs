//! Renders gradient noise slices to grayscale PNGs.
//!
//! The pipeline is: build seeded [`NoiseTables`] once, evaluate the kernel
//! over a pixel grid ([`grid`]), rescale the field to bytes ([`normalize`])
//! and encode it ([`export`]). The tables are only ever borrowed immutably
//! while the grid is evaluated, so parallel rows need no synchronisation.

pub mod config;
mod error;
pub mod export;
pub mod grid;
pub mod normalize;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use gradnoise_core::NoiseTables;

pub use config::{Execution, GradientStrategy, RenderConfig};
pub use error::RenderError;
pub use grid::{NoiseGrid, sample_grid};
pub use normalize::{FieldRange, normalize_to_u8};

/// Outcome of a render.
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// The sampled field, before normalization.
    pub grid: NoiseGrid,
    /// Time spent evaluating the grid.
    pub elapsed: Duration,
    /// Range of the field, `None` only for an empty grid.
    pub range: Option<FieldRange>,
    /// The file that was written.
    pub output: PathBuf,
}

/// Runs the whole pipeline for `config`, writing to `config.output`.
pub fn render(config: &RenderConfig) -> Result<RenderReport, RenderError> {
    config.validate()?;
    let tables = config.build_tables()?;
    render_with_tables(&tables, config, &config.output)
}

/// Renders with prebuilt tables, writing to `output`.
///
/// Lets several renders share one set of tables.
pub fn render_with_tables(
    tables: &NoiseTables,
    config: &RenderConfig,
    output: &Path,
) -> Result<RenderReport, RenderError> {
    config.validate()?;
    tracing::info!(
        width = config.width,
        height = config.height,
        octaves = config.octaves,
        gradients = ?config.gradients,
        execution = ?config.execution,
        "Generating gradient noise"
    );

    let start = Instant::now();
    let grid = sample_grid(tables, config);
    let elapsed = start.elapsed();
    tracing::info!(
        execution = ?config.execution,
        "Took {:.6} seconds",
        elapsed.as_secs_f64()
    );

    let range = grid.range();
    if let Some(range) = range {
        tracing::debug!(min = range.min, max = range.max, "field range");
    }

    let pixels = normalize_to_u8(grid.values());
    save_png(output, &grid, pixels)?;

    Ok(RenderReport {
        grid,
        elapsed,
        range,
        output: output.to_path_buf(),
    })
}

fn save_png(output: &Path, grid: &NoiseGrid, pixels: Vec<u8>) -> Result<(), RenderError> {
    match export::save_png(output, grid.width(), grid.height(), pixels) {
        Ok(()) => {
            tracing::info!("Succeeded writing png: {}", output.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed writing png: {}: {e}", output.display());
            Err(e)
        }
    }
}
