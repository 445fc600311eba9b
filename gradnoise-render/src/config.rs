//! Render configuration.
//!
//! Loaded from a JSON5 file; every key is optional and falls back to the
//! defaults below, which reproduce a 512x512, 8-octave render with seed `0`.
//! A config written with [`RenderConfig::to_json`] is plain JSON, which is
//! also valid JSON5, so it loads back unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use gradnoise_core::{NoiseTables, TableError};
use serde::{Deserialize, Serialize};

use crate::RenderError;

/// Largest image [`RenderConfig::validate`] accepts, in pixels.
///
/// The grid holds one `f32` per pixel, so this caps it at 1 GiB.
pub const MAX_PIXELS: u64 = 1 << 28;

/// Which [`gradnoise_core::GradientSource`] the grid driver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientStrategy {
    /// Look gradients up in the seeded gradient table.
    #[default]
    Table,
    /// Derive gradients from a Fibonacci sphere; the gradient table is unused.
    Fibonacci,
}

/// How grid rows are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    /// One row after another on the calling thread.
    Serial,
    /// Rows spread across the rayon thread pool.
    #[default]
    Parallel,
}

/// Settings for one render.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Number of octaves summed per pixel.
    pub octaves: u32,
    /// Seed for the permutation and gradient tables.
    pub seed: u64,
    /// Per-axis table length; must be a power of two.
    pub axis_len: u32,
    /// Lattice cells spanned by the image along each axis.
    pub frequency: f32,
    /// The `z` coordinate of the sampled slice.
    pub depth: f32,
    /// Gradient lookup strategy.
    pub gradients: GradientStrategy,
    /// Row scheduling.
    pub execution: Execution,
    /// Where the PNG is written.
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            octaves: 8,
            seed: 0,
            axis_len: 256,
            frequency: 1.0,
            depth: 0.0,
            gradients: GradientStrategy::default(),
            execution: Execution::default(),
            output: PathBuf::from("output.png"),
        }
    }
}

impl RenderConfig {
    /// Reads a JSON5 config file.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let content = fs::read_to_string(path)?;
        Self::from_json5(&content)
    }

    /// Parses a JSON5 document.
    pub fn from_json5(content: &str) -> Result<Self, RenderError> {
        Ok(serde_json5::from_str(content)?)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings that cannot produce an image.
    pub fn validate(&self) -> Result<(), RenderError> {
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels == 0 || pixels > MAX_PIXELS {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.frequency.is_finite() || !self.depth.is_finite() {
            return Err(RenderError::InvalidSampling {
                frequency: self.frequency,
                depth: self.depth,
            });
        }
        Ok(())
    }

    /// Builds the seeded tables this config describes.
    pub fn build_tables(&self) -> Result<NoiseTables, TableError> {
        NoiseTables::builder()
            .seed(self.seed)
            .axis_len(self.axis_len)
            .build()
    }
}
