use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gradnoise_render::{Execution, GradientStrategy, RenderConfig};

/// Render 3D gradient noise slices to grayscale PNGs.
#[derive(Debug, Parser)]
#[command(name = "gradnoise", version, about, long_about = None)]
pub struct Cli {
    /// JSON5 config file; flags below override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output width and height in pixels.
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Number of octaves to synthesize.
    #[arg(short = 'n', long)]
    pub octaves: Option<u32>,

    /// Seed for the permutation and gradient tables.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output PNG path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Gradient lookup strategy.
    #[arg(short, long, value_enum)]
    pub gradients: Option<GradientArg>,

    /// Evaluate rows on the calling thread only.
    #[arg(long, conflicts_with = "compare")]
    pub serial: bool,

    /// Render serially and in parallel, time both and check they match.
    #[arg(long)]
    pub compare: bool,

    /// Print the effective config as JSON and exit without rendering.
    #[arg(long)]
    pub print_config: bool,
}

/// CLI spelling of [`GradientStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GradientArg {
    /// Precomputed gradient table.
    Table,
    /// Fibonacci-sphere gradients.
    Fibonacci,
}

impl From<GradientArg> for GradientStrategy {
    fn from(arg: GradientArg) -> Self {
        match arg {
            GradientArg::Table => Self::Table,
            GradientArg::Fibonacci => Self::Fibonacci,
        }
    }
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(size) = self.size {
            config.width = size;
            config.height = size;
        }
        if let Some(octaves) = self.octaves {
            config.octaves = octaves;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(gradients) = self.gradients {
            config.gradients = gradients.into();
        }
        if self.serial {
            config.execution = Execution::Serial;
        }
    }
}
