//! Command-line renderer for gradient noise.

mod cli;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use gradnoise_render::{Execution, RenderConfig, render, render_with_tables};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    cli.apply(&mut config);

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    if cli.compare {
        compare(&config)
    } else {
        render(&config).context("Render failed")?;
        Ok(())
    }
}

/// Renders the same slice serially and in parallel and checks the results agree.
fn compare(config: &RenderConfig) -> anyhow::Result<()> {
    config.validate()?;
    let tables = config
        .build_tables()
        .context("Failed to build noise tables")?;

    let run = |execution: Execution, suffix: &str| {
        let run_config = RenderConfig {
            execution,
            ..config.clone()
        };
        let output = suffixed(&config.output, suffix);
        render_with_tables(&tables, &run_config, &output)
            .with_context(|| format!("{suffix} render failed"))
    };
    let serial = run(Execution::Serial, "serial")?;
    let parallel = run(Execution::Parallel, "parallel")?;

    if !serial.grid.is_bit_identical(&parallel.grid) {
        bail!("Serial and parallel renders differ");
    }
    tracing::info!(
        "Serial and parallel renders match; speedup {:.2}x",
        serial.elapsed.as_secs_f64() / parallel.elapsed.as_secs_f64().max(f64::EPSILON)
    );
    Ok(())
}

/// `out/noise.png` + `serial` -> `out/noise_serial.png`
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    path.with_file_name(name)
}
