// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House-Lite CLI - generate a building and dump the document as JSON.
//!
//! The document is seeded with the levels and catalog types the
//! configuration names, the generator runs once, and the resulting document
//! is written to stdout or `--output`. Logs go to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use house_lite_document::MemoryDocument;
use house_lite_engine::{seed_template, GenerationConfig, Orchestrator};
use tracing_subscriber::EnvFilter;

mod config;

use config::{EnvConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "house-lite")]
#[command(about = "Generate a rectangular building with door, windows and gable roof", long_about = None)]
struct Cli {
    /// JSON configuration file; unspecified fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Envelope width in meters
    #[arg(long)]
    width: Option<f64>,

    /// Envelope depth in meters
    #[arg(long)]
    depth: Option<f64>,

    /// Wall height in meters
    #[arg(long)]
    height: Option<f64>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the generation report to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn generation_config(&self) -> anyhow::Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_path(path)?,
            None => GenerationConfig::default(),
        };
        if let Some(width) = self.width {
            config.width_m = width;
        }
        if let Some(depth) = self.depth {
            config.depth_m = depth;
        }
        if let Some(height) = self.height {
            config.wall_height_m = height;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn write_output(path: Option<&PathBuf>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env = EnvConfig::from_env();
    init_logging(env.log_format);

    let config = cli.generation_config().context("loading configuration")?;
    tracing::info!(
        width_m = config.width_m,
        depth_m = config.depth_m,
        wall_height_m = config.wall_height_m,
        "Starting House-Lite generation"
    );

    let mut doc = MemoryDocument::new();
    seed_template(&mut doc, &config);

    let report = Orchestrator::new(config)
        .run(&mut doc)
        .context("generating building")?;

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        write_output(Some(path), &json)?;
    }

    let json = doc.to_json()?;
    let output = cli.output.or(env.output);
    write_output(output.as_ref(), &json)?;

    tracing::info!(elements = doc.len(), "Document written");
    Ok(())
}
