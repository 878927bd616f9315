//! CLI for huefetch.

mod run;

use anyhow::Result;
use clap::Parser;
use huefetch_core::config::{self, HuefetchConfig};
use std::path::PathBuf;

pub use run::run_batch;

/// Mode value that turns on saving raw images and palette swatches.
pub const SAVE_MODE: &str = "save";

/// Fetch images listed in a file and record their three dominant colors.
#[derive(Debug, Parser)]
#[command(name = "huefetch")]
#[command(about = "huefetch: dominant colors for a list of image URLs", long_about = None)]
pub struct Cli {
    /// Pass `save` to also store each raw image and its palette swatch.
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// URL list, one per line (default from config: urls.txt).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Result file (default from config: result.csv).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for saved images (default from config: imgs).
    #[arg(long, value_name = "DIR")]
    pub image_dir: Option<PathBuf>,

    /// Quantize at full resolution instead of downsampling to 150x150.
    #[arg(long)]
    pub no_resize: bool,

    /// Log file (default: <program name>.log in the working directory).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read config from this file instead of ~/.config/huefetch/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn save_images(&self) -> bool {
        self.mode.as_deref() == Some(SAVE_MODE)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, cfg: &mut HuefetchConfig) {
        if let Some(p) = &self.input {
            cfg.input_path = p.clone();
        }
        if let Some(p) = &self.output {
            cfg.output_path = p.clone();
        }
        if let Some(p) = &self.image_dir {
            cfg.image_dir = p.clone();
        }
        if self.no_resize {
            cfg.resize = false;
        }
    }

    fn load_config(&self) -> Result<HuefetchConfig> {
        if let Some(path) = &self.config {
            return config::load_from(path);
        }
        match config::load_or_init() {
            Ok(cfg) => Ok(cfg),
            Err(err) => {
                tracing::warn!("config unavailable ({:#}), using defaults", err);
                Ok(HuefetchConfig::default())
            }
        }
    }

    pub fn run(&self) -> Result<()> {
        let mut cfg = self.load_config()?;
        self.apply_overrides(&mut cfg);
        tracing::debug!("effective config: {:?}", cfg);
        run_batch(&cfg, self.save_images())
    }
}

#[cfg(test)]
mod tests;
