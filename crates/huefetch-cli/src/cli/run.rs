//! `huefetch [save]` – process the URL list.

use anyhow::{Context, Result};
use huefetch_core::config::HuefetchConfig;
use huefetch_core::fetch::CurlFetcher;
use huefetch_core::pipeline;

pub fn run_batch(cfg: &HuefetchConfig, save_images: bool) -> Result<()> {
    let summary = pipeline::run_batch(cfg, save_images, CurlFetcher::new())
        .with_context(|| format!("processing {}", cfg.input_path.display()))?;
    println!(
        "Processed {} line(s): {} written, {} missed, {} blank",
        summary.lines_read, summary.written, summary.missed, summary.blank
    );
    Ok(())
}
