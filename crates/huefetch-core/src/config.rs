use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/huefetch/config.toml`.
/// Missing keys take their default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HuefetchConfig {
    /// Text file with one image URL per line.
    pub input_path: PathBuf,
    /// Semicolon-delimited result file (truncated at the start of each run).
    pub output_path: PathBuf,
    /// Directory for `<n>_raw.png` / `<n>_colors.png` when images are saved.
    pub image_dir: PathBuf,
    /// Downsample to 150x150 (nearest neighbor) before quantizing.
    pub resize: bool,
    /// Log batch timing every N processed images; 0 disables reporting.
    pub report_every: u64,
    /// Skip blank / whitespace-only input lines instead of fetching them.
    pub skip_blank_lines: bool,
}

impl Default for HuefetchConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("urls.txt"),
            output_path: PathBuf::from("result.csv"),
            image_dir: PathBuf::from("imgs"),
            resize: true,
            report_every: 100,
            skip_blank_lines: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("huefetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HuefetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HuefetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path (no defaults written).
pub fn load_from(path: &std::path::Path) -> Result<HuefetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: HuefetchConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
