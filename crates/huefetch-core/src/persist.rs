//! Optional per-URL image files: the raw download and a palette swatch.

use image::{ImageFormat, RgbImage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::extract::{Palette, COLOR_COUNT};

/// Edge length of one swatch block; the swatch is `3 * SWATCH_BLOCK` x `SWATCH_BLOCK`.
pub const SWATCH_BLOCK: u32 = 20;

/// Output paths for the URL on input line `ordinal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePaths {
    /// `<dir>/<ordinal>_raw.png`, the fetched bytes verbatim (whatever their real format).
    pub raw: PathBuf,
    /// `<dir>/<ordinal>_colors.png`, the rendered swatch.
    pub colors: PathBuf,
}

pub fn image_paths(dir: &Path, ordinal: usize) -> ImagePaths {
    ImagePaths {
        raw: dir.join(format!("{}_raw.png", ordinal)),
        colors: dir.join(format!("{}_colors.png", ordinal)),
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to save raw image {}", path.display())]
    Raw {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to save palette swatch {}", path.display())]
    Swatch {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Write the fetched bytes unchanged, replacing any previous file.
pub fn save_raw(path: &Path, bytes: &[u8]) -> Result<(), PersistError> {
    fs::write(path, bytes).map_err(|source| PersistError::Raw {
        path: path.to_path_buf(),
        source,
    })
}

/// Three adjacent solid blocks, most dominant color leftmost.
pub fn render_swatch(palette: &Palette) -> RgbImage {
    let colors = palette.colors();
    RgbImage::from_fn(SWATCH_BLOCK * COLOR_COUNT as u32, SWATCH_BLOCK, |x, _| {
        let c = colors[(x / SWATCH_BLOCK) as usize];
        image::Rgb([c.r, c.g, c.b])
    })
}

pub fn save_swatch(path: &Path, palette: &Palette) -> Result<(), PersistError> {
    render_swatch(palette)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| PersistError::Swatch {
            path: path.to_path_buf(),
            source,
        })
}
