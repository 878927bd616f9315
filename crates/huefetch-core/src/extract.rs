//! Dominant color extraction.
//!
//! Decodes fetched bytes with the `image` crate, optionally downsamples to a
//! fixed 150x150 (nearest neighbor) and runs the modified median-cut quantizer
//! from `color_thief` for a 3-color palette at quality 10.
//!
//! `color_thief` walks pixels with a stride of `quality` times the channel
//! count, so the every-10th-pixel sampling is done here and the quantizer is
//! run at quality 1 over a buffer laid out to land on each sample once.

use color_thief::ColorFormat;
use image::imageops::FilterType;
use image::DynamicImage;
use std::fmt;
use thiserror::Error;

/// Edge length images are resized to before quantization.
pub const RESIZE_DIM: u32 = 150;
/// Pixel sampling stride: every 10th pixel of the prepared image is counted.
pub const QUALITY: u8 = 10;
/// Number of dominant colors per image.
pub const COLOR_COUNT: usize = 3;

const RGBA_CHANNELS: usize = 4;

/// 8-bit sRGB color. Displays as `r,g,b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Exactly three colors, most dominant first. Displays as `r,g,b;r,g,b;r,g,b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([Rgb; COLOR_COUNT]);

impl Palette {
    pub const fn new(colors: [Rgb; COLOR_COUNT]) -> Self {
        Self(colors)
    }

    /// Build from a quantizer ranking: keeps the first three entries and pads a
    /// short ranking by repeating its last color. `None` for an empty ranking.
    pub fn from_ranked(ranked: &[Rgb]) -> Option<Self> {
        let last = *ranked.last()?;
        let mut colors = [last; COLOR_COUNT];
        for (slot, color) in colors.iter_mut().zip(ranked) {
            *slot = *color;
        }
        Some(Self(colors))
    }

    pub fn colors(&self) -> &[Rgb; COLOR_COUNT] {
        &self.0
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "{};{};{}", a, b, c)
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("image decode failed")]
    Decode(#[from] image::ImageError),
    #[error("color quantization failed: {0}")]
    Quantize(String),
}

/// Decode an image from memory; the format is sniffed from the content.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, ExtractError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Downsample to exactly [`RESIZE_DIM`]² when `resize` is set; otherwise hand the image back.
pub fn prepare(img: DynamicImage, resize: bool) -> DynamicImage {
    if resize {
        img.resize_exact(RESIZE_DIM, RESIZE_DIM, FilterType::Nearest)
    } else {
        img
    }
}

/// Every [`QUALITY`]-th RGBA pixel, each repeated [`RGBA_CHANNELS`] times so
/// that a quality-1 pass of the quantizer visits every sample exactly once.
fn sample_pixels(rgba: &[u8]) -> Vec<u8> {
    let samples = rgba
        .chunks_exact(RGBA_CHANNELS)
        .step_by(QUALITY as usize);
    let mut buf = Vec::with_capacity(samples.len() * RGBA_CHANNELS * RGBA_CHANNELS);
    for px in samples {
        for _ in 0..RGBA_CHANNELS {
            buf.extend_from_slice(px);
        }
    }
    buf
}

/// Same filter the quantizer applies: mostly opaque and not near-white.
fn is_usable(px: &[u8]) -> bool {
    let (r, g, b, a) = (px[0], px[1], px[2], px[3]);
    a >= 125 && !(r > 250 && g > 250 && b > 250)
}

/// Quantize an already prepared image into its three dominant colors.
///
/// Fails with [`ExtractError::Quantize`] when no sampled pixel survives the
/// transparency / near-white filter.
pub fn palette_of(img: &DynamicImage) -> Result<Palette, ExtractError> {
    let pixels = img.to_rgba8();
    let sampled = sample_pixels(pixels.as_raw());
    if !sampled.chunks_exact(RGBA_CHANNELS).any(is_usable) {
        return Err(ExtractError::Quantize(
            "no usable pixels (all transparent or near-white)".to_string(),
        ));
    }

    let colors = color_thief::get_palette(&sampled, ColorFormat::Rgba, 1, COLOR_COUNT as u8)
        .map_err(|e| ExtractError::Quantize(format!("{:?}", e)))?;

    let ranked: Vec<Rgb> = colors.iter().map(|c| Rgb::new(c.r, c.g, c.b)).collect();
    if ranked.len() < COLOR_COUNT {
        tracing::debug!(returned = ranked.len(), "short palette, padding");
    }
    Palette::from_ranked(&ranked)
        .ok_or_else(|| ExtractError::Quantize("quantizer returned no colors".to_string()))
}
