//! Image decoding for texture upload.

use std::path::Path;

use anyhow::{Context, Result};
use image::GenericImageView;

/// Largest edge of a decoded quiz image; bigger inputs are downscaled
/// before texture upload.
const MAX_TEXTURE_DIMENSION: f32 = 1024.0;

pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_image_file(path: &Path) -> Result<DecodedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let (orig_w, orig_h) = decoded.dimensions();
    let scale = (MAX_TEXTURE_DIMENSION / (orig_w.max(orig_h) as f32)).min(1.0);
    let resized = if scale < 1.0 {
        decoded.resize(
            (orig_w as f32 * scale).max(1.0) as u32,
            (orig_h as f32 * scale).max(1.0) as u32,
            image::imageops::FilterType::Triangle,
        )
    } else {
        decoded
    };
    let rgba = resized.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}
