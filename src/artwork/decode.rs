use image::{RgbImage, imageops::FilterType};

use crate::foundation::error::{TapitaError, TapitaResult};

/// Decode an encoded raster (PNG, JPEG, ...) into RGB, resized to exactly `size x size`.
///
/// Alpha is dropped without blending. Images that already have the requested dimensions are
/// returned untouched.
pub fn decode_artwork(bytes: &[u8], size: u32) -> TapitaResult<RgbImage> {
    if size == 0 {
        return Err(TapitaError::validation("artwork size must be > 0"));
    }
    if bytes.is_empty() {
        return Err(TapitaError::fetch("artwork payload is empty"));
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| TapitaError::fetch(format!("decode artwork: {e}")))?;
    Ok(fit_artwork(decoded.to_rgb8(), size))
}

/// Resize `rgb` to exactly `size x size` with a Catmull-Rom filter. Already fitting bitmaps are
/// returned untouched.
pub fn fit_artwork(rgb: RgbImage, size: u32) -> RgbImage {
    if rgb.dimensions() == (size, size) {
        return rgb;
    }

    tracing::debug!(
        from_w = rgb.width(),
        from_h = rgb.height(),
        size,
        "resizing artwork"
    );
    image::imageops::resize(&rgb, size, size, FilterType::CatmullRom)
}

#[cfg(test)]
#[path = "../../tests/unit/artwork/decode.rs"]
mod tests;
