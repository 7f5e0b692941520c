//! Artwork acquisition.
//!
//! The renderer only depends on [`ArtworkSource`]; the HTTP identicon client is one
//! implementation of it.

/// Decoding and resizing of fetched artwork payloads.
pub mod decode;
/// HTTP client for the identicon service.
pub mod identicon;

use image::RgbImage;

use crate::foundation::error::TapitaResult;

/// Capability that produces a square artwork bitmap for a seed.
///
/// Implementations must be deterministic: the same seed yields the same artwork. The returned
/// bitmap should be `size x size`; the renderer resizes anything else to fit.
pub trait ArtworkSource {
    /// Produce the artwork for `seed` at `size x size` pixels.
    fn fetch_artwork(&self, seed: &str, size: u32) -> TapitaResult<RgbImage>;
}

impl<T: ArtworkSource + ?Sized> ArtworkSource for &T {
    fn fetch_artwork(&self, seed: &str, size: u32) -> TapitaResult<RgbImage> {
        (**self).fetch_artwork(seed, size)
    }
}
