use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{TapitaError, TapitaResult};
use crate::foundation::math::mul_div255_u8;

/// Mutable RGB raster the cover is composed on.
///
/// A canvas starts black, like a freshly allocated image; the pipeline fills the background
/// before anything else is drawn.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Rgb8::new(p.0[0], p.0[1], p.0[2]))
    }

    /// Borrow the underlying raster.
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas, returning the raster.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Fill the whole canvas with `color`.
    pub fn fill_background(&mut self, color: Rgb8) {
        let px = image::Rgb::from(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Copy `bitmap` with its top-left corner at `(x, y)`. Parts outside the canvas are dropped.
    pub fn paste_artwork(&mut self, bitmap: &RgbImage, x: u32, y: u32) {
        image::imageops::replace(&mut self.image, bitmap, i64::from(x), i64::from(y));
    }

    /// Source-over blend a premultiplied RGBA8 layer that covers the full canvas.
    pub fn composite_premul_rgba(
        &mut self,
        layer: &[u8],
        width: u32,
        height: u32,
    ) -> TapitaResult<()> {
        if width != self.width() || height != self.height() {
            return Err(TapitaError::render(format!(
                "layer is {width}x{height}, canvas is {}x{}",
                self.width(),
                self.height()
            )));
        }
        let expected = (width as usize) * (height as usize) * 4;
        if layer.len() != expected {
            return Err(TapitaError::render("layer byte len mismatch"));
        }

        for (d, s) in self.image.pixels_mut().zip(layer.chunks_exact(4)) {
            let sa = u16::from(s[3]);
            if sa == 0 {
                continue;
            }
            let inv = 255u16 - sa;
            for c in 0..3 {
                let dc = mul_div255_u8(u16::from(d.0[c]), inv);
                d.0[c] = s[c].saturating_add(dc);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
