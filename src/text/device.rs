use crate::foundation::core::Rgb8;
use crate::foundation::error::TapitaResult;
use crate::render::canvas::Canvas;

/// Bounding box of the inked pixels of a text block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Width of the inked area, in pixels.
    pub width: f32,
    /// Height of the inked area, in pixels.
    pub height: f32,
}

/// Something that can measure and draw text at a given pixel size.
///
/// `text` may contain `\n`; each segment is a separate line. Measurements are ink bounds: the
/// smallest rectangle around the drawn glyphs. `draw` places the top of that rectangle on `y`, so
/// a block drawn at `y` ends at `y + measure(..).height`.
pub trait TextDevice {
    /// Measure the block `text` would occupy at `size_px`.
    fn measure(&mut self, text: &str, size_px: f32) -> TapitaResult<TextExtent>;

    /// Draw `text` onto `canvas` starting at `x`, with the top of its ink on `y`.
    fn draw(
        &mut self,
        canvas: &mut Canvas,
        x: f32,
        y: f32,
        text: &str,
        size_px: f32,
        color: Rgb8,
    ) -> TapitaResult<()>;
}

impl<T: TextDevice + ?Sized> TextDevice for &mut T {
    fn measure(&mut self, text: &str, size_px: f32) -> TapitaResult<TextExtent> {
        (**self).measure(text, size_px)
    }

    fn draw(
        &mut self,
        canvas: &mut Canvas,
        x: f32,
        y: f32,
        text: &str,
        size_px: f32,
        color: Rgb8,
    ) -> TapitaResult<()> {
        (**self).draw(canvas, x, y, text, size_px, color)
    }
}
