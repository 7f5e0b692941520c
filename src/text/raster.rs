use std::path::Path;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{TapitaError, TapitaResult};
use crate::render::canvas::Canvas;
use crate::text::device::{TextDevice, TextExtent};
use crate::text::shaper::{TextBrushRgba8, TextShaper};

const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");

/// [`TextDevice`] that shapes with parley and rasterizes glyph outlines with vello_cpu.
pub struct ParleyTextDevice {
    shaper: TextShaper,
    font: vello_cpu::peniko::FontData,
}

impl ParleyTextDevice {
    /// Build a device from TrueType/OpenType font bytes.
    pub fn from_bytes(font_bytes: Vec<u8>) -> TapitaResult<Self> {
        let shaper = TextShaper::new(&font_bytes)?;
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        tracing::debug!(family = shaper.family_name(), "font registered");
        Ok(Self { shaper, font })
    }

    /// Read a font file from disk.
    pub fn from_path(path: &Path) -> TapitaResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            TapitaError::render(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    /// Device using the font shipped with the crate (DejaVu Sans Mono).
    pub fn bundled() -> TapitaResult<Self> {
        Self::from_bytes(BUNDLED_FONT.to_vec())
    }

    /// Family name of the loaded font.
    pub fn family_name(&self) -> &str {
        self.shaper.family_name()
    }
}

impl ParleyTextDevice {
    /// Ink bounds of `layout` relative to the layout origin, or `None` when nothing is inked.
    ///
    /// The block is rasterized into a scratch layer padded by one em on every side and the
    /// covered pixels are scanned, so the result is the smallest pixel rectangle around the glyphs.
    fn ink_bounds(
        &self,
        layout: &parley::Layout<TextBrushRgba8>,
        size_px: f32,
    ) -> TapitaResult<Option<InkBounds>> {
        let pad = size_px.ceil();
        let width = layer_dim(layout.width() + 2.0 * pad)?;
        let height = layer_dim(layout.height() + 2.0 * pad)?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(pad),
            f64::from(pad),
        )));
        fill_layout(&mut ctx, &self.font, layout);
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut layer);

        let stride = usize::from(width);
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (i, px) in layer.data_as_u8_slice().chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let (x, y) = (i % stride, i / stride);
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
            });
        }

        Ok(bounds.map(|(l, t, r, b)| InkBounds {
            top: t as f32 - pad,
            width: (r - l + 1) as f32,
            height: (b - t + 1) as f32,
        }))
    }
}

impl TextDevice for ParleyTextDevice {
    /// Size of the inked bounding box, not of the line boxes.
    fn measure(&mut self, text: &str, size_px: f32) -> TapitaResult<TextExtent> {
        // Any opaque brush; only coverage matters.
        let layout = self
            .shaper
            .layout_plain(text, size_px, TextBrushRgba8::from(Rgb8::WHITE))?;
        Ok(self
            .ink_bounds(&layout, size_px)?
            .map(|ink| TextExtent {
                width: ink.width,
                height: ink.height,
            })
            .unwrap_or_default())
    }

    /// Draws so that the top of the inked box sits on `y`.
    fn draw(
        &mut self,
        canvas: &mut Canvas,
        x: f32,
        y: f32,
        text: &str,
        size_px: f32,
        color: Rgb8,
    ) -> TapitaResult<()> {
        let layout = self
            .shaper
            .layout_plain(text, size_px, TextBrushRgba8::from(color))?;
        let ink_top = self
            .ink_bounds(&layout, size_px)?
            .map_or(0.0, |ink| ink.top);

        let width: u16 = canvas
            .width()
            .try_into()
            .map_err(|_| TapitaError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height()
            .try_into()
            .map_err(|_| TapitaError::render("canvas height exceeds u16"))?;

        // vello_cpu renders into a fresh buffer, so glyphs go to a transparent layer that is
        // blended onto the canvas afterwards.
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(x),
            f64::from(y - ink_top),
        )));
        fill_layout(&mut ctx, &self.font, &layout);
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut layer);

        canvas.composite_premul_rgba(
            layer.data_as_u8_slice(),
            u32::from(width),
            u32::from(height),
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct InkBounds {
    top: f32,
    width: f32,
    height: f32,
}

fn layer_dim(v: f32) -> TapitaResult<u16> {
    let v = v.ceil().max(1.0);
    if v > f32::from(u16::MAX) {
        return Err(TapitaError::render("text block exceeds 65535px"));
    }
    Ok(v as u16)
}

fn fill_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let baseline = run.baseline();
            let mut pen_x = run.offset();
            let glyphs = run.glyphs().map(|g| {
                let glyph = vello_cpu::Glyph {
                    id: g.id,
                    x: pen_x + g.x,
                    y: baseline - g.y,
                };
                pen_x += g.advance;
                glyph
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

impl std::fmt::Debug for ParleyTextDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyTextDevice")
            .field("family_name", &self.family_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/raster.rs"]
mod tests;
