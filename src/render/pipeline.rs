use image::RgbImage;

use crate::artwork::ArtworkSource;
use crate::artwork::decode::fit_artwork;
use crate::cover::config::CoverConfig;
use crate::cover::request::CoverRequest;
use crate::foundation::error::TapitaResult;
use crate::layout::plan::{TextLayoutPlan, draw_layout, plan_layout};
use crate::palette::color::{Palette, derive_palette};
use crate::render::canvas::Canvas;
use crate::text::device::TextDevice;

/// A finished cover.
#[derive(Clone, Debug)]
pub struct RenderedCover {
    /// Final RGB raster, `width x height`.
    pub image: RgbImage,
    /// Palette derived from the title and author.
    ///
    /// Not applied to the raster; returned so callers can reuse it (page accents, thumbnails).
    pub palette: Palette,
    /// Text layout that was drawn.
    pub layout: TextLayoutPlan,
}

impl RenderedCover {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Render one cover.
///
/// Stages run in order: palette, background, artwork, text. Any failure aborts the whole render;
/// no partially drawn cover is ever returned. The text device and artwork source are the only
/// external collaborators, which keeps the function free of hidden IO.
#[tracing::instrument(skip_all, fields(title = %request.title()))]
pub fn render_cover(
    request: &CoverRequest,
    config: &CoverConfig,
    text: &mut dyn TextDevice,
    artwork: &dyn ArtworkSource,
) -> TapitaResult<RenderedCover> {
    config.validate()?;

    let palette = derive_palette(request.title(), request.author());
    tracing::debug!(
        counts = palette.counts,
        color_seed = palette.color_seed,
        shape_color = %palette.shape_color.to_hex(),
        base_color = %palette.base_color.to_hex(),
        "derived palette"
    );

    let mut canvas = Canvas::new(config.width, config.height);
    canvas.fill_background(config.background);

    let size = config.artwork_size();
    let art = fit_artwork(artwork.fetch_artwork(request.title(), size)?, size);
    let (art_x, art_y) = config.artwork_origin();
    canvas.paste_artwork(&art, art_x, art_y);

    let layout = plan_layout(request, config, text)?;
    draw_layout(&layout, &mut canvas, text, config.foreground)?;

    tracing::info!(
        width = config.width,
        height = config.height,
        blocks = layout.blocks.len(),
        "cover rendered"
    );
    Ok(RenderedCover {
        image: canvas.into_image(),
        palette,
        layout,
    })
}
