//! Vertical flow of the cover text.
//!
//! Title and subtitle flow top-down from the margin on a single cursor. The author line does not
//! take part in the flow: it is anchored so that it ends a fixed distance above the artwork.
//! Planning only measures; [`draw_layout`] paints a finished plan.

use serde::Serialize;

use crate::cover::config::{CoverConfig, SubtitleMeasure};
use crate::cover::request::CoverRequest;
use crate::foundation::core::Rgb8;
use crate::foundation::error::TapitaResult;
use crate::layout::wrap::wrap_block;
use crate::render::canvas::Canvas;
use crate::text::device::TextDevice;

/// Which part of the cover a block holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockRole {
    /// Wrapped title.
    Title,
    /// Wrapped subtitle.
    Subtitle,
    /// Single-line author.
    Author,
}

/// A positioned text block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextBlock {
    /// Role of the block.
    pub role: BlockRole,
    /// Text to draw, lines separated by `\n`.
    pub text: String,
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Font size in pixels.
    pub size_px: f32,
    /// Height used to advance the cursor (or to anchor the author line).
    pub height: f64,
}

impl TextBlock {
    /// Bottom edge in pixels.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Result of laying out one cover.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextLayoutPlan {
    /// Blocks in draw order: title, optional subtitle, author.
    pub blocks: Vec<TextBlock>,
    /// Flow cursor after the last flowing block, gap included.
    pub cursor_y: f64,
}

impl TextLayoutPlan {
    /// First block with the given role.
    pub fn block(&self, role: BlockRole) -> Option<&TextBlock> {
        self.blocks.iter().find(|b| b.role == role)
    }

    /// Whether the flowing blocks reach below the top of the author line.
    pub fn flow_overlaps_author(&self) -> bool {
        let Some(author) = self.block(BlockRole::Author) else {
            return false;
        };
        self.blocks
            .iter()
            .filter(|b| b.role != BlockRole::Author)
            .any(|b| b.bottom() > author.y)
    }
}

/// Measure and position every text block of `request`.
pub fn plan_layout(
    request: &CoverRequest,
    config: &CoverConfig,
    device: &mut dyn TextDevice,
) -> TapitaResult<TextLayoutPlan> {
    let x = config.margin_px();
    let mut y = config.margin_px() * 2.0;
    let gap = config.block_gap_px();
    let mut blocks = Vec::with_capacity(3);

    let title_text = wrap_block(request.title(), config.title_wrap_cols);
    let title_size = config.title_size_px();
    let title_height = f64::from(device.measure(&title_text, title_size)?.height);
    blocks.push(TextBlock {
        role: BlockRole::Title,
        text: title_text.clone(),
        x,
        y,
        size_px: title_size,
        height: title_height,
    });
    y += title_height + gap;

    if let Some(subtitle) = request.subtitle() {
        let text = wrap_block(subtitle, config.subtitle_wrap_cols);
        let size_px = config.subtitle_size_px();
        let extent = match config.subtitle_measure {
            SubtitleMeasure::SubtitleText => device.measure(&text, size_px)?,
            SubtitleMeasure::TitleText => device.measure(&title_text, title_size)?,
        };
        let height = f64::from(extent.height);
        blocks.push(TextBlock {
            role: BlockRole::Subtitle,
            text,
            x,
            y,
            size_px,
            height,
        });
        y += height + gap;
    }

    let author_size = config.author_size_px();
    let author_height = f64::from(device.measure(request.author(), author_size)?.height);
    blocks.push(TextBlock {
        role: BlockRole::Author,
        text: request.author().to_owned(),
        x,
        y: config.author_floor_y() - author_height,
        size_px: author_size,
        height: author_height,
    });

    let plan = TextLayoutPlan { blocks, cursor_y: y };
    for b in &plan.blocks {
        tracing::debug!(role = ?b.role, x = b.x, y = b.y, height = b.height, "text block");
    }
    if plan.flow_overlaps_author() {
        tracing::warn!(
            cursor_y = plan.cursor_y,
            "title/subtitle run into the author line; text will overlap"
        );
    }
    Ok(plan)
}

/// Draw every block of `plan` onto `canvas` in `color`.
pub fn draw_layout(
    plan: &TextLayoutPlan,
    canvas: &mut Canvas,
    device: &mut dyn TextDevice,
    color: Rgb8,
) -> TapitaResult<()> {
    for b in &plan.blocks {
        device.draw(canvas, b.x as f32, b.y as f32, &b.text, b.size_px, color)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
