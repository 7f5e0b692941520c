//! tapita renders book covers.
//!
//! A cover is a portrait page with the title, an optional subtitle and the author laid out from
//! the top margin, and a square identicon artwork seeded by the title filling the bottom of the
//! page.
//!
//! # Pipeline overview
//!
//! 1. **Palette**: title and author lengths map to two complementary colors ([`derive_palette`]).
//! 2. **Canvas**: the page is filled with the background color ([`Canvas`]).
//! 3. **Artwork**: an [`ArtworkSource`] produces a `width x width` bitmap pasted at
//!    `(0, height - width)`.
//! 4. **Text**: [`plan_layout`] wraps and positions the blocks, [`draw_layout`] paints them through
//!    a [`TextDevice`].
//!
//! [`render_cover`] runs all four stages and returns a [`RenderedCover`]; [`write_png`] persists it.
//!
//! Rendering is deterministic for a given request, config, font and artwork. The only IO the
//! library performs is the artwork fetch and whatever the caller's [`TextDevice`] does.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Artwork sources and the identicon HTTP client.
pub mod artwork;
/// Cover request and configuration types.
pub mod cover;
/// Text wrapping and block layout.
pub mod layout;
/// Color derivation from cover text.
pub mod palette;
/// Canvas, pipeline and PNG output.
pub mod render;
/// Text measurement and rasterization.
pub mod text;

pub use artwork::ArtworkSource;
pub use artwork::decode::{decode_artwork, fit_artwork};
pub use artwork::identicon::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_IDENTICON_URL, IdenticonClient, IdenticonOpts, identicon_url,
};
pub use cover::config::{CoverConfig, SubtitleMeasure};
pub use cover::request::CoverRequest;
pub use foundation::core::Rgb8;
pub use foundation::error::{TapitaError, TapitaResult};
pub use foundation::math::{clip, map_range};
pub use layout::plan::{BlockRole, TextBlock, TextLayoutPlan, draw_layout, plan_layout};
pub use layout::wrap::{wrap_block, wrap_text};
pub use palette::color::{Palette, color_seed_for_counts, derive_palette, hsv_to_rgb};
pub use render::canvas::Canvas;
pub use render::output::{OutputTarget, encode_png, write_png};
pub use render::pipeline::{RenderedCover, render_cover};
pub use text::device::{TextDevice, TextExtent};
pub use text::raster::ParleyTextDevice;
pub use text::shaper::{TextBrushRgba8, TextShaper};
