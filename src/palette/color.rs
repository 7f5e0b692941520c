//! Deterministic palette derivation from the cover text.
//!
//! The only input is the combined character count of title and author, so two books with the
//! same text lengths share a palette. Results are bit-for-bit reproducible: the hue map runs in
//! `f64` and truncates, and HSV conversion rounds each channel with `floor(x * 255 + 0.5)`.

use serde::Serialize;

use crate::foundation::core::Rgb8;
use crate::foundation::math::{clip, map_range};

const COUNTS_MIN: usize = 2;
const COUNTS_MAX: usize = 80;
const HUE_MIN: f64 = 10.0;
const HUE_MAX: f64 = 360.0;

const BASE_SATURATION: f64 = 100.0;
const BASE_BRIGHTNESS: f64 = 90.0;
const COLOR_DISTANCE: u32 = 100;

/// Two complementary colors derived from a title/author pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Combined character count of title and author, before clipping.
    pub counts: usize,
    /// Hue in degrees, `10..=360`.
    pub color_seed: u32,
    /// Accent color: hue `color_seed`, brightness reduced by `counts % 20`.
    pub shape_color: Rgb8,
    /// Base color: hue rotated by 100 degrees, full brightness.
    pub base_color: Rgb8,
}

impl Palette {
    /// Hue of [`Palette::base_color`], always in `[0, 360)`.
    pub fn base_hue(&self) -> u32 {
        (self.color_seed + COLOR_DISTANCE) % 360
    }
}

/// Derive the cover palette. Total over any input, including empty strings.
pub fn derive_palette(title: &str, author: &str) -> Palette {
    let counts = title.chars().count() + author.chars().count();
    let color_seed = color_seed_for_counts(counts);

    let shape_brightness = BASE_BRIGHTNESS - (counts % 20) as f64;
    let shape_color = hsv_to_rgb(f64::from(color_seed), BASE_SATURATION, shape_brightness);
    let base_hue = (color_seed + COLOR_DISTANCE) % 360;
    let base_color = hsv_to_rgb(f64::from(base_hue), BASE_SATURATION, BASE_BRIGHTNESS);

    Palette {
        counts,
        color_seed,
        shape_color,
        base_color,
    }
}

/// Map a character count onto a hue in `[10, 360]`, clipping the count to `[2, 80]` first.
pub fn color_seed_for_counts(counts: usize) -> u32 {
    let clipped = clip(counts, COUNTS_MIN, COUNTS_MAX);
    let hue = map_range(
        clipped as f64,
        COUNTS_MIN as f64,
        COUNTS_MAX as f64,
        HUE_MIN,
        HUE_MAX,
    );
    hue.trunc() as u32
}

/// Convert HSV (hue in degrees, saturation and value in percent) to 8-bit RGB.
pub fn hsv_to_rgb(hue_deg: f64, saturation_pct: f64, value_pct: f64) -> Rgb8 {
    let h = hue_deg / 360.0;
    let s = saturation_pct / 100.0;
    let v = value_pct / 100.0;

    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let sector = (h * 6.0).trunc();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };

    fn to_u8(x: f64) -> u8 {
        (x * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
    }

    Rgb8::new(to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
#[path = "../../tests/unit/palette/color.rs"]
mod tests;
