use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{TapitaError, TapitaResult};

/// How the subtitle block height is measured before advancing the layout cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtitleMeasure {
    /// Measure the wrapped subtitle with the subtitle font.
    #[default]
    SubtitleText,
    /// Re-measure the wrapped title with the title font at the subtitle position.
    ///
    /// This is how the first generation of covers was laid out; kept so old covers can be
    /// reproduced exactly.
    TitleText,
}

/// Immutable cover geometry and typography.
///
/// The defaults describe the 1200x1800 portrait cover. Every field is optional when
/// deserializing, so a config file only needs the values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Canvas width in pixels. The artwork square has this side length.
    pub width: u32,
    /// Canvas height in pixels. Must exceed `width`.
    pub height: u32,
    /// Margin as a percentage of the canvas height.
    pub margin_pct: f64,
    /// Title font size as a fraction of the width.
    pub title_size_ratio: f64,
    /// Subtitle font size as a fraction of the width.
    pub subtitle_size_ratio: f64,
    /// Author font size as a fraction of the width.
    pub author_size_ratio: f64,
    /// Wrap width of the title, in characters.
    pub title_wrap_cols: usize,
    /// Wrap width of the subtitle, in characters.
    pub subtitle_wrap_cols: usize,
    /// Vertical gap after each flowing block, as a fraction of the height.
    pub block_gap_ratio: f64,
    /// The author line ends at `height * author_floor_ratio - width`.
    pub author_floor_ratio: f64,
    /// Canvas background.
    pub background: Rgb8,
    /// Text color.
    pub foreground: Rgb8,
    /// Subtitle height measurement mode.
    pub subtitle_measure: SubtitleMeasure,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1800,
            margin_pct: 2.0,
            title_size_ratio: 0.08,
            subtitle_size_ratio: 0.05,
            author_size_ratio: 0.06,
            title_wrap_cols: 18,
            subtitle_wrap_cols: 70,
            block_gap_ratio: 0.03,
            author_floor_ratio: 0.97,
            background: Rgb8::WHITE,
            foreground: Rgb8::new(50, 50, 50),
            subtitle_measure: SubtitleMeasure::default(),
        }
    }
}

impl CoverConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_path(path: &Path) -> TapitaResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check geometry and typography invariants.
    pub fn validate(&self) -> TapitaResult<()> {
        if self.width == 0 {
            return Err(TapitaError::validation("cover width must be > 0"));
        }
        if self.height <= self.width {
            return Err(TapitaError::validation(format!(
                "cover must be portrait (height {} <= width {})",
                self.height, self.width
            )));
        }
        // vello_cpu pixmaps are addressed with u16.
        if self.height > u32::from(u16::MAX) {
            return Err(TapitaError::validation("cover height exceeds 65535"));
        }

        let ratios = [
            ("margin_pct", self.margin_pct),
            ("title_size_ratio", self.title_size_ratio),
            ("subtitle_size_ratio", self.subtitle_size_ratio),
            ("author_size_ratio", self.author_size_ratio),
            ("block_gap_ratio", self.block_gap_ratio),
            ("author_floor_ratio", self.author_floor_ratio),
        ];
        for (name, v) in ratios {
            if !v.is_finite() || v <= 0.0 {
                return Err(TapitaError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for size in [
            self.title_size_px(),
            self.subtitle_size_px(),
            self.author_size_px(),
        ] {
            if size < 1.0 {
                return Err(TapitaError::validation(
                    "font sizes must resolve to at least 1px",
                ));
            }
        }

        if self.title_wrap_cols == 0 || self.subtitle_wrap_cols == 0 {
            return Err(TapitaError::validation("wrap widths must be > 0"));
        }
        Ok(())
    }

    /// Margin in pixels: `height * margin_pct / 100`.
    pub fn margin_px(&self) -> f64 {
        f64::from(self.height) * self.margin_pct / 100.0
    }

    /// Title font size, truncated to whole pixels.
    pub fn title_size_px(&self) -> f32 {
        size_px(self.width, self.title_size_ratio)
    }

    /// Subtitle font size, truncated to whole pixels.
    pub fn subtitle_size_px(&self) -> f32 {
        size_px(self.width, self.subtitle_size_ratio)
    }

    /// Author font size, truncated to whole pixels.
    pub fn author_size_px(&self) -> f32 {
        size_px(self.width, self.author_size_ratio)
    }

    /// Gap inserted after the title and subtitle blocks.
    pub fn block_gap_px(&self) -> f64 {
        self.block_gap_ratio * f64::from(self.height)
    }

    /// Y coordinate the bottom of the author line sits on.
    pub fn author_floor_y(&self) -> f64 {
        f64::from(self.height) * self.author_floor_ratio - f64::from(self.width)
    }

    /// Top-left corner of the artwork square: flush left, flush bottom.
    pub fn artwork_origin(&self) -> (u32, u32) {
        (0, self.height - self.width)
    }

    /// Side length of the artwork square.
    pub fn artwork_size(&self) -> u32 {
        self.width
    }
}

fn size_px(width: u32, ratio: f64) -> f32 {
    (f64::from(width) * ratio).trunc() as f32
}

#[cfg(test)]
#[path = "../../tests/unit/cover/config.rs"]
mod tests;
