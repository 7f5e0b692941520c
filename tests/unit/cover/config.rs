use super::*;
use serde_json::json;

#[test]
fn default_geometry_is_portrait_with_bottom_square() {
    let cfg = CoverConfig::default();
    cfg.validate().unwrap();
    assert_eq!((cfg.width, cfg.height), (1200, 1800));
    assert_eq!(cfg.artwork_origin(), (0, 600));
    assert_eq!(cfg.artwork_size(), 1200);
}

#[test]
fn derived_lengths_match_reference_cover() {
    let cfg = CoverConfig::default();
    assert_eq!(cfg.margin_px(), 36.0);
    assert_eq!(cfg.title_size_px(), 96.0);
    assert_eq!(cfg.subtitle_size_px(), 60.0);
    assert_eq!(cfg.author_size_px(), 72.0);
    assert!((cfg.block_gap_px() - 54.0).abs() < 1e-9);
    assert!((cfg.author_floor_y() - 546.0).abs() < 1e-9);
}

#[test]
fn rejects_landscape_and_square() {
    let cfg = CoverConfig {
        width: 100,
        height: 100,
        ..CoverConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(TapitaError::Validation(_))));
}

#[test]
fn rejects_non_positive_ratios_and_wraps() {
    let cfg = CoverConfig {
        block_gap_ratio: f64::NAN,
        ..CoverConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = CoverConfig {
        title_wrap_cols: 0,
        ..CoverConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = CoverConfig {
        width: 10,
        height: 20,
        ..CoverConfig::default()
    };
    assert!(cfg.validate().is_err(), "0px fonts must be rejected");
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: CoverConfig = serde_json::from_value(json!({
        "width": 120,
        "height": 180,
        "subtitle_measure": "title_text",
        "background": "#000"
    }))
    .unwrap();
    assert_eq!(cfg.width, 120);
    assert_eq!(cfg.title_wrap_cols, 18);
    assert_eq!(cfg.subtitle_measure, SubtitleMeasure::TitleText);
    assert_eq!(cfg.background, Rgb8::new(0, 0, 0));
    cfg.validate().unwrap();
}
