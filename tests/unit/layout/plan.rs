use super::*;
use crate::text::device::TextExtent;

/// Monospace stand-in: every glyph is 0.6em wide, every line 1.25em tall.
#[derive(Default)]
struct GridDevice {
    draws: Vec<(f32, f32, String, f32, Rgb8)>,
}

impl TextDevice for GridDevice {
    fn measure(&mut self, text: &str, size_px: f32) -> TapitaResult<TextExtent> {
        let lines = text.split('\n').count() as f32;
        let widest = text.split('\n').map(|l| l.chars().count()).max().unwrap_or(0) as f32;
        Ok(TextExtent {
            width: widest * size_px * 0.6,
            height: lines * size_px * 1.25,
        })
    }

    fn draw(
        &mut self,
        _canvas: &mut Canvas,
        x: f32,
        y: f32,
        text: &str,
        size_px: f32,
        color: Rgb8,
    ) -> TapitaResult<()> {
        self.draws.push((x, y, text.to_owned(), size_px, color));
        Ok(())
    }
}

fn req(title: &str, subtitle: Option<&str>, author: &str) -> CoverRequest {
    CoverRequest::new(title, subtitle.map(str::to_owned), author).unwrap()
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "{a} != {b}");
}

#[test]
fn single_line_title_without_subtitle() {
    let cfg = CoverConfig::default();
    let mut dev = GridDevice::default();
    let plan = plan_layout(&req("Hello", None, "World"), &cfg, &mut dev).unwrap();

    assert_eq!(plan.blocks.len(), 2);
    let title = plan.block(BlockRole::Title).unwrap();
    approx(title.x, 36.0);
    approx(title.y, 72.0);
    assert_eq!(title.size_px, 96.0);
    approx(title.height, 120.0);

    // No subtitle: the cursor stops right after the title gap.
    approx(plan.cursor_y, 72.0 + 120.0 + 54.0);
    assert!(plan.block(BlockRole::Subtitle).is_none());

    let author = plan.block(BlockRole::Author).unwrap();
    assert_eq!(author.size_px, 72.0);
    approx(author.height, 90.0);
    approx(author.y, 1746.0 - 1200.0 - 90.0);
    approx(author.bottom(), cfg.author_floor_y());
}

#[test]
fn subtitle_flows_below_title() {
    let cfg = CoverConfig::default();
    let mut dev = GridDevice::default();
    let plan = plan_layout(&req("Hello", Some("A subtitle"), "World"), &cfg, &mut dev).unwrap();

    let sub = plan.block(BlockRole::Subtitle).unwrap();
    approx(sub.y, 246.0);
    assert_eq!(sub.size_px, 60.0);
    approx(sub.height, 75.0);
    approx(plan.cursor_y, 246.0 + 75.0 + 54.0);
}

#[test]
fn title_text_measure_reuses_title_block_height() {
    let cfg = CoverConfig {
        subtitle_measure: SubtitleMeasure::TitleText,
        ..CoverConfig::default()
    };
    let mut dev = GridDevice::default();
    // Two title lines, one subtitle line.
    let plan = plan_layout(
        &req("A title that wraps twice", Some("short"), "Author"),
        &cfg,
        &mut dev,
    )
    .unwrap();

    let title = plan.block(BlockRole::Title).unwrap();
    let sub = plan.block(BlockRole::Subtitle).unwrap();
    assert_eq!(title.text.lines().count(), 2);
    approx(sub.height, title.height);
}

#[test]
fn author_anchor_ignores_flow() {
    let cfg = CoverConfig::default();
    let mut dev = GridDevice::default();
    let short = plan_layout(&req("Hi", None, "Same Author"), &cfg, &mut dev).unwrap();
    let long = plan_layout(
        &req(
            "A considerably longer title that needs several lines",
            Some("And a subtitle that is also not exactly brief at all"),
            "Same Author",
        ),
        &cfg,
        &mut dev,
    )
    .unwrap();

    let a = short.block(BlockRole::Author).unwrap();
    let b = long.block(BlockRole::Author).unwrap();
    approx(a.y, b.y);
    assert!(long.cursor_y > short.cursor_y);
}

#[test]
fn title_lines_respect_wrap_width() {
    let cfg = CoverConfig::default();
    let mut dev = GridDevice::default();
    let plan = plan_layout(
        &req(
            "Zen and the Art of Motorcycle Maintenance: An Inquiry into Values",
            None,
            "Robert M. Pirsig",
        ),
        &cfg,
        &mut dev,
    )
    .unwrap();
    let title = plan.block(BlockRole::Title).unwrap();
    assert!(title.text.lines().count() > 1);
    assert!(title.text.lines().all(|l| l.chars().count() <= 18));
}

#[test]
fn long_flow_is_reported_as_overlapping() {
    let cfg = CoverConfig::default();
    let mut dev = GridDevice::default();
    let ok = plan_layout(&req("Hello", None, "World"), &cfg, &mut dev).unwrap();
    assert!(!ok.flow_overlaps_author());

    let title = "word ".repeat(40);
    let crowded = plan_layout(&req(&title, None, "World"), &cfg, &mut dev).unwrap();
    assert!(crowded.flow_overlaps_author());
}

#[test]
fn draw_layout_paints_blocks_in_order() {
    let cfg = CoverConfig::default();
    let mut dev = GridDevice::default();
    let plan = plan_layout(&req("Hello", Some("Sub"), "World"), &cfg, &mut dev).unwrap();

    let mut canvas = Canvas::new(4, 6);
    draw_layout(&plan, &mut canvas, &mut dev, cfg.foreground).unwrap();

    let texts: Vec<&str> = dev.draws.iter().map(|d| d.2.as_str()).collect();
    assert_eq!(texts, ["Hello", "Sub", "World"]);
    assert!(dev.draws.iter().all(|d| d.4 == Rgb8::new(50, 50, 50)));
    assert_eq!(dev.draws[0].0, 36.0);
    assert_eq!(dev.draws[0].1, 72.0);
}
