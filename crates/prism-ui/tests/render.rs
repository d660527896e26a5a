//! End-to-end: widget tree → draw list → SVG / PNG.

use prism_engine::render::svg::{gradient_element_id, mask_element_id};
use prism_engine::text::FontSystem;
use prism_ui::assets::SYSTEM_SANS_CANDIDATES;
use prism_ui::theme::DISPLAY_FONT_FAMILY;
use prism_ui::prelude::*;
use resvg::usvg;

fn parse(svg: &str) -> usvg::Tree {
    usvg::Tree::from_str(svg, &usvg::Options::default()).expect("valid svg")
}

/// Bytes of the first installed system sans face, if any.
fn system_font() -> Option<Vec<u8>> {
    let data = SYSTEM_SANS_CANDIDATES.iter().find_map(|path| std::fs::read(path).ok());
    if data.is_none() {
        eprintln!("no system sans font installed; skipping");
    }
    data
}

#[test]
fn gradient_heading_renders_to_parseable_svg() {
    let mut ui = UiScene::new();
    let title = GradientText::from_hex("Discover", &["#FF0000", "#0000FF"]).unwrap().font_size(30.0);
    let id = title.paint_id();
    let root: Element = Row::new().child(title).into();

    let svg = ui.render(&root, Vec2::new(1000.0, 1000.0), &SvgBackend).unwrap();

    assert!(svg.contains(&format!(r#"fill="url(#{})""#, gradient_element_id(id))));
    assert!(svg.contains(r#"x1="0%" y1="0%" x2="100%" y2="0%""#));
    assert!(svg.contains(r#"y="30""#));

    let tree = parse(&svg);
    assert!((tree.size().height() - 39.0).abs() < 1e-3);
    assert!((ui.size().y - 39.0).abs() < 1e-3);
}

#[test]
fn sibling_headings_get_separate_gradients() {
    let mut ui = UiScene::new();
    let a = GradientText::from_hex("Feed", &["#9D4EDD", "#3A86FF"]).unwrap();
    let b = GradientText::from_hex("Search", &["#3A86FF", "#06FFA5", "#FFB703"]).unwrap();
    let (id_a, id_b) = (a.paint_id(), b.paint_id());
    let root: Element = Row::new().spacing(8.0).child(a).child(b).into();

    let list = ui.frame(&root, Vec2::new(1000.0, 100.0), RenderTarget::of(&SvgBackend)).unwrap();
    assert_eq!(list.gradients().len(), 2);
    assert_eq!(list.gradient(id_a).unwrap().stops.len(), 2);
    assert_eq!(list.gradient(id_b).unwrap().stops[1].offset, 0.5);

    let svg = SvgBackend.render(&ui.draw_list, ui.size(), &ui.font_system).unwrap();
    assert!(svg.contains(&gradient_element_id(id_a)));
    assert!(svg.contains(&gradient_element_id(id_b)));
    parse(&svg);
}

#[test]
fn mask_strategy_renders_to_parseable_svg() {
    let mut ui = UiScene::new();
    let title = GradientText::new("Explore", Theme::light().gradients.aurora.clone())
        .unwrap()
        .strategy(Strategy::MaskComposition);
    let mask = title.mask_id();
    let root: Element = title.into();

    let svg = ui.render(&root, Vec2::new(500.0, 500.0), &SvgBackend).unwrap();
    assert!(svg.contains(&format!(r#"mask="url(#{})""#, mask_element_id(mask))));
    assert!(svg.contains(r#"x1="0%" y1="0%" x2="100%" y2="100%" gradientUnits="objectBoundingBox""#));
    assert!(!svg.contains("userSpaceOnUse"));
    parse(&svg);
}

#[test]
fn canvas_grows_past_a_small_viewport() {
    let mut ui = UiScene::new();
    let title = GradientText::new("Discover", [Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)])
        .unwrap()
        .font_size(100.0);
    let root: Element = Row::new().child(title).into();

    let svg = ui.render(&root, Vec2::new(400.0, 100.0), &SvgBackend).unwrap();
    assert!((ui.size().y - 130.0).abs() < 1e-3);
    assert!((ui.size().x - 480.0).abs() < 1e-3);
    assert!(svg.contains(r#"width="480" height="130""#));
    assert!((parse(&svg).size().height() - 130.0).abs() < 1e-3);
}

#[test]
fn empty_colors_never_reach_the_draw_list() {
    assert!(matches!(GradientText::new("Feed", Vec::new()), Err(UiError::InvalidGradientSpec(_))));
}

#[test]
fn invalid_tree_leaves_draw_list_empty() {
    let mut ui = UiScene::new();
    let ok = GradientText::from_hex("ok", &["#000", "#FFF"]).unwrap();
    let rich = GradientText::new(vec![Span::new("a"), Span::new("b")], [Color::BLACK, Color::WHITE])
        .unwrap()
        .strategy(Strategy::VectorFill);
    let root: Element = Row::new().child(ok).child(rich).into();

    let err = ui.frame(&root, Vec2::new(100.0, 100.0), RenderTarget::of(&SvgBackend)).unwrap_err();
    assert!(matches!(err, UiError::UnsupportedContent));
    assert!(ui.draw_list.is_empty());
}

#[test]
fn empty_heading_is_zero_wide() {
    let mut ui = UiScene::new();
    let root: Element = GradientText::from_hex("", &["#FF0000", "#0000FF"]).unwrap().into();
    let svg = ui.render(&root, Vec2::new(100.0, 100.0), &SvgBackend).unwrap();
    assert_eq!(ui.size().x, 0.0);
    parse(&svg);
}

#[test]
fn raster_backend_produces_png() {
    let mut ui = UiScene::new();
    let root: Element = GradientText::from_hex("Hi", &["#FF0000", "#0000FF"]).unwrap().into();
    let png = ui.render(&root, Vec2::new(100.0, 100.0), &RasterBackend::default()).unwrap();
    assert_eq!(&png[..4], b"\x89PNG");
}

// ── real fonts ────────────────────────────────────────────────────────────

#[test]
fn measured_width_grows_with_size() {
    let Some(data) = system_font() else { return };
    let mut fonts = FontSystem::new();
    let id = fonts.load_font("Sans", 700, data).unwrap();

    let small = fonts.measure_width("Discover", Some(id), 12.0);
    let large = fonts.measure_width("Discover", Some(id), 24.0);
    assert!(small > 0.0);
    assert!(large > small);
}

#[test]
fn resolve_picks_nearest_weight_then_any_family() {
    let Some(data) = system_font() else { return };
    let mut fonts = FontSystem::new();
    let regular = fonts.load_font("Sans", 400, data.clone()).unwrap();
    let bold = fonts.load_font("Sans", 700, data.clone()).unwrap();
    let other = fonts.load_font("Other", 400, data).unwrap();

    assert_eq!(fonts.resolve("Sans", 600), Some(bold));
    assert_eq!(fonts.resolve("sans", 450), Some(regular));
    assert_eq!(fonts.resolve("Other", 900), Some(other));
    assert_eq!(fonts.resolve("Missing", 700), Some(bold));
}

#[test]
fn raster_glyphs_run_red_to_blue() {
    let Some(data) = system_font() else { return };
    let mut ui = UiScene::new();
    ui.font_system.load_font(DISPLAY_FONT_FAMILY, 700, data).unwrap();
    let title = GradientText::new("MMMM", [Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)])
        .unwrap()
        .font_size(48.0);
    let root: Element = title.into();

    let backend = RasterBackend::default();
    ui.frame(&root, Vec2::new(1000.0, 1000.0), RenderTarget::of(&backend)).unwrap();
    let pixmap = backend.pixmap(&ui.draw_list, ui.size(), &ui.font_system).unwrap();

    let opaque: Vec<(u32, resvg::tiny_skia::PremultipliedColorU8)> = (0..pixmap.width())
        .flat_map(|x| (0..pixmap.height()).map(move |y| (x, y)))
        .filter_map(|(x, y)| pixmap.pixel(x, y).map(|p| (x, p)))
        .filter(|(_, p)| p.alpha() == 255)
        .collect();
    let (_, left) = opaque.iter().min_by_key(|(x, _)| *x).expect("glyph pixels");
    let (_, right) = opaque.iter().max_by_key(|(x, _)| *x).expect("glyph pixels");

    assert!(left.red() > left.blue(), "left {left:?}");
    assert!(right.blue() > right.red(), "right {right:?}");
}
