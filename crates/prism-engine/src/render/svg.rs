//! SVG document backend.
//!
//! Gradients become `<linearGradient>` definitions whose endpoints are
//! percentages of the filled shape's bounding box, masks become
//! `<mask>` definitions, and commands are emitted in paint order.

use std::fmt::{self, Write};

use crate::coords::Vec2;
use crate::paint::{LinearGradient, Paint, PaintId};
use crate::scene::{DrawCmd, DrawList, MaskDef};
use crate::text::FontSystem;

use super::{Backend, Capabilities, RenderError};

/// Element id of a gradient definition.
pub fn gradient_element_id(id: PaintId) -> String {
    format!("prism-grad-{id}")
}

/// Element id of a mask definition.
pub fn mask_element_id(id: PaintId) -> String {
    format!("prism-mask-{id}")
}

/// A number written with at most three decimals.
#[derive(Clone, Copy)]
struct Num(f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 1000.0).round() / 1000.0;
        // -0 prints as "-0"
        let v = if v == 0.0 { 0.0 } else { v };
        write!(f, "{v}")
    }
}

/// Serializes draw lists into standalone SVG documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgBackend;

impl Backend for SvgBackend {
    type Output = String;

    fn name(&self) -> &'static str {
        "svg"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn render(&self, list: &DrawList, size: Vec2, _fonts: &FontSystem) -> Result<String, RenderError> {
        self.check(list)?;
        to_svg(list, size)
    }
}

/// Writes `list` as an SVG document of `size` logical pixels.
///
/// Each axis is at least one pixel; SVG viewers reject zero-sized documents.
pub fn to_svg(list: &DrawList, size: Vec2) -> Result<String, RenderError> {
    let w = Num(size.x.max(1.0));
    let h = Num(size.y.max(1.0));

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;

    if !list.gradients().is_empty() || !list.masks().is_empty() {
        writeln!(out, "<defs>")?;
        for (id, gradient) in list.gradients() {
            write_gradient(&mut out, *id, gradient)?;
        }
        for mask in list.masks() {
            write_mask(&mut out, list, mask)?;
        }
        writeln!(out, "</defs>")?;
    }

    for item in list.items() {
        write_cmd(&mut out, list, &item.cmd, item.mask)?;
    }

    writeln!(out, "</svg>")?;
    log::trace!("svg document: {} bytes, {} items", out.len(), list.items().len());
    Ok(out)
}

fn write_gradient(out: &mut String, id: PaintId, g: &LinearGradient) -> Result<(), RenderError> {
    let (x1, y1) = g.start.to_percent();
    let (x2, y2) = g.end.to_percent();
    writeln!(
        out,
        r#"<linearGradient id="{}" x1="{}%" y1="{}%" x2="{}%" y2="{}%" gradientUnits="objectBoundingBox" spreadMethod="pad">"#,
        gradient_element_id(id),
        Num(x1),
        Num(y1),
        Num(x2),
        Num(y2)
    )?;

    for stop in &g.stops {
        write!(
            out,
            r#"<stop offset="{}%" stop-color="{}""#,
            Num(stop.offset * 100.0),
            stop.color.to_rgb_hex()
        )?;
        if !stop.color.is_opaque() {
            write!(out, r#" stop-opacity="{}""#, Num(stop.color.opacity()))?;
        }
        writeln!(out, "/>")?;
    }

    writeln!(out, "</linearGradient>")?;
    Ok(())
}

fn write_mask(out: &mut String, list: &DrawList, mask: &MaskDef) -> Result<(), RenderError> {
    writeln!(out, r#"<mask id="{}" mask-type="alpha">"#, mask_element_id(mask.id))?;
    for shape in &mask.shapes {
        write_cmd(out, list, shape, None)?;
    }
    writeln!(out, "</mask>")?;
    Ok(())
}

fn write_cmd(out: &mut String, list: &DrawList, cmd: &DrawCmd, mask: Option<PaintId>) -> Result<(), RenderError> {
    match cmd {
        DrawCmd::Rect(r) => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                Num(r.rect.origin.x),
                Num(r.rect.origin.y),
                Num(r.rect.size.x),
                Num(r.rect.size.y)
            )?;
            write_fill(out, list, &r.paint)?;
            write_mask_ref(out, mask)?;
            writeln!(out, "/>")?;
        }
        DrawCmd::Text(t) => {
            write!(
                out,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}""#,
                Num(t.baseline.x),
                Num(t.baseline.y),
                escape(&t.family),
                Num(t.size),
                t.weight
            )?;
            write_fill(out, list, &t.fill)?;
            if t.opacity < 1.0 {
                write!(out, r#" opacity="{}""#, Num(t.opacity.max(0.0)))?;
            }
            write_mask_ref(out, mask)?;
            writeln!(out, r#" xml:space="preserve">{}</text>"#, escape(&t.text))?;
        }
    }
    Ok(())
}

fn write_fill(out: &mut String, list: &DrawList, paint: &Paint) -> Result<(), RenderError> {
    match paint {
        Paint::Solid(c) => {
            write!(out, r#" fill="{}""#, c.to_rgb_hex())?;
            if !c.is_opaque() {
                write!(out, r#" fill-opacity="{}""#, Num(c.opacity()))?;
            }
        }
        Paint::Gradient(id) => {
            if list.gradient(*id).is_none() {
                return Err(RenderError::UndefinedPaint(*id));
            }
            write!(out, r#" fill="url(#{})""#, gradient_element_id(*id))?;
        }
    }
    Ok(())
}

fn write_mask_ref(out: &mut String, mask: Option<PaintId>) -> Result<(), RenderError> {
    if let Some(id) = mask {
        write!(out, r#" mask="url(#{})""#, mask_element_id(id))?;
    }
    Ok(())
}

/// Escapes text for use in XML content and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, UnitPoint};
    use crate::paint::Color;
    use crate::scene::TextCmd;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn gradient(colors: &[Color]) -> LinearGradient {
        LinearGradient::evenly_spaced(colors, UnitPoint::TOP_LEFT, UnitPoint::TOP_RIGHT).unwrap()
    }

    // ── gradients ─────────────────────────────────────────────────────────

    #[test]
    fn gradient_endpoints_are_percentages() {
        let mut list = DrawList::new();
        let id = PaintId::next();
        list.define_gradient(id, gradient(&[RED, BLUE]));
        let svg = to_svg(&list, Vec2::new(10.0, 10.0)).unwrap();

        assert!(svg.contains(&format!(r#"id="{}""#, gradient_element_id(id))));
        assert!(svg.contains(r#"x1="0%" y1="0%" x2="100%" y2="0%""#));
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#FF0000"/>"##));
        assert!(svg.contains(r##"<stop offset="100%" stop-color="#0000FF"/>"##));
        assert!(svg.contains(r#"spreadMethod="pad""#));
    }

    #[test]
    fn translucent_stop_carries_opacity() {
        let mut list = DrawList::new();
        list.define_gradient(PaintId::next(), gradient(&[Color::rgba(255, 0, 0, 0), BLUE]));
        let svg = to_svg(&list, Vec2::new(10.0, 10.0)).unwrap();
        assert!(svg.contains(r#"stop-opacity="0""#));
    }

    #[test]
    fn offsets_are_rounded_to_three_decimals() {
        let mut list = DrawList::new();
        list.define_gradient(PaintId::next(), gradient(&[RED, BLUE, RED, BLUE, RED, BLUE, RED]));
        let svg = to_svg(&list, Vec2::new(10.0, 10.0)).unwrap();
        assert!(svg.contains(r#"offset="16.667%""#), "{svg}");
        assert!(svg.contains(r#"offset="83.333%""#), "{svg}");
    }

    #[test]
    fn numbers_drop_float_noise() {
        assert_eq!(Num(0.1 + 0.2).to_string(), "0.3");
        assert_eq!(Num(-0.0001).to_string(), "0");
        assert_eq!(Num(480.0).to_string(), "480");
    }

    // ── commands ──────────────────────────────────────────────────────────

    #[test]
    fn text_references_gradient_by_id() {
        let mut list = DrawList::new();
        let id = PaintId::next();
        list.define_gradient(id, gradient(&[RED, BLUE]));
        list.push_text(TextCmd::new("Hi & bye", "Display", 700, 24.0, Paint::Gradient(id)).at(Vec2::new(0.0, 24.0)));
        let svg = to_svg(&list, Vec2::new(80.0, 31.2)).unwrap();

        assert!(svg.contains(&format!(r#"fill="url(#{})""#, gradient_element_id(id))));
        assert!(svg.contains(r#"x="0" y="24""#));
        assert!(svg.contains(r#"font-weight="700""#));
        assert!(svg.contains(">Hi &amp; bye</text>"));
        assert!(svg.contains(r#"width="80" height="31.2""#));
    }

    #[test]
    fn undefined_gradient_is_an_error() {
        let mut list = DrawList::new();
        let id = PaintId::next();
        list.push_text(TextCmd::new("x", "Display", 700, 24.0, Paint::Gradient(id)));
        assert!(matches!(to_svg(&list, Vec2::new(1.0, 1.0)), Err(RenderError::UndefinedPaint(e)) if e == id));
    }

    #[test]
    fn masked_items_reference_alpha_mask() {
        let mut list = DrawList::new();
        let id = PaintId::next();
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        list.push_mask(MaskDef {
            id,
            shapes: vec![DrawCmd::Text(TextCmd::new("A", "Display", 700, 10.0, Color::BLACK.into()))],
        });
        list.push_rect(r, RED.into());
        list.pop_mask();
        let svg = to_svg(&list, r.size).unwrap();

        assert!(svg.contains(&format!(r#"<mask id="{}" mask-type="alpha">"#, mask_element_id(id))));
        assert!(svg.contains(&format!(r#"mask="url(#{})""#, mask_element_id(id))));
    }

    #[test]
    fn zero_size_document_is_one_pixel() {
        let svg = to_svg(&DrawList::new(), Vec2::ZERO).unwrap();
        assert!(svg.contains(r#"width="1" height="1""#));
    }

    #[test]
    fn transparent_text_sets_opacity() {
        let mut list = DrawList::new();
        list.push_text(TextCmd::new("x", "Display", 400, 10.0, Color::BLACK.into()).opacity(0.0));
        let svg = to_svg(&list, Vec2::new(10.0, 10.0)).unwrap();
        assert!(svg.contains(r#"opacity="0""#));
    }
}
