//! Render backends.
//!
//! Backends consume `scene` draw streams and produce a concrete artifact
//! (an SVG document, PNG bytes). Each backend advertises what it can draw
//! through [`Capabilities`] so widgets can pick a strategy it supports.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - the canvas size is supplied by the caller (usually the root widget's
//!   measured size)

pub mod raster;
pub mod svg;

pub use raster::RasterBackend;
pub use svg::SvgBackend;

use crate::coords::Vec2;
use crate::paint::{Paint, PaintId};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

/// Drawing features that not every backend supports.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Capabilities {
    /// Text glyph runs can be filled with a gradient paint definition.
    pub text_paint: bool,
    /// Layers can be gated by the alpha of a mask shape.
    pub alpha_mask: bool,
}

impl Capabilities {
    pub const ALL: Self = Self { text_paint: true, alpha_mask: true };
    pub const NONE: Self = Self { text_paint: false, alpha_mask: false };
}

/// Errors produced while turning a draw list into output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("paint {0} is referenced but never defined")]
    UndefinedPaint(PaintId),
    #[error("backend {backend} cannot draw {feature}")]
    Unsupported {
        backend: &'static str,
        feature: &'static str,
    },
    #[error("svg serialization failed")]
    Fmt(#[from] std::fmt::Error),
    #[error("svg parse failed: {0}")]
    Parse(#[from] resvg::usvg::Error),
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// A consumer of draw lists.
pub trait Backend {
    type Output;

    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> Capabilities;

    /// Renders `list` onto a canvas of `size` logical pixels.
    fn render(&self, list: &DrawList, size: Vec2, fonts: &FontSystem) -> Result<Self::Output, RenderError>;

    /// Fails if `list` uses a feature this backend does not advertise.
    fn check(&self, list: &DrawList) -> Result<(), RenderError> {
        let caps = self.capabilities();
        let unsupported = |feature| RenderError::Unsupported { backend: self.name(), feature };

        if !caps.alpha_mask && !list.masks().is_empty() {
            return Err(unsupported("alpha masks"));
        }
        let gradient_text = list.items().iter().any(|item| {
            matches!(&item.cmd, DrawCmd::Text(t) if matches!(t.fill, Paint::Gradient(_)))
        });
        if !caps.text_paint && gradient_text {
            return Err(unsupported("gradient-filled text"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::UnitPoint;
    use crate::paint::{Color, LinearGradient};
    use crate::scene::{MaskDef, TextCmd};

    /// Backend that can only fill with flat colors.
    struct FlatBackend;

    impl Backend for FlatBackend {
        type Output = ();

        fn name(&self) -> &'static str {
            "flat"
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::NONE
        }

        fn render(&self, list: &DrawList, _size: Vec2, _fonts: &FontSystem) -> Result<(), RenderError> {
            self.check(list)
        }
    }

    #[test]
    fn flat_backend_accepts_solid_text() {
        let mut list = DrawList::new();
        list.push_text(TextCmd::new("hi", "Sans", 400, 12.0, Color::BLACK.into()));
        assert!(FlatBackend.render(&list, Vec2::new(10.0, 10.0), &FontSystem::new()).is_ok());
    }

    #[test]
    fn flat_backend_rejects_gradient_text() {
        let mut list = DrawList::new();
        let id = PaintId::next();
        let g = LinearGradient::evenly_spaced(&[Color::BLACK, Color::WHITE], UnitPoint::TOP_LEFT, UnitPoint::TOP_RIGHT)
            .unwrap();
        list.define_gradient(id, g);
        list.push_text(TextCmd::new("hi", "Sans", 400, 12.0, Paint::Gradient(id)));
        let err = FlatBackend.check(&list).unwrap_err();
        assert!(matches!(err, RenderError::Unsupported { feature: "gradient-filled text", .. }));
    }

    #[test]
    fn flat_backend_rejects_masks() {
        let mut list = DrawList::new();
        list.push_mask(MaskDef { id: PaintId::next(), shapes: vec![] });
        list.pop_mask();
        let err = FlatBackend.check(&list).unwrap_err();
        assert!(matches!(err, RenderError::Unsupported { feature: "alpha masks", .. }));
    }
}
