//! Raster backend: SVG document rasterized with `resvg`.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::coords::Vec2;
use crate::scene::DrawList;
use crate::text::FontSystem;

use super::{svg, Backend, Capabilities, RenderError};

/// Rasterizes draw lists into RGBA pixmaps and PNG bytes.
///
/// Text is shaped by `usvg` against the faces loaded in the [`FontSystem`].
/// A family with no matching face falls back to the first loaded face; with
/// nothing loaded, text renders nothing.
#[derive(Debug, Clone, Copy)]
pub struct RasterBackend {
    /// Physical pixels per logical pixel.
    pub scale: f32,
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl RasterBackend {
    pub fn with_scale(scale: f32) -> Self {
        Self { scale }
    }

    /// Renders into a premultiplied RGBA pixmap.
    pub fn pixmap(&self, list: &DrawList, size: Vec2, fonts: &FontSystem) -> Result<Pixmap, RenderError> {
        self.check(list)?;
        let document = svg::to_svg(list, size)?;

        if fonts.is_empty() {
            log::debug!("no fonts loaded; text will not rasterize");
        }
        let mut opt = usvg::Options::default();
        let db = opt.fontdb_mut();
        for data in fonts.font_data() {
            db.load_font_data(data.to_vec());
        }
        // usvg retries unmatched families as the serif generic.
        let fallback = db.faces().next().and_then(|f| f.families.first()).map(|(name, _)| name.clone());
        if let Some(family) = fallback {
            db.set_serif_family(family.clone());
            db.set_sans_serif_family(family);
        }
        let tree = usvg::Tree::from_str(&document, &opt)?;

        let scale = self.scale.max(0.01);
        let width = (tree.size().width() * scale).ceil() as u32;
        let height = (tree.size().height() * scale).ceil() as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;

        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
        log::debug!("rasterized {width}x{height} at scale {scale}");
        Ok(pixmap)
    }
}

impl Backend for RasterBackend {
    type Output = Vec<u8>;

    fn name(&self) -> &'static str {
        "raster"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    /// Renders and encodes as PNG.
    fn render(&self, list: &DrawList, size: Vec2, fonts: &FontSystem) -> Result<Vec<u8>, RenderError> {
        self.pixmap(list, size, fonts)?
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }
}
