use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("font load error for {family:?}: {reason}")]
pub struct FontLoadError {
    pub family: String,
    pub reason: String,
}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Average advance, as a fraction of the font size, assumed for text whose
/// font is not loaded.
pub const ESTIMATED_ADVANCE: f32 = 0.6;

struct Face {
    family: String,
    weight: u16,
    font: fontdue::Font,
    /// Raw file bytes, kept so raster backends can build their own database.
    data: Vec<u8>,
}

/// Owns the loaded fonts, keyed by family name and numeric weight.
///
/// Fonts are immutable after loading. Layout measures through `fontdue`;
/// backends that shape text themselves get the raw bytes via
/// [`font_data`](Self::font_data).
#[derive(Default)]
pub struct FontSystem {
    faces: Vec<Face>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Parses and stores a TrueType or OpenType font under `family`/`weight`.
    pub fn load_font(&mut self, family: &str, weight: u16, data: Vec<u8>) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(data.as_slice(), fontdue::FontSettings::default())
            .map_err(|e| FontLoadError { family: family.to_string(), reason: e.to_string() })?;
        let id = FontId(self.faces.len());
        log::debug!("loaded font {family:?} weight {weight} as {id:?}");
        self.faces.push(Face { family: family.to_string(), weight, font, data });
        Ok(id)
    }

    /// Picks the face for `family` whose weight is nearest `weight`.
    ///
    /// Falls back to the nearest-weight face of any family, and returns
    /// `None` only when nothing is loaded.
    pub fn resolve(&self, family: &str, weight: u16) -> Option<FontId> {
        let distance = |f: &Face| (f.weight as i32 - weight as i32).abs();
        let nearest = |same_family: bool| {
            self.faces
                .iter()
                .enumerate()
                .filter(|(_, f)| !same_family || f.family.eq_ignore_ascii_case(family))
                .min_by_key(|(_, f)| distance(f))
                .map(|(i, _)| FontId(i))
        };
        nearest(true).or_else(|| nearest(false))
    }

    /// Raw bytes of every loaded face.
    pub fn font_data(&self) -> impl Iterator<Item = &[u8]> {
        self.faces.iter().map(|f| f.data.as_slice())
    }

    /// Natural advance width of a single line of `text` in logical pixels.
    ///
    /// Without a font, each character is assumed to advance
    /// [`ESTIMATED_ADVANCE`] × `size`. Empty text is always zero wide.
    #[must_use]
    pub fn measure_width(&self, text: &str, id: Option<FontId>, size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let Some(face) = id.and_then(|id| self.faces.get(id.0)) else {
            return text.chars().count() as f32 * size * ESTIMATED_ADVANCE;
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&face.font], &TextStyle::new(text, size, 0));

        // Pen position after each glyph (x - xmin + advance) rather than the
        // bitmap right edge, so trailing spaces and side bearings count.
        layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = face.font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
    }
}
