use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Text draw payload: a single uniformly styled glyph run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font family name as the backend's font database knows it.
    pub family: String,
    /// Numeric weight, `100` to `900`.
    pub weight: u16,
    /// Font size in logical pixels.
    pub size: f32,
    pub fill: Paint,
    /// Layer opacity in `[0, 1]`, applied on top of the fill.
    pub opacity: f32,
    /// Left end of the baseline in logical pixels.
    pub baseline: Vec2,
}

impl TextCmd {
    pub fn new(text: impl Into<String>, family: impl Into<String>, weight: u16, size: f32, fill: Paint) -> Self {
        Self {
            text: text.into(),
            family: family.into(),
            weight,
            size,
            fill,
            opacity: 1.0,
            baseline: Vec2::ZERO,
        }
    }

    #[must_use]
    pub fn at(mut self, baseline: Vec2) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

impl DrawList {
    /// Records a text draw command.
    #[inline]
    pub fn push_text(&mut self, text: TextCmd) {
        self.push(DrawCmd::Text(text));
    }
}
