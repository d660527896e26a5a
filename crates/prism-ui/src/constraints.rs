use prism_engine::coords::{Rect, Vec2};
use prism_engine::text::FontSystem;

use crate::typography::ResolvedTypography;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Padding around a container's children.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Combined left and right padding, top and bottom padding.
    #[inline]
    pub fn total(self) -> Vec2 {
        Vec2::new(self.left + self.right, self.top + self.bottom)
    }

    /// The part of `rect` left inside the padding. Never negative.
    pub fn inset(self, rect: Rect) -> Rect {
        let total = self.total();
        Rect::new(
            rect.origin.x + self.left,
            rect.origin.y + self.top,
            (rect.size.x - total.x).max(0.0),
            (rect.size.y - total.y).max(0.0),
        )
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Size bounds a parent hands to a child's `measure`.
///
/// `max` is the space on offer, not a clip: text always reports its natural
/// size and containers grow to fit it, so a canvas sized from the root's
/// measurement never crops glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::ZERO, max }
    }

    /// Natural size, no upper bound.
    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Vec2::new(f32::INFINITY, f32::INFINITY))
    }

    /// Raises `size` to at least `min` per axis. Larger sizes pass through.
    #[inline]
    #[must_use]
    pub fn fit(self, size: Vec2) -> Vec2 {
        Vec2::new(size.x.max(self.min.x), size.y.max(self.min.y))
    }

    /// Loose bounds for the content inside `padding`.
    #[inline]
    #[must_use]
    pub fn inside(self, padding: Edges) -> Self {
        let total = padding.total();
        Self::loose(Vec2::new((self.max.x - total.x).max(0.0), (self.max.y - total.y).max(0.0)))
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure).
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
}

impl LayoutCtx<'_> {
    /// Natural single-line width of `text` set in `typo`.
    pub fn text_width(&self, text: &str, typo: &ResolvedTypography) -> f32 {
        let font = self.fonts.resolve(&typo.font_family, typo.font_weight.0);
        self.fonts.measure_width(text, font, typo.font_size)
    }
}
