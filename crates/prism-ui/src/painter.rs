use prism_engine::coords::Rect;
use prism_engine::paint::{LinearGradient, Paint, PaintId};
use prism_engine::render::{Backend, Capabilities};
use prism_engine::scene::{DrawList, MaskDef, TextCmd};
use prism_engine::text::FontSystem;

use crate::constraints::LayoutCtx;

/// The backend a frame is being painted for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RenderTarget {
    pub backend: &'static str,
    pub capabilities: Capabilities,
}

impl RenderTarget {
    pub fn of<B: Backend>(backend: &B) -> Self {
        Self { backend: backend.name(), capabilities: backend.capabilities() }
    }
}

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API and tells widgets
/// which backend they are painting for.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    target: RenderTarget,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem, target: RenderTarget) -> Self {
        Self { draw_list, font_system, target }
    }

    #[inline]
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    ///
    /// Useful inside `paint` when a container needs to re-measure its
    /// children to position them.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { fonts: self.font_system }
    }

    // ── definitions ───────────────────────────────────────────────────────

    /// Registers a gradient that later commands reference with `Paint::Gradient(id)`.
    pub fn define_gradient(&mut self, id: PaintId, gradient: LinearGradient) {
        self.draw_list.define_gradient(id, gradient);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        self.draw_list.push_rect(rect, paint.into());
    }

    /// A single glyph run.
    pub fn text(&mut self, text: TextCmd) {
        self.draw_list.push_text(text);
    }

    // ── masking ───────────────────────────────────────────────────────────

    /// Begin a masked region. Must be paired with [`pop_mask`](Self::pop_mask).
    pub fn push_mask(&mut self, mask: MaskDef) {
        self.draw_list.push_mask(mask);
    }

    /// End the most recent masked region.
    pub fn pop_mask(&mut self) {
        self.draw_list.pop_mask();
    }
}
