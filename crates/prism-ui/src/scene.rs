use prism_engine::coords::{Rect, Vec2};
use prism_engine::render::Backend;
use prism_engine::scene::DrawList;
use prism_engine::text::FontSystem;

use crate::constraints::{Constraints, LayoutCtx};
use crate::error::UiError;
use crate::painter::{Painter, RenderTarget};
use crate::widget::Element;

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` populated by each [`frame`]. The
/// canvas shrink-wraps the root widget: its size is the root's measured size
/// within the viewport.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let title: Element = GradientText::from_hex("Feed", &["#9D4EDD", "#3A86FF"])?.into();
/// let svg = ui.render(&title, Vec2::new(400.0, 200.0), &SvgBackend)?;
/// ```
///
/// [`frame`]: UiScene::frame
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    size: Vec2,
}

impl UiScene {
    pub fn new() -> Self {
        Self::with_fonts(FontSystem::new())
    }

    pub fn with_fonts(font_system: FontSystem) -> Self {
        Self { font_system, draw_list: DrawList::new(), size: Vec2::ZERO }
    }

    /// Canvas size of the most recent frame.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Validate, lay out, and paint a widget tree for `target`.
    ///
    /// Validation runs over the whole tree first; on error the draw list is
    /// left empty.
    pub fn frame(&mut self, root: &Element, viewport: Vec2, target: RenderTarget) -> Result<&DrawList, UiError> {
        self.draw_list.clear();
        self.size = Vec2::ZERO;

        root.validate(&target)?;

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system };
        let size = root.measure(Constraints::loose(viewport), &ctx);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system, target);
            root.paint(&mut painter, Rect::from_origin_size(Vec2::ZERO, size));
        }

        log::debug!(
            "frame for {}: {}x{}, {} items",
            target.backend,
            size.x,
            size.y,
            self.draw_list.items().len()
        );
        self.size = size;
        Ok(&self.draw_list)
    }

    /// Runs [`frame`](Self::frame) for `backend` and hands the result to it.
    pub fn render<B: Backend>(&mut self, root: &Element, viewport: Vec2, backend: &B) -> Result<B::Output, UiError> {
        self.frame(root, viewport, RenderTarget::of(backend))?;
        Ok(backend.render(&self.draw_list, self.size, &self.font_system)?)
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
