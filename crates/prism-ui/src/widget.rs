use prism_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::error::UiError;
use crate::painter::{Painter, RenderTarget};

// ── Widget trait ──────────────────────────────────────────────────────────

/// A node in a retained widget tree: measured first, then painted.
///
/// ```rust,ignore
/// use prism_ui::prelude::*;
///
/// struct Swatch(Color);
///
/// impl Widget for Swatch {
///     fn measure(&self, c: Constraints, _: &LayoutCtx) -> Vec2 {
///         c.fit(Vec2::new(16.0, 16.0))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_rect(rect, self.0);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Preferred size within `constraints`.
    ///
    /// Containers measure children again while painting, so the result must
    /// depend only on the arguments.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Records draw commands for the box `rect` the parent assigned.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Check that this widget can be drawn on `target`.
    ///
    /// Called for the whole tree before anything is painted, so a failure
    /// leaves the draw list empty. Containers must forward to their children.
    fn validate(&self, _target: &RenderTarget) -> Result<(), UiError> {
        Ok(())
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// Boxed widget. Containers hold their children as `Element`s.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn validate(&self, target: &RenderTarget) -> Result<(), UiError> {
        self.0.validate(target)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
