use prism_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::error::UiError;
use crate::painter::{Painter, RenderTarget};
use crate::widget::{Element, Widget};

/// Cross-axis (vertical) alignment of children inside a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Horizontal container that shrink-wraps its children.
///
/// Children are placed left to right at their natural sizes. The row is as
/// wide as the children plus spacing and padding, and as tall as the
/// tallest child, even when that exceeds the space on offer.
///
/// # Example
/// ```rust,ignore
/// Row::new()
///     .spacing(8.0)
///     .child(GradientText::from_hex("Know", &["#9D4EDD", "#3A86FF"])?)
///     .child(GradientText::from_hex("ledge", &["#3A86FF", "#06FFA5"])?)
/// ```
pub struct Row {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Row {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0, padding: Edges::default(), cross_align: Align::Start }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    fn child_y(&self, inner: Rect, child_h: f32) -> f32 {
        match self.cross_align {
            Align::Start => inner.origin.y,
            Align::Center => inner.origin.y + (inner.size.y - child_h) * 0.5,
            Align::End => inner.origin.y + (inner.size.y - child_h),
        }
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child_c = constraints.inside(self.padding);

        let mut total_w = 0.0f32;
        let mut max_h = 0.0f32;
        for (i, child) in self.children.iter().enumerate() {
            let s = child.measure(child_c, ctx);
            total_w += s.x;
            if i + 1 < self.children.len() {
                total_w += self.spacing;
            }
            max_h = max_h.max(s.y);
        }

        constraints.fit(Vec2::new(total_w, max_h) + self.padding.total())
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // `&FontSystem` is Copy, so this ends the borrow on `painter` and
        // lets children take it mutably in the loop.
        let fonts = painter.font_system;
        let ctx = LayoutCtx { fonts };

        let inner = self.padding.inset(rect);
        let child_c = Constraints::loose(inner.size);

        let mut x = inner.origin.x;
        for child in &self.children {
            let s = child.measure(child_c, &ctx);
            child.paint(painter, Rect::new(x, self.child_y(inner, s.y), s.x, s.y));
            x += s.x + self.spacing;
        }
    }

    fn validate(&self, target: &RenderTarget) -> Result<(), UiError> {
        self.children.iter().try_for_each(|c| c.validate(target))
    }
}
