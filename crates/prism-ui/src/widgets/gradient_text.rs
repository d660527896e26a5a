use prism_engine::coords::{Rect, UnitPoint, Vec2};
use prism_engine::paint::{Color, LinearGradient, Paint, PaintId};
use prism_engine::render::Capabilities;
use prism_engine::scene::{DrawCmd, MaskDef, TextCmd};

use crate::constraints::{Constraints, LayoutCtx};
use crate::content::Content;
use crate::error::UiError;
use crate::painter::{Painter, RenderTarget};
use crate::typography::{FontWeight, ResolvedTypography, TextStyle, TypographyDefaults};
use crate::widget::Widget;

// ── Strategy ──────────────────────────────────────────────────────────────

/// How the glyphs get their gradient.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Strategy {
    /// Vector fill when the backend can paint text with a gradient, else mask
    /// composition when it has alpha masks.
    #[default]
    Auto,
    /// One glyph run whose fill references a gradient defined in the text's
    /// own bounding box.
    VectorFill,
    /// A gradient rectangle gated by an alpha mask of the glyphs. The
    /// rectangle covers the whole container, so the gradient spans the
    /// container's box rather than the glyphs'.
    MaskComposition,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Auto => "auto",
            Strategy::VectorFill => "vector-fill",
            Strategy::MaskComposition => "mask-composition",
        }
    }

    /// Gradient end point used when the caller sets none.
    ///
    /// The two strategies disagree: vector fill runs horizontally across the
    /// text, mask composition runs diagonally across the container.
    pub fn default_end(self) -> UnitPoint {
        match self {
            Strategy::MaskComposition => UnitPoint::BOTTOM_RIGHT,
            Strategy::Auto | Strategy::VectorFill => UnitPoint::TOP_RIGHT,
        }
    }
}

// ── GradientText ──────────────────────────────────────────────────────────

/// Text whose glyphs are filled with a linear color ramp.
///
/// The widget is `font_size × 1.3` tall and exactly as wide as its content.
/// Each instance mints its paint ids once, so any number of gradient texts
/// can share a draw list without their definitions colliding.
///
/// # Example
/// ```rust,ignore
/// let title = GradientText::from_hex("Discover", &["#FF0000", "#0000FF"])?
///     .font_size(30.0);
/// ```
pub struct GradientText {
    content: Content,
    colors: Vec<Color>,
    start: UnitPoint,
    end: Option<UnitPoint>,
    style: TextStyle,
    defaults: TypographyDefaults,
    strategy: Strategy,
    gradient_id: PaintId,
    mask_id: PaintId,
}

impl GradientText {
    /// Creates gradient text. Fails with `InvalidGradientSpec` when `colors`
    /// is empty.
    pub fn new(content: impl Into<Content>, colors: impl IntoIterator<Item = Color>) -> Result<Self, UiError> {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(prism_engine::paint::GradientError::NoColors.into());
        }

        let gradient_id = PaintId::next();
        log::trace!("gradient text minted paint id {gradient_id}");
        Ok(Self {
            content: content.into(),
            colors,
            start: UnitPoint::TOP_LEFT,
            end: None,
            style: TextStyle::default(),
            defaults: TypographyDefaults::default(),
            strategy: Strategy::Auto,
            gradient_id,
            mask_id: PaintId::next(),
        })
    }

    /// Like [`new`](Self::new) with `#RRGGBB` style color strings.
    pub fn from_hex(content: impl Into<Content>, colors: &[&str]) -> Result<Self, UiError> {
        let colors = colors
            .iter()
            .map(|c| Color::from_hex(c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(content, colors)
    }

    pub fn start(mut self, p: UnitPoint) -> Self {
        self.start = p;
        self
    }

    pub fn end(mut self, p: UnitPoint) -> Self {
        self.end = Some(p);
        self
    }

    /// Replaces the style overrides. Unset fields keep the defaults.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn font_size(mut self, v: f32) -> Self {
        self.style.font_size = Some(v);
        self
    }

    pub fn font_family(mut self, v: impl Into<String>) -> Self {
        self.style.font_family = Some(v.into());
        self
    }

    pub fn font_weight(mut self, v: FontWeight) -> Self {
        self.style.font_weight = Some(v);
        self
    }

    /// Replaces the fallback typography (e.g. with [`Theme::typography`](crate::theme::Theme::typography)).
    pub fn defaults(mut self, defaults: TypographyDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Id of this instance's gradient definition.
    #[inline]
    pub fn paint_id(&self) -> PaintId {
        self.gradient_id
    }

    /// Id of this instance's mask definition (mask composition only).
    #[inline]
    pub fn mask_id(&self) -> PaintId {
        self.mask_id
    }

    #[inline]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Typography of the whole widget after per-field resolution.
    pub fn typography(&self) -> ResolvedTypography {
        self.defaults.resolve(&self.style)
    }

    /// Picks the concrete strategy for a backend.
    pub fn resolve_strategy(&self, target: &RenderTarget) -> Result<Strategy, UiError> {
        let Capabilities { text_paint, alpha_mask } = target.capabilities;
        let plain = self.content.as_plain().is_some();
        let unavailable = |strategy: Strategy| UiError::StrategyUnavailable {
            backend: target.backend,
            strategy: strategy.name(),
        };

        match self.strategy {
            Strategy::VectorFill if !plain => Err(UiError::UnsupportedContent),
            Strategy::VectorFill if text_paint => Ok(Strategy::VectorFill),
            Strategy::MaskComposition if alpha_mask => Ok(Strategy::MaskComposition),
            s @ (Strategy::VectorFill | Strategy::MaskComposition) => Err(unavailable(s)),
            Strategy::Auto => match (plain, text_paint, alpha_mask) {
                (true, true, _) => Ok(Strategy::VectorFill),
                (_, _, true) => Ok(Strategy::MaskComposition),
                (false, true, false) => Err(UiError::UnsupportedContent),
                (_, false, false) => Err(UiError::UnsupportedBackend { backend: target.backend }),
            },
        }
    }

    /// The gradient for `strategy`, in the bounding box of the shape it fills.
    pub fn gradient(&self, strategy: Strategy) -> Result<LinearGradient, UiError> {
        let end = self.end.unwrap_or_else(|| strategy.default_end());
        Ok(LinearGradient::evenly_spaced(&self.colors, self.start, end)?)
    }

    /// One resolved typography per glyph run, in layout order.
    fn runs(&self) -> Vec<(&str, ResolvedTypography)> {
        match &self.content {
            Content::Plain(s) => vec![(s.as_str(), self.typography())],
            Content::Rich(spans) => spans
                .iter()
                .map(|span| (span.text.as_str(), self.defaults.resolve(&self.style.merge(&span.style))))
                .collect(),
        }
    }

    /// Glyph runs positioned inside `rect`, sharing one baseline one font
    /// size below the top edge, filled with `fill`.
    fn glyph_runs(&self, ctx: &LayoutCtx, rect: Rect, fill: Paint) -> Vec<TextCmd> {
        let runs = self.runs();
        let baseline = runs.iter().map(|(_, t)| t.font_size).fold(0.0f32, f32::max);

        let mut x = rect.origin.x;
        runs.into_iter()
            .map(|(text, typo)| {
                let width = ctx.text_width(text, &typo);
                let cmd = TextCmd::new(text, typo.font_family, typo.font_weight.0, typo.font_size, fill)
                    .at(Vec2::new(x, rect.origin.y + baseline));
                x += width;
                cmd
            })
            .collect()
    }

    fn paint_vector_fill(&self, painter: &mut Painter, rect: Rect) -> Result<(), UiError> {
        let gradient = self.gradient(Strategy::VectorFill)?;
        let fill = match gradient.solid_color() {
            Some(color) => Paint::Solid(color),
            None => {
                painter.define_gradient(self.gradient_id, gradient);
                Paint::Gradient(self.gradient_id)
            }
        };

        let runs = self.glyph_runs(&painter.layout_ctx(), rect, fill);
        for run in runs {
            painter.text(run);
        }
        Ok(())
    }

    fn paint_mask_composition(&self, painter: &mut Painter, rect: Rect) -> Result<(), UiError> {
        let gradient = self.gradient(Strategy::MaskComposition)?;
        let ctx = painter.layout_ctx();
        let mask_shapes = self
            .glyph_runs(&ctx, rect, Paint::Solid(Color::BLACK))
            .into_iter()
            .map(DrawCmd::Text)
            .collect();
        // Invisible copy of the text; it only reserves layout space in the
        // masked layer.
        let spacers = self.glyph_runs(&ctx, rect, Paint::Solid(Color::BLACK));

        let fill = match gradient.solid_color() {
            Some(color) => Paint::Solid(color),
            None => {
                painter.define_gradient(self.gradient_id, gradient);
                Paint::Gradient(self.gradient_id)
            }
        };

        painter.push_mask(MaskDef { id: self.mask_id, shapes: mask_shapes });
        painter.fill_rect(rect, fill);
        for spacer in spacers {
            painter.text(spacer.opacity(0.0));
        }
        painter.pop_mask();
        Ok(())
    }
}

impl Widget for GradientText {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let (width, height) = self
            .runs()
            .iter()
            .fold((0.0f32, 0.0f32), |(w, h), (text, typo)| {
                (w + ctx.text_width(text, typo), h.max(typo.line_height))
            });
        // Natural size regardless of `max`: the canvas must hold every glyph.
        let size = constraints.fit(Vec2::new(width, height));
        log::trace!("gradient text {} measured {}x{}", self.gradient_id, size.x, size.y);
        size
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let result = self.resolve_strategy(painter.target()).and_then(|strategy| {
            log::debug!("gradient text {} painting with {}", self.gradient_id, strategy.name());
            match strategy {
                Strategy::MaskComposition => self.paint_mask_composition(painter, rect),
                Strategy::Auto | Strategy::VectorFill => self.paint_vector_fill(painter, rect),
            }
        });
        if let Err(e) = result {
            log::error!("gradient text {} skipped: {e}", self.gradient_id);
        }
    }

    fn validate(&self, target: &RenderTarget) -> Result<(), UiError> {
        self.resolve_strategy(target).map(|_| ())
    }
}
