use prism_engine::paint::{ColorParseError, GradientError};
use prism_engine::render::RenderError;

/// Errors raised while building, validating or rendering a widget tree.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    InvalidGradientSpec(#[from] GradientError),
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),
    /// Rich content given to a strategy that only draws one plain glyph run.
    #[error("content must be flattened to plain text for vector-fill gradient text")]
    UnsupportedContent,
    #[error("backend {backend} supports neither gradient text fill nor alpha masks")]
    UnsupportedBackend { backend: &'static str },
    #[error("backend {backend} cannot draw the {strategy} strategy")]
    StrategyUnavailable {
        backend: &'static str,
        strategy: &'static str,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}
