//! Prism UI: retained widgets on top of `prism-engine`.
//!
//! The centerpiece is [`GradientText`](widgets::gradient_text::GradientText),
//! styled text filled with a linear color ramp, which screens compose into
//! headings and badges.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use prism_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let heading: Element = Row::new()
//!     .child(GradientText::from_hex("Discover", &["#FF0000", "#0000FF"])?.font_size(30.0))
//!     .into();
//! let svg = ui.render(&heading, Vec2::new(400.0, 100.0), &SvgBackend)?;
//! ```

pub mod assets;
pub mod constraints;
pub mod content;
pub mod error;
pub mod painter;
pub mod scene;
pub mod theme;
pub mod typography;
pub mod widget;
pub mod widgets;

pub use error::UiError;

/// Everything needed to build and render UI.
pub mod prelude {
    pub use crate::assets::{load_fonts, AssetStatus, FontManifest};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::content::{Content, Span};
    pub use crate::error::UiError;
    pub use crate::painter::{Painter, RenderTarget};
    pub use crate::scene::UiScene;
    pub use crate::theme::{Theme, ThemeName};
    pub use crate::typography::{FontWeight, TextStyle, TypographyDefaults};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        gradient_text::{GradientText, Strategy},
        row::{Align, Row},
    };

    // Re-export the engine primitives everyone needs.
    pub use prism_engine::coords::{Rect, UnitPoint, Vec2};
    pub use prism_engine::paint::{Color, Paint};
    pub use prism_engine::render::{Backend, Capabilities, RasterBackend, SvgBackend};
}
