//! Coordinate and geometry types shared across engine backends and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Gradient endpoints live in a separate unit-square space ([`UnitPoint`]) so
//! they stay valid when the box they describe is resized.

mod rect;
mod unit;
mod vec2;

pub use rect::Rect;
pub use unit::UnitPoint;
pub use vec2::Vec2;
