//! Paint model shared between UI and backends.
//!
//! Scope:
//! - color representation (straight-alpha sRGB, hex in and out)
//! - linear gradient definitions with evenly spaced stops
//! - paint sources (solid, or a reference to a gradient definition by id)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{ColorStop, GradientError, LinearGradient};

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PAINT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier binding a paint definition (gradient or mask) to the commands
/// that use it.
///
/// Ids come from one process-wide counter, so two ids minted by
/// [`PaintId::next`] never compare equal, even across threads or scenes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PaintId(u64);

impl PaintId {
    /// Mints a fresh id.
    pub fn next() -> Self {
        Self(NEXT_PAINT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paint source for filling geometry.
///
/// Gradients are never inlined into draw commands: the command carries the id
/// and the definition lives once in the draw list's definition table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(PaintId),
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}
