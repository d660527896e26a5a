use crate::coords::UnitPoint;

use super::Color;

/// Error returned when a gradient cannot be built from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    #[error("invalid gradient: at least one color is required")]
    NoColors,
}

/// A single gradient stop. `offset` is in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient definition.
///
/// `start` and `end` are unit-square points in the bounding box of whatever
/// shape the paint fills, so the ramp follows the shape when it is resized.
/// Past either end the edge stop's color extends (SVG `pad`).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: UnitPoint,
    pub end: UnitPoint,
    /// Offsets ascend in the order the colors were given.
    pub stops: Vec<ColorStop>,
}

/// Offsets of `n` evenly spaced stops: `i / (n - 1)`.
///
/// `n == 1` yields a single stop at `0`; `n == 0` yields nothing.
pub fn even_offsets(n: usize) -> impl Iterator<Item = f32> {
    let last = n.saturating_sub(1).max(1) as f32;
    (0..n).map(move |i| i as f32 / last)
}

impl LinearGradient {
    /// Builds a gradient whose stops are spread evenly over `[0, 1]` in the
    /// order `colors` is given.
    ///
    /// One color produces a single stop (a solid fill). No colors is an error.
    pub fn evenly_spaced(
        colors: &[Color],
        start: UnitPoint,
        end: UnitPoint,
    ) -> Result<Self, GradientError> {
        if colors.is_empty() {
            return Err(GradientError::NoColors);
        }

        let stops = even_offsets(colors.len())
            .zip(colors)
            .map(|(offset, &color)| ColorStop::new(offset, color))
            .collect();

        Ok(Self { start, end, stops })
    }

    /// Returns the fill color when the gradient degenerates to a solid fill.
    pub fn solid_color(&self) -> Option<Color> {
        match self.stops.as_slice() {
            [only] => Some(only.color),
            _ => None,
        }
    }
}
