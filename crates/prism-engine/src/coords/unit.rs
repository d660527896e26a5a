/// A point in the unit square of some bounding box.
///
/// Each axis is nominally in `[0, 1]` but is not validated: out-of-range
/// values are passed to the backend, which clamps or extrapolates them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    pub const TOP_RIGHT: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point as `(x%, y%)` of its bounding box.
    #[inline]
    pub fn to_percent(self) -> (f32, f32) {
        (self.x * 100.0, self.y * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_scales_both_axes() {
        assert_eq!(UnitPoint::new(0.25, 1.0).to_percent(), (25.0, 100.0));
        assert_eq!(UnitPoint::TOP_LEFT.to_percent(), (0.0, 0.0));
    }
}
