//! Typography resolution.
//!
//! A widget's explicit [`TextStyle`] is resolved against
//! [`TypographyDefaults`] one field at a time: setting only the font size
//! keeps the default family and weight.

use core::fmt;
use core::str::FromStr;

use crate::theme::DISPLAY_FONT_FAMILY;

/// Numeric font weight, `100` (thin) to `900` (black).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("font weight {0:?} is not \"normal\", \"bold\" or a multiple of 100 in 100..=900")]
pub struct FontWeightParseError(pub String);

impl FromStr for FontWeight {
    type Err = FontWeightParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FontWeightParseError(s.to_string());
        match s.trim() {
            "normal" => Ok(Self::NORMAL),
            "bold" => Ok(Self::BOLD),
            n => {
                let w: u16 = n.parse().map_err(|_| err())?;
                if (100..=900).contains(&w) && w % 100 == 0 {
                    Ok(Self(w))
                } else {
                    Err(err())
                }
            }
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── TextStyle ─────────────────────────────────────────────────────────────

/// Partial text style. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub font_weight: Option<FontWeight>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, v: f32) -> Self {
        self.font_size = Some(v);
        self
    }

    pub fn font_family(mut self, v: impl Into<String>) -> Self {
        self.font_family = Some(v.into());
        self
    }

    pub fn font_weight(mut self, v: FontWeight) -> Self {
        self.font_weight = Some(v);
        self
    }

    /// Layers `over` on top of `self`; fields set in `over` win.
    #[must_use]
    pub fn merge(&self, over: &TextStyle) -> TextStyle {
        TextStyle {
            font_size: over.font_size.or(self.font_size),
            font_family: over.font_family.clone().or_else(|| self.font_family.clone()),
            font_weight: over.font_weight.or(self.font_weight),
        }
    }
}

// ── defaults / resolution ─────────────────────────────────────────────────

/// Fallback typography for gradient headings.
#[derive(Debug, Clone, PartialEq)]
pub struct TypographyDefaults {
    pub font_size: f32,
    pub font_family: String,
    pub font_weight: FontWeight,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
}

impl Default for TypographyDefaults {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            font_family: DISPLAY_FONT_FAMILY.to_string(),
            font_weight: FontWeight::BOLD,
            line_height_factor: 1.3,
        }
    }
}

/// Fully resolved typography for one glyph run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTypography {
    pub font_size: f32,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub line_height: f32,
}

impl TypographyDefaults {
    /// Resolves each field of `style` independently against these defaults.
    pub fn resolve(&self, style: &TextStyle) -> ResolvedTypography {
        let font_size = style.font_size.unwrap_or(self.font_size);
        ResolvedTypography {
            font_size,
            font_family: style.font_family.clone().unwrap_or_else(|| self.font_family.clone()),
            font_weight: style.font_weight.unwrap_or(self.font_weight),
            line_height: font_size * self.line_height_factor,
        }
    }
}
