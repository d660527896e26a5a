//! Theme palettes and gradient presets.
//!
//! Screens reference a handful of named colors (`primary`, `text`,
//! `textSecondary`, …) and a few brand color ramps for gradient headings.

use prism_engine::paint::Color;

use crate::typography::TypographyDefaults;

/// Family name of the default display font.
pub const DISPLAY_FONT_FAMILY: &str = "Nunito";

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

/// Named colors used by screens.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub background: Color,
    pub background_default: Color,
    pub border: Color,
}

/// Color ramps for gradient text, each at least two colors.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPresets {
    /// Brand purple to blue.
    pub primary: Vec<Color>,
    /// Purple, blue, cyan.
    pub aurora: Vec<Color>,
    /// Purple to pink to gold.
    pub sunset: Vec<Color>,
}

impl GradientPresets {
    /// Looks a preset up by name.
    pub fn get(&self, name: &str) -> Option<&[Color]> {
        match name {
            "primary" => Some(&self.primary),
            "aurora" => Some(&self.aurora),
            "sunset" => Some(&self.sunset),
            _ => None,
        }
    }
}

impl Default for GradientPresets {
    fn default() -> Self {
        Self {
            primary: vec![Color::rgb(0x7C, 0x3A, 0xED), Color::rgb(0x3A, 0x86, 0xFF)],
            aurora: vec![
                Color::rgb(0x9D, 0x4E, 0xDD),
                Color::rgb(0x3A, 0x86, 0xFF),
                Color::rgb(0x06, 0xFF, 0xA5),
            ],
            sunset: vec![
                Color::rgb(0x9D, 0x4E, 0xDD),
                Color::rgb(0xFF, 0x4D, 0x8D),
                Color::rgb(0xFF, 0xB7, 0x03),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: Palette,
    pub gradients: GradientPresets,
    pub display_family: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            palette: Palette {
                text: Color::rgb(0x11, 0x18, 0x27),
                text_secondary: Color::rgb(0x6B, 0x72, 0x80),
                primary: Color::rgb(0x7C, 0x3A, 0xED),
                background: Color::WHITE,
                background_default: Color::rgb(0xF3, 0xF4, 0xF6),
                border: Color::rgb(0xE5, 0xE7, 0xEB),
            },
            gradients: GradientPresets::default(),
            display_family: DISPLAY_FONT_FAMILY.to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            palette: Palette {
                text: Color::rgb(0xF9, 0xFA, 0xFB),
                text_secondary: Color::rgb(0x9C, 0xA3, 0xAF),
                primary: Color::rgb(0xA7, 0x8B, 0xFA),
                background: Color::rgb(0x0B, 0x0F, 0x19),
                background_default: Color::rgb(0x1F, 0x29, 0x37),
                border: Color::rgb(0x37, 0x41, 0x51),
            },
            gradients: GradientPresets::default(),
            display_family: DISPLAY_FONT_FAMILY.to_string(),
        }
    }

    pub fn get(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Gradient-heading typography for this theme.
    pub fn typography(&self) -> TypographyDefaults {
        TypographyDefaults {
            font_family: self.display_family.clone(),
            ..TypographyDefaults::default()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
