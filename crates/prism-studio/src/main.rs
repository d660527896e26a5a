use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use prism_engine::logging::{init_logging, LoggingConfig};
use prism_ui::assets::{load_fonts, FontManifest, SYSTEM_SANS_CANDIDATES};
use prism_ui::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    #[default]
    Auto,
    /// Gradient fill on the glyph run
    Fill,
    /// Gradient rectangle behind an alpha mask of the glyphs
    Mask,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Fill => Strategy::VectorFill,
            StrategyArg::Mask => Strategy::MaskComposition,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    #[default]
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeName {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeName::Light,
            ThemeArg::Dark => ThemeName::Dark,
        }
    }
}

/// Parses `X,Y` into a unit-square point.
fn parse_point(s: &str) -> Result<UnitPoint, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let axis = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("{v:?}: {e}"));
    Ok(UnitPoint::new(axis(x)?, axis(y)?))
}

#[derive(Parser, Debug)]
#[command(name = "prism-studio")]
#[command(about = "Render gradient text to SVG or PNG")]
struct StudioArgs {
    /// Text to render
    text: String,

    /// Output file; `.png` rasterizes, anything else is SVG. Defaults to SVG on stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Theme preset name (primary, aurora, sunset) or comma-separated hex colors
    #[arg(long, default_value = "primary")]
    colors: String,

    /// Font size in logical pixels
    #[arg(long)]
    size: Option<f32>,

    /// Font family (defaults to the theme's display family)
    #[arg(long)]
    family: Option<String>,

    /// Font weight: normal, bold, or 100..900
    #[arg(long)]
    weight: Option<FontWeight>,

    /// Gradient start as X,Y in the unit square
    #[arg(long, value_parser = parse_point)]
    start: Option<UnitPoint>,

    /// Gradient end as X,Y in the unit square
    #[arg(long, value_parser = parse_point)]
    end: Option<UnitPoint>,

    #[arg(long, value_enum, default_value_t)]
    strategy: StrategyArg,

    #[arg(long, value_enum, default_value_t)]
    theme: ThemeArg,

    /// Font file to load under the requested family (repeatable)
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Physical pixels per logical pixel for PNG output
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl StudioArgs {
    fn theme(&self) -> Theme {
        Theme::get(self.theme.into())
    }

    fn style(&self) -> TextStyle {
        TextStyle {
            font_size: self.size,
            font_family: self.family.clone(),
            font_weight: self.weight,
        }
    }

    /// Theme preset by name, else a comma-separated hex list.
    fn colors(&self, theme: &Theme) -> Result<Vec<Color>> {
        if let Some(preset) = theme.gradients.get(&self.colors) {
            return Ok(preset.to_vec());
        }
        self.colors
            .split(',')
            .filter(|c| !c.trim().is_empty())
            .map(|c| c.parse::<Color>().with_context(|| format!("bad color {c:?}")))
            .collect()
    }

    fn manifest(&self, theme: &Theme) -> FontManifest {
        let family = self.family.clone().unwrap_or_else(|| theme.display_family.clone());
        let weight = self.weight.unwrap_or(FontWeight::BOLD);
        if self.fonts.is_empty() {
            return FontManifest::new().first_available(family, weight, SYSTEM_SANS_CANDIDATES);
        }
        self.fonts
            .iter()
            .fold(FontManifest::new(), |m, path| m.font(family.clone(), weight, path.clone()))
    }
}

fn run(args: StudioArgs) -> Result<()> {
    let theme = args.theme();

    let mut ui = UiScene::new();
    let status = load_fonts(&args.manifest(&theme), &mut ui.font_system);
    if !status.is_ready() {
        log::warn!("{} font(s) failed to load; widths are estimated", status.failed.len());
    }

    let mut title = GradientText::new(args.text.as_str(), args.colors(&theme)?)?
        .defaults(theme.typography())
        .style(args.style())
        .strategy(args.strategy.into());
    if let Some(p) = args.start {
        title = title.start(p);
    }
    if let Some(p) = args.end {
        title = title.end(p);
    }
    let root: Element = Row::new().child(title).into();
    let viewport = Vec2::new(f32::INFINITY, f32::INFINITY);

    match &args.out {
        Some(path) if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("png")) => {
            let png = ui.render(&root, viewport, &RasterBackend::with_scale(args.scale))?;
            std::fs::write(path, png).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        Some(path) => {
            let svg = ui.render(&root, viewport, &SvgBackend)?;
            std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", ui.render(&root, viewport, &SvgBackend)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = StudioArgs::parse();
    init_logging(if args.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });
    run(args)
}
