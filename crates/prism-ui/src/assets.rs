//! Font asset loading.
//!
//! Screens wait for their fonts before showing gradient headings: a
//! [`FontManifest`] lists the faces to load and [`load_fonts`] reports an
//! [`AssetStatus`] whose [`is_ready`](AssetStatus::is_ready) gates rendering.

use std::io;
use std::path::{Path, PathBuf};

use prism_engine::text::{FontId, FontLoadError, FontSystem};

use crate::typography::FontWeight;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Font(#[from] FontLoadError),
}

/// One font face to load.
#[derive(Debug, Clone, PartialEq)]
pub struct FontAsset {
    pub family: String,
    pub weight: FontWeight,
    pub path: PathBuf,
}

/// The set of font faces an app needs before it can render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontManifest {
    pub entries: Vec<FontAsset>,
}

/// Common locations of a sans-serif system font, tried in order.
pub const SYSTEM_SANS_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
];

impl FontManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, family: impl Into<String>, weight: FontWeight, path: impl Into<PathBuf>) -> Self {
        self.entries.push(FontAsset { family: family.into(), weight, path: path.into() });
        self
    }

    /// Adds the first existing path of `candidates` under `family`.
    ///
    /// Does nothing when none exists.
    pub fn first_available(self, family: impl Into<String>, weight: FontWeight, candidates: &[&str]) -> Self {
        let family = family.into();
        match candidates.iter().map(Path::new).find(|p| p.is_file()) {
            Some(path) => self.font(family, weight, path),
            None => {
                log::debug!("no candidate font file found for {family}");
                self
            }
        }
    }
}

/// Outcome of loading a manifest.
#[derive(Debug, Default)]
pub struct AssetStatus {
    pub loaded: Vec<FontId>,
    pub failed: Vec<(FontAsset, AssetError)>,
}

impl AssetStatus {
    /// True once every manifest entry loaded.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Reads and registers every face in `manifest`.
///
/// Failures are collected per entry; the remaining entries still load.
pub fn load_fonts(manifest: &FontManifest, fonts: &mut FontSystem) -> AssetStatus {
    let mut status = AssetStatus::default();

    for asset in &manifest.entries {
        match load_one(asset, fonts) {
            Ok(id) => {
                log::info!("font {:?} ({}) loaded from {}", asset.family, asset.weight, asset.path.display());
                status.loaded.push(id);
            }
            Err(e) => {
                log::warn!("font {:?} not loaded: {e}", asset.family);
                status.failed.push((asset.clone(), e));
            }
        }
    }

    status
}

fn load_one(asset: &FontAsset, fonts: &mut FontSystem) -> Result<FontId, AssetError> {
    let data = std::fs::read(&asset.path).map_err(|source| AssetError::Read { path: asset.path.clone(), source })?;
    Ok(fonts.load_font(&asset.family, asset.weight.0, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("prism-assets-{}-{name}", std::process::id()));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn empty_manifest_is_ready() {
        let status = load_fonts(&FontManifest::new(), &mut FontSystem::new());
        assert!(status.is_ready());
        assert!(status.loaded.is_empty());
    }

    #[test]
    fn missing_file_is_not_ready() {
        let manifest = FontManifest::new().font("Nunito", FontWeight::BOLD, "/nonexistent/prism/Nunito-Bold.ttf");
        let mut fonts = FontSystem::new();
        let status = load_fonts(&manifest, &mut fonts);

        assert!(!status.is_ready());
        assert!(matches!(status.failed[0].1, AssetError::Read { .. }));
        assert!(fonts.is_empty());
    }

    #[test]
    fn corrupt_file_reports_font_error() {
        let path = scratch_file("corrupt.ttf", b"not a font");
        let manifest = FontManifest::new().font("Broken", FontWeight::NORMAL, &path);
        let status = load_fonts(&manifest, &mut FontSystem::new());
        std::fs::remove_file(&path).ok();

        assert!(matches!(status.failed[0].1, AssetError::Font(_)));
        assert_eq!(status.failed[0].0.family, "Broken");
    }

    #[test]
    fn first_available_skips_missing_candidates() {
        let path = scratch_file("present.ttf", b"");
        let candidates = ["/nonexistent/prism/a.ttf", path.to_str().unwrap()];
        let manifest = FontManifest::new().first_available("Sans", FontWeight::BOLD, &candidates);
        std::fs::remove_file(&path).ok();

        assert_eq!(manifest.entries.len(), 1);
        assert_eq!(manifest.entries[0].path, path);
    }

    #[test]
    fn first_available_without_candidates_adds_nothing() {
        let manifest = FontManifest::new().first_available("Sans", FontWeight::BOLD, &["/nonexistent/prism/a.ttf"]);
        assert!(manifest.entries.is_empty());
    }
}
