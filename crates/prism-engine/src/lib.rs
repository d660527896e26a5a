//! Prism engine crate.
//!
//! Renderer-agnostic building blocks for gradient text: geometry, paint
//! definitions, the recorded draw list, font metrics, and the backends that
//! turn a draw list into SVG or raster output.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
