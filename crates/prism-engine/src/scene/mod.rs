//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - own the definition tables (gradients, masks) commands refer to by id
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, MaskDef};
pub use shapes::rect::RectCmd;
pub use shapes::text::TextCmd;
