use crate::paint::{LinearGradient, PaintId};

use super::DrawCmd;

/// A mask definition: shapes whose alpha gates every item drawn under it.
///
/// Only coverage matters; the shapes' colors are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskDef {
    pub id: PaintId,
    pub shapes: Vec<DrawCmd>,
}

/// A single draw item: command + active mask.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Mask gating this item. `None` = fully visible.
    pub mask: Option<PaintId>,
}

/// Recorded draw stream for a frame.
///
/// Items are kept in insertion order, which is paint order (back to front).
/// Gradients and masks are stored once in definition tables keyed by
/// [`PaintId`]; commands only carry the id.
///
/// # Masking
///
/// Use [`push_mask`] / [`pop_mask`] to scope draw commands to a mask. Masks
/// do not compose: an item is gated by the innermost active mask only.
///
/// ```ignore
/// draw_list.push_mask(MaskDef { id, shapes });
/// // ... push masked layer ...
/// draw_list.pop_mask();
/// ```
///
/// [`push_mask`]: DrawList::push_mask
/// [`pop_mask`]: DrawList::pop_mask
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    gradients: Vec<(PaintId, LinearGradient)>,
    masks: Vec<MaskDef>,
    mask_stack: Vec<PaintId>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears items, definitions and the mask stack. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.gradients.clear();
        self.masks.clear();
        self.mask_stack.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns gradient definitions in registration order.
    #[inline]
    pub fn gradients(&self) -> &[(PaintId, LinearGradient)] {
        &self.gradients
    }

    /// Returns mask definitions in registration order.
    #[inline]
    pub fn masks(&self) -> &[MaskDef] {
        &self.masks
    }

    /// Looks up a gradient definition.
    pub fn gradient(&self, id: PaintId) -> Option<&LinearGradient> {
        self.gradients.iter().find(|(g, _)| *g == id).map(|(_, def)| def)
    }

    /// Registers a gradient definition under `id`.
    ///
    /// Defining the same id twice in one frame replaces the earlier
    /// definition, so a widget painted twice still emits one definition.
    pub fn define_gradient(&mut self, id: PaintId, gradient: LinearGradient) {
        match self.gradients.iter_mut().find(|(g, _)| *g == id) {
            Some(slot) => {
                log::trace!("gradient {id} redefined");
                slot.1 = gradient;
            }
            None => self.gradients.push((id, gradient)),
        }
    }

    /// Pushes a draw command. It inherits the innermost active mask.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            mask: self.mask_stack.last().copied(),
        });
    }

    /// Registers `mask` and begins a masked region. All draw commands pushed
    /// until [`pop_mask`](Self::pop_mask) are gated by it.
    ///
    /// Calls must be balanced with `pop_mask`.
    pub fn push_mask(&mut self, mask: MaskDef) {
        let id = mask.id;
        match self.masks.iter_mut().find(|m| m.id == id) {
            Some(slot) => *slot = mask,
            None => self.masks.push(mask),
        }
        self.mask_stack.push(id);
    }

    /// Ends the most recent masked region started by `push_mask`.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_mask`.
    #[inline]
    pub fn pop_mask(&mut self) {
        debug_assert!(!self.mask_stack.is_empty(), "pop_mask called without matching push_mask");
        self.mask_stack.pop();
    }
}
