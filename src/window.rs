// Window building: double the skill sequence and size items so exactly
// `items_visible` originals fill the viewport at rest. Planning is pure;
// mounting is the single DOM mutation, delegated to the surface.

use crate::host::DomSurface;
use crate::layout;
use crate::types::{SkillRecord, WindowPlan};

/// Plan the doubled window for a non-empty sequence.
///
/// The clone run is a structural duplicate of the original run (same records,
/// same order) appended after it, which is what makes the wraparound seam
/// imperceptible. Returns `None` for an empty sequence: no window, no output.
pub fn plan(sequence: &[SkillRecord], visible_width: f64, items_visible: u32) -> Option<WindowPlan> {
    if sequence.is_empty() {
        return None;
    }

    let mut items = Vec::with_capacity(sequence.len() * 2);
    items.extend_from_slice(sequence);
    items.extend_from_slice(sequence);

    Some(WindowPlan {
        items,
        item_width_px: layout::item_width(visible_width, items_visible),
        original_count: sequence.len(),
    })
}

/// Mount a planned window into the document, immediately before the hidden
/// source container. The caller (session lifecycle) guarantees any previous
/// window was removed first, keeping at most one window node alive.
pub fn mount<S: DomSurface + ?Sized>(surface: &S, plan: &WindowPlan) {
    surface.mount_window(&plan.items, plan.item_width_px);
}
