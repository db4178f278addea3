// Host capability seams: DOM access and the external animation driver.
// The core is generic over these traits; the browser build wires them to a
// JS host object, tests wire them to fakes that record calls.

use crate::types::{RawSkillEntry, RunMeasurement, SkillRecord, TweenSpec};

/// Read and mutate the page on the engine's behalf.
///
/// The engine owns the decisions (what to render, how wide, when to tear
/// down); the surface only executes them. `remove_window` must be idempotent
/// so a teardown with nothing mounted stays a no-op.
pub trait DomSurface {
    /// Read the hidden source container's entries, in document order.
    /// An absent container yields an empty list.
    fn source_entries(&self) -> Vec<RawSkillEntry>;

    /// Current width of the enclosing visible carousel viewport, in pixels.
    fn visible_width(&self) -> f64;

    /// Insert a fresh window node immediately before the source container and
    /// fill it with `items`, each sized to a fixed `item_width_px` (flex
    /// non-shrinking, non-growing).
    fn mount_window(&self, items: &[SkillRecord], item_width_px: u32);

    /// Set the window node's total width so both runs lay out side by side.
    fn set_window_width(&self, width_px: f64);

    /// Measure the rendered widths of the first `count` window children plus
    /// the window's computed layout gap.
    fn measure_run(&self, count: usize) -> RunMeasurement;

    /// Remove the current window node from the document, if any.
    fn remove_window(&self);
}

/// The external tween capability (GSAP-like). `create_tween` returns `None`
/// when the capability is unavailable, in which case the marquee degrades to
/// a static layout.
pub trait AnimationDriver {
    fn create_tween(&self, spec: &TweenSpec) -> Option<Box<dyn TweenHandle>>;
}

/// A live tween. Pausing freezes the current offset in place; resuming
/// continues from it without restarting the loop or skipping the inter-loop
/// delay. Cancelling releases the underlying animation resources.
pub trait TweenHandle {
    fn pause(&self);
    fn resume(&self);
    fn cancel(&self);
}
