// Data model for the skills marquee: records, plans, measurements, tween specs.
// Everything crossing the JS boundary is serde-friendly JSON.

use serde::{Deserialize, Serialize};

/// One skill as read from the hidden source container: icon markup + display name.
/// Immutable snapshot taken once per build cycle; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub icon_html: String,
    pub name: String,
}

/// Ordered sequence of skill records, insertion order = source document order.
pub type SkillSequence = Vec<SkillRecord>;

/// Raw entry as the host reads it out of the DOM. Either part may be missing
/// (no icon element, no name element); extraction normalizes to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSkillEntry {
    #[serde(default)]
    pub icon_html: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Engine configuration passed from JS. Every field has a default so the
/// host may pass `{}`. Loop and pause durations are tuning constants, not
/// invariants; keep them adjustable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// How many original items fit the visible window at rest.
    #[serde(default = "default_items_visible")]
    pub items_visible: u32,
    /// Seconds for one full original-run traversal (linear, constant speed).
    #[serde(default = "default_loop_duration")]
    pub loop_duration_secs: f64,
    /// Pause between successive loops, in seconds.
    #[serde(default = "default_loop_pause")]
    pub loop_pause_secs: f64,
    /// Inter-item gap to assume when the computed layout gap is unreadable.
    #[serde(default = "default_fallback_gap")]
    pub fallback_gap_px: f64,
    /// Trailing debounce for resize-triggered rebuilds, in milliseconds.
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: f64,
    /// Delay before the single zero-width remeasure retry, in milliseconds.
    #[serde(default = "default_remeasure_delay")]
    pub remeasure_delay_ms: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        MarqueeConfig {
            items_visible: default_items_visible(),
            loop_duration_secs: default_loop_duration(),
            loop_pause_secs: default_loop_pause(),
            fallback_gap_px: default_fallback_gap(),
            resize_debounce_ms: default_resize_debounce(),
            remeasure_delay_ms: default_remeasure_delay(),
        }
    }
}

fn default_items_visible() -> u32 {
    6
}

fn default_loop_duration() -> f64 {
    12.0
}

fn default_loop_pause() -> f64 {
    7.0
}

fn default_fallback_gap() -> f64 {
    18.0
}

fn default_resize_debounce() -> f64 {
    250.0
}

fn default_remeasure_delay() -> f64 {
    120.0
}

/// Renderable window plan: the doubled item sequence plus fixed item sizing.
/// `items` holds the original run followed by a structurally identical clone
/// run, so `items.len() == 2 * original_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPlan {
    pub items: Vec<SkillRecord>,
    /// Fixed width per item: floor(visible_width / items_visible).
    pub item_width_px: u32,
    pub original_count: usize,
}

/// Raw on-screen measurement of the first `original_count` window children.
/// `gap_px` is the window's computed layout gap, `None` when unreadable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunMeasurement {
    #[serde(default)]
    pub item_widths: Vec<f64>,
    #[serde(default)]
    pub gap_px: Option<f64>,
}

/// Easing for the marquee translation. The seamless loop requires constant
/// perceived speed, so the driver only ever emits `Linear`; the enum exists
/// so the tween spec is self-describing at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
}

/// Serializable description of the tween handed to the animation capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    /// Horizontal translation target: exactly minus the original-run width.
    pub to_x: f64,
    pub duration_secs: f64,
    pub ease: Easing,
    /// -1 = repeat indefinitely.
    pub repeat: i32,
    pub repeat_delay_secs: f64,
}

/// Derived animation state, recomputed from scratch on every (re)build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MarqueeState {
    pub original_width_px: f64,
    pub is_running: bool,
    pub is_paused: bool,
}
