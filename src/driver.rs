// Marquee driving: measure the original run, size the window to both runs,
// and start the looping translation through the animation capability.

use crate::host::{AnimationDriver, DomSurface, TweenHandle};
use crate::layout;
use crate::types::{Easing, MarqueeConfig, MarqueeState, TweenSpec};

/// A live marquee animation: the tween plus derived state.
/// Exclusively owned by the most recent build cycle; cancelling consumes it.
pub struct MarqueeHandle {
    tween: Box<dyn TweenHandle>,
    state: MarqueeState,
}

impl MarqueeHandle {
    /// Freeze the animation at its current offset. No-op when already paused.
    pub fn pause(&mut self) {
        if self.state.is_running && !self.state.is_paused {
            self.tween.pause();
            self.state.is_paused = true;
        }
    }

    /// Continue from the frozen offset. Does not restart the loop or skip
    /// the inter-loop delay. No-op when not paused.
    pub fn resume(&mut self) {
        if self.state.is_running && self.state.is_paused {
            self.tween.resume();
            self.state.is_paused = false;
        }
    }

    /// Stop the animation and release its resources.
    pub fn cancel(mut self) {
        self.tween.cancel();
        self.state.is_running = false;
    }

    pub fn state(&self) -> MarqueeState {
        self.state
    }
}

/// Outcome of one animation start attempt.
pub enum StartOutcome {
    /// Tween created and running.
    Started(MarqueeHandle),
    /// Measured width was zero (layout not settled); the caller owns the
    /// single bounded retry.
    NeedsRemeasure,
    /// Animation capability unavailable: leave the window as a static grid.
    Unavailable,
}

/// Measure the original run and, if it has settled, size the window to both
/// runs and start the loop.
///
/// The tween translates the window from offset 0 to exactly -W with linear
/// easing, repeating indefinitely with the configured pause between loops.
/// At -W the clone run sits pixel-identical where the original started, so
/// the repeat reset is imperceptible.
pub fn start<S, D>(
    surface: &S,
    driver: &D,
    config: &MarqueeConfig,
    original_count: usize,
) -> StartOutcome
where
    S: DomSurface + ?Sized,
    D: AnimationDriver + ?Sized,
{
    let measurement = surface.measure_run(original_count);
    let original_width = layout::run_width(&measurement, config.fallback_gap_px);

    if original_width <= 0.0 {
        return StartOutcome::NeedsRemeasure;
    }

    let spec = TweenSpec {
        to_x: layout::tween_target(original_width),
        duration_secs: config.loop_duration_secs,
        ease: Easing::Linear,
        repeat: -1,
        repeat_delay_secs: config.loop_pause_secs,
    };

    // When the capability is missing the window must stay exactly as the
    // builder left it, so sizing happens only once the tween exists. Both
    // calls land in the same synchronous task; no paint sees them apart.
    match driver.create_tween(&spec) {
        Some(tween) => {
            surface.set_window_width(layout::window_width(original_width));
            StartOutcome::Started(MarqueeHandle {
                tween,
                state: MarqueeState {
                    original_width_px: original_width,
                    is_running: true,
                    is_paused: false,
                },
            })
        }
        None => StartOutcome::Unavailable,
    }
}
