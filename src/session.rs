// Rebuild lifecycle: one live window, one live tween, full teardown before
// every rebuild. Resize bursts are coalesced by a trailing debouncer; a
// superseded zero-width retry is detected by generation and becomes a no-op.

use serde::{Deserialize, Serialize};

use crate::driver::{self, MarqueeHandle, StartOutcome};
use crate::extract;
use crate::host::{AnimationDriver, DomSurface};
use crate::types::{MarqueeConfig, MarqueeState};
use crate::window;

/// Outcome of a full rebuild cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RebuildStatus {
    /// Window mounted and marquee running.
    Animated,
    /// Window mounted but the run measured zero wide; one retry is owed
    /// after a short delay, keyed by `generation`.
    AwaitingRemeasure { generation: u32 },
    /// Source had no entries: nothing mounted, nothing animated.
    Empty,
    /// Window mounted but left static (animation capability unavailable).
    Static,
}

/// Outcome of the single bounded remeasure retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemeasureStatus {
    Animated,
    /// Still zero wide: abandoned silently, static layout stays.
    Abandoned,
    /// Window mounted but left static (animation capability unavailable).
    Static,
    /// A newer build superseded this retry; nothing happened.
    Stale,
}

/// Owns the single live build cycle: the current animation handle, whether a
/// window is mounted, and the generation counter that invalidates late
/// retries. The single-live-session invariant is this struct, not ambient
/// module state.
pub struct MarqueeSession {
    config: MarqueeConfig,
    generation: u32,
    original_count: usize,
    handle: Option<MarqueeHandle>,
    window_mounted: bool,
    pending_remeasure: Option<u32>,
}

impl MarqueeSession {
    pub fn new(config: MarqueeConfig) -> Self {
        MarqueeSession {
            config,
            generation: 0,
            original_count: 0,
            handle: None,
            window_mounted: false,
            pending_remeasure: None,
        }
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Tear down the previous build and run Extractor -> Window Builder ->
    /// Marquee Driver from scratch.
    ///
    /// Order is load-bearing: cancel the old tween, remove the old window,
    /// then extract, plan, mount, and start. The previous handle is cancelled
    /// unconditionally, even if its remeasure retry is still pending; the
    /// bumped generation makes that late retry a no-op.
    pub fn rebuild<S, D>(&mut self, surface: &S, driver: &D) -> RebuildStatus
    where
        S: DomSurface + ?Sized,
        D: AnimationDriver + ?Sized,
    {
        self.teardown(surface);
        self.generation = self.generation.wrapping_add(1);

        let sequence = extract::extract(&surface.source_entries());
        let Some(plan) = window::plan(
            &sequence,
            surface.visible_width(),
            self.config.items_visible,
        ) else {
            return RebuildStatus::Empty;
        };

        window::mount(surface, &plan);
        self.window_mounted = true;
        self.original_count = plan.original_count;

        match driver::start(surface, driver, &self.config, plan.original_count) {
            StartOutcome::Started(handle) => {
                self.handle = Some(handle);
                RebuildStatus::Animated
            }
            StartOutcome::NeedsRemeasure => {
                self.pending_remeasure = Some(self.generation);
                RebuildStatus::AwaitingRemeasure {
                    generation: self.generation,
                }
            }
            StartOutcome::Unavailable => RebuildStatus::Static,
        }
    }

    /// The single bounded retry after a zero-width measurement. `generation`
    /// is the value returned by the rebuild that owed this retry; anything
    /// else means a newer build has moved on and this call does nothing.
    pub fn remeasure<S, D>(&mut self, surface: &S, driver: &D, generation: u32) -> RemeasureStatus
    where
        S: DomSurface + ?Sized,
        D: AnimationDriver + ?Sized,
    {
        if self.pending_remeasure != Some(generation) || self.generation != generation {
            return RemeasureStatus::Stale;
        }
        self.pending_remeasure = None;

        match driver::start(surface, driver, &self.config, self.original_count) {
            StartOutcome::Started(handle) => {
                self.handle = Some(handle);
                RemeasureStatus::Animated
            }
            StartOutcome::NeedsRemeasure => RemeasureStatus::Abandoned,
            StartOutcome::Unavailable => RemeasureStatus::Static,
        }
    }

    /// Pointer entered the window: freeze the marquee in place.
    pub fn pointer_enter(&mut self) {
        if let Some(handle) = &mut self.handle {
            handle.pause();
        }
    }

    /// Pointer left the window: continue from the frozen offset.
    pub fn pointer_leave(&mut self) {
        if let Some(handle) = &mut self.handle {
            handle.resume();
        }
    }

    /// Cancel the live tween and remove the window node, leaving the hidden
    /// source container untouched for the next rebuild.
    pub fn teardown<S: DomSurface + ?Sized>(&mut self, surface: &S) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
        if self.window_mounted {
            surface.remove_window();
            self.window_mounted = false;
        }
        self.pending_remeasure = None;
    }

    /// Snapshot of the current animation state (default when nothing runs).
    pub fn state(&self) -> MarqueeState {
        self.handle
            .as_ref()
            .map(MarqueeHandle::state)
            .unwrap_or_default()
    }
}

/// Trailing-edge debouncer over host-owned timers. `trigger` records a new
/// deadline and returns the delay for the host's timer; `fire` answers
/// whether the timer that just elapsed is still the newest one. A timer made
/// stale by a later trigger reports `false` and is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Debouncer {
            delay_ms,
            deadline: None,
        }
    }

    /// Note a trigger at `now_ms`, extending the deadline. Returns the delay
    /// to pass to the host's timer.
    pub fn trigger(&mut self, now_ms: f64) -> f64 {
        self.deadline = Some(now_ms + self.delay_ms);
        self.delay_ms
    }

    /// A host timer elapsed at `now_ms`. True exactly when the trailing edge
    /// has been reached, consuming the deadline.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
