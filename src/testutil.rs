// Test doubles for the host capability seams: a scriptable DOM surface and
// an animation driver that records every call instead of animating.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::host::{AnimationDriver, DomSurface, TweenHandle};
use crate::types::{RawSkillEntry, RunMeasurement, SkillRecord, TweenSpec};

/// Fake DOM surface. Measurements are scripted as a queue so tests can model
/// "not laid out yet, then settled" sequences; the last queued measurement
/// repeats once the queue drains.
pub struct FakeSurface {
    pub entries: Vec<RawSkillEntry>,
    pub viewport_width: f64,
    measurements: RefCell<VecDeque<RunMeasurement>>,
    last_measurement: RefCell<RunMeasurement>,
    pub mounted_windows: Cell<usize>,
    pub log: RefCell<Vec<String>>,
}

impl FakeSurface {
    pub fn new(entries: Vec<RawSkillEntry>, viewport_width: f64) -> Self {
        FakeSurface {
            entries,
            viewport_width,
            measurements: RefCell::new(VecDeque::new()),
            last_measurement: RefCell::new(RunMeasurement::default()),
            mounted_windows: Cell::new(0),
            log: RefCell::new(Vec::new()),
        }
    }

    pub fn with_entries(names: &[&str], viewport_width: f64) -> Self {
        let entries = names
            .iter()
            .map(|name| RawSkillEntry {
                icon_html: Some(format!("<i class=\"{name}\"></i>")),
                name: Some((*name).to_string()),
            })
            .collect();
        Self::new(entries, viewport_width)
    }

    pub fn queue_measurement(&self, measurement: RunMeasurement) {
        self.measurements.borrow_mut().push_back(measurement);
    }

    /// Queue a measurement of `count` uniform items with the given gap.
    pub fn queue_uniform(&self, count: usize, item_width: f64, gap: f64) {
        self.queue_measurement(RunMeasurement {
            item_widths: vec![item_width; count],
            gap_px: Some(gap),
        });
    }

    pub fn log_contains(&self, needle: &str) -> bool {
        self.log.borrow().iter().any(|line| line.contains(needle))
    }
}

impl DomSurface for FakeSurface {
    fn source_entries(&self) -> Vec<RawSkillEntry> {
        self.entries.clone()
    }

    fn visible_width(&self) -> f64 {
        self.viewport_width
    }

    fn mount_window(&self, items: &[SkillRecord], item_width_px: u32) {
        self.mounted_windows.set(self.mounted_windows.get() + 1);
        self.log
            .borrow_mut()
            .push(format!("mount_window({} items, {item_width_px}px)", items.len()));
    }

    fn set_window_width(&self, width_px: f64) {
        self.log
            .borrow_mut()
            .push(format!("set_window_width({width_px})"));
    }

    fn measure_run(&self, count: usize) -> RunMeasurement {
        self.log.borrow_mut().push(format!("measure_run({count})"));
        if let Some(next) = self.measurements.borrow_mut().pop_front() {
            *self.last_measurement.borrow_mut() = next.clone();
            next
        } else {
            self.last_measurement.borrow().clone()
        }
    }

    fn remove_window(&self) {
        if self.mounted_windows.get() > 0 {
            self.mounted_windows.set(self.mounted_windows.get() - 1);
        }
        self.log.borrow_mut().push("remove_window".to_string());
    }
}

/// Fake animation driver recording every created tween spec and every call
/// made on its handles.
pub struct FakeDriver {
    pub available: bool,
    pub specs: RefCell<Vec<TweenSpec>>,
    pub live_tweens: Rc<Cell<usize>>,
    pub tween_log: Rc<RefCell<Vec<&'static str>>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        FakeDriver {
            available: true,
            specs: RefCell::new(Vec::new()),
            live_tweens: Rc::new(Cell::new(0)),
            tween_log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn unavailable() -> Self {
        FakeDriver {
            available: false,
            ..Self::new()
        }
    }
}

impl AnimationDriver for FakeDriver {
    fn create_tween(&self, spec: &TweenSpec) -> Option<Box<dyn TweenHandle>> {
        if !self.available {
            return None;
        }
        self.specs.borrow_mut().push(spec.clone());
        self.live_tweens.set(self.live_tweens.get() + 1);
        Some(Box::new(FakeTween {
            live_tweens: Rc::clone(&self.live_tweens),
            log: Rc::clone(&self.tween_log),
        }))
    }
}

pub struct FakeTween {
    live_tweens: Rc<Cell<usize>>,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl TweenHandle for FakeTween {
    fn pause(&self) {
        self.log.borrow_mut().push("pause");
    }

    fn resume(&self) {
        self.log.borrow_mut().push("resume");
    }

    fn cancel(&self) {
        self.live_tweens.set(self.live_tweens.get().saturating_sub(1));
        self.log.borrow_mut().push("cancel");
    }
}
