// JS interop: the imported host object (DOM plumbing + tween library) and
// the wasm-bindgen facade the page drives. Structured payloads cross the
// boundary as JSON strings; timers stay on the JS side, the engine only
// hands back delays and decides whether an elapsed timer still matters.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::host::{AnimationDriver, DomSurface, TweenHandle};
use crate::session::{Debouncer, MarqueeSession, RebuildStatus};
use crate::types::{MarqueeConfig, RawSkillEntry, RunMeasurement, SkillRecord, TweenSpec};

#[wasm_bindgen]
extern "C" {
    /// Host object the page constructs around the skills section. It owns
    /// every real DOM node and the tween library; the engine only calls
    /// through it. Tweens are identified by numeric ids; `createTween`
    /// returning 0 means the tween capability is unavailable.
    #[derive(Clone)]
    pub type MarqueeHost;

    /// JSON array of `RawSkillEntry`, in document order. `"[]"` when the
    /// source container is absent.
    #[wasm_bindgen(method, js_name = sourceEntries)]
    fn source_entries(this: &MarqueeHost) -> String;

    #[wasm_bindgen(method, js_name = visibleWidth)]
    fn visible_width(this: &MarqueeHost) -> f64;

    /// `items_json` is a JSON array of `SkillRecord` (already doubled).
    #[wasm_bindgen(method, js_name = mountWindow)]
    fn mount_window(this: &MarqueeHost, items_json: &str, item_width_px: u32);

    #[wasm_bindgen(method, js_name = setWindowWidth)]
    fn set_window_width(this: &MarqueeHost, width_px: f64);

    /// JSON `RunMeasurement` for the first `count` window children.
    #[wasm_bindgen(method, js_name = measureRun)]
    fn measure_run(this: &MarqueeHost, count: u32) -> String;

    #[wasm_bindgen(method, js_name = removeWindow)]
    fn remove_window(this: &MarqueeHost);

    /// `spec_json` is a JSON `TweenSpec`. Returns the tween id, 0 on failure.
    #[wasm_bindgen(method, js_name = createTween)]
    fn create_tween(this: &MarqueeHost, spec_json: &str) -> f64;

    #[wasm_bindgen(method, js_name = pauseTween)]
    fn pause_tween(this: &MarqueeHost, id: f64);

    #[wasm_bindgen(method, js_name = resumeTween)]
    fn resume_tween(this: &MarqueeHost, id: f64);

    #[wasm_bindgen(method, js_name = cancelTween)]
    fn cancel_tween(this: &MarqueeHost, id: f64);
}

/// `DomSurface` over the imported host. Malformed host JSON degrades to
/// empty/default payloads rather than erroring, keeping the failure taxonomy
/// of the build path free of exceptions.
struct HostSurface {
    host: MarqueeHost,
}

impl DomSurface for HostSurface {
    fn source_entries(&self) -> Vec<RawSkillEntry> {
        serde_json::from_str(&self.host.source_entries()).unwrap_or_default()
    }

    fn visible_width(&self) -> f64 {
        self.host.visible_width()
    }

    fn mount_window(&self, items: &[SkillRecord], item_width_px: u32) {
        if let Ok(items_json) = serde_json::to_string(items) {
            self.host.mount_window(&items_json, item_width_px);
        }
    }

    fn set_window_width(&self, width_px: f64) {
        self.host.set_window_width(width_px);
    }

    fn measure_run(&self, count: usize) -> RunMeasurement {
        serde_json::from_str(&self.host.measure_run(count as u32)).unwrap_or_default()
    }

    fn remove_window(&self) {
        self.host.remove_window();
    }
}

/// `AnimationDriver` over the imported host's tween library.
struct HostDriver {
    host: MarqueeHost,
}

impl AnimationDriver for HostDriver {
    fn create_tween(&self, spec: &TweenSpec) -> Option<Box<dyn TweenHandle>> {
        let spec_json = serde_json::to_string(spec).ok()?;
        let id = self.host.create_tween(&spec_json);
        if id == 0.0 {
            return None;
        }
        Some(Box::new(HostTween {
            host: self.host.clone(),
            id,
        }))
    }
}

struct HostTween {
    host: MarqueeHost,
    id: f64,
}

impl TweenHandle for HostTween {
    fn pause(&self) {
        self.host.pause_tween(self.id);
    }

    fn resume(&self) {
        self.host.resume_tween(self.id);
    }

    fn cancel(&self) {
        self.host.cancel_tween(self.id);
    }
}

/// Rebuild report returned to JS. When a remeasure is owed, the delay for
/// the host's `setTimeout` rides along with the generation.
#[derive(Serialize)]
struct RebuildReport {
    #[serde(flatten)]
    status: RebuildStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    remeasure_delay_ms: Option<f64>,
}

/// Main engine interface exposed to JavaScript.
///
/// The page forwards discrete events (load, resize, timer expiry, pointer
/// enter/leave) and applies whatever the engine decided through the host.
/// Typical wiring:
/// ```js
/// const engine = new WasmMarquee(host, "{}");
/// window.addEventListener("load", () => dispatch(engine.rebuild()));
/// window.addEventListener("resize", () => {
///   setTimeout(() => {
///     const report = engine.on_debounce_elapsed();
///     if (report) dispatch(report);
///   }, engine.on_resize());
/// });
/// ```
/// where `dispatch` schedules `on_remeasure_elapsed(generation)` when the
/// report says `awaiting_remeasure`.
#[wasm_bindgen]
pub struct WasmMarquee {
    session: MarqueeSession,
    debouncer: Debouncer,
    surface: HostSurface,
    driver: HostDriver,
}

#[wasm_bindgen]
impl WasmMarquee {
    #[wasm_bindgen(constructor)]
    pub fn new(host: MarqueeHost, config_json: &str) -> Result<WasmMarquee, JsValue> {
        let config: MarqueeConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        Ok(WasmMarquee {
            debouncer: Debouncer::new(config.resize_debounce_ms),
            surface: HostSurface { host: host.clone() },
            driver: HostDriver { host },
            session: MarqueeSession::new(config),
        })
    }

    /// Full teardown-then-rebuild cycle. Call on initial page load and from
    /// the debounced resize path. Returns a JSON `RebuildReport`.
    pub fn rebuild(&mut self) -> Result<String, JsValue> {
        let status = self.session.rebuild(&self.surface, &self.driver);
        let remeasure_delay_ms = match status {
            RebuildStatus::AwaitingRemeasure { .. } => {
                Some(self.session.config().remeasure_delay_ms)
            }
            _ => None,
        };

        serde_json::to_string(&RebuildReport {
            status,
            remeasure_delay_ms,
        })
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// A resize event arrived. Returns the delay (ms) for the host's
    /// trailing `setTimeout`.
    pub fn on_resize(&mut self) -> f64 {
        self.debouncer.trigger(js_sys::Date::now())
    }

    /// A debounce timer elapsed. Rebuilds and returns the report only when
    /// this timer is the trailing edge of the burst; stale timers (a newer
    /// resize extended the deadline) return nothing.
    pub fn on_debounce_elapsed(&mut self) -> Result<Option<String>, JsValue> {
        if !self.debouncer.fire(js_sys::Date::now()) {
            return Ok(None);
        }
        self.rebuild().map(Some)
    }

    /// The owed zero-width retry timer elapsed. `generation` comes from the
    /// `awaiting_remeasure` report; a superseded generation is a no-op.
    /// Returns a JSON `RemeasureStatus`.
    pub fn on_remeasure_elapsed(&mut self, generation: u32) -> Result<String, JsValue> {
        let status = self
            .session
            .remeasure(&self.surface, &self.driver, generation);
        serde_json::to_string(&status)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn on_pointer_enter(&mut self) {
        self.session.pointer_enter();
    }

    pub fn on_pointer_leave(&mut self) {
        self.session.pointer_leave();
    }

    /// Cancel the animation and remove the window node.
    pub fn teardown(&mut self) {
        self.session.teardown(&self.surface);
    }

    /// JSON `MarqueeState` snapshot, for diagnostics.
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.state())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
