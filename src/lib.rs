// marquee_core: skills marquee engine for the portfolio page (Rust/WASM).
// The core owns extraction, window math, and the rebuild lifecycle; the
// page's JS is plumbing that applies DOM mutations and hosts the tween
// library. Everything here is unit-testable natively with fake hosts.

mod driver;
mod error;
mod extract;
mod host;
mod layout;
mod session;
#[cfg(test)]
mod testutil;
mod types;
mod wasm;
mod window;

use wasm_bindgen::prelude::*;

pub use driver::{MarqueeHandle, StartOutcome};
pub use error::MarqueeError;
pub use extract::extract;
pub use host::{AnimationDriver, DomSurface, TweenHandle};
pub use session::{Debouncer, MarqueeSession, RebuildStatus, RemeasureStatus};
pub use types::*;
pub use wasm::WasmMarquee;
pub use window::plan;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
