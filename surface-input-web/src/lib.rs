//! surface-input WASM Web Runtime
//!
//! Binds mouse, click, keyboard and resize events on a host element and
//! exposes a polled snapshot of input state to an external engine. The
//! state itself lives in `surface-input-shared`; this crate only wires the
//! DOM to it.

#[cfg(target_arch = "wasm32")]
mod adapter;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use adapter::WebInput;
#[cfg(target_arch = "wasm32")]
pub use surface::{ElementListeners, ElementSurface};

pub use surface_input_shared::{AdapterConfig, ControlFrame, InputSnapshot, KeyEvent, KeyModifiers};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point — called when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when another logger is already installed.
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("surface-input runtime initialized");
}

/// Create an adapter with default options.
///
/// Convenience for pages that do not use `new WebInput(options)`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn create_input() -> Result<WebInput, JsValue> {
    WebInput::new(JsValue::undefined())
}
