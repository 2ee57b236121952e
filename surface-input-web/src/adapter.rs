use surface_input_shared::{AdapterConfig, ControlFrame, InputAdapter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::surface::ElementSurface;

/// Input adapter handed to JavaScript.
///
/// The page mounts it on the element it renders into and calls `poll()`
/// once per animation frame.
#[wasm_bindgen]
pub struct WebInput {
    adapter: InputAdapter<ElementSurface>,
}

#[wasm_bindgen]
impl WebInput {
    /// Create an unmounted adapter. `options` is an optional object of
    /// `AdapterConfig` fields; missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WebInput, JsValue> {
        let config = if options.is_undefined() || options.is_null() {
            AdapterConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid input options: {e}")))?
        };
        log::debug!("Input adapter created: {config:?}");

        Ok(WebInput {
            adapter: InputAdapter::with_config(config),
        })
    }

    /// Bind to `element`, detaching from the previous one.
    pub fn mount(&mut self, element: HtmlElement) -> Result<(), JsValue> {
        self.adapter.mount(ElementSurface::new(element))
    }

    pub fn unmount(&mut self) {
        self.adapter.unmount();
    }

    /// `{ click: [pt | undefined, pt | undefined], mouse: [x, y], keys: Map }`.
    /// Clicks are cleared after being returned.
    pub fn poll(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self.adapter.poll();
        serde_wasm_bindgen::to_value(&snapshot).map_err(JsValue::from)
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.adapter.is_mounted()
    }

    /// Cached width of the mounted element.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.adapter.size().x
    }

    /// Cached height of the mounted element.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.adapter.size().y
    }
}

impl WebInput {
    /// Engine-side read for Rust consumers linking this crate directly.
    pub fn control(&mut self) -> Option<ControlFrame> {
        self.adapter.control()
    }
}
