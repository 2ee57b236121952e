use glam::Vec2;
use js_sys::{Array, Function};
use surface_input_shared::{
    AdapterConfig, EventResponse, InputEvent, KeyModifiers, MouseButton, SharedInput, Surface,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Event, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent,
    ResizeObserver,
};

const MOUSE_MOVE: &str = "mousemove";
const KEY_DOWN: &str = "keydown";
const KEY_UP: &str = "keyup";
const MOUSE_DOWN: &str = "mousedown";
const CONTEXT_MENU: &str = "contextmenu";

/// A DOM element used as an input surface.
#[derive(Debug, Clone)]
pub struct ElementSurface {
    element: HtmlElement,
}

impl ElementSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

/// Everything registered on an element by one mount.
pub struct ElementListeners {
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
    on_key_down: Closure<dyn FnMut(KeyboardEvent)>,
    on_key_up: Closure<dyn FnMut(KeyboardEvent)>,
    on_mouse_down: Closure<dyn FnMut(MouseEvent)>,
    on_context_menu: Closure<dyn FnMut(MouseEvent)>,
    resize_observer: ResizeObserver,
    // Held so the observer callback outlives the observer.
    _on_resize: Closure<dyn FnMut(Array)>,
}

impl ElementListeners {
    fn callbacks(&self) -> [(&'static str, &Function); 5] {
        [
            (MOUSE_MOVE, self.on_mouse_move.as_ref().unchecked_ref()),
            (KEY_DOWN, self.on_key_down.as_ref().unchecked_ref()),
            (KEY_UP, self.on_key_up.as_ref().unchecked_ref()),
            (MOUSE_DOWN, self.on_mouse_down.as_ref().unchecked_ref()),
            (CONTEXT_MENU, self.on_context_menu.as_ref().unchecked_ref()),
        ]
    }

    fn register(&self, element: &HtmlElement) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        for (event, callback) in self.callbacks() {
            element.add_event_listener_with_callback_and_add_event_listener_options(
                event, callback, &options,
            )?;
        }
        self.resize_observer.observe(element);
        Ok(())
    }

    fn unregister(&self, element: &HtmlElement) {
        self.resize_observer.unobserve(element);
        self.resize_observer.disconnect();

        for (event, callback) in self.callbacks() {
            if let Err(e) = element.remove_event_listener_with_callback(event, callback) {
                log::warn!("Failed to remove {event} listener: {e:?}");
            }
        }
    }
}

impl Surface for ElementSurface {
    type Listeners = ElementListeners;
    type Error = JsValue;

    fn attach(
        &self,
        input: &SharedInput,
        config: &AdapterConfig,
    ) -> Result<ElementListeners, JsValue> {
        let config = *config;

        let on_mouse_move = {
            let input = input.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let response = input
                    .borrow_mut()
                    .handle(InputEvent::MouseMove { offset: offset_of(&event) }, &config);
                respond(&event, response);
            }) as Box<dyn FnMut(_)>)
        };

        let on_key_down = {
            let input = input.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let code = event.code();
                let key = InputEvent::KeyDown {
                    code: &code,
                    modifiers: modifiers_of(&event),
                };
                let response = input.borrow_mut().handle(key, &config);
                respond(&event, response);
            }) as Box<dyn FnMut(_)>)
        };

        let on_key_up = {
            let input = input.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let code = event.code();
                let response = input
                    .borrow_mut()
                    .handle(InputEvent::KeyUp { code: &code }, &config);
                respond(&event, response);
            }) as Box<dyn FnMut(_)>)
        };

        let on_mouse_down = {
            let input = input.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let click = InputEvent::MouseDown {
                    button: MouseButton::from_dom(event.button()),
                    offset: offset_of(&event),
                };
                let response = input.borrow_mut().handle(click, &config);
                respond(&event, response);
            }) as Box<dyn FnMut(_)>)
        };

        let on_context_menu = {
            let input = input.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let response = input
                    .borrow_mut()
                    .handle(InputEvent::ContextMenu { offset: offset_of(&event) }, &config);
                respond(&event, response);
            }) as Box<dyn FnMut(_)>)
        };

        let on_resize = {
            let input = input.clone();
            let element = self.element.clone();
            Closure::wrap(Box::new(move |_entries: Array| {
                let size = offset_size_of(&element);
                let response = input
                    .borrow_mut()
                    .handle(InputEvent::Resize { size }, &config);
                if response.sync_buffer {
                    sync_buffer_of(&element);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let resize_observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;

        let listeners = ElementListeners {
            on_mouse_move,
            on_key_down,
            on_key_up,
            on_mouse_down,
            on_context_menu,
            resize_observer,
            _on_resize: on_resize,
        };

        // A partial registration must not outlive the closures it points at.
        if let Err(e) = listeners.register(&self.element) {
            listeners.unregister(&self.element);
            return Err(e);
        }
        Ok(listeners)
    }

    fn detach(&self, listeners: ElementListeners) {
        listeners.unregister(&self.element);
    }

    fn offset_size(&self) -> Vec2 {
        offset_size_of(&self.element)
    }

    fn sync_buffer(&self) {
        sync_buffer_of(&self.element);
    }

    fn focus(&self, tab_index: i32) -> Result<(), JsValue> {
        self.element.set_tab_index(tab_index);
        self.element.focus()
    }
}

fn respond(event: &Event, response: EventResponse) {
    if response.prevent_default {
        event.prevent_default();
    }
}

fn offset_of(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
}

fn modifiers_of(event: &KeyboardEvent) -> KeyModifiers {
    KeyModifiers {
        alt: event.alt_key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
        repeat: event.repeat(),
    }
}

fn offset_size_of(element: &HtmlElement) -> Vec2 {
    Vec2::new(element.offset_width() as f32, element.offset_height() as f32)
}

/// Only canvases have a drawing buffer; other elements are left alone.
fn sync_buffer_of(element: &HtmlElement) {
    if let Some(canvas) = element.dyn_ref::<HtmlCanvasElement>() {
        canvas.set_width(element.offset_width().max(0) as u32);
        canvas.set_height(element.offset_height().max(0) as u32);
    }
}
