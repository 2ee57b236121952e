use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::config::AdapterConfig;
use crate::input::{ControlFrame, InputSnapshot, InputState};

/// Input state shared between the adapter and the host's event callbacks.
pub type SharedInput = Rc<RefCell<InputState>>;

/// An element that can feed events into a [`SharedInput`].
///
/// `attach` wires every event source and hands back whatever must be kept
/// alive for the callbacks to stay registered. `detach` consumes that set
/// and unregisters all of it.
pub trait Surface {
    type Listeners;
    type Error;

    fn attach(
        &self,
        input: &SharedInput,
        config: &AdapterConfig,
    ) -> Result<Self::Listeners, Self::Error>;

    fn detach(&self, listeners: Self::Listeners);

    /// Displayed size in CSS pixels.
    fn offset_size(&self) -> Vec2;

    /// Match the rendering buffer to the displayed size.
    fn sync_buffer(&self);

    fn focus(&self, tab_index: i32) -> Result<(), Self::Error>;
}

struct Binding<S: Surface> {
    surface: S,
    listeners: S::Listeners,
}

/// Owns the input state and at most one mounted surface.
pub struct InputAdapter<S: Surface> {
    input: SharedInput,
    config: AdapterConfig,
    bound: Option<Binding<S>>,
}

impl<S: Surface> InputAdapter<S> {
    pub fn new() -> Self {
        Self::with_config(AdapterConfig::default())
    }

    pub fn with_config(config: AdapterConfig) -> Self {
        Self {
            input: Rc::new(RefCell::new(InputState::new())),
            config,
            bound: None,
        }
    }

    /// Bind to `surface`, releasing any previously mounted one first.
    ///
    /// Input state is reset. Errors from the host's registration calls are
    /// returned as-is; on a focus error the surface stays mounted.
    pub fn mount(&mut self, surface: S) -> Result<(), S::Error> {
        self.unmount();

        let listeners = surface.attach(&self.input, &self.config)?;
        let bound = self.bound.insert(Binding { surface, listeners });

        let size = bound.surface.offset_size();
        {
            let mut input = self.input.borrow_mut();
            input.resize(size);
            input.reset();
        }
        if self.config.sync_buffer {
            bound.surface.sync_buffer();
        }
        if self.config.focus_on_mount {
            bound.surface.focus(self.config.tab_index)?;
        }

        log::info!("Input surface mounted ({}x{})", size.x, size.y);
        Ok(())
    }

    /// Release the mounted surface. Returns whether one was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.bound.take() {
            Some(Binding { surface, listeners }) => {
                surface.detach(listeners);
                log::info!("Input surface unmounted");
                true
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.bound.is_some()
    }

    /// Cached element size from the last mount or resize.
    pub fn size(&self) -> Vec2 {
        self.input.borrow().size()
    }

    /// Current input, consuming pending clicks.
    pub fn poll(&mut self) -> InputSnapshot {
        self.input.borrow_mut().poll()
    }

    /// Like [`poll`](Self::poll) in engine form; `None` until something is mounted.
    pub fn control(&mut self) -> Option<ControlFrame> {
        if !self.is_mounted() {
            return None;
        }
        Some(self.poll().into_control())
    }
}

impl<S: Surface> Default for InputAdapter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Drop for InputAdapter<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
