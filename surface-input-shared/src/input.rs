use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::AdapterConfig;
use crate::math::normalize_offset;

/// Slot in the click pair written by the primary button.
pub const LEFT_CLICK: usize = 0;
/// Slot in the click pair written by the context menu.
pub const RIGHT_CLICK: usize = 1;

/// Modifier flags captured with a key-down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// Set when the key-down came from OS auto-repeat.
    pub repeat: bool,
}

/// Mouse button as reported by `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl MouseButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// An event the surface listens for, reduced to the fields the state reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent<'a> {
    MouseMove { offset: Vec2 },
    MouseDown { button: MouseButton, offset: Vec2 },
    ContextMenu { offset: Vec2 },
    KeyDown { code: &'a str, modifiers: KeyModifiers },
    KeyUp { code: &'a str },
    /// Displayed size changed.
    Resize { size: Vec2 },
}

/// What the host must do with the original event once it has been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub sync_buffer: bool,
}

/// Browser input state — pointer position, one-shot clicks and held keys.
///
/// Positions are stored already normalized against the cached element size.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    click: [Option<Vec2>; 2],
    mouse: Vec2,
    keys: HashMap<String, KeyModifiers>,
    size: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one surface event.
    pub fn handle(&mut self, event: InputEvent<'_>, config: &AdapterConfig) -> EventResponse {
        match event {
            InputEvent::MouseMove { offset } => self.mouse_move(offset),
            InputEvent::MouseDown { button, offset } => self.mouse_down(button, offset),
            InputEvent::ContextMenu { offset } => {
                self.context_menu(offset);
                return EventResponse {
                    prevent_default: config.suppress_context_menu,
                    ..Default::default()
                };
            }
            InputEvent::KeyDown { code, modifiers } => self.key_down(code, modifiers),
            InputEvent::KeyUp { code } => self.key_up(code),
            InputEvent::Resize { size } => {
                self.resize(size);
                return EventResponse {
                    sync_buffer: config.sync_buffer,
                    ..Default::default()
                };
            }
        }
        EventResponse::default()
    }

    /// Clear clicks, pointer and keys. The cached element size is kept.
    pub fn reset(&mut self) {
        self.click = [None, None];
        self.mouse = Vec2::ZERO;
        self.keys.clear();
    }

    /// Update the cached element size used for normalization.
    pub fn resize(&mut self, size: Vec2) {
        if self.size != size {
            log::debug!("Surface resized: {}x{} -> {}x{}", self.size.x, self.size.y, size.x, size.y);
        }
        self.size = size;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn mouse_move(&mut self, offset: Vec2) {
        self.mouse = normalize_offset(offset, self.size);
    }

    /// Record a mousedown. Only the primary button fills the left-click slot.
    pub fn mouse_down(&mut self, button: MouseButton, offset: Vec2) {
        if button == MouseButton::Primary {
            self.click[LEFT_CLICK] = Some(normalize_offset(offset, self.size));
        }
    }

    /// Record a context-menu request in the right-click slot.
    pub fn context_menu(&mut self, offset: Vec2) {
        self.click[RIGHT_CLICK] = Some(normalize_offset(offset, self.size));
    }

    /// Auto-repeat overwrites the stored modifiers.
    pub fn key_down(&mut self, code: &str, modifiers: KeyModifiers) {
        self.keys.insert(code.to_owned(), modifiers);
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.remove(code);
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys.contains_key(code)
    }

    /// Copy of the current state without consuming anything.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            click: self.click,
            mouse: self.mouse,
            keys: self.keys.clone(),
        }
    }

    /// Snapshot, then clear the click pair. Pointer and keys persist.
    pub fn poll(&mut self) -> InputSnapshot {
        let snapshot = self.snapshot();
        self.click = [None, None];
        snapshot
    }
}

/// What the engine reads once per tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub click: [Option<Vec2>; 2],
    pub mouse: Vec2,
    pub keys: HashMap<String, KeyModifiers>,
}

impl InputSnapshot {
    pub fn left_click(&self) -> Option<Vec2> {
        self.click[LEFT_CLICK]
    }

    pub fn right_click(&self) -> Option<Vec2> {
        self.click[RIGHT_CLICK]
    }

    /// Flatten the key map into a list, sorted by code.
    pub fn into_control(self) -> ControlFrame {
        let mut keys: Vec<KeyEvent> = self
            .keys
            .into_iter()
            .map(|(code, m)| KeyEvent {
                code,
                alt: m.alt,
                ctrl: m.ctrl,
                meta: m.meta,
                shift: m.shift,
                repeat: m.repeat,
            })
            .collect();
        keys.sort_by(|a, b| a.code.cmp(&b.code));

        ControlFrame {
            keys,
            click: self.click,
            mouse: self.mouse,
        }
    }
}

/// A held key in engine form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub repeat: bool,
}

/// Engine-facing control input for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlFrame {
    pub keys: Vec<KeyEvent>,
    pub click: [Option<Vec2>; 2],
    pub mouse: Vec2,
}
