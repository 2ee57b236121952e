use serde::{Deserialize, Serialize};

/// Options read from the host page when the adapter is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdapterConfig {
    /// Make the element focusable and focus it on mount, so key events reach it.
    pub focus_on_mount: bool,
    pub tab_index: i32,
    /// Call `preventDefault` on contextmenu events.
    pub suppress_context_menu: bool,
    /// Copy the displayed size into the canvas buffer on mount and resize.
    pub sync_buffer: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            focus_on_mount: true,
            tab_index: 0,
            suppress_context_menu: true,
            sync_buffer: true,
        }
    }
}
