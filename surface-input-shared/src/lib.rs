//! Platform-independent core of surface-input.
//!
//! Holds the polled input record, the coordinate normalization it relies on
//! and the mount/remount logic. The DOM side lives in `surface-input-web`,
//! which plugs in through the [`Surface`] trait.

pub mod adapter;
pub mod config;
pub mod input;
pub mod math;

pub use adapter::{InputAdapter, SharedInput, Surface};
pub use config::AdapterConfig;
pub use input::{
    ControlFrame, EventResponse, InputEvent, InputSnapshot, InputState, KeyEvent, KeyModifiers,
    MouseButton,
};
