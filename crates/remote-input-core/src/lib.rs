//! # remote-input-core
//!
//! Shared library for remote input emulation containing the modifier state
//! model, the symbolic key layout tables, and the DevTools `Input.*` payload
//! types.
//!
//! This crate has zero dependencies on async runtimes, sockets, or any
//! particular command channel.  Everything here is deterministic and can be
//! tested without a browser.
//!
//! # Architecture overview
//!
//! A remote browser surface (for example a Chromium page driven over the
//! DevTools protocol) has no physical keyboard or mouse attached.  To make it
//! behave as if a user were typing and clicking, the driver must synthesise
//! the *exact* events a real device would have produced: which modifier bits
//! were held, what text a key produced under Shift, whether a key-down is an
//! autorepeat, and so on.
//!
//! - **`domain`** – Modifier bitmask, the shared modifier state handle, and
//!   the mouse button vocabulary.
//!
//! - **`keymap`** – The key layout table (symbolic key name → hardware
//!   description) and the rules that resolve a key name into a concrete
//!   [`KeyDescription`] under the current modifiers.  The US layout ships as
//!   the default table.
//!
//! - **`protocol`** – The wire payloads sent to the remote side
//!   (`Input.dispatchKeyEvent`, `Input.dispatchMouseEvent`,
//!   `Input.dispatchTouchEvent`) and the request id counter used by channels.

pub mod domain;
pub mod keymap;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `remote_input_core::KeyLayout` instead of `remote_input_core::keymap::KeyLayout`.
pub use domain::modifiers::{ModifierReader, ModifierState, Modifiers};
pub use domain::mouse::MouseButton;
pub use keymap::{KeyDefinition, KeyDescription, KeyLayout, KeyLayoutError};
pub use protocol::events::{
    InputEvent, KeyEventParams, KeyEventType, MouseEventParams, MouseEventType, TouchEventParams,
    TouchEventType, TouchPoint, DISPATCH_KEY_EVENT, DISPATCH_MOUSE_EVENT, DISPATCH_TOUCH_EVENT,
};
pub use protocol::sequence::RequestIdCounter;
