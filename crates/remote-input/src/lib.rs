//! remote-input library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/` and
//! the binary entry point in `main.rs` share the same module tree.
//!
//! # What does remote-input do?
//!
//! It drives a remote browser surface as if a person were using a keyboard,
//! mouse and touchscreen in front of it.  Callers express intent ("press
//! Enter", "click at (120, 48)", "type `hello`") and the controllers turn
//! that intent into the exact sequence of DevTools `Input.*` events a real
//! device would have produced, sending each one over a [`CommandChannel`]
//! and waiting for the remote side to acknowledge it before sending the next.
//!
//! [`CommandChannel`]: application::channel::CommandChannel

/// Application layer: the input controllers and the command channel seam.
pub mod application;

/// Infrastructure layer: channel implementations and configuration storage.
pub mod infrastructure;

pub use application::{
    ChannelError, CommandChannel, InputDevices, InputError, Keyboard, Mouse, Touchscreen,
};
