//! Application layer for remote input emulation.
//!
//! # Controllers
//!
//! - **`keyboard`** – Owns the modifier bitmask and the set of pressed
//!   hardware codes; emits key-down, key-up and char events.
//! - **`mouse`** – Owns the cursor position and active button; emits move,
//!   press and release events stamped with the keyboard's modifiers.
//! - **`touchscreen`** – Emits touch-start/touch-end pairs.
//! - **`devices`** – Bundles the three controllers over one channel.
//!
//! All controllers dispatch through the [`CommandChannel`] trait, which is
//! injected at construction time so tests can record traffic instead of
//! talking to a browser.
//!
//! Every operation awaits each dispatch before issuing the next one, so
//! events reach the channel in program order.  Mutating operations take
//! `&mut self`; overlapping calls on one controller cannot be expressed.

pub mod channel;
pub mod devices;
pub mod error;
pub mod keyboard;
pub mod mouse;
pub mod touchscreen;

use std::time::Duration;

pub use channel::{ChannelError, CommandChannel};
pub use devices::InputDevices;
pub use error::InputError;
pub use keyboard::{KeyDownOptions, Keyboard, PressOptions, TypeOptions};
pub use mouse::{ButtonOptions, ClickOptions, Mouse, MoveOptions};
pub use touchscreen::Touchscreen;

/// Suspends for `delay` unless it is absent or zero.
pub(crate) async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay.filter(|d| !d.is_zero()) {
        tokio::time::sleep(delay).await;
    }
}
