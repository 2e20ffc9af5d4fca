//! Touchscreen: single-finger taps.

use std::sync::Arc;

use remote_input_core::{ModifierReader, TouchEventParams, TouchPoint};
use tracing::debug;

use super::channel::{dispatch, CommandChannel};
use super::error::InputError;

/// Emulated touchscreen.  Holds no state of its own.
pub struct Touchscreen {
    channel: Arc<dyn CommandChannel>,
    modifiers: ModifierReader,
}

impl Touchscreen {
    pub fn new(channel: Arc<dyn CommandChannel>, modifiers: ModifierReader) -> Self {
        Self { channel, modifiers }
    }

    /// Taps once at (`x`, `y`), rounded to the nearest integer, ties to even.
    ///
    /// Sends `touchStart` with one point, then `touchEnd` with none.  If the
    /// start fails the end is not sent.
    pub async fn tap(&self, x: f64, y: f64) -> Result<(), InputError> {
        let point = TouchPoint {
            x: x.round_ties_even(),
            y: y.round_ties_even(),
        };
        debug!("tap at ({}, {})", point.x, point.y);

        let start = TouchEventParams::start(vec![point], self.modifiers.current());
        dispatch(self.channel.as_ref(), &start).await?;

        let end = TouchEventParams::end(self.modifiers.current());
        dispatch(self.channel.as_ref(), &end).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
