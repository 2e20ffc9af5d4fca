//! In-memory command channel that records every acknowledged command.
//!
//! Used by the unit tests of the controllers and by the binary's `--dry-run`
//! mode.  Every `send` is acknowledged immediately with an empty result
//! object, unless the channel was built with [`RecordingChannel::failing_after`].
//!
//! # Usage in tests
//!
//! ```ignore
//! let channel = Arc::new(RecordingChannel::new());
//! let mut keyboard = Keyboard::new(Arc::clone(&channel) as Arc<dyn CommandChannel>);
//!
//! keyboard.press("Enter", &PressOptions::default()).await?;
//!
//! assert_eq!(channel.key_events().len(), 2);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use remote_input_core::{
    KeyEventParams, MouseEventParams, TouchEventParams, DISPATCH_KEY_EVENT, DISPATCH_MOUSE_EVENT,
    DISPATCH_TOUCH_EVENT,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::time::Instant;
use tracing::trace;

use crate::application::{ChannelError, CommandChannel};

/// One acknowledged command.
#[derive(Debug, Clone, PartialEq)]
pub struct SentCommand {
    pub method: String,
    pub params: Value,
    /// When the command was acknowledged (tokio clock, so paused-time tests
    /// see exact delays).
    pub at: Instant,
}

/// Records commands instead of delivering them.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<SentCommand>>,
    attempts: AtomicUsize,
    /// Sends after this many successful ones fail.
    fail_after: Option<usize>,
}

impl RecordingChannel {
    /// Creates a channel that acknowledges every command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel that acknowledges the first `successes` commands and
    /// fails every later one with a transport error.
    pub fn failing_after(successes: usize) -> Self {
        Self {
            fail_after: Some(successes),
            ..Self::default()
        }
    }

    /// Snapshot of every acknowledged command, oldest first.
    pub fn sent(&self) -> Vec<SentCommand> {
        self.lock().clone()
    }

    /// Method names of the acknowledged commands, oldest first.
    pub fn methods(&self) -> Vec<String> {
        self.lock().iter().map(|c| c.method.clone()).collect()
    }

    /// Acknowledged `Input.dispatchKeyEvent` payloads.
    pub fn key_events(&self) -> Vec<KeyEventParams> {
        self.decode(DISPATCH_KEY_EVENT)
    }

    /// Acknowledged `Input.dispatchMouseEvent` payloads.
    pub fn mouse_events(&self) -> Vec<MouseEventParams> {
        self.decode(DISPATCH_MOUSE_EVENT)
    }

    /// Acknowledged `Input.dispatchTouchEvent` payloads.
    pub fn touch_events(&self) -> Vec<TouchEventParams> {
        self.decode(DISPATCH_TOUCH_EVENT)
    }

    /// Forgets every recorded command.  The failure budget is not reset.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SentCommand>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn decode<T: DeserializeOwned>(&self, method: &str) -> Vec<T> {
        self.lock()
            .iter()
            .filter(|c| c.method == method)
            .filter_map(|c| serde_json::from_value(c.params.clone()).ok())
            .collect()
    }
}

#[async_trait]
impl CommandChannel for RecordingChannel {
    async fn send(&self, method: &str, params: Value) -> Result<Value, ChannelError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_after.is_some_and(|limit| attempt >= limit) {
            return Err(ChannelError::Transport("injected failure".to_string()));
        }

        trace!("recorded {method}");
        self.lock().push(SentCommand {
            method: method.to_string(),
            params,
            at: Instant::now(),
        });
        Ok(json!({}))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
