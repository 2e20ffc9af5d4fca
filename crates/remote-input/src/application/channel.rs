//! The command channel seam between the controllers and the remote target.
//!
//! Controllers never talk to a socket directly.  They serialize an event
//! payload and hand it to a [`CommandChannel`], which delivers it and
//! suspends the caller until the remote side acknowledges or fails.
//! Implementations live in the infrastructure layer:
//! `infrastructure::channel::websocket` for DevTools over WebSocket and
//! `infrastructure::channel::recording` for tests and dry runs.

use std::time::Duration;

use async_trait::async_trait;
use remote_input_core::InputEvent;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::error::InputError;

/// Failure of a single `send`.  Propagated to the caller unchanged.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The underlying transport failed (socket error, handshake failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote side answered with an error object.
    #[error("{method} rejected by remote (code {code}): {message}")]
    Remote {
        method: String,
        code: i64,
        message: String,
    },

    /// No reply arrived within the configured request timeout.
    #[error("no reply to {method} within {timeout:?}")]
    Timeout { method: String, timeout: Duration },

    /// The connection was closed before a reply arrived.
    #[error("connection closed")]
    Closed,

    /// The remote side sent something that is not a valid reply.
    #[error("malformed reply: {0}")]
    Protocol(String),
}

/// Asynchronous, sequenced command sink.
///
/// `send` must not return until the remote side has acknowledged (or
/// rejected) the command.  One channel is shared by the keyboard, mouse and
/// touchscreen, so implementations must tolerate concurrent calls.
#[async_trait]
pub trait CommandChannel: Send + Sync {
    /// Sends `method` with `params` and waits for the reply's result.
    async fn send(&self, method: &str, params: Value) -> Result<Value, ChannelError>;
}

/// Serializes `event` and sends it with its fixed method name.
pub(crate) async fn dispatch<E: InputEvent>(
    channel: &dyn CommandChannel,
    event: &E,
) -> Result<(), InputError> {
    let params = serde_json::to_value(event)?;
    debug!("dispatch {} {params}", E::METHOD);
    if let Err(e) = channel.send(E::METHOD, params).await {
        warn!("{} failed: {e}", E::METHOD);
        return Err(e.into());
    }
    Ok(())
}
