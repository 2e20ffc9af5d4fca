//! DevTools command channel over a WebSocket.
//!
//! Each command is one JSON text frame:
//!
//! ```json
//! {"id": 7, "method": "Input.dispatchKeyEvent", "params": {...}, "sessionId": "..."}
//! ```
//!
//! and is acknowledged by the frame that echoes its `id`, carrying either a
//! `result` or an `error` object.  Frames without a matching `id` (protocol
//! events, late replies to timed-out requests) are skipped.
//!
//! Commands are serialized: the socket sits behind an async mutex that is
//! held from the write of a request until its reply is read, so replies can
//! never be attributed to the wrong caller.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use remote_input_core::RequestIdCounter;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, trace, warn};

use crate::application::{ChannelError, CommandChannel};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Command channel speaking the DevTools JSON protocol over a WebSocket.
pub struct WebSocketChannel {
    stream: Mutex<WsStream>,
    ids: RequestIdCounter,
    session_id: Option<String>,
    request_timeout: Duration,
}

impl WebSocketChannel {
    /// Opens a WebSocket to `endpoint` (a `ws://` or `wss://` DevTools URL).
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Transport`] if the connection or the
    /// WebSocket handshake fails.
    pub async fn connect(endpoint: &str, request_timeout: Duration) -> Result<Self, ChannelError> {
        let (stream, _response) = connect_async(endpoint)
            .await
            .map_err(|e| ChannelError::Transport(format!("connect to {endpoint}: {e}")))?;
        info!("connected to {endpoint}");

        Ok(Self {
            stream: Mutex::new(stream),
            ids: RequestIdCounter::new(),
            session_id: None,
            request_timeout,
        })
    }

    /// Attaches every command to the target session `session_id`.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Sends a close frame and waits for the socket to shut down.
    pub async fn close(&self) -> Result<(), ChannelError> {
        let mut stream = self.stream.lock().await;
        stream
            .close(None)
            .await
            .map_err(|e| ChannelError::Transport(e.to_string()))
    }

    async fn read_reply(
        stream: &mut WsStream,
        id: u64,
        method: &str,
    ) -> Result<Value, ChannelError> {
        loop {
            let frame = match stream.next().await {
                None => return Err(ChannelError::Closed),
                Some(Err(e)) => return Err(ChannelError::Transport(e.to_string())),
                Some(Ok(frame)) => frame,
            };

            match frame {
                WsMessage::Text(text) => {
                    if let Some(result) = match_reply(&text, id, method)? {
                        return Ok(result);
                    }
                    trace!("skipping frame while waiting for reply {id}");
                }
                WsMessage::Close(_) => return Err(ChannelError::Closed),
                // Pings are answered by tungstenite itself.
                _ => {}
            }
        }
    }
}

#[async_trait]
impl CommandChannel for WebSocketChannel {
    async fn send(&self, method: &str, params: Value) -> Result<Value, ChannelError> {
        let mut stream = self.stream.lock().await;

        let id = self.ids.next();
        let request = encode_request(id, method, params, self.session_id.as_deref());
        debug!("-> {id} {method}");
        stream
            .send(WsMessage::Text(request))
            .await
            .map_err(|e| ChannelError::Transport(e.to_string()))?;

        match timeout(
            self.request_timeout,
            Self::read_reply(&mut stream, id, method),
        )
        .await
        {
            Ok(reply) => reply,
            Err(_) => {
                warn!("{method} (id {id}) timed out after {:?}", self.request_timeout);
                Err(ChannelError::Timeout {
                    method: method.to_string(),
                    timeout: self.request_timeout,
                })
            }
        }
    }
}

/// Builds the text frame for one command.
pub fn encode_request(id: u64, method: &str, params: Value, session_id: Option<&str>) -> String {
    let mut request = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    if let Some(session_id) = session_id {
        request["sessionId"] = Value::String(session_id.to_string());
    }
    request.to_string()
}

/// Interprets one incoming text frame while waiting for reply `id`.
///
/// Returns `Ok(None)` for frames that belong to something else, and the
/// `result` object (an empty object if absent) for the matching reply.
///
/// # Errors
///
/// [`ChannelError::Protocol`] if the frame is not a JSON object, and
/// [`ChannelError::Remote`] if the matching reply carries an `error`.
pub fn match_reply(text: &str, id: u64, method: &str) -> Result<Option<Value>, ChannelError> {
    let frame: Value =
        serde_json::from_str(text).map_err(|e| ChannelError::Protocol(e.to_string()))?;
    if !frame.is_object() {
        return Err(ChannelError::Protocol(format!("expected an object, got {text}")));
    }

    if frame.get("id").and_then(Value::as_u64) != Some(id) {
        return Ok(None);
    }

    if let Some(error) = frame.get("error") {
        return Err(ChannelError::Remote {
            method: method.to_string(),
            code: error.get("code").and_then(Value::as_i64).unwrap_or(0),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        });
    }

    Ok(Some(frame.get("result").cloned().unwrap_or_else(|| json!({}))))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_request_without_session() {
        let text = encode_request(3, "Input.dispatchTouchEvent", json!({"type": "touchEnd"}), None);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({"id": 3, "method": "Input.dispatchTouchEvent", "params": {"type": "touchEnd"}})
        );
    }

    #[test]
    fn test_encode_request_with_session() {
        let text = encode_request(1, "m", json!({}), Some("ABC"));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["sessionId"], "ABC");
    }

    #[test]
    fn test_match_reply_returns_result_for_matching_id() {
        let reply = match_reply(r#"{"id":5,"result":{"ok":true}}"#, 5, "m").unwrap();
        assert_eq!(reply, Some(json!({"ok": true})));
    }

    #[test]
    fn test_match_reply_defaults_missing_result_to_empty_object() {
        let reply = match_reply(r#"{"id":5}"#, 5, "m").unwrap();
        assert_eq!(reply, Some(json!({})));
    }

    #[test]
    fn test_match_reply_skips_events_and_other_ids() {
        assert_eq!(
            match_reply(r#"{"method":"Page.loadEventFired","params":{}}"#, 5, "m").unwrap(),
            None
        );
        assert_eq!(match_reply(r#"{"id":4,"result":{}}"#, 5, "m").unwrap(), None);
    }

    #[test]
    fn test_match_reply_maps_error_object() {
        // Arrange
        let text = r#"{"id":2,"error":{"code":-32602,"message":"Invalid parameters"}}"#;

        // Act
        let err = match_reply(text, 2, "Input.dispatchKeyEvent").unwrap_err();

        // Assert
        match err {
            ChannelError::Remote {
                method,
                code,
                message,
            } => {
                assert_eq!(method, "Input.dispatchKeyEvent");
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid parameters");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn test_match_reply_rejects_non_json() {
        assert!(matches!(
            match_reply("not json", 1, "m"),
            Err(ChannelError::Protocol(_))
        ));
        assert!(matches!(
            match_reply("[1,2]", 1, "m"),
            Err(ChannelError::Protocol(_))
        ));
    }
}
