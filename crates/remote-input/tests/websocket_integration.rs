//! Integration tests for the DevTools WebSocket channel.
//!
//! Each test starts a throwaway WebSocket server on a loopback port and
//! scripts its replies, then drives a [`WebSocketChannel`] (directly or
//! through the controllers) against it.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use remote_input::application::{ChannelError, CommandChannel, InputDevices, PressOptions};
use remote_input::infrastructure::channel::WebSocketChannel;

/// How the scripted server answers each request.
#[derive(Clone, Copy)]
enum Script {
    /// Sends an unrelated event frame, then the matching result.
    Acknowledge,
    /// Answers with an error object.
    Reject,
    /// Reads requests but never answers.
    Silent,
    /// Closes the socket on the first request.
    Hangup,
}

/// Starts a one-connection server and returns its URL plus a receiver of
/// every request it saw.
async fn start_server(script: Script) -> (String, mpsc::UnboundedReceiver<Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();

        while let Some(Ok(frame)) = ws.next().await {
            let Message::Text(text) = frame else { continue };
            let request: Value = serde_json::from_str(&text).unwrap();
            let id = request["id"].clone();
            let _ = tx.send(request);

            match script {
                Script::Acknowledge => {
                    let event = json!({"method": "Page.frameNavigated", "params": {}});
                    ws.send(Message::Text(event.to_string())).await.unwrap();
                    let reply = json!({"id": id, "result": {}});
                    ws.send(Message::Text(reply.to_string())).await.unwrap();
                }
                Script::Reject => {
                    let reply = json!({
                        "id": id,
                        "error": {"code": -32602, "message": "Invalid parameters"}
                    });
                    ws.send(Message::Text(reply.to_string())).await.unwrap();
                }
                Script::Silent => {}
                Script::Hangup => {
                    let _ = ws.close(None).await;
                    return;
                }
            }
        }
    });

    (format!("ws://{addr}"), rx)
}

#[tokio::test]
async fn test_send_resolves_on_matching_reply_and_skips_events() {
    // Arrange
    let (url, mut requests) = start_server(Script::Acknowledge).await;
    let channel = WebSocketChannel::connect(&url, Duration::from_secs(5))
        .await
        .unwrap();

    // Act
    let first = channel
        .send("Input.dispatchTouchEvent", json!({"type": "touchEnd"}))
        .await
        .unwrap();
    let second = channel.send("Input.dispatchMouseEvent", json!({})).await.unwrap();

    // Assert
    assert_eq!(first, json!({}));
    assert_eq!(second, json!({}));
    let r1 = requests.recv().await.unwrap();
    let r2 = requests.recv().await.unwrap();
    assert_eq!(r1["method"], "Input.dispatchTouchEvent");
    assert_eq!(r1["params"]["type"], "touchEnd");
    assert_eq!(r1["id"], 1);
    assert_eq!(r2["id"], 2);
    assert!(r1.get("sessionId").is_none());
}

#[tokio::test]
async fn test_session_id_is_attached_to_requests() {
    let (url, mut requests) = start_server(Script::Acknowledge).await;
    let channel = WebSocketChannel::connect(&url, Duration::from_secs(5))
        .await
        .unwrap()
        .with_session("SESSION-1");

    channel.send("Input.dispatchKeyEvent", json!({})).await.unwrap();

    let request = requests.recv().await.unwrap();
    assert_eq!(request["sessionId"], "SESSION-1");
}

#[tokio::test]
async fn test_error_reply_becomes_remote_error() {
    let (url, _requests) = start_server(Script::Reject).await;
    let channel = WebSocketChannel::connect(&url, Duration::from_secs(5))
        .await
        .unwrap();

    let result = channel.send("Input.dispatchKeyEvent", json!({})).await;

    assert!(matches!(
        result,
        Err(ChannelError::Remote { code: -32602, .. })
    ));
}

#[tokio::test]
async fn test_missing_reply_times_out() {
    let (url, _requests) = start_server(Script::Silent).await;
    let channel = WebSocketChannel::connect(&url, Duration::from_millis(100))
        .await
        .unwrap();

    let result = channel.send("Input.dispatchKeyEvent", json!({})).await;

    assert!(matches!(result, Err(ChannelError::Timeout { .. })));
}

#[tokio::test]
async fn test_server_hangup_is_reported() {
    let (url, _requests) = start_server(Script::Hangup).await;
    let channel = WebSocketChannel::connect(&url, Duration::from_secs(5))
        .await
        .unwrap();

    let result = channel.send("Input.dispatchKeyEvent", json!({})).await;

    assert!(matches!(
        result,
        Err(ChannelError::Closed) | Err(ChannelError::Transport(_))
    ));
}

#[tokio::test]
async fn test_connect_to_closed_port_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = WebSocketChannel::connect(&format!("ws://{addr}"), Duration::from_secs(1)).await;

    assert!(matches!(result, Err(ChannelError::Transport(_))));
}

#[tokio::test]
async fn test_keyboard_press_over_websocket() {
    // Arrange
    let (url, mut requests) = start_server(Script::Acknowledge).await;
    let channel = WebSocketChannel::connect(&url, Duration::from_secs(5))
        .await
        .unwrap();
    let mut devices = InputDevices::new(Arc::new(channel) as Arc<dyn CommandChannel>);

    // Act
    devices
        .keyboard
        .press("KeyQ", &PressOptions::default())
        .await
        .unwrap();

    // Assert
    let down = requests.recv().await.unwrap();
    let up = requests.recv().await.unwrap();
    assert_eq!(down["params"]["type"], "keyDown");
    assert_eq!(down["params"]["text"], "q");
    assert_eq!(up["params"]["type"], "keyUp");
    assert_eq!(up["params"]["code"], "KeyQ");
}
