//! Command channel implementations.

pub mod recording;
pub mod websocket;

pub use recording::{RecordingChannel, SentCommand};
pub use websocket::WebSocketChannel;
