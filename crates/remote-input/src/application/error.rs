//! Error type shared by the input controllers.

use remote_input_core::KeyLayoutError;
use thiserror::Error;

use super::channel::ChannelError;

/// Error type for keyboard, mouse and touchscreen operations.
#[derive(Debug, Error)]
pub enum InputError {
    /// The key name is not in the layout.  Raised before anything is sent.
    #[error("unknown key: {0:?}")]
    UnknownKey(String),

    /// `up` was called for a key whose hardware code is not held down.
    #[error("key {key:?} (code {code:?}) released without a matching key-down")]
    KeyNotPressed { key: String, code: String },

    /// The command channel failed while dispatching an event.
    #[error("channel failure: {0}")]
    Channel(#[from] ChannelError),

    /// An event payload could not be serialized.
    #[error("failed to encode event parameters: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<KeyLayoutError> for InputError {
    fn from(err: KeyLayoutError) -> Self {
        match err {
            KeyLayoutError::UnknownKey(name) => InputError::UnknownKey(name),
        }
    }
}
