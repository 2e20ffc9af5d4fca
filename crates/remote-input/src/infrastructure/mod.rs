//! Infrastructure layer: adapters behind the application's seams.
//!
//! - **`channel`** – [`CommandChannel`](crate::application::CommandChannel)
//!   implementations (DevTools WebSocket, in-memory recorder).
//! - **`storage`** – TOML configuration file.
//!
//! This layer may depend on `application` and `remote_input_core`, never the
//! other way round.

pub mod channel;
pub mod storage;
