//! DevTools `Input` domain payloads and request numbering.

pub mod events;
pub mod sequence;

pub use events::*;
pub use sequence::RequestIdCounter;
