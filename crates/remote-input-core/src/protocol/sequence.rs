//! Request id counter for JSON-RPC style command channels.
//!
//! Every command sent over a DevTools connection carries an integer `id`; the
//! remote side echoes that id in its reply so the sender can match replies to
//! requests even when unrelated event frames arrive in between.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing request id source.
///
/// Ids start at 1 and wrap from `u64::MAX` back to 0.  Safe to share between
/// tasks; each call to [`next`](Self::next) returns a distinct id.
///
/// ```rust
/// use remote_input_core::protocol::RequestIdCounter;
///
/// let ids = RequestIdCounter::new();
/// assert_eq!(ids.next(), 1);
/// assert_eq!(ids.next(), 2);
/// ```
#[derive(Debug)]
pub struct RequestIdCounter {
    inner: AtomicU64,
}

impl RequestIdCounter {
    pub fn new() -> Self {
        Self {
            inner: AtomicU64::new(1),
        }
    }

    /// Returns the next id and advances the counter.
    ///
    /// `Relaxed` is enough: ids only need to be unique, not to order memory.
    pub fn next(&self) -> u64 {
        self.inner.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the id the next call to [`next`](Self::next) will hand out.
    pub fn peek(&self) -> u64 {
        self.inner.load(Ordering::Relaxed)
    }
}

impl Default for RequestIdCounter {
    fn default() -> Self {
        Self::new()
    }
}
