//! Modifier key bitmask and the state shared between input controllers.
//!
//! # The modifier bitmask
//!
//! Every DevTools input event carries a `modifiers` field: a small integer
//! whose bits say which of Alt, Control, Meta and Shift were held when the
//! event fired.
//!
//! | Modifier | Bit |
//! |----------|-----|
//! | Alt      | 1   |
//! | Control  | 2   |
//! | Meta     | 4   |
//! | Shift    | 8   |
//!
//! The bit for a modifier is set while *any* key labelled with that modifier
//! is held, so `ShiftLeft` and `ShiftRight` both map to bit 8.
//!
//! # Ownership
//!
//! The keyboard is the only component that mutates the mask.  It owns a
//! [`ModifierState`] and hands out [`ModifierReader`]s to the mouse and
//! touchscreen so they can stamp the current mask onto pointer and touch
//! events.  Both types share one `AtomicU8`; `ModifierState` is not
//! `Clone`, so there is exactly one writer.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Bitmask of held modifier keys, serialized as the bare integer the
/// DevTools protocol expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: u8 = 1;
    pub const CONTROL: u8 = 2;
    pub const META: u8 = 4;
    pub const SHIFT: u8 = 8;

    /// Returns the modifier bit a key label contributes, or `0` if the label
    /// is not a modifier.
    ///
    /// Only the exact labels `"Alt"`, `"Control"`, `"Meta"` and `"Shift"`
    /// count.  `"AltGraph"` is not a modifier here.
    pub fn bit_for_key(key: &str) -> u8 {
        match key {
            "Alt" => Self::ALT,
            "Control" => Self::CONTROL,
            "Meta" => Self::META,
            "Shift" => Self::SHIFT,
            _ => 0,
        }
    }

    /// Returns the raw bitmask.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if no modifier is held.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if Shift is held.
    pub fn shift(self) -> bool {
        self.0 & Self::SHIFT != 0
    }

    /// Returns `true` if Alt, Control or Meta is held.
    ///
    /// Real keyboards produce no printable text for these combinations.
    pub fn has_non_shift(self) -> bool {
        self.0 & !Self::SHIFT != 0
    }
}

impl From<u8> for Modifiers {
    fn from(bits: u8) -> Self {
        Modifiers(bits)
    }
}

/// The single writable copy of the modifier bitmask.
///
/// Owned by the keyboard.  Initialised to zero and only changed by
/// [`insert_key`](Self::insert_key) / [`remove_key`](Self::remove_key).
#[derive(Debug, Default)]
pub struct ModifierState {
    bits: Arc<AtomicU8>,
}

impl ModifierState {
    /// Creates an empty modifier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current bitmask.
    pub fn current(&self) -> Modifiers {
        Modifiers(self.bits.load(Ordering::Relaxed))
    }

    /// ORs in the bit for `key` (no-op for non-modifier labels).
    pub fn insert_key(&self, key: &str) {
        let bit = Modifiers::bit_for_key(key);
        if bit != 0 {
            self.bits.fetch_or(bit, Ordering::Relaxed);
        }
    }

    /// Clears the bit for `key` (no-op for non-modifier labels).
    pub fn remove_key(&self, key: &str) {
        let bit = Modifiers::bit_for_key(key);
        if bit != 0 {
            self.bits.fetch_and(!bit, Ordering::Relaxed);
        }
    }

    /// Returns a read-only handle observing this state.
    pub fn reader(&self) -> ModifierReader {
        ModifierReader {
            bits: Arc::clone(&self.bits),
        }
    }
}

/// Read-only view of a [`ModifierState`].
///
/// Cheap to clone; every clone observes the same underlying state.
#[derive(Debug, Clone)]
pub struct ModifierReader {
    bits: Arc<AtomicU8>,
}

impl ModifierReader {
    /// Returns the bitmask as of this instant.
    pub fn current(&self) -> Modifiers {
        Modifiers(self.bits.load(Ordering::Relaxed))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
