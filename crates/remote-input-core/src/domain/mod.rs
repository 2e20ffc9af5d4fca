//! Domain entities for remote input emulation.
//!
//! This module contains pure state with no I/O.  The keyboard owns the
//! modifier state; the mouse and touchscreen only ever see it through a
//! read-only [`modifiers::ModifierReader`].

/// Modifier bitmask and the shared modifier state handle.
pub mod modifiers;

/// Mouse button vocabulary used in pointer events.
pub mod mouse;
