//! Symbolic key layout tables and key description resolution.
//!
//! A [`KeyLayout`] maps symbolic key names (`"Enter"`, `"KeyA"`, `"a"`, `"!"`)
//! to a [`KeyDefinition`]: the hardware description of the key that would
//! produce that name on a physical keyboard.  [`KeyLayout::describe`] turns a
//! definition into the concrete [`KeyDescription`] that goes on the wire,
//! taking the held modifiers into account.
//!
//! # Resolution rules
//!
//! 1. Label, virtual key code, hardware code and location come from the
//!    unshifted fields of the definition.
//! 2. With Shift held, `shift_key` and `shift_key_code` replace the label and
//!    key code, each independently and only when present.
//! 3. A one-character label is also the default text.  An explicit `text`
//!    wins over that, and `shift_text` wins under Shift.
//! 4. With Alt, Control or Meta held, the text is always empty.

pub mod us_layout;

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use crate::domain::modifiers::Modifiers;

/// Name of the sentinel entry that marks a layout as able to `press` any
/// literal character.
pub const GENERIC_CHARACTER_KEY: &str = "char";

/// DOM location value for keys on the numeric keypad.
pub const LOCATION_NUMPAD: u32 = 3;

/// Error type for key layout lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyLayoutError {
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
}

/// Hardware description of one symbolic key name.  Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyDefinition {
    pub key: Option<&'static str>,
    pub shift_key: Option<&'static str>,
    pub key_code: Option<u32>,
    pub shift_key_code: Option<u32>,
    pub code: Option<&'static str>,
    pub location: Option<u32>,
    pub text: Option<&'static str>,
    pub shift_text: Option<&'static str>,
}

impl KeyDefinition {
    /// A definition with every field absent.  Used as the base for struct
    /// update syntax in const tables.
    pub const EMPTY: KeyDefinition = KeyDefinition {
        key: None,
        shift_key: None,
        key_code: None,
        shift_key_code: None,
        code: None,
        location: None,
        text: None,
        shift_text: None,
    };
}

/// A key name resolved against a layout and the current modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDescription {
    /// `KeyboardEvent.key` label, e.g. `"a"`, `"A"`, `"Shift"`.
    pub key: &'static str,
    /// Legacy `windowsVirtualKeyCode`.
    pub key_code: u32,
    /// `KeyboardEvent.code` hardware code, e.g. `"KeyA"`, `"ShiftLeft"`.
    pub code: &'static str,
    /// Text the key produces, empty for non-printing keys.
    pub text: &'static str,
    /// DOM key location (0 standard, 1 left, 2 right, 3 numpad, 4 mobile).
    pub location: u32,
}

impl KeyDescription {
    /// Returns `true` for keys on the numeric keypad.
    pub fn is_keypad(&self) -> bool {
        self.location == LOCATION_NUMPAD
    }
}

/// Immutable lookup table from symbolic key name to [`KeyDefinition`].
#[derive(Debug, Clone, Default)]
pub struct KeyLayout {
    definitions: HashMap<&'static str, KeyDefinition>,
}

impl KeyLayout {
    /// Returns the standard US keyboard layout.
    ///
    /// The table has no [`GENERIC_CHARACTER_KEY`] entry, so typing falls back
    /// to `char` events for every character.
    pub fn us() -> Self {
        Self::from_definitions(us_layout::US_KEYBOARD.iter().copied())
    }

    /// Builds a layout from `(name, definition)` pairs.
    ///
    /// A later pair with the same name replaces the earlier one.
    pub fn from_definitions<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, KeyDefinition)>,
    {
        let mut map = HashMap::new();
        for (name, definition) in definitions {
            if map.insert(name, definition).is_some() {
                warn!("key layout: duplicate definition for {name:?}, keeping the last one");
            }
        }
        Self { definitions: map }
    }

    /// Adds the generic-character sentinel so that typing presses each
    /// character as a key instead of sending `char` events.
    pub fn with_generic_characters(mut self) -> Self {
        self.definitions
            .insert(GENERIC_CHARACTER_KEY, KeyDefinition::EMPTY);
        self
    }

    /// Returns `true` if the layout carries the generic-character sentinel.
    pub fn supports_generic_characters(&self) -> bool {
        self.definitions.contains_key(GENERIC_CHARACTER_KEY)
    }

    /// Returns the raw definition for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&KeyDefinition> {
        self.definitions.get(name)
    }

    /// Number of key names in the layout.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Resolves `name` into a [`KeyDescription`] under `modifiers`.
    ///
    /// Pure: the same name and modifiers always give the same description.
    ///
    /// # Errors
    ///
    /// Returns [`KeyLayoutError::UnknownKey`] if `name` is not in the layout.
    pub fn describe(
        &self,
        name: &str,
        modifiers: Modifiers,
    ) -> Result<KeyDescription, KeyLayoutError> {
        let definition = self
            .definitions
            .get(name)
            .ok_or_else(|| KeyLayoutError::UnknownKey(name.to_string()))?;
        let shift = modifiers.shift();

        let mut key = definition.key.unwrap_or("");
        if shift {
            if let Some(shift_key) = definition.shift_key {
                key = shift_key;
            }
        }

        let mut key_code = definition.key_code.unwrap_or(0);
        if shift {
            if let Some(shift_key_code) = definition.shift_key_code {
                key_code = shift_key_code;
            }
        }

        let mut text = "";
        if key.chars().count() == 1 {
            text = key;
        }
        if let Some(explicit) = definition.text {
            text = explicit;
        }
        if shift {
            if let Some(shift_text) = definition.shift_text {
                text = shift_text;
            }
        }

        if modifiers.has_non_shift() {
            text = "";
        }

        Ok(KeyDescription {
            key,
            key_code,
            code: definition.code.unwrap_or(""),
            text,
            location: definition.location.unwrap_or(0),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
