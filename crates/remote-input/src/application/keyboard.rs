//! Keyboard: symbolic key names in, `Input.dispatchKeyEvent` out.
//!
//! The keyboard is the only component with mutable input state that outlives
//! a call:
//!
//! - the **modifier bitmask** (Alt=1, Control=2, Meta=4, Shift=8), shared
//!   read-only with the mouse and touchscreen through a [`ModifierReader`];
//! - the **pressed key set**, the hardware codes currently held down.
//!
//! # Autorepeat
//!
//! A key-down reports `autoRepeat: true` when the resolved key *label* is
//! found in the set of pressed hardware *codes*.  For keys whose label equals
//! their code (`Enter`, `Tab`, `Escape`, arrows, F-keys) this behaves like a
//! held key re-firing; for letters (`"a"` vs `"KeyA"`) it never fires.  Remote
//! consumers compare payloads bit for bit, so this is kept as is.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use remote_input_core::{
    KeyDescription, KeyEventParams, KeyLayout, ModifierReader, ModifierState, Modifiers,
};
use tracing::debug;

use super::channel::{dispatch, CommandChannel};
use super::error::InputError;
use super::pause;

/// Options for [`Keyboard::down`].
#[derive(Debug, Clone, Default)]
pub struct KeyDownOptions {
    /// Text to send instead of the text the key would produce.
    pub text: Option<String>,
}

/// Options for [`Keyboard::press`].
#[derive(Debug, Clone, Default)]
pub struct PressOptions {
    /// Dwell time between key-down and key-up.
    pub delay: Option<Duration>,
    /// Text override forwarded to the key-down.
    pub text: Option<String>,
}

/// Options for [`Keyboard::type_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeOptions {
    /// Pause after every character (also used as press dwell time when the
    /// layout presses characters as keys).
    pub delay: Option<Duration>,
}

/// Emulated keyboard bound to one command channel.
pub struct Keyboard {
    channel: Arc<dyn CommandChannel>,
    layout: Arc<KeyLayout>,
    modifiers: ModifierState,
    pressed_keys: HashSet<&'static str>,
}

impl Keyboard {
    /// Creates a keyboard using the US layout.
    pub fn new(channel: Arc<dyn CommandChannel>) -> Self {
        Self::with_layout(channel, Arc::new(KeyLayout::us()))
    }

    /// Creates a keyboard using a custom layout.
    pub fn with_layout(channel: Arc<dyn CommandChannel>, layout: Arc<KeyLayout>) -> Self {
        Self {
            channel,
            layout,
            modifiers: ModifierState::new(),
            pressed_keys: HashSet::new(),
        }
    }

    /// Current modifier bitmask.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers.current()
    }

    /// Read-only handle to the modifier bitmask for other controllers.
    pub fn modifier_reader(&self) -> ModifierReader {
        self.modifiers.reader()
    }

    /// Returns `true` if the hardware `code` is currently held down.
    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed_keys.contains(code)
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    /// Resolves `key` against the layout and the current modifiers.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownKey`] if the layout has no such key.
    pub fn describe_key(&self, key: &str) -> Result<KeyDescription, InputError> {
        Ok(self.layout.describe(key, self.modifiers.current())?)
    }

    /// Presses `key` down and dispatches a `keyDown`/`rawKeyDown` event.
    ///
    /// # Errors
    ///
    /// [`InputError::UnknownKey`] before any state change, or the channel's
    /// failure after state has been updated.
    pub async fn down(&mut self, key: &str, options: &KeyDownOptions) -> Result<(), InputError> {
        let description = self.describe_key(key)?;

        let auto_repeat = self.pressed_keys.contains(description.key);
        self.pressed_keys.insert(description.code);
        self.modifiers.insert_key(description.key);

        let text = options.text.as_deref().unwrap_or(description.text);
        debug!(
            "key down {:?} code={:?} auto_repeat={auto_repeat}",
            description.key, description.code
        );
        let event =
            KeyEventParams::key_down(&description, text, self.modifiers.current(), auto_repeat);
        dispatch(self.channel.as_ref(), &event).await
    }

    /// Releases `key` and dispatches a `keyUp` event.
    ///
    /// # Errors
    ///
    /// [`InputError::KeyNotPressed`] if the key's hardware code is not held.
    /// The modifier bit for the key is cleared even in that case.
    pub async fn up(&mut self, key: &str) -> Result<(), InputError> {
        let description = self.describe_key(key)?;

        self.modifiers.remove_key(description.key);
        if !self.pressed_keys.remove(description.code) {
            return Err(InputError::KeyNotPressed {
                key: description.key.to_string(),
                code: description.code.to_string(),
            });
        }

        debug!("key up {:?} code={:?}", description.key, description.code);
        let event = KeyEventParams::key_up(&description, self.modifiers.current());
        dispatch(self.channel.as_ref(), &event).await
    }

    /// Sends `character` as a bare `char` event.
    ///
    /// Does not touch the pressed key set or the modifiers, so it works for
    /// characters the layout does not know.
    pub async fn send_character(&self, character: &str) -> Result<(), InputError> {
        let event = KeyEventParams::character(character, self.modifiers.current());
        dispatch(self.channel.as_ref(), &event).await
    }

    /// Types `text` one character at a time.
    ///
    /// Each character is pressed as a key when the layout carries the
    /// generic-character entry and sent as a `char` event otherwise.  After
    /// every character the keyboard pauses for `options.delay`.
    pub async fn type_text(&mut self, text: &str, options: &TypeOptions) -> Result<(), InputError> {
        let press_keys = self.layout.supports_generic_characters();
        let press_options = PressOptions {
            delay: options.delay,
            text: None,
        };
        let mut buf = [0u8; 4];

        for character in text.chars() {
            let character: &str = character.encode_utf8(&mut buf);
            if press_keys {
                self.press(character, &press_options).await?;
            } else {
                self.send_character(character).await?;
            }
            pause(options.delay).await;
        }
        Ok(())
    }

    /// Key-down, optional dwell, key-up.
    ///
    /// If the key-down dispatch fails the key stays held locally; call
    /// [`up`](Self::up) to release it.
    pub async fn press(&mut self, key: &str, options: &PressOptions) -> Result<(), InputError> {
        let down_options = KeyDownOptions {
            text: options.text.clone(),
        };
        self.down(key, &down_options).await?;
        pause(options.delay).await;
        self.up(key).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
