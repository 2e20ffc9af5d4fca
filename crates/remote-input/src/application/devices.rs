//! The three input controllers wired over one command channel.

use std::sync::Arc;

use remote_input_core::KeyLayout;

use super::channel::CommandChannel;
use super::keyboard::Keyboard;
use super::mouse::Mouse;
use super::touchscreen::Touchscreen;

/// Keyboard, mouse and touchscreen sharing one channel and one modifier
/// bitmask.  Only the keyboard writes the modifiers.
pub struct InputDevices {
    pub keyboard: Keyboard,
    pub mouse: Mouse,
    pub touchscreen: Touchscreen,
}

impl InputDevices {
    /// Builds the devices with the US keyboard layout.
    pub fn new(channel: Arc<dyn CommandChannel>) -> Self {
        Self::with_layout(channel, Arc::new(KeyLayout::us()))
    }

    pub fn with_layout(channel: Arc<dyn CommandChannel>, layout: Arc<KeyLayout>) -> Self {
        let keyboard = Keyboard::with_layout(Arc::clone(&channel), layout);
        let mouse = Mouse::new(Arc::clone(&channel), keyboard.modifier_reader());
        let touchscreen = Touchscreen::new(channel, keyboard.modifier_reader());
        Self {
            keyboard,
            mouse,
            touchscreen,
        }
    }
}
