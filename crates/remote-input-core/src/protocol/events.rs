//! Parameter records for the DevTools `Input.dispatch*Event` commands.
//!
//! Each struct serializes to exactly the flat JSON object the remote side
//! expects, e.g.
//!
//! ```json
//! {"type":"keyDown","modifiers":8,"windowsVirtualKeyCode":65,"code":"KeyA",
//!  "key":"A","text":"A","unmodifiedText":"A","autoRepeat":false,
//!  "location":0,"isKeypad":false}
//! ```
//!
//! Fields that a given event type does not carry are `None` and omitted from
//! the JSON entirely (a `keyUp` has no `text`, a `char` has no `code`).
//! All structs also implement `Deserialize` so that recorded traffic can be
//! read back into typed values.

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::modifiers::Modifiers;
use crate::domain::mouse::MouseButton;
use crate::keymap::KeyDescription;

/// Method name for keyboard events.
pub const DISPATCH_KEY_EVENT: &str = "Input.dispatchKeyEvent";
/// Method name for mouse events.
pub const DISPATCH_MOUSE_EVENT: &str = "Input.dispatchMouseEvent";
/// Method name for touch events.
pub const DISPATCH_TOUCH_EVENT: &str = "Input.dispatchTouchEvent";

/// A payload that is sent with a fixed command method.
pub trait InputEvent: Serialize {
    /// The command channel method this payload belongs to.
    const METHOD: &'static str;
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Writes whole coordinates as JSON integers (`3`, not `3.0`).
fn serialize_coordinate<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

/// `type` field of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyEventType {
    /// Key-down that produces text.
    KeyDown,
    KeyUp,
    /// Key-down that produces no text.
    RawKeyDown,
    /// A bare character with no key behind it.
    Char,
}

/// Parameters of `Input.dispatchKeyEvent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEventParams {
    #[serde(rename = "type")]
    pub event_type: KeyEventType,
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_virtual_key_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmodified_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_repeat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_keypad: Option<bool>,
}

impl KeyEventParams {
    /// Builds a key-down event.
    ///
    /// The event is `rawKeyDown` when `text` is empty and `keyDown` otherwise;
    /// `text` is sent both as `text` and `unmodifiedText`.
    pub fn key_down(
        description: &KeyDescription,
        text: &str,
        modifiers: Modifiers,
        auto_repeat: bool,
    ) -> Self {
        let event_type = if text.is_empty() {
            KeyEventType::RawKeyDown
        } else {
            KeyEventType::KeyDown
        };
        Self {
            event_type,
            modifiers,
            windows_virtual_key_code: Some(description.key_code),
            code: Some(description.code.to_string()),
            key: Some(description.key.to_string()),
            text: Some(text.to_string()),
            unmodified_text: Some(text.to_string()),
            auto_repeat: Some(auto_repeat),
            location: Some(description.location),
            is_keypad: Some(description.is_keypad()),
        }
    }

    /// Builds a key-up event.
    pub fn key_up(description: &KeyDescription, modifiers: Modifiers) -> Self {
        Self {
            event_type: KeyEventType::KeyUp,
            modifiers,
            windows_virtual_key_code: Some(description.key_code),
            code: Some(description.code.to_string()),
            key: Some(description.key.to_string()),
            text: None,
            unmodified_text: None,
            auto_repeat: None,
            location: Some(description.location),
            is_keypad: None,
        }
    }

    /// Builds a `char` event carrying `character` as key, text and
    /// unmodified text.
    pub fn character(character: &str, modifiers: Modifiers) -> Self {
        Self {
            event_type: KeyEventType::Char,
            modifiers,
            windows_virtual_key_code: None,
            code: None,
            key: Some(character.to_string()),
            text: Some(character.to_string()),
            unmodified_text: Some(character.to_string()),
            auto_repeat: None,
            location: None,
            is_keypad: None,
        }
    }
}

impl InputEvent for KeyEventParams {
    const METHOD: &'static str = DISPATCH_KEY_EVENT;
}

// ── Mouse ─────────────────────────────────────────────────────────────────────

/// `type` field of a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseEventType {
    MouseMoved,
    MousePressed,
    MouseReleased,
}

/// Parameters of `Input.dispatchMouseEvent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseEventParams {
    #[serde(rename = "type")]
    pub event_type: MouseEventType,
    #[serde(serialize_with = "serialize_coordinate")]
    pub x: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub y: f64,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    /// Only present on press and release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_count: Option<u32>,
}

impl MouseEventParams {
    pub fn moved(x: f64, y: f64, button: MouseButton, modifiers: Modifiers) -> Self {
        Self {
            event_type: MouseEventType::MouseMoved,
            x,
            y,
            button,
            modifiers,
            click_count: None,
        }
    }

    pub fn pressed(
        x: f64,
        y: f64,
        button: MouseButton,
        modifiers: Modifiers,
        click_count: u32,
    ) -> Self {
        Self {
            event_type: MouseEventType::MousePressed,
            x,
            y,
            button,
            modifiers,
            click_count: Some(click_count),
        }
    }

    pub fn released(
        x: f64,
        y: f64,
        button: MouseButton,
        modifiers: Modifiers,
        click_count: u32,
    ) -> Self {
        Self {
            event_type: MouseEventType::MouseReleased,
            x,
            y,
            button,
            modifiers,
            click_count: Some(click_count),
        }
    }
}

impl InputEvent for MouseEventParams {
    const METHOD: &'static str = DISPATCH_MOUSE_EVENT;
}

// ── Touch ─────────────────────────────────────────────────────────────────────

/// `type` field of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TouchEventType {
    TouchStart,
    TouchEnd,
}

/// One finger on the touch surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    #[serde(serialize_with = "serialize_coordinate")]
    pub x: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub y: f64,
}

/// Parameters of `Input.dispatchTouchEvent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchEventParams {
    #[serde(rename = "type")]
    pub event_type: TouchEventType,
    pub touch_points: Vec<TouchPoint>,
    pub modifiers: Modifiers,
}

impl TouchEventParams {
    pub fn start(points: Vec<TouchPoint>, modifiers: Modifiers) -> Self {
        Self {
            event_type: TouchEventType::TouchStart,
            touch_points: points,
            modifiers,
        }
    }

    /// A touch-end lifts every finger, so it carries no points.
    pub fn end(modifiers: Modifiers) -> Self {
        Self {
            event_type: TouchEventType::TouchEnd,
            touch_points: Vec::new(),
            modifiers,
        }
    }
}

impl InputEvent for TouchEventParams {
    const METHOD: &'static str = DISPATCH_TOUCH_EVENT;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key_a() -> KeyDescription {
        KeyDescription {
            key: "a",
            key_code: 65,
            code: "KeyA",
            text: "a",
            location: 0,
        }
    }

    #[test]
    fn test_key_down_with_text_serializes_full_record() {
        // Act
        let params = KeyEventParams::key_down(&key_a(), "a", Modifiers::NONE, false);

        // Assert
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "type": "keyDown",
                "modifiers": 0,
                "windowsVirtualKeyCode": 65,
                "code": "KeyA",
                "key": "a",
                "text": "a",
                "unmodifiedText": "a",
                "autoRepeat": false,
                "location": 0,
                "isKeypad": false
            })
        );
    }

    #[test]
    fn test_key_down_without_text_is_raw_and_keeps_empty_text() {
        let params = KeyEventParams::key_down(&key_a(), "", Modifiers(2), true);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["type"], "rawKeyDown");
        assert_eq!(value["text"], "");
        assert_eq!(value["unmodifiedText"], "");
        assert_eq!(value["autoRepeat"], true);
        assert_eq!(value["modifiers"], 2);
    }

    #[test]
    fn test_key_up_omits_text_fields() {
        let value = serde_json::to_value(KeyEventParams::key_up(&key_a(), Modifiers::NONE)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "keyUp",
                "modifiers": 0,
                "windowsVirtualKeyCode": 65,
                "code": "KeyA",
                "key": "a",
                "location": 0
            })
        );
    }

    #[test]
    fn test_character_event_has_only_text_fields() {
        let value = serde_json::to_value(KeyEventParams::character("é", Modifiers(8))).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "char",
                "modifiers": 8,
                "key": "é",
                "text": "é",
                "unmodifiedText": "é"
            })
        );
    }

    #[test]
    fn test_mouse_moved_has_no_click_count() {
        let value = serde_json::to_value(MouseEventParams::moved(
            10.0,
            20.0,
            MouseButton::None,
            Modifiers::NONE,
        ))
        .unwrap();
        assert_eq!(value["type"], "mouseMoved");
        assert_eq!(value["button"], "none");
        assert!(value.get("clickCount").is_none());
    }

    #[test]
    fn test_mouse_pressed_carries_click_count() {
        let value = serde_json::to_value(MouseEventParams::pressed(
            1.5,
            2.5,
            MouseButton::Right,
            Modifiers(1),
            2,
        ))
        .unwrap();
        assert_eq!(value["type"], "mousePressed");
        assert_eq!(value["button"], "right");
        assert_eq!(value["clickCount"], 2);
        assert_eq!(value["x"], 1.5);
    }

    #[test]
    fn test_whole_mouse_coordinates_serialize_as_integers() {
        // Act
        let value = serde_json::to_value(MouseEventParams::moved(
            3.0,
            -0.0,
            MouseButton::None,
            Modifiers::NONE,
        ))
        .unwrap();

        // Assert: integer JSON numbers, not 3.0.
        assert_eq!(
            value,
            json!({"type": "mouseMoved", "x": 3, "y": 0, "button": "none", "modifiers": 0})
        );
        assert!(value["x"].is_i64());
    }

    #[test]
    fn test_fractional_and_huge_coordinates_stay_floats() {
        let value = serde_json::to_value(MouseEventParams::pressed(
            1.5,
            1e300,
            MouseButton::Left,
            Modifiers::NONE,
            1,
        ))
        .unwrap();
        assert!(value["x"].is_f64());
        assert!(value["y"].is_f64());
    }

    #[test]
    fn test_touch_start_serializes_integer_points() {
        // Arrange
        let points = vec![TouchPoint { x: 0.0, y: 2.0 }];

        // Act
        let text = serde_json::to_string(&TouchEventParams::start(points, Modifiers(1))).unwrap();

        // Assert
        assert_eq!(
            text,
            r#"{"type":"touchStart","touchPoints":[{"x":0,"y":2}],"modifiers":1}"#
        );
    }

    #[test]
    fn test_integer_coordinates_read_back_as_floats() {
        let parsed: MouseEventParams = serde_json::from_value(json!({
            "type": "mouseMoved", "x": 3, "y": 4, "button": "left", "modifiers": 0
        }))
        .unwrap();
        assert_eq!((parsed.x, parsed.y), (3.0, 4.0));
    }

    #[test]
    fn test_touch_end_serializes_empty_point_list() {
        let value = serde_json::to_value(TouchEventParams::end(Modifiers::NONE)).unwrap();
        assert_eq!(value, json!({"type": "touchEnd", "touchPoints": [], "modifiers": 0}));
    }

    #[test]
    fn test_key_event_reads_back_from_json() {
        // Arrange
        let original = KeyEventParams::key_up(&key_a(), Modifiers(4));
        let value = serde_json::to_value(&original).unwrap();

        // Act
        let parsed: KeyEventParams = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_methods_match_devtools_names() {
        assert_eq!(KeyEventParams::METHOD, "Input.dispatchKeyEvent");
        assert_eq!(MouseEventParams::METHOD, "Input.dispatchMouseEvent");
        assert_eq!(TouchEventParams::METHOD, "Input.dispatchTouchEvent");
    }
}
