//! Mouse: cursor position, active button, interpolated moves.

use std::sync::Arc;
use std::time::Duration;

use remote_input_core::{ModifierReader, MouseButton, MouseEventParams};
use tracing::debug;

use super::channel::{dispatch, CommandChannel};
use super::error::InputError;
use super::pause;

/// Options for [`Mouse::move_to`].
#[derive(Debug, Clone, Copy)]
pub struct MoveOptions {
    /// Number of intermediate `mouseMoved` events.  Zero moves the cursor
    /// without emitting anything.
    pub steps: u32,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self { steps: 1 }
    }
}

/// Options for [`Mouse::down`] and [`Mouse::up`].
#[derive(Debug, Clone, Copy)]
pub struct ButtonOptions {
    pub button: MouseButton,
    /// Caller-supplied click count (2 for a double click, and so on).
    pub click_count: u32,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            button: MouseButton::Left,
            click_count: 1,
        }
    }
}

/// Options for [`Mouse::click`].
#[derive(Debug, Clone, Copy)]
pub struct ClickOptions {
    pub button: MouseButton,
    pub click_count: u32,
    /// Dwell time between press and release.
    pub delay: Option<Duration>,
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self {
            button: MouseButton::Left,
            click_count: 1,
            delay: None,
        }
    }
}

impl From<ClickOptions> for ButtonOptions {
    fn from(options: ClickOptions) -> Self {
        Self {
            button: options.button,
            click_count: options.click_count,
        }
    }
}

/// Emulated mouse.  Starts at (0, 0) with no button held.
pub struct Mouse {
    channel: Arc<dyn CommandChannel>,
    modifiers: ModifierReader,
    x: f64,
    y: f64,
    button: MouseButton,
}

impl Mouse {
    /// Creates a mouse that stamps events with the keyboard's modifiers.
    pub fn new(channel: Arc<dyn CommandChannel>, modifiers: ModifierReader) -> Self {
        Self {
            channel,
            modifiers,
            x: 0.0,
            y: 0.0,
            button: MouseButton::None,
        }
    }

    /// Last position the cursor was moved to.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Button currently held, `MouseButton::None` if none.
    pub fn button(&self) -> MouseButton {
        self.button
    }

    /// Moves the cursor to (`x`, `y`) in `options.steps` linear steps.
    ///
    /// The position is updated before the first event is sent.  Each
    /// intermediate point is rounded to the nearest integer, ties to even.
    pub async fn move_to(&mut self, x: f64, y: f64, options: &MoveOptions) -> Result<(), InputError> {
        let (from_x, from_y) = (self.x, self.y);
        self.x = x;
        self.y = y;

        let steps = options.steps;
        debug!("mouse move ({from_x}, {from_y}) -> ({x}, {y}) in {steps} steps");
        for i in 1..=steps {
            let t = f64::from(i) / f64::from(steps);
            let event = MouseEventParams::moved(
                (from_x + (x - from_x) * t).round_ties_even(),
                (from_y + (y - from_y) * t).round_ties_even(),
                self.button,
                self.modifiers.current(),
            );
            dispatch(self.channel.as_ref(), &event).await?;
        }
        Ok(())
    }

    /// Presses `options.button` at the current position.
    ///
    /// A click count of zero is sent as one.
    pub async fn down(&mut self, options: &ButtonOptions) -> Result<(), InputError> {
        self.button = options.button;
        let event = MouseEventParams::pressed(
            self.x,
            self.y,
            options.button,
            self.modifiers.current(),
            options.click_count.max(1),
        );
        dispatch(self.channel.as_ref(), &event).await
    }

    /// Releases `options.button` at the current position.
    ///
    /// The active button becomes `None` whichever button is named.  A click
    /// count of zero is sent as one.
    pub async fn up(&mut self, options: &ButtonOptions) -> Result<(), InputError> {
        self.button = MouseButton::None;
        let event = MouseEventParams::released(
            self.x,
            self.y,
            options.button,
            self.modifiers.current(),
            options.click_count.max(1),
        );
        dispatch(self.channel.as_ref(), &event).await
    }

    /// Single-step move to (`x`, `y`), press, optional dwell, release.
    pub async fn click(&mut self, x: f64, y: f64, options: &ClickOptions) -> Result<(), InputError> {
        let buttons = ButtonOptions::from(*options);
        self.move_to(x, y, &MoveOptions::default()).await?;
        self.down(&buttons).await?;
        pause(options.delay).await;
        self.up(&buttons).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::channel::recording::RecordingChannel;
    use remote_input_core::{ModifierState, Modifiers, MouseEventType};

    fn make_mouse() -> (Mouse, Arc<RecordingChannel>, ModifierState) {
        let channel = Arc::new(RecordingChannel::new());
        let modifiers = ModifierState::new();
        let mouse = Mouse::new(
            Arc::clone(&channel) as Arc<dyn CommandChannel>,
            modifiers.reader(),
        );
        (mouse, channel, modifiers)
    }

    #[tokio::test]
    async fn test_move_interpolates_rounded_points() {
        // Arrange
        let (mut mouse, ch, _mods) = make_mouse();

        // Act
        mouse
            .move_to(10.0, 20.0, &MoveOptions { steps: 4 })
            .await
            .unwrap();

        // Assert: 2.5 rounds down to 2, 7.5 rounds up to 8.
        let points: Vec<_> = ch.mouse_events().iter().map(|e| (e.x, e.y)).collect();
        assert_eq!(
            points,
            vec![(2.0, 5.0), (5.0, 10.0), (8.0, 15.0), (10.0, 20.0)]
        );
        assert_eq!(mouse.position(), (10.0, 20.0));
    }

    #[tokio::test]
    async fn test_move_single_step_lands_on_rounded_target() {
        let (mut mouse, ch, _mods) = make_mouse();

        mouse
            .move_to(10.4, 7.6, &MoveOptions::default())
            .await
            .unwrap();

        let events = ch.mouse_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, MouseEventType::MouseMoved);
        assert_eq!((events[0].x, events[0].y), (10.0, 8.0));
        // The stored position keeps the fractional target.
        assert_eq!(mouse.position(), (10.4, 7.6));
    }

    #[tokio::test]
    async fn test_move_zero_steps_updates_position_silently() {
        let (mut mouse, ch, _mods) = make_mouse();

        mouse
            .move_to(50.0, 60.0, &MoveOptions { steps: 0 })
            .await
            .unwrap();

        assert!(ch.sent().is_empty());
        assert_eq!(mouse.position(), (50.0, 60.0));
    }

    #[tokio::test]
    async fn test_move_carries_held_button_and_modifiers() {
        // Arrange
        let (mut mouse, ch, mods) = make_mouse();
        mods.insert_key("Shift");
        mouse.down(&ButtonOptions::default()).await.unwrap();

        // Act
        mouse
            .move_to(5.0, 5.0, &MoveOptions::default())
            .await
            .unwrap();

        // Assert
        let moved = &ch.mouse_events()[1];
        assert_eq!(moved.button, MouseButton::Left);
        assert_eq!(moved.modifiers, Modifiers(8));
    }

    #[tokio::test]
    async fn test_down_sends_unrounded_position_and_click_count() {
        let (mut mouse, ch, _mods) = make_mouse();
        mouse
            .move_to(1.25, 2.75, &MoveOptions { steps: 0 })
            .await
            .unwrap();

        mouse
            .down(&ButtonOptions {
                button: MouseButton::Right,
                click_count: 2,
            })
            .await
            .unwrap();

        let event = &ch.mouse_events()[0];
        assert_eq!(event.event_type, MouseEventType::MousePressed);
        assert_eq!((event.x, event.y), (1.25, 2.75));
        assert_eq!(event.button, MouseButton::Right);
        assert_eq!(event.click_count, Some(2));
        assert_eq!(mouse.button(), MouseButton::Right);
    }

    #[tokio::test]
    async fn test_up_reports_requested_button_and_clears_active_button() {
        // Arrange
        let (mut mouse, ch, _mods) = make_mouse();
        mouse.down(&ButtonOptions::default()).await.unwrap();

        // Act: release names a different button than the one held.
        mouse
            .up(&ButtonOptions {
                button: MouseButton::Middle,
                click_count: 1,
            })
            .await
            .unwrap();

        // Assert
        let event = &ch.mouse_events()[1];
        assert_eq!(event.event_type, MouseEventType::MouseReleased);
        assert_eq!(event.button, MouseButton::Middle);
        assert_eq!(mouse.button(), MouseButton::None);
    }

    #[tokio::test]
    async fn test_click_emits_move_press_release_in_order() {
        let (mut mouse, ch, _mods) = make_mouse();

        mouse
            .click(30.0, 40.0, &ClickOptions::default())
            .await
            .unwrap();

        let types: Vec<_> = ch.mouse_events().iter().map(|e| e.event_type).collect();
        assert_eq!(
            types,
            vec![
                MouseEventType::MouseMoved,
                MouseEventType::MousePressed,
                MouseEventType::MouseReleased
            ]
        );
        assert_eq!(mouse.position(), (30.0, 40.0));
        assert_eq!(mouse.button(), MouseButton::None);
    }

    #[tokio::test]
    async fn test_click_count_zero_is_sent_as_one() {
        let (mut mouse, ch, _mods) = make_mouse();
        let options = ClickOptions {
            click_count: 0,
            ..ClickOptions::default()
        };

        mouse.click(1.0, 1.0, &options).await.unwrap();

        let events = ch.mouse_events();
        assert_eq!(events[1].click_count, Some(1));
        assert_eq!(events[2].click_count, Some(1));
    }

    #[tokio::test]
    async fn test_move_rounds_negative_ties_to_even() {
        // Arrange: start at the origin, halfway points at -0.5 and -1.5.
        let (mut mouse, ch, _mods) = make_mouse();

        // Act
        mouse
            .move_to(-1.0, -3.0, &MoveOptions { steps: 2 })
            .await
            .unwrap();

        // Assert
        let points: Vec<_> = ch.mouse_events().iter().map(|e| (e.x, e.y)).collect();
        assert_eq!(points, vec![(0.0, -2.0), (-1.0, -3.0)]);
    }

    #[tokio::test]
    async fn test_bare_down_and_up_send_zero_click_count_as_one() {
        // Arrange
        let (mut mouse, ch, _mods) = make_mouse();
        let options = ButtonOptions {
            button: MouseButton::Left,
            click_count: 0,
        };

        // Act
        mouse.down(&options).await.unwrap();
        mouse.up(&options).await.unwrap();

        // Assert
        let events = ch.mouse_events();
        assert_eq!(events[0].click_count, Some(1));
        assert_eq!(events[1].click_count, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_dwells_between_press_and_release() {
        // Arrange
        let (mut mouse, ch, _mods) = make_mouse();
        let options = ClickOptions {
            delay: Some(Duration::from_millis(120)),
            ..ClickOptions::default()
        };

        // Act
        mouse.click(0.0, 0.0, &options).await.unwrap();

        // Assert
        let sent = ch.sent();
        assert_eq!(sent[1].at - sent[0].at, Duration::ZERO);
        assert_eq!(sent[2].at - sent[1].at, Duration::from_millis(120));
    }

    #[tokio::test]
    async fn test_failed_press_aborts_click_and_keeps_button() {
        // Arrange: the move succeeds, the press fails.
        let channel = Arc::new(RecordingChannel::failing_after(1));
        let mut mouse = Mouse::new(
            Arc::clone(&channel) as Arc<dyn CommandChannel>,
            ModifierState::new().reader(),
        );

        // Act
        let result = mouse.click(9.0, 9.0, &ClickOptions::default()).await;

        // Assert
        assert!(matches!(result, Err(InputError::Channel(_))));
        assert_eq!(channel.sent().len(), 1);
        assert_eq!(mouse.button(), MouseButton::Left);
    }
}
