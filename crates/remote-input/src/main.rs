//! remote-input: drive a remote browser's keyboard, mouse and touchscreen
//! from the command line.
//!
//! # Usage
//!
//! ```text
//! remote-input [OPTIONS] <COMMAND>
//!
//! Commands:
//!   type         Type text one character at a time
//!   press        Press and release one key
//!   move         Move the mouse pointer
//!   click        Click at a point
//!   tap          Tap the touchscreen at a point
//!   init-config  Write a default configuration file
//!
//! Options:
//!   --config <FILE>      TOML configuration file
//!   --endpoint <URL>     DevTools WebSocket URL (ws://...)
//!   --session-id <ID>    Target session to attach commands to
//!   --dry-run            Print the commands instead of sending them
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                  | Flag           |
//! |---------------------------|----------------|
//! | `REMOTE_INPUT_CONFIG`     | `--config`     |
//! | `REMOTE_INPUT_ENDPOINT`   | `--endpoint`   |
//! | `REMOTE_INPUT_SESSION_ID` | `--session-id` |
//!
//! Flags override the configuration file; the file overrides built-in
//! defaults.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use remote_input::application::{
    ClickOptions, CommandChannel, InputDevices, InputError, MoveOptions, PressOptions,
    TypeOptions,
};
use remote_input::infrastructure::channel::{RecordingChannel, WebSocketChannel};
use remote_input::infrastructure::storage::config::InputConfig;
use remote_input_core::MouseButton;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Emulated keyboard, mouse and touch input for a remote browser.
#[derive(Debug, Parser)]
#[command(name = "remote-input", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, env = "REMOTE_INPUT_CONFIG")]
    config: Option<PathBuf>,

    /// DevTools WebSocket URL, e.g. `ws://127.0.0.1:9222/devtools/page/<id>`.
    #[arg(long, env = "REMOTE_INPUT_ENDPOINT")]
    endpoint: Option<String>,

    /// Flat-mode target session id attached to every command.
    #[arg(long, env = "REMOTE_INPUT_SESSION_ID")]
    session_id: Option<String>,

    /// Record the commands and print them as JSON instead of connecting.
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Type text one character at a time.
    Type {
        text: String,
        /// Pause after each character, in milliseconds.
        #[arg(long)]
        delay: Option<u64>,
    },

    /// Press and release one key (`Enter`, `KeyA`, `a`, `!`, ...).
    Press {
        key: String,
        /// Dwell time between down and up, in milliseconds.
        #[arg(long)]
        delay: Option<u64>,
    },

    /// Move the mouse pointer to (X, Y).
    #[command(allow_negative_numbers = true)]
    Move {
        x: f64,
        y: f64,
        /// Number of interpolated move events.
        #[arg(long)]
        steps: Option<u32>,
    },

    /// Click at (X, Y).
    #[command(allow_negative_numbers = true)]
    Click {
        x: f64,
        y: f64,
        /// left, middle, right, back or forward.
        #[arg(long, default_value_t = MouseButton::Left)]
        button: MouseButton,
        #[arg(long, default_value_t = 1)]
        click_count: u32,
        /// Dwell time between press and release, in milliseconds.
        #[arg(long)]
        delay: Option<u64>,
    },

    /// Tap the touchscreen at (X, Y).
    #[command(allow_negative_numbers = true)]
    Tap { x: f64, y: f64 },

    /// Write a configuration file with every default filled in.
    InitConfig { path: PathBuf },
}

/// A delay given on the command line wins over the configured one; an
/// explicit `0` disables it.
fn delay_override(flag: Option<u64>, configured: Option<Duration>) -> Option<Duration> {
    match flag {
        Some(ms) => (ms > 0).then(|| Duration::from_millis(ms)),
        None => configured,
    }
}

impl Cli {
    /// Loads the configuration file (if any) and applies the flag overrides.
    fn resolve_config(&self) -> anyhow::Result<InputConfig> {
        let mut config = match &self.config {
            Some(path) => InputConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => InputConfig::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.connection.endpoint = Some(endpoint.clone());
        }
        if let Some(session_id) = &self.session_id {
            config.connection.session_id = Some(session_id.clone());
        }
        Ok(config)
    }
}

/// Runs one input command against `devices`.
async fn run_command(
    devices: &mut InputDevices,
    command: &Command,
    config: &InputConfig,
) -> Result<(), InputError> {
    match command {
        Command::Type { text, delay } => {
            let options = TypeOptions {
                delay: delay_override(*delay, config.keyboard.type_delay()),
            };
            devices.keyboard.type_text(text, &options).await
        }
        Command::Press { key, delay } => {
            let options = PressOptions {
                delay: delay_override(*delay, config.keyboard.press_delay()),
                text: None,
            };
            devices.keyboard.press(key, &options).await
        }
        Command::Move { x, y, steps } => {
            let options = MoveOptions {
                steps: steps.unwrap_or(config.mouse.move_steps),
            };
            devices.mouse.move_to(*x, *y, &options).await
        }
        Command::Click {
            x,
            y,
            button,
            click_count,
            delay,
        } => {
            let options = ClickOptions {
                button: *button,
                click_count: *click_count,
                delay: delay_override(*delay, config.mouse.click_delay()),
            };
            devices.mouse.click(*x, *y, &options).await
        }
        Command::Tap { x, y } => devices.touchscreen.tap(*x, *y).await,
        // Handled before any channel is opened.
        Command::InitConfig { .. } => Ok(()),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    if let Command::InitConfig { path } = &cli.command {
        config
            .save(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        info!("wrote {}", path.display());
        return Ok(());
    }

    if cli.dry_run {
        let recorder = Arc::new(RecordingChannel::new());
        let mut devices = InputDevices::new(Arc::clone(&recorder) as Arc<dyn CommandChannel>);
        run_command(&mut devices, &cli.command, &config).await?;
        for sent in recorder.sent() {
            println!(
                "{}",
                serde_json::json!({ "method": sent.method, "params": sent.params })
            );
        }
        return Ok(());
    }

    let endpoint = config
        .connection
        .endpoint
        .as_deref()
        .context("no DevTools endpoint: pass --endpoint or set connection.endpoint")?;
    let mut channel = WebSocketChannel::connect(endpoint, config.connection.request_timeout())
        .await
        .with_context(|| format!("failed to connect to {endpoint}"))?;
    if let Some(session_id) = &config.connection.session_id {
        channel = channel.with_session(session_id.clone());
    }
    let channel = Arc::new(channel);

    let mut devices = InputDevices::new(Arc::clone(&channel) as Arc<dyn CommandChannel>);
    let result = run_command(&mut devices, &cli.command, &config).await;

    if let Err(e) = channel.close().await {
        warn!("closing connection: {e}");
    }
    result?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use remote_input_core::{KeyEventType, MouseEventType};

    fn recording_devices() -> (InputDevices, Arc<RecordingChannel>) {
        let channel = Arc::new(RecordingChannel::new());
        let devices = InputDevices::new(Arc::clone(&channel) as Arc<dyn CommandChannel>);
        (devices, channel)
    }

    #[test]
    fn test_cli_parses_type_with_delay() {
        let cli = Cli::parse_from(["remote-input", "type", "hello", "--delay", "20"]);
        match cli.command {
            Command::Type { text, delay } => {
                assert_eq!(text, "hello");
                assert_eq!(delay, Some(20));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_click_defaults_to_left_single_click() {
        let cli = Cli::parse_from(["remote-input", "click", "10", "20"]);
        match cli.command {
            Command::Click {
                button,
                click_count,
                delay,
                ..
            } => {
                assert_eq!(button, MouseButton::Left);
                assert_eq!(click_count, 1);
                assert_eq!(delay, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_coordinates() {
        let cli = Cli::parse_from(["remote-input", "move", "-5", "-7.5"]);
        match cli.command {
            Command::Move { x, y, steps } => {
                assert_eq!((x, y), (-5.0, -7.5));
                assert_eq!(steps, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_button() {
        let result = Cli::try_parse_from(["remote-input", "click", "1", "1", "--button", "thumb"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "remote-input",
            "--endpoint",
            "ws://localhost:9222/devtools/page/1",
            "--session-id",
            "S",
            "--dry-run",
            "tap",
            "1",
            "2",
        ]);
        assert!(cli.dry_run);
        assert_eq!(cli.session_id.as_deref(), Some("S"));

        let config = cli.resolve_config().unwrap();
        assert_eq!(
            config.connection.endpoint.as_deref(),
            Some("ws://localhost:9222/devtools/page/1")
        );
        assert_eq!(config.connection.session_id.as_deref(), Some("S"));
    }

    #[test]
    fn test_delay_override() {
        let configured = Some(Duration::from_millis(30));
        assert_eq!(delay_override(None, configured), configured);
        assert_eq!(delay_override(Some(0), configured), None);
        assert_eq!(
            delay_override(Some(5), None),
            Some(Duration::from_millis(5))
        );
    }

    #[tokio::test]
    async fn test_run_press_sends_down_and_up() {
        // Arrange
        let (mut devices, channel) = recording_devices();
        let command = Command::Press {
            key: "Enter".to_string(),
            delay: None,
        };

        // Act
        run_command(&mut devices, &command, &InputConfig::default())
            .await
            .unwrap();

        // Assert
        let types: Vec<_> = channel.key_events().iter().map(|e| e.event_type).collect();
        assert_eq!(types, vec![KeyEventType::KeyDown, KeyEventType::KeyUp]);
    }

    #[tokio::test]
    async fn test_run_move_uses_configured_steps() {
        // Arrange
        let (mut devices, channel) = recording_devices();
        let mut config = InputConfig::default();
        config.mouse.move_steps = 5;
        let command = Command::Move {
            x: 100.0,
            y: 0.0,
            steps: None,
        };

        // Act
        run_command(&mut devices, &command, &config).await.unwrap();

        // Assert
        let events = channel.mouse_events();
        assert_eq!(events.len(), 5);
        assert!(events
            .iter()
            .all(|e| e.event_type == MouseEventType::MouseMoved));
        assert_eq!(events[0].x, 20.0);
    }

    #[tokio::test]
    async fn test_run_press_unknown_key_fails() {
        let (mut devices, channel) = recording_devices();
        let command = Command::Press {
            key: "NotAKey".to_string(),
            delay: None,
        };

        let result = run_command(&mut devices, &command, &InputConfig::default()).await;

        assert!(matches!(result, Err(InputError::UnknownKey(_))));
        assert!(channel.sent().is_empty());
    }
}
