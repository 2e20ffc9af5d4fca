//! TOML configuration for the `remote-input` binary.
//!
//! ```toml
//! [connection]
//! endpoint = "ws://127.0.0.1:9222/devtools/page/3F2A"
//! request_timeout_ms = 30000
//!
//! [keyboard]
//! type_delay_ms = 25
//!
//! [mouse]
//! move_steps = 10
//! ```
//!
//! Every field has a `#[serde(default = "...")]`, so a partial file (or no
//! file at all) gives a working configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub mouse: MouseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the DevTools endpoint lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionConfig {
    /// `ws://` URL of the DevTools target.  Absent means "must be given on
    /// the command line".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Flat-mode target session to attach commands to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// How long to wait for each command's reply.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Keyboard pacing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    /// Pause after every typed character.
    #[serde(default)]
    pub type_delay_ms: u64,
    /// Dwell time between key-down and key-up for `press`.
    #[serde(default)]
    pub press_delay_ms: u64,
}

/// Mouse pacing and interpolation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MouseConfig {
    /// Dwell time between press and release for `click`.
    #[serde(default)]
    pub click_delay_ms: u64,
    /// Default number of interpolation steps for `move`.
    #[serde(default = "default_move_steps")]
    pub move_steps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_request_timeout_ms() -> u64 {
    30_000
}
fn default_move_steps() -> u32 {
    1
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            session_id: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            click_delay_ms: 0,
            move_steps: default_move_steps(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Durations ─────────────────────────────────────────────────────────────────

/// Zero milliseconds means "no delay".
fn delay(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

impl ConnectionConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl KeyboardConfig {
    pub fn type_delay(&self) -> Option<Duration> {
        delay(self.type_delay_ms)
    }

    pub fn press_delay(&self) -> Option<Duration> {
        delay(self.press_delay_ms)
    }
}

impl MouseConfig {
    pub fn click_delay(&self) -> Option<Duration> {
        delay(self.click_delay_ms)
    }
}

// ── Load / save ───────────────────────────────────────────────────────────────

impl InputConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read (including when it does
    /// not exist) and [`ConfigError::Parse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml_string()?).map_err(io_err)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
