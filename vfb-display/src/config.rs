//! Configuration for the display adapter.
//!
//! All values are fixed once the [`crate::Display`] is created.

use crate::errors::DisplayError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use vfb_input::InputConfig;

/// Texture scaling quality requested from the host when a renderer is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleQuality {
    Nearest,
    #[default]
    Linear,
    Best,
}

impl ScaleQuality {
    /// Hint value understood by the host.
    pub const fn as_hint(self) -> &'static str {
        match self {
            ScaleQuality::Nearest => "nearest",
            ScaleQuality::Linear => "linear",
            ScaleQuality::Best => "best",
        }
    }
}

impl std::str::FromStr for ScaleQuality {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "0" => Ok(ScaleQuality::Nearest),
            "linear" | "1" => Ok(ScaleQuality::Linear),
            "best" | "2" => Ok(ScaleQuality::Best),
            other => Err(DisplayError::Config(format!(
                "Unknown scale quality: {other}"
            ))),
        }
    }
}

/// Display adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Window title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Allow the user to resize the window.
    #[serde(default = "default_true")]
    pub resizable: bool,
    /// Suppress all input (display only).
    #[serde(default)]
    pub view_only: bool,
    /// Keep processing events until interrupted instead of a single pass.
    #[serde(default)]
    pub listen_loop: bool,
    /// Scaling quality hint for the renderer.
    #[serde(default)]
    pub scale_quality: ScaleQuality,
    /// Pause between event loop passes when no event was pending.
    #[serde(default = "default_idle_sleep_ms")]
    pub idle_sleep_ms: u64,
}

fn default_title() -> String {
    "Virtual Framebuffer".to_string()
}

fn default_true() -> bool {
    true
}

fn default_idle_sleep_ms() -> u64 {
    5
}

const MAX_IDLE_SLEEP_MS: u64 = 1_000;

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            resizable: default_true(),
            view_only: false,
            listen_loop: false,
            scale_quality: ScaleQuality::default(),
            idle_sleep_ms: default_idle_sleep_ms(),
        }
    }
}

impl DisplayConfig {
    /// Parse a configuration from TOML text. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this type or the
    /// resulting configuration fails [`DisplayConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, DisplayError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DisplayError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> String {
        // A struct of plain scalar fields always serializes.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<(), DisplayError> {
        if self.title.trim().is_empty() {
            return Err(DisplayError::Config("Title cannot be empty".to_string()));
        }

        if self.idle_sleep_ms > MAX_IDLE_SLEEP_MS {
            return Err(DisplayError::Config(format!(
                "Idle sleep must be at most {MAX_IDLE_SLEEP_MS} ms"
            )));
        }

        Ok(())
    }

    /// Input settings derived from this configuration.
    #[must_use]
    pub fn input(&self) -> InputConfig {
        InputConfig {
            view_only: self.view_only,
        }
    }

    /// Pause between idle event loop passes.
    #[must_use]
    pub fn idle_sleep(&self) -> Duration {
        Duration::from_millis(self.idle_sleep_ms)
    }
}
