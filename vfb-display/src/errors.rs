//! Error types for the display adapter.

use std::fmt;
use std::io;
use thiserror::Error;

/// A host windowing/rendering operation, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOp {
    Init,
    CreateSurface,
    CreateWindow,
    ResizeWindow,
    CreateRenderer,
    SetLogicalSize,
    CreateTexture,
    UpdateTexture,
    Clear,
    Copy,
}

impl fmt::Display for HostOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostOp::Init => "initializing video",
            HostOp::CreateSurface => "creating surface",
            HostOp::CreateWindow => "creating window",
            HostOp::ResizeWindow => "resizing window",
            HostOp::CreateRenderer => "creating renderer",
            HostOp::SetLogicalSize => "setting logical size",
            HostOp::CreateTexture => "creating texture",
            HostOp::UpdateTexture => "updating texture",
            HostOp::Clear => "clearing renderer",
            HostOp::Copy => "copying texture to renderer",
        };
        f.write_str(name)
    }
}

/// A failed host operation and the host's error string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error {op}: {message}")]
pub struct HostError {
    pub op: HostOp,
    pub message: String,
}

impl HostError {
    pub fn new(op: HostOp, message: impl Into<String>) -> Self {
        Self {
            op,
            message: message.into(),
        }
    }
}

/// Errors surfaced by the display adapter to its caller.
///
/// Host failures during resize and redraw are logged, not returned; they only
/// appear here when a caller drives a host directly.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Host windowing/rendering failure.
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configuration file is not valid TOML for [`crate::DisplayConfig`].
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A screen id that does not belong to this display.
    #[error("Unknown screen: {0}")]
    UnknownScreen(usize),
}

impl DisplayError {
    /// Returns true if this error came from the host facility.
    #[must_use]
    pub fn is_host_failure(&self) -> bool {
        matches!(self, Self::Host(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_display() {
        let err = HostError::new(HostOp::CreateTexture, "out of video memory");
        assert_eq!(err.to_string(), "error creating texture: out of video memory");
    }

    #[test]
    fn test_error_categorization() {
        let err: DisplayError = HostError::new(HostOp::Clear, "lost device").into();
        assert!(err.is_host_failure());
        assert!(!DisplayError::UnknownScreen(3).is_host_failure());
        assert_eq!(DisplayError::UnknownScreen(3).to_string(), "Unknown screen: 3");
    }
}
