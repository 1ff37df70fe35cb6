//! # Theme Error Types
//!
//! Structural and wiring faults of the theme engine. Color parsing problems are
//! deliberately absent: a malformed color is passed through unchanged by
//! [crate::color] and only logged.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A portal key outside the closed [crate::id::PortalId] set was requested.
    #[error("Unknown portal '{0}': no catalog profile exists for it")]
    UnknownPortal(String),

    /// A color mode string could not be parsed.
    #[error("Invalid color mode '{0}', expected 'light' or 'dark'")]
    InvalidMode(String),

    /// The theme surface was requested from a scope without a mounted provider.
    #[error("Portal theme requested outside of a mounted theme provider")]
    MissingProvider,

    /// A consumer handle was used after its provider was torn down.
    #[error("Portal theme provider has been torn down")]
    ProviderDropped,

    /// Another provider already publishes into the same style target.
    #[error("Style target is already claimed by an active theme provider")]
    SinkAlreadyClaimed,

    /// Theme configuration file was not found.
    #[error("Theme config file not found: {0:?}")]
    ConfigNotFound(PathBuf),

    /// Error parsing a theme configuration file.
    #[error("Failed to parse theme config {path:?}: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an unknown portal error.
    pub fn unknown_portal(key: impl Into<String>) -> Self {
        Self::UnknownPortal(key.into())
    }

    /// Create a config parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            details: details.into(),
        }
    }
}
