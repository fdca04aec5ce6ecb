//! Core error type and result alias

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Tracklink operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Main error type for Tracklink
///
/// The variants follow the relay's error taxonomy: configuration problems are
/// fatal at startup, everything else is scoped to one invocation and turned
/// into a single reply.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Missing or invalid process configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required command option was not supplied by the caller
    #[error("Missing required option: {option}")]
    MissingOption { option: String },

    /// The tracker did not answer within the configured bound
    #[error("Tracker request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// Network-level failure talking to the tracker
    #[error("Tracker transport error: {message}")]
    Transport { message: String },

    /// The tracker answered with a non-success HTTP status
    #[error("Tracker returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The tracker answered 2xx but the body was not usable JSON
    #[error("Invalid tracker response: {message}")]
    InvalidBody { message: String },

    /// Discord REST or gateway failure
    #[error("Discord API error: {0}")]
    Discord(#[from] serenity::Error),
}

impl RelayError {
    /// Stable code for programmatic handling and log correlation
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "TRACKLINK_CONFIG",
            Self::MissingOption { .. } => "TRACKLINK_MISSING_OPTION",
            Self::Timeout { .. } => "TRACKLINK_TIMEOUT",
            Self::Transport { .. } => "TRACKLINK_TRANSPORT",
            Self::Status { .. } => "TRACKLINK_HTTP_STATUS",
            Self::InvalidBody { .. } => "TRACKLINK_INVALID_BODY",
            Self::Discord(_) => "TRACKLINK_DISCORD",
        }
    }

    /// Whether this error came from the network call itself rather than from
    /// what the tracker said
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport { .. })
    }
}
