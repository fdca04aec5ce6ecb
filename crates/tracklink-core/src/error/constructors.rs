//! Constructor methods for RelayError

use super::types::RelayError;
use std::time::Duration;

impl RelayError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing-option error
    pub fn missing_option(option: impl Into<String>) -> Self {
        Self::MissingOption {
            option: option.into(),
        }
    }

    /// Create a timeout error for the given bound
    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout { timeout }
    }

    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an HTTP status error, keeping the body for the logs
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid-body error
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    /// Build a transport error from a `reqwest` failure, walking the source
    /// chain so the root cause (e.g. "connection refused") is not lost.
    pub fn from_reqwest(error: &reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            return Self::timeout(timeout);
        }

        let mut message = error.to_string();
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::transport(message)
    }
}
