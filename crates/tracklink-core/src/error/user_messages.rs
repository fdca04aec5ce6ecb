//! User-facing reply text for relay errors
//!
//! The reply is the only thing the invoking user sees, so it never carries
//! the tracker's raw error body.

use super::types::RelayError;

impl RelayError {
    /// Short description of the failure, suitable for embedding in a reply
    pub fn description(&self) -> String {
        match self {
            Self::Timeout { timeout } => format!("request timed out after {:?}", timeout),
            Self::Transport { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Reply text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingOption { option } => format!("Missing required option: {}.", option),
            Self::Status { status, .. } => {
                format!("Tracker error ({}). Check the logs.", status)
            }
            Self::InvalidBody { .. } => "Unexpected response from the tracker.".to_string(),
            other => format!(
                "Error communicating with the tracker: {}",
                other.description()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_message_names_code_but_not_body() {
        let err = RelayError::status(500, "Traceback: secret internals");
        let msg = err.user_message();

        assert!(msg.contains("500"));
        assert!(!msg.contains("secret internals"));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_message_embeds_description() {
        let err = RelayError::transport("connection refused");
        assert_eq!(
            err.user_message(),
            "Error communicating with the tracker: connection refused"
        );
        assert!(err.is_transport());
    }

    #[test]
    fn test_timeout_is_distinct_from_status() {
        let err = RelayError::timeout(Duration::from_secs(10));

        assert_eq!(err.error_code(), "TRACKLINK_TIMEOUT");
        assert!(err.is_transport());
        assert!(err.user_message().contains("timed out after 10s"));
    }

    #[test]
    fn test_invalid_body_uses_generic_message() {
        let err = RelayError::invalid_body("expected value at line 1 column 1");
        assert_eq!(err.user_message(), "Unexpected response from the tracker.");
    }

    #[test]
    fn test_missing_option_message() {
        let err = RelayError::missing_option("url");
        assert_eq!(err.user_message(), "Missing required option: url.");
        assert_eq!(err.to_string(), "Missing required option: url");
    }
}
