//! Track Response decoding and reply rendering

use crate::config::TrackerConfig;
use crate::error::{RelayError, RelayResult};
use serde_json::Value;

/// What the tracker decided to do with a URL, keyed by its `mode` field
#[derive(Debug, Clone, PartialEq)]
pub enum TrackResponse {
    /// The destination URL itself now carries tracking
    Append { appended_url: Option<String> },
    /// A new short URL was minted
    Redirect {
        short_url: Option<String>,
        slug: Option<String>,
    },
    /// Any other mode; relayed verbatim
    Unknown { raw: Value },
}

impl TrackResponse {
    /// Decode a success body.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidBody`] when the body is not JSON or is a
    /// bare `null`.
    pub fn parse(body: &[u8]) -> RelayResult<Self> {
        let raw: Value =
            serde_json::from_slice(body).map_err(|e| RelayError::invalid_body(e.to_string()))?;
        if raw.is_null() {
            return Err(RelayError::invalid_body("tracker returned a null body"));
        }
        Ok(Self::from_value(raw))
    }

    /// Match on `mode`; anything not recognized is kept as raw JSON
    pub fn from_value(raw: Value) -> Self {
        match raw.get("mode").and_then(Value::as_str) {
            Some("append") => Self::Append {
                appended_url: string_field(&raw, "appended_url"),
            },
            Some("redirect") => Self::Redirect {
                short_url: string_field(&raw, "short_url"),
                slug: string_field(&raw, "slug"),
            },
            _ => Self::Unknown { raw },
        }
    }

    /// URL the user should share, with fallbacks resolved.
    ///
    /// `None` for unknown modes.
    pub fn resolved_url(&self, original_url: &str, config: &TrackerConfig) -> Option<String> {
        match self {
            Self::Append { appended_url } => Some(
                appended_url
                    .clone()
                    .unwrap_or_else(|| original_url.to_string()),
            ),
            Self::Redirect { short_url, slug } => Some(match short_url {
                Some(short) => short.clone(),
                None => config.redirect_url(slug.as_deref().unwrap_or_default()),
            }),
            Self::Unknown { .. } => None,
        }
    }

    /// Reply text for the invoking user
    pub fn reply_text(&self, original_url: &str, config: &TrackerConfig) -> String {
        let url = || self.resolved_url(original_url, config).unwrap_or_default();
        match self {
            Self::Append { .. } => format!("Append mode, use this URL:\n{}", url()),
            Self::Redirect { .. } => format!("Short URL created:\n{}", url()),
            Self::Unknown { raw } => format!("Tracker response: {}", raw),
        }
    }
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
