//! Tracker endpoint configuration

use crate::error::{RelayError, RelayResult};
use std::time::Duration;

/// Where and how the relay talks to the tracker service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    public_base: String,
    hook_token: Option<String>,
    timeout: Duration,
}

impl TrackerConfig {
    /// Validate and normalize tracker settings.
    ///
    /// The base loses one trailing slash, an empty hook token counts as not
    /// configured, and the timeout must be non-zero.
    pub fn new(
        public_base: &str,
        hook_token: Option<String>,
        timeout: Duration,
    ) -> RelayResult<Self> {
        let public_base = normalize_base(public_base);
        if public_base.is_empty() {
            return Err(RelayError::config("PUBLIC_BASE must not be empty"));
        }
        if !public_base.starts_with("http://") && !public_base.starts_with("https://") {
            return Err(RelayError::config(format!(
                "PUBLIC_BASE must be an http(s) URL, got '{}'",
                public_base
            )));
        }
        if timeout.is_zero() {
            return Err(RelayError::config("Tracker timeout must be greater than zero"));
        }

        Ok(Self {
            public_base,
            hook_token: hook_token.filter(|token| !token.is_empty()),
            timeout,
        })
    }

    pub fn public_base(&self) -> &str {
        &self.public_base
    }

    pub fn hook_token(&self) -> Option<&str> {
        self.hook_token.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the conversion endpoint
    pub fn convert_url(&self) -> String {
        format!("{}/convert", self.public_base)
    }

    /// Short URL for a slug minted by the tracker
    pub fn redirect_url(&self, slug: &str) -> String {
        redirect_url(&self.public_base, slug)
    }
}

pub(crate) fn redirect_url(public_base: &str, slug: &str) -> String {
    format!("{}/r/{}", public_base, slug)
}

/// Strip a single trailing slash from a base address
pub fn normalize_base(raw: &str) -> String {
    raw.strip_suffix('/').unwrap_or(raw).to_string()
}
