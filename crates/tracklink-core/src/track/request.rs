//! Track Request construction and wire encoding

use crate::commands::CommandInput;
use crate::error::{RelayError, RelayResult};
use serde::{Serialize, Serializer};

/// How the caller would like the tracker to handle the URL.
///
/// Values outside the three known choices are carried in [`Prefer::Other`]
/// and forwarded untouched; the tracker owns validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Prefer {
    #[default]
    Auto,
    Append,
    Redirect,
    Other(String),
}

impl Prefer {
    /// The choices offered to users in the command schema
    pub const CHOICES: [Prefer; 3] = [Prefer::Auto, Prefer::Append, Prefer::Redirect];

    /// Resolve an optional raw option value, defaulting to `auto`
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Auto,
            Some("auto") => Self::Auto,
            Some("append") => Self::Append,
            Some("redirect") => Self::Redirect,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Auto => "auto",
            Self::Append => "append",
            Self::Redirect => "redirect",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for Prefer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Prefer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Body of `POST {base}/convert`
///
/// Absent optional fields are encoded as `null`, never as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRequest {
    pub url: String,
    pub prefer: Prefer,
    pub identifier: Option<String>,
    pub name: Option<String>,
}

impl TrackRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prefer: Prefer::Auto,
            identifier: None,
            name: None,
        }
    }

    pub fn with_prefer(mut self, prefer: Prefer) -> Self {
        self.prefer = prefer;
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build a request from the options of one command invocation.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MissingOption`] when `url` is absent or empty.
    pub fn from_input(input: &CommandInput) -> RelayResult<Self> {
        let url = input
            .string_option("url")
            .ok_or_else(|| RelayError::missing_option("url"))?;

        Ok(Self {
            url: url.to_string(),
            prefer: Prefer::resolve(input.string_option("prefer")),
            identifier: input.string_option("identifier").map(str::to_string),
            name: input.string_option("name").map(str::to_string),
        })
    }
}
