//! Command publisher configuration

use crate::error::{RelayError, RelayResult};

/// Which command registry the publisher overwrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationScope {
    /// One guild; changes are visible immediately
    Guild(u64),
    /// Every guild the application is in; propagation can take up to an hour
    Global,
}

impl std::fmt::Display for RegistrationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guild(id) => write!(f, "guild {}", id),
            Self::Global => write!(f, "global"),
        }
    }
}

/// Settings for one publishing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    application_id: u64,
    guild_id: Option<u64>,
}

impl PublisherConfig {
    pub fn new(application_id: u64, guild_id: Option<u64>) -> RelayResult<Self> {
        if application_id == 0 {
            return Err(RelayError::config("DISCORD_APP_ID must be a non-zero id"));
        }
        if guild_id == Some(0) {
            return Err(RelayError::config("DISCORD_GUILD_ID must be a non-zero id"));
        }
        Ok(Self {
            application_id,
            guild_id,
        })
    }

    /// Build from raw settings as read from flags or the environment.
    ///
    /// Empty values (e.g. `DISCORD_GUILD_ID=` in `.env`) count as unset, so an
    /// empty guild id selects global registration.
    pub fn from_raw(application_id: Option<&str>, guild_id: Option<&str>) -> RelayResult<Self> {
        let application_id = parse_id(application_id, "DISCORD_APP_ID")?
            .ok_or_else(|| RelayError::config("DISCORD_APP_ID is not set"))?;
        let guild_id = parse_id(guild_id, "DISCORD_GUILD_ID")?;
        Self::new(application_id, guild_id)
    }

    pub fn application_id(&self) -> u64 {
        self.application_id
    }

    /// Guild scope when a guild id is configured, global otherwise
    pub fn scope(&self) -> RegistrationScope {
        match self.guild_id {
            Some(id) => RegistrationScope::Guild(id),
            None => RegistrationScope::Global,
        }
    }
}

fn parse_id(raw: Option<&str>, var: &str) -> RelayResult<Option<u64>> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            RelayError::config(format!("{} must be a numeric id, got '{}'", var, value))
        }),
    }
}
