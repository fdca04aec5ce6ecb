//! Publishing the command schema to Discord's command registry
//!
//! Registration is a bulk overwrite: the registered set after a run is
//! exactly the published set, so running the publisher again is always safe.

use super::schema::CommandSpec;
use crate::config::{PublisherConfig, RegistrationScope};
use crate::error::RelayResult;
use async_trait::async_trait;
use serenity::all::{ApplicationId, Command, CreateCommand, GuildId, Http};
use std::sync::Arc;
use tracing::{info, warn};

/// Destination of a bulk command overwrite
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Replace every command in `scope` with `commands`, returning the names
    /// the registry now holds
    async fn overwrite(
        &self,
        scope: RegistrationScope,
        commands: &[CommandSpec],
    ) -> RelayResult<Vec<String>>;
}

/// Registrar that talks to the Discord REST API
pub struct HttpRegistrar {
    http: Arc<Http>,
}

impl HttpRegistrar {
    pub fn new(bot_token: &str, config: &PublisherConfig) -> Self {
        let http = Http::new(bot_token);
        http.set_application_id(ApplicationId::new(config.application_id()));
        Self {
            http: Arc::new(http),
        }
    }
}

#[async_trait]
impl CommandRegistrar for HttpRegistrar {
    async fn overwrite(
        &self,
        scope: RegistrationScope,
        commands: &[CommandSpec],
    ) -> RelayResult<Vec<String>> {
        let builders: Vec<CreateCommand> = commands.iter().map(CommandSpec::to_builder).collect();

        let registered = match scope {
            RegistrationScope::Guild(id) => {
                GuildId::new(id).set_commands(&self.http, builders).await?
            }
            RegistrationScope::Global => Command::set_global_commands(&self.http, builders).await?,
        };

        Ok(registered.into_iter().map(|command| command.name).collect())
    }
}

/// Outcome of one publishing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub scope: RegistrationScope,
    pub registered: Vec<String>,
}

/// Publish `commands` to `scope`.
///
/// # Errors
///
/// Any registrar failure is returned unchanged; the caller treats it as fatal.
pub async fn publish(
    registrar: &dyn CommandRegistrar,
    scope: RegistrationScope,
    commands: &[CommandSpec],
) -> RelayResult<PublishReport> {
    info!("Registering {} slash command(s) to {}", commands.len(), scope);

    let registered = registrar.overwrite(scope, commands).await?;

    match scope {
        RegistrationScope::Guild(id) => {
            info!("Registered {} commands to guild {}", registered.len(), id)
        }
        RegistrationScope::Global => info!(
            "Registered {} global commands (may take up to 1 hour to propagate)",
            registered.len()
        ),
    }
    if registered.len() != commands.len() {
        warn!(
            "Registry holds {} commands but {} were published",
            registered.len(),
            commands.len()
        );
    }

    Ok(PublishReport { scope, registered })
}
