//! Name-keyed dispatch table of command handlers

use super::{CommandHandler, CommandInput, InteractionResponder};
use crate::error::RelayResult;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable after startup; shared across gateway tasks behind an `Arc`
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its name, replacing any previous one
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        debug!("Registering handler for /{}", handler.name());
        self.handlers.insert(handler.name(), handler);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.handlers.get(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Route one invocation to its handler.
    ///
    /// Returns `Ok(false)` without touching the responder when no handler is
    /// registered for the command name.
    pub async fn dispatch(
        &self,
        input: &CommandInput,
        responder: &dyn InteractionResponder,
    ) -> RelayResult<bool> {
        let Some(handler) = self.get(&input.name) else {
            debug!("Ignoring unrecognized command /{}", input.name);
            return Ok(false);
        };

        info!(command = %input.name, user = ?input.user_id, "Handling command");
        handler.handle(input, responder).await?;
        Ok(true)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MockInteractionResponder;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl CommandHandler for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        async fn handle(
            &self,
            input: &CommandInput,
            responder: &dyn InteractionResponder,
        ) -> RelayResult<()> {
            responder.acknowledge().await?;
            responder
                .edit(input.string_option("text").unwrap_or_default())
                .await
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(Echo));
        registry
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_name() {
        let mut responder = MockInteractionResponder::new();
        responder.expect_acknowledge().times(1).returning(|| Ok(()));
        responder
            .expect_edit()
            .withf(|content| content.to_string() == "hi")
            .times(1)
            .returning(|_| Ok(()));

        let input =
            CommandInput::new("echo").with_options([("text".to_string(), "hi".to_string())]);
        assert!(registry().dispatch(&input, &responder).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_command_is_ignored() {
        let mut responder = MockInteractionResponder::new();
        responder.expect_acknowledge().never();
        responder.expect_edit().never();

        let handled = registry()
            .dispatch(&CommandInput::new("ping"), &responder)
            .await
            .unwrap();
        assert!(!handled);
    }

    #[test]
    fn test_names_are_sorted() {
        assert_eq!(registry().names(), vec!["echo"]);
    }
}
