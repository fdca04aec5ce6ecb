//! Discord gateway event handler
//!
//! Serenity runs each event on its own task, so invocations from different
//! users proceed independently and may finish in any order.

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracklink_core::discord::SerenityResponder;
use tracklink_core::{CommandInput, CommandRegistry};

pub struct Gateway {
    registry: Arc<CommandRegistry>,
}

impl Gateway {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl EventHandler for Gateway {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "Bot ready. Connected as {} serving {:?}",
            ready.user.tag(),
            self.registry.names()
        );
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            debug!("Ignoring non-command interaction");
            return;
        };

        let input = CommandInput::from_interaction(&command);
        let responder = SerenityResponder::new(ctx.http.clone(), command);

        if let Err(e) = self.registry.dispatch(&input, &responder).await {
            error!(
                command = %input.name,
                code = e.error_code(),
                "Failed to answer interaction: {}",
                e
            );
        }
    }
}
