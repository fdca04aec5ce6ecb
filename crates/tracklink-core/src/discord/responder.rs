//! [`InteractionResponder`] backed by a serenity command interaction

use crate::commands::InteractionResponder;
use crate::error::RelayResult;
use async_trait::async_trait;
use serenity::all::{CommandInteraction, EditInteractionResponse, Http};
use std::sync::Arc;

pub struct SerenityResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl SerenityResponder {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl InteractionResponder for SerenityResponder {
    async fn acknowledge(&self) -> RelayResult<()> {
        self.interaction.defer_ephemeral(&*self.http).await?;
        Ok(())
    }

    async fn edit(&self, content: &str) -> RelayResult<()> {
        let builder = EditInteractionResponse::new().content(content);
        self.interaction
            .edit_response(&*self.http, builder)
            .await?;
        Ok(())
    }
}
