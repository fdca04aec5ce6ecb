//! Platform-neutral view of one command invocation

use serenity::all::{CommandDataOptionValue, CommandInteraction};
use std::collections::HashMap;

/// Name, caller and string options of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInput {
    pub name: String,
    pub user_id: Option<u64>,
    options: HashMap<String, String>,
}

impl CommandInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = (String, String)>) -> Self {
        self.options.extend(options);
        self
    }

    /// Extract name, user and top-level string options from a Discord
    /// command interaction. Non-string options are ignored.
    pub fn from_interaction(interaction: &CommandInteraction) -> Self {
        let options = interaction
            .data
            .options
            .iter()
            .filter_map(|option| match &option.value {
                CommandDataOptionValue::String(value) => {
                    Some((option.name.clone(), value.clone()))
                }
                _ => None,
            });

        Self::new(interaction.data.name.clone())
            .with_user(interaction.user.id.get())
            .with_options(options)
    }

    /// Value of a string option; empty strings count as absent
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
