//! Declarative command schema
//!
//! The schema is plain data so it can be printed, compared and tested without
//! a Discord connection; it is converted into serenity builders only when it
//! is published.

use crate::commands::TRACK_COMMAND;
use crate::track::Prefer;
use serde::Serialize;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

/// One string option of a slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl OptionSpec {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            choices: Vec::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    fn to_builder(&self) -> CreateCommandOption {
        self.choices.iter().fold(
            CreateCommandOption::new(CommandOptionType::String, &self.name, &self.description)
                .required(self.required),
            |option, choice| option.add_string_choice(choice, choice),
        )
    }
}

/// A chat-input command and its options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionSpec>,
}

impl CommandSpec {
    /// Serenity builder for the REST registration call
    pub fn to_builder(&self) -> CreateCommand {
        self.options.iter().fold(
            CreateCommand::new(&self.name).description(&self.description),
            |command, option| command.add_option(option.to_builder()),
        )
    }
}

/// Schema of `/track`
pub fn track_command() -> CommandSpec {
    CommandSpec {
        name: TRACK_COMMAND.to_string(),
        description: "Create a tracked link (append or redirect).".to_string(),
        options: vec![
            OptionSpec::string("url", "Destination URL to track").required(true),
            OptionSpec::string(
                "identifier",
                "Identifier (username/email/alias) to look up (optional)",
            ),
            OptionSpec::string("prefer", "Preference: auto/append/redirect")
                .choices(Prefer::CHOICES.iter().map(Prefer::as_str)),
            OptionSpec::string("name", "Name or label for this resource (optional)"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_schema_options() {
        let spec = track_command();
        assert_eq!(spec.name, "track");

        let names: Vec<_> = spec.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["url", "identifier", "prefer", "name"]);

        let required: Vec<_> = spec.options.iter().filter(|o| o.required).collect();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].name, "url");
    }

    #[test]
    fn test_prefer_is_constrained_to_three_choices() {
        let spec = track_command();
        let option = |name: &str| spec.options.iter().find(|o| o.name == name).unwrap();
        let prefer = option("prefer");

        assert_eq!(prefer.choices, vec!["auto", "append", "redirect"]);
        assert!(!prefer.required);
        assert!(option("url").choices.is_empty());
    }

    #[test]
    fn test_schema_json_is_stable() {
        let first = serde_json::to_value(track_command()).unwrap();
        let second = serde_json::to_value(track_command()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first["options"][2],
            json!({
                "name": "prefer",
                "description": "Preference: auto/append/redirect",
                "required": false,
                "choices": ["auto", "append", "redirect"],
            })
        );
    }
}
