//! Discord-facing adapters: interaction replies, command schema, publishing

mod publisher;
mod responder;
mod schema;

pub use publisher::{CommandRegistrar, HttpRegistrar, PublishReport, publish};
pub use responder::SerenityResponder;
pub use schema::{CommandSpec, OptionSpec, track_command};
