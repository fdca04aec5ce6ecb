//! Tracklink Core Library
//!
//! Relays the Discord `/track` slash command to an external tracker service:
//! validates the invocation, calls `POST {base}/convert`, and turns the
//! tracker's response into a single ephemeral reply. Also holds the command
//! schema and the publisher that registers it with Discord.

pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod track;
pub mod tracker;

// Re-export commonly used types
pub use commands::{
    CommandHandler, CommandInput, CommandRegistry, InteractionResponder, TrackCommand,
};
pub use config::{PublisherConfig, RegistrationScope, TrackerConfig};
pub use error::{RelayError, RelayResult};
pub use track::{Prefer, TrackRequest, TrackResponse};
pub use tracker::{TrackerApi, TrackerClient};
