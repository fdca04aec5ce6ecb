//! Slash command dispatch
//!
//! Each recognized command is a [`CommandHandler`] registered by name in a
//! [`CommandRegistry`] at process start. The gateway turns every inbound
//! interaction into a [`CommandInput`] plus an [`InteractionResponder`] and
//! hands both to the registry; handlers never share mutable state.

mod input;
mod registry;
mod track;

pub use input::CommandInput;
pub use registry::CommandRegistry;
pub use track::{TRACK_COMMAND, TrackCommand};

use crate::error::RelayResult;
use async_trait::async_trait;

/// The two replies a handler may send for one interaction
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Provisional reply visible only to the invoking user
    async fn acknowledge(&self) -> RelayResult<()>;

    /// Replace the provisional reply with the final message
    async fn edit(&self, content: &str) -> RelayResult<()>;
}

/// Handler for one slash command
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name this handler processes
    fn name(&self) -> &'static str;

    /// Handle one invocation.
    ///
    /// Implementations must acknowledge before doing any network I/O and
    /// must produce exactly one final edit.
    async fn handle(
        &self,
        input: &CommandInput,
        responder: &dyn InteractionResponder,
    ) -> RelayResult<()>;
}
