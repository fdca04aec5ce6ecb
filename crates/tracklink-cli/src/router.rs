//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run(args) => commands::run::run(args).await,
        Commands::Register(args) => commands::register::register(args).await,
        Commands::Schema => commands::schema::print_schema(),
    }
}
