//! Tracklink CLI application
//!
//! One binary, three subcommands:
//!
//! - `tracklink run`: connect to the Discord gateway and relay `/track`
//!   invocations to the tracker service. Run only one relay per bot token.
//! - `tracklink register`: publish the `/track` schema, to one guild when
//!   `DISCORD_GUILD_ID` is set (immediate) or globally (up to an hour).
//! - `tracklink schema`: print the schema JSON without contacting Discord.
//!
//! Settings come from flags or the environment; a `.env` file in the working
//! directory is loaded first.

mod args;
mod commands;
mod gateway;
mod logging;
mod router;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is not an error; the environment may already be set.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_format);
    router::route(cli).await
}
