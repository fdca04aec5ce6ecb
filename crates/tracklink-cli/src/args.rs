//! CLI argument definitions using clap
//!
//! Every setting can also be supplied through the environment variable
//! named next to it.

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracklink_core::config::{DEFAULT_PUBLIC_BASE, DEFAULT_TIMEOUT_SECS};
use tracklink_core::{PublisherConfig, RelayResult};

#[derive(Parser, Debug)]
#[command(name = "tracklink")]
#[command(about = "Discord /track command relay for the link tracker")]
#[command(version)]
pub struct Cli {
    /// Log output format
    #[arg(
        long,
        env = "TRACKLINK_LOG_FORMAT",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and relay /track invocations to the tracker
    Run(RunArgs),

    /// Register the /track command with Discord (guild or global)
    Register(RegisterArgs),

    /// Print the command schema as JSON without contacting Discord
    Schema,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Discord bot token
    #[arg(
        long,
        env = "DISCORD_BOT_TOKEN",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub bot_token: String,

    /// Base address of the tracker service
    #[arg(long, env = "PUBLIC_BASE", default_value = DEFAULT_PUBLIC_BASE)]
    pub public_base: String,

    /// Shared secret sent to the tracker as x-hook-token
    #[arg(long, env = "HOOK_TOKEN", hide_env_values = true)]
    pub hook_token: Option<String>,

    /// Bound on each tracker call, in seconds
    #[arg(
        long,
        env = "TRACKER_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Discord bot token
    #[arg(
        long,
        env = "DISCORD_BOT_TOKEN",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub bot_token: String,

    /// Discord application id
    #[arg(long, env = "DISCORD_APP_ID")]
    pub app_id: Option<String>,

    /// Register to this guild only (immediate); omit or leave empty for
    /// global registration
    #[arg(long, env = "DISCORD_GUILD_ID")]
    pub guild_id: Option<String>,
}

impl RegisterArgs {
    /// Validated publisher settings; empty ids count as unset
    pub fn publisher_config(&self) -> RelayResult<PublisherConfig> {
        PublisherConfig::from_raw(self.app_id.as_deref(), self.guild_id.as_deref())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}
