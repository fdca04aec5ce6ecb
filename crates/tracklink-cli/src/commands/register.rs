//! `tracklink register`: the command schema publisher

use crate::args::RegisterArgs;
use anyhow::Context as _;
use tracing::info;
use tracklink_core::discord::{HttpRegistrar, publish, track_command};

pub async fn register(args: RegisterArgs) -> anyhow::Result<()> {
    let config = args.publisher_config()?;
    let registrar = HttpRegistrar::new(&args.bot_token, &config);

    let report = publish(&registrar, config.scope(), &[track_command()])
        .await
        .context("Error registering commands")?;
    info!(
        scope = %report.scope,
        "Registry now holds: {}",
        report.registered.join(", ")
    );
    Ok(())
}
