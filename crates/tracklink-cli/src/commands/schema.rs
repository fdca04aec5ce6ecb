//! `tracklink schema`: dry-run view of what `register` publishes

use tracklink_core::discord::track_command;

pub fn print_schema() -> anyhow::Result<()> {
    let schema = serde_json::to_string_pretty(&[track_command()])?;
    println!("{}", schema);
    Ok(())
}
