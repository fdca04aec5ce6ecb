//! Subcommand implementations

pub mod register;
pub mod run;
pub mod schema;
