//! Runtime configuration for the relay and the command publisher
//!
//! Values are collected by the CLI (flags, environment, `.env`) and validated
//! here once at startup. A configuration error is fatal.

mod defaults;
mod publisher;
mod tracker;

pub use defaults::{DEFAULT_PUBLIC_BASE, DEFAULT_TIMEOUT_SECS, HOOK_TOKEN_HEADER};
pub use publisher::{PublisherConfig, RegistrationScope};
pub use tracker::{TrackerConfig, normalize_base};
