//! Error types for Tracklink
//!
//! Every failure a relay invocation can hit is a [`RelayError`]. Each variant
//! maps onto exactly one user-facing reply (see [`RelayError::user_message`])
//! and a stable error code for logs.

mod constructors;
mod types;
mod user_messages;

pub use types::{RelayError, RelayResult};
