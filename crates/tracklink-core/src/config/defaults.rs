//! Default values shared by the CLI and the core

/// Tracker base used when `PUBLIC_BASE` is not set
pub const DEFAULT_PUBLIC_BASE: &str = "http://localhost:5000";

/// Bound on one `/convert` call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Header carrying the shared secret to the tracker
pub const HOOK_TOKEN_HEADER: &str = "x-hook-token";
