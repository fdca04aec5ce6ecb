//! Outbound calls to the tracker service

mod client;

pub use client::TrackerClient;

use crate::error::RelayResult;
use crate::track::{TrackRequest, TrackResponse};
use async_trait::async_trait;

/// One conversion round-trip against the tracker.
///
/// Implementations make exactly one attempt; there is no retry at any layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackerApi: Send + Sync {
    async fn convert(&self, request: &TrackRequest) -> RelayResult<TrackResponse>;
}
