//! The `/track` relay model: what is sent to the tracker and what comes back

mod request;
mod response;

pub use request::{Prefer, TrackRequest};
pub use response::TrackResponse;
