//! `/track` command handler
//!
//! Per invocation: acknowledge, build the request, call the tracker once,
//! edit the acknowledgment once. Every failure after the acknowledgment ends
//! up as the text of that single edit.

use super::{CommandHandler, CommandInput, InteractionResponder};
use crate::config::TrackerConfig;
use crate::error::{RelayError, RelayResult};
use crate::track::TrackRequest;
use crate::tracker::TrackerApi;
use async_trait::async_trait;
use serenity::constants::MESSAGE_CODE_LIMIT;
use std::sync::Arc;
use tracing::{error, warn};

/// Name of the only command the relay serves
pub const TRACK_COMMAND: &str = "track";

pub struct TrackCommand {
    tracker: Arc<dyn TrackerApi>,
    config: TrackerConfig,
}

impl TrackCommand {
    pub fn new(tracker: Arc<dyn TrackerApi>, config: TrackerConfig) -> Self {
        Self { tracker, config }
    }

    /// Final reply text for one invocation; never fails
    async fn resolve_reply(&self, input: &CommandInput) -> String {
        let request = match TrackRequest::from_input(input) {
            Ok(request) => request,
            Err(e) => {
                warn!(user = ?input.user_id, "Rejected /track invocation: {}", e);
                return e.user_message();
            }
        };

        match self.tracker.convert(&request).await {
            Ok(response) => response.reply_text(&request.url, &self.config),
            Err(e) => {
                log_failure(&e);
                e.user_message()
            }
        }
    }
}

fn log_failure(e: &RelayError) {
    match e {
        // The client already logged status and body.
        RelayError::Status { .. } => {}
        _ if e.is_transport() => {
            error!(code = e.error_code(), "Error calling tracker /convert: {}", e)
        }
        _ => error!(code = e.error_code(), "Unexpected tracker response: {}", e),
    }
}

/// Cut `reply` to Discord's message limit, counted in chars, ending with an
/// ellipsis when shortened. Longer edits are rejected by the API.
fn fit_message_limit(reply: String) -> String {
    if reply.chars().count() <= MESSAGE_CODE_LIMIT {
        return reply;
    }
    let mut truncated: String = reply.chars().take(MESSAGE_CODE_LIMIT - 1).collect();
    truncated.push('…');
    truncated
}

#[async_trait]
impl CommandHandler for TrackCommand {
    fn name(&self) -> &'static str {
        TRACK_COMMAND
    }

    async fn handle(
        &self,
        input: &CommandInput,
        responder: &dyn InteractionResponder,
    ) -> RelayResult<()> {
        responder.acknowledge().await?;
        let reply = fit_message_limit(self.resolve_reply(input).await);
        responder.edit(&reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{Prefer, TrackResponse};
    use crate::tracker::MockTrackerApi;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Ack,
        Convert(TrackRequest),
        Edit(String),
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    struct RecordingResponder {
        log: Log,
    }

    #[async_trait]
    impl InteractionResponder for RecordingResponder {
        async fn acknowledge(&self) -> RelayResult<()> {
            self.log.lock().push(Event::Ack);
            Ok(())
        }

        async fn edit(&self, content: &str) -> RelayResult<()> {
            self.log.lock().push(Event::Edit(content.to_string()));
            Ok(())
        }
    }

    fn config() -> TrackerConfig {
        TrackerConfig::new("http://trk.local/", None, Duration::from_secs(10)).unwrap()
    }

    fn track_input(options: &[(&str, &str)]) -> CommandInput {
        CommandInput::new(TRACK_COMMAND).with_user(1).with_options(
            options
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        )
    }

    /// Run one invocation against a tracker that answers with `outcome`
    async fn invoke<F>(input: CommandInput, outcome: F) -> Vec<Event>
    where
        F: Fn() -> RelayResult<TrackResponse> + Send + 'static,
    {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let tracker_log = log.clone();

        let mut tracker = MockTrackerApi::new();
        tracker.expect_convert().returning(move |request| {
            tracker_log.lock().push(Event::Convert(request.clone()));
            outcome()
        });

        let command = TrackCommand::new(Arc::new(tracker), config());
        let responder = RecordingResponder { log: log.clone() };
        command.handle(&input, &responder).await.unwrap();

        let events = log.lock().clone();
        events
    }

    fn final_reply(events: &[Event]) -> &str {
        match events.last() {
            Some(Event::Edit(text)) => text,
            other => panic!("expected a final edit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ack_precedes_call_and_single_edit() {
        let events = invoke(
            track_input(&[("url", "https://dest"), ("prefer", "redirect"), ("name", "n")]),
            || {
                Ok(TrackResponse::Redirect {
                    short_url: Some("http://trk.local/r/zz".into()),
                    slug: None,
                })
            },
        )
        .await;

        assert_eq!(
            events,
            vec![
                Event::Ack,
                Event::Convert(
                    TrackRequest::new("https://dest")
                        .with_prefer(Prefer::Redirect)
                        .with_name("n")
                ),
                Event::Edit("Short URL created:\nhttp://trk.local/r/zz".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_append_without_url_falls_back_to_input() {
        let events = invoke(track_input(&[("url", "https://dest/page")]), || {
            Ok(TrackResponse::from_value(json!({"mode": "append"})))
        })
        .await;

        assert!(final_reply(&events).contains("https://dest/page"));
    }

    #[tokio::test]
    async fn test_redirect_slug_uses_configured_base() {
        let events = invoke(track_input(&[("url", "https://dest")]), || {
            Ok(TrackResponse::from_value(
                json!({"mode": "redirect", "slug": "abc123"}),
            ))
        })
        .await;

        assert!(final_reply(&events).contains("http://trk.local/r/abc123"));
    }

    #[tokio::test]
    async fn test_http_500_reports_status_only() {
        let events = invoke(track_input(&[("url", "https://dest")]), || {
            Err(RelayError::status(500, "stack trace with secrets"))
        })
        .await;

        let reply = final_reply(&events);
        assert!(reply.contains("500"));
        assert!(!reply.contains("stack trace"));
        assert_eq!(events.len(), 3);
    }

    #[tokio::test]
    async fn test_transport_failure_embeds_error_text() {
        let events = invoke(track_input(&[("url", "https://dest")]), || {
            Err(RelayError::transport("dns error: no such host"))
        })
        .await;

        let reply = final_reply(&events);
        assert!(reply.contains("dns error: no such host"));
        assert!(!reply.contains("Tracker error ("));
    }

    #[tokio::test]
    async fn test_invalid_body_yields_generic_message() {
        let events = invoke(track_input(&[("url", "https://dest")]), || {
            Err(RelayError::invalid_body("expected value"))
        })
        .await;

        assert_eq!(final_reply(&events), "Unexpected response from the tracker.");
    }

    #[tokio::test]
    async fn test_long_unknown_body_is_cut_to_message_limit() {
        let events = invoke(track_input(&[("url", "https://dest")]), || {
            Ok(TrackResponse::from_value(
                json!({"mode": "queued", "detail": "x".repeat(2100)}),
            ))
        })
        .await;

        let reply = final_reply(&events);
        assert_eq!(reply.chars().count(), MESSAGE_CODE_LIMIT);
        assert!(reply.starts_with("Tracker response: "));
        assert!(reply.ends_with('…'));
    }

    #[test]
    fn test_message_limit_respects_char_boundaries() {
        let short = "Short URL created:\nhttps://s/q".to_string();
        assert_eq!(fit_message_limit(short.clone()), short);

        let wide = "é".repeat(MESSAGE_CODE_LIMIT + 5);
        let cut = fit_message_limit(wide);
        assert_eq!(cut.chars().count(), MESSAGE_CODE_LIMIT);
        assert!(cut.ends_with("é…"));
    }

    #[tokio::test]
    async fn test_missing_url_replies_without_calling_tracker() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut tracker = MockTrackerApi::new();
        tracker.expect_convert().never();

        let command = TrackCommand::new(Arc::new(tracker), config());
        let responder = RecordingResponder { log: log.clone() };
        command
            .handle(&track_input(&[("name", "orphan")]), &responder)
            .await
            .unwrap();

        assert_eq!(
            *log.lock(),
            vec![
                Event::Ack,
                Event::Edit("Missing required option: url.".into())
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_ack_skips_tracker_call() {
        let mut tracker = MockTrackerApi::new();
        tracker.expect_convert().never();

        let mut responder = crate::commands::MockInteractionResponder::new();
        responder
            .expect_acknowledge()
            .times(1)
            .returning(|| Err(RelayError::transport("interaction expired")));
        responder.expect_edit().never();

        let command = TrackCommand::new(Arc::new(tracker), config());
        let result = command
            .handle(&track_input(&[("url", "https://dest")]), &responder)
            .await;
        assert!(result.is_err());
    }
}
