//! Event correlation: bind an outbound action to a later inbound notice.
//!
//! Some protocol acknowledgments arrive out of band, as ordinary events on
//! the inbound stream rather than as replies to the request that caused
//! them. [`Correlator`] races a subscription to that stream against a
//! timeout: the first of the two to fire wins, and resolving drops both the
//! receiver and the timer, so the losing branch can produce no further
//! effect.
//!
//! Keys are compared as normalized strings because implementations disagree
//! on the wire representation: the same message id may arrive as `123456`
//! from one side and `"123456"` from the other.

use std::future::Future;

use serde_json::Value;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{Duration, sleep};
use tracing::{debug, warn};

use solder_core::{ApiResult, EventBus, InboundEvent};

/// How a correlation wait ended.
#[derive(Debug, Clone)]
pub enum CorrelationOutcome {
    /// A notice matching the expected key arrived in time.
    Matched(InboundEvent),
    /// The timeout elapsed with no matching notice.
    TimedOut,
}

/// Waits for an inbound notice correlated with an outbound action.
#[derive(Debug, Clone)]
pub struct Correlator {
    bus: EventBus,
    timeout: Duration,
}

impl Correlator {
    /// Creates a correlator over the given bus with the given wait bound.
    pub fn new(bus: EventBus, timeout: Duration) -> Self {
        Self { bus, timeout }
    }

    /// Runs `action`, then waits for a matching notice.
    ///
    /// The subscription is opened before the action runs, so a notice that
    /// arrives between the action completing and the wait starting is not
    /// lost. `action` returns the expected correlation key; `predicate`
    /// inspects each inbound event and returns the candidate key for events
    /// of the right type, or `None` for everything else.
    ///
    /// Resolves exactly once: with [`CorrelationOutcome::Matched`] on the
    /// first key-equal event, or [`CorrelationOutcome::TimedOut`] when the
    /// bound elapses first. A failing action propagates its error and no
    /// wait happens.
    pub async fn correlate<A, Fut, P>(
        &self,
        action: A,
        predicate: P,
    ) -> ApiResult<CorrelationOutcome>
    where
        A: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<String>>,
        P: Fn(&InboundEvent) -> Option<Value>,
    {
        let mut rx = self.bus.subscribe();
        let expected = action().await?;
        debug!(key = %expected, timeout = ?self.timeout, "correlation wait started");

        let timer = sleep(self.timeout);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                () = &mut timer => {
                    debug!(key = %expected, "correlation timed out");
                    return Ok(CorrelationOutcome::TimedOut);
                }
                received = rx.recv() => match received {
                    Ok(event) => {
                        if let Some(key) = predicate(&event)
                            && normalize_key(&key) == expected
                        {
                            debug!(key = %expected, "correlation matched");
                            return Ok(CorrelationOutcome::Matched(event));
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "correlation subscriber lagged, events dropped");
                    }
                    Err(RecvError::Closed) => {
                        // Stream is gone; nothing can match anymore, so wait
                        // out the remaining bound and resolve as a timeout.
                        timer.as_mut().await;
                        return Ok(CorrelationOutcome::TimedOut);
                    }
                },
            }
        }
    }
}

/// Normalizes a wire-level key to its canonical string form.
///
/// Numbers compare equal to their decimal string rendering; everything else
/// falls back to its JSON text.
pub fn normalize_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn emoji_like_predicate(event: &InboundEvent) -> Option<Value> {
        if !event.is("notice", "group_msg_emoji_like") {
            return None;
        }
        event.payload.get("message_id").cloned()
    }

    fn notice(message_id: Value) -> InboundEvent {
        InboundEvent::new(
            "notice",
            "group_msg_emoji_like",
            json!({"message_id": message_id}),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_matched_when_notice_arrives_first() {
        let bus = EventBus::default();
        let correlator = Correlator::new(bus.clone(), Duration::from_secs(30));

        let publisher = bus.clone();
        let wait = correlator.correlate(
            || async {
                // Notice published right after the action completes; the
                // subscription already exists, so it is not lost.
                publisher.publish(notice(json!(777)));
                Ok("777".to_string())
            },
            emoji_like_predicate,
        );

        match wait.await.unwrap() {
            CorrelationOutcome::Matched(event) => {
                assert_eq!(event.payload["message_id"], json!(777));
            }
            CorrelationOutcome::TimedOut => panic!("expected a match"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn numeric_and_string_keys_compare_equal() {
        let bus = EventBus::default();
        let correlator = Correlator::new(bus.clone(), Duration::from_secs(30));

        let publisher = bus.clone();
        let outcome = correlator
            .correlate(
                || async {
                    publisher.publish(notice(json!("424242")));
                    Ok("424242".to_string())
                },
                emoji_like_predicate,
            )
            .await
            .unwrap();
        assert!(matches!(outcome, CorrelationOutcome::Matched(_)));

        let publisher = bus.clone();
        let outcome = correlator
            .correlate(
                || async {
                    // Same key, numeric on the wire this time.
                    publisher.publish(notice(json!(424242)));
                    Ok("424242".to_string())
                },
                emoji_like_predicate,
            )
            .await
            .unwrap();
        assert!(matches!(outcome, CorrelationOutcome::Matched(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn non_matching_notices_are_ignored_until_timeout() {
        let bus = EventBus::default();
        let correlator = Correlator::new(bus.clone(), Duration::from_secs(30));

        let publisher = bus.clone();
        let outcome = correlator
            .correlate(
                || async {
                    // Wrong key, wrong sub-type, wrong type: none may match.
                    publisher.publish(notice(json!(999)));
                    publisher.publish(InboundEvent::new(
                        "notice",
                        "poke",
                        json!({"message_id": 111}),
                    ));
                    publisher.publish(InboundEvent::new(
                        "message",
                        "group",
                        json!({"message_id": 111}),
                    ));
                    Ok("111".to_string())
                },
                emoji_like_predicate,
            )
            .await
            .unwrap();

        assert!(matches!(outcome, CorrelationOutcome::TimedOut));
    }

    #[tokio::test(start_paused = true)]
    async fn late_notice_after_timeout_has_no_effect() {
        let bus = EventBus::default();
        let correlator = Correlator::new(bus.clone(), Duration::from_secs(30));

        let outcome = correlator
            .correlate(|| async { Ok("555".to_string()) }, emoji_like_predicate)
            .await
            .unwrap();
        assert!(matches!(outcome, CorrelationOutcome::TimedOut));

        // The wait already resolved; a matching notice now goes nowhere.
        assert_eq!(bus.publish(notice(json!(555))), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn failing_action_propagates_without_waiting() {
        let bus = EventBus::default();
        let correlator = Correlator::new(bus, Duration::from_secs(30));

        let err = correlator
            .correlate(
                || async { Err(solder_core::ApiError::NotConnected) },
                emoji_like_predicate,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, solder_core::ApiError::NotConnected));
    }

    #[test]
    fn normalize_key_handles_representations() {
        assert_eq!(normalize_key(&json!(123456)), "123456");
        assert_eq!(normalize_key(&json!("123456")), "123456");
        assert_eq!(normalize_key(&Value::Null), "");
    }
}
