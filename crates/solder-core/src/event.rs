//! Inbound event bus.
//!
//! Transports publish every inbound protocol event here; adapters and the
//! host subscribe. Events are coarse `{type, sub_type, payload}` records —
//! typed views over the payload belong to the adapter that understands the
//! protocol.

use serde_json::Value;
use tokio::sync::broadcast;

/// Default buffer size for the bus channel.
const DEFAULT_CAPACITY: usize = 64;

/// A raw inbound protocol event.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    /// Top-level event classification (e.g. `"notice"`, `"message"`).
    pub event_type: String,
    /// Protocol-specific sub-classification (e.g. `"group_msg_emoji_like"`).
    pub sub_type: String,
    /// The untyped event body.
    pub payload: Value,
}

impl InboundEvent {
    /// Creates an event with the given classification and payload.
    pub fn new(
        event_type: impl Into<String>,
        sub_type: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            sub_type: sub_type.into(),
            payload,
        }
    }

    /// Returns whether the event carries the given type and sub-type.
    pub fn is(&self, event_type: &str, sub_type: &str) -> bool {
        self.event_type == event_type && self.sub_type == sub_type
    }
}

/// Broadcast bus carrying [`InboundEvent`]s from transports to subscribers.
///
/// Cloning the bus clones the sending side; every subscriber gets every event
/// published after its subscription was opened.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<InboundEvent>,
}

impl EventBus {
    /// Creates a bus with the given channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Opens a new subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<InboundEvent> {
        self.tx.subscribe()
    }

    /// Publishes an event to all current subscribers.
    ///
    /// Returns the number of subscribers that received it; zero subscribers
    /// is not an error.
    pub fn publish(&self, event: InboundEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(InboundEvent::new("notice", "poke", json!({"user_id": 1})));

        let event = rx.recv().await.unwrap();
        assert!(event.is("notice", "poke"));
        assert_eq!(event.payload["user_id"], 1);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_not_an_error() {
        let bus = EventBus::default();
        assert_eq!(bus.publish(InboundEvent::new("notice", "poke", json!({}))), 0);
    }
}
