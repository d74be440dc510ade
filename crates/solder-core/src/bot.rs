//! The `Bot` trait.
//!
//! A bot is one platform account the host can address. Adapters implement
//! this for their primary account and for any dependent accounts they
//! register (e.g. a guild-side identity discovered during bring-up).

use std::sync::Arc;

use async_trait::async_trait;

/// An active bot instance registered with the host.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Composite session identifier, unique across the registry
    /// (conventionally `platform:account_id`).
    fn sid(&self) -> String;

    /// The platform this bot speaks.
    fn platform(&self) -> &str;

    /// Tears the bot down. Expected to run without racing new inbound
    /// traffic; the transport stops accepting work first.
    async fn stop(&self);
}

/// A shared bot trait object.
pub type BoxedBot = Arc<dyn Bot>;
