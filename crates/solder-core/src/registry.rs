//! The host's bot registry.
//!
//! Keyed by composite session identifier. Adapters register their primary
//! account here and any dependent accounts they discover; whoever registers
//! an entry is responsible for deregistering it on teardown.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::bot::BoxedBot;
use crate::error::{ApiError, ApiResult};

/// Registry of active bots, keyed by sid.
#[derive(Default)]
pub struct BotRegistry {
    bots: RwLock<HashMap<String, BoxedBot>>,
}

impl BotRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bot under its sid.
    ///
    /// Fails if the sid is already taken.
    pub async fn register(&self, bot: BoxedBot) -> ApiResult<()> {
        let sid = bot.sid();
        let mut bots = self.bots.write().await;
        if bots.contains_key(&sid) {
            warn!(sid = %sid, "bot already registered");
            return Err(ApiError::AlreadyRegistered(sid));
        }
        debug!(sid = %sid, platform = %bot.platform(), "bot registered");
        bots.insert(sid, bot);
        Ok(())
    }

    /// Removes and returns the bot registered under `sid`.
    pub async fn deregister(&self, sid: &str) -> Option<BoxedBot> {
        let removed = self.bots.write().await.remove(sid);
        if removed.is_some() {
            debug!(sid = %sid, "bot deregistered");
        }
        removed
    }

    /// Returns the bot registered under `sid`, if any.
    pub async fn get(&self, sid: &str) -> Option<BoxedBot> {
        self.bots.read().await.get(sid).cloned()
    }

    /// Returns the sids of all registered bots.
    pub async fn sids(&self) -> Vec<String> {
        self.bots.read().await.keys().cloned().collect()
    }
}
