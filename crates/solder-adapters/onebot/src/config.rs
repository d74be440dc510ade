//! Adapter configuration.
//!
//! Loadable from the host's YAML configuration file:
//!
//! ```yaml
//! adapters:
//!   onebot:
//!     self_id: "123456789"
//!     token: ${BOT_TOKEN:-}
//!     reaction_timeout_secs: 30
//! ```

use serde::{Deserialize, Serialize};

/// Configuration of one OneBot account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OneBotConfig {
    /// The bot's account number.
    pub self_id: String,

    /// Access token expected by the protocol implementation, if any.
    pub token: Option<String>,

    /// How long the diagnostic flow waits for a reaction notice, in seconds.
    pub reaction_timeout_secs: u64,
}

impl Default for OneBotConfig {
    fn default() -> Self {
        Self {
            self_id: String::new(),
            token: None,
            reaction_timeout_secs: 30,
        }
    }
}
