//! The dependent guild-side bot.
//!
//! Some QQ accounts carry a secondary guild-service identity (a "tiny id").
//! When bring-up discovers one, the adapter registers this stub bot in the
//! host registry so guild traffic can be addressed to it; the parent account
//! is responsible for deregistering it on teardown.

use async_trait::async_trait;
use tracing::debug;

use solder_core::Bot;

use crate::model::api::GuildServiceProfile;

/// Platform name of the guild-side identity.
pub const GUILD_PLATFORM: &str = "qqguild";

/// A dependent bot representing the account's guild-service identity.
#[derive(Debug)]
pub struct QQGuildBot {
    tiny_id: String,
    profile: GuildServiceProfile,
    parent_sid: String,
}

impl QQGuildBot {
    /// Creates a guild bot from a discovered profile.
    ///
    /// `tiny_id` must be the profile's non-zero distinguishing identifier;
    /// callers gate on that before constructing.
    pub fn new(tiny_id: String, profile: GuildServiceProfile, parent_sid: String) -> Self {
        Self {
            tiny_id,
            profile,
            parent_sid,
        }
    }

    /// The guild-side account identifier.
    pub fn tiny_id(&self) -> &str {
        &self.tiny_id
    }

    /// The guild-side nickname.
    pub fn nickname(&self) -> &str {
        &self.profile.nickname
    }

    /// The sid of the parent account this bot depends on.
    pub fn parent_sid(&self) -> &str {
        &self.parent_sid
    }
}

#[async_trait]
impl Bot for QQGuildBot {
    fn sid(&self) -> String {
        format!("{GUILD_PLATFORM}:{}", self.tiny_id)
    }

    fn platform(&self) -> &str {
        GUILD_PLATFORM
    }

    async fn stop(&self) {
        debug!(sid = %self.sid(), "guild bot stopped");
    }
}
