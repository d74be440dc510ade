//! Canonical entity shapes.
//!
//! These are the platform-independent projections the host works with.
//! Adapters produce them from native protocol records; they are never
//! mutated after construction — a fresh adaptation replaces any prior value.

use serde::{Deserialize, Serialize};

/// A user identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Platform user identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Avatar URL, if the platform provides one.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A guild (top-level group) as the host sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    /// Guild identifier.
    pub id: String,
    /// Guild display name.
    #[serde(default)]
    pub name: String,
}

/// A channel within a guild.
///
/// On platforms without a channel concept beneath groups, the channel mirrors
/// the guild and shares its identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier.
    pub id: String,
    /// Channel display name.
    #[serde(default)]
    pub name: String,
    /// Identifier of the guild the channel belongs to.
    #[serde(default)]
    pub guild_id: String,
}

/// A guild member as the host sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildMember {
    /// The member's user identity.
    pub user: User,
    /// Guild-scoped nickname, if set.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Roles, most significant first.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Unix timestamp of when the member joined, if known.
    #[serde(default)]
    pub joined_at: Option<i64>,
}
