//! API response shapes.
//!
//! Only the methods the adapter actually composes are modeled here; the full
//! OneBot v11 method surface is out of scope. All optional protocol fields
//! carry `#[serde(default)]` so a sparse reply never fails deserialization.

use serde::{Deserialize, Serialize};

/// Response of `get_login_info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInfo {
    /// The account's QQ number.
    #[serde(default)]
    pub user_id: i64,
    /// The account's nickname.
    #[serde(default)]
    pub nickname: String,
}

/// Response of `get_group_info` (one element of `get_group_list`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupInfo {
    /// The group number.
    #[serde(default)]
    pub group_id: i64,
    /// The group name.
    #[serde(default)]
    pub group_name: String,
    /// Current member count.
    #[serde(default)]
    pub member_count: i32,
    /// Maximum member count.
    #[serde(default)]
    pub max_member_count: i32,
}

/// Response of `get_group_member_info` (one element of
/// `get_group_member_list`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMemberInfo {
    /// The group number.
    #[serde(default)]
    pub group_id: i64,
    /// The member's QQ number.
    #[serde(default)]
    pub user_id: i64,
    /// The member's account nickname.
    #[serde(default)]
    pub nickname: String,
    /// The member's group card (group-scoped nickname), empty if unset.
    #[serde(default)]
    pub card: String,
    /// The member's role: `"owner"`, `"admin"`, or `"member"`.
    #[serde(default)]
    pub role: String,
    /// Unix timestamp of when the member joined, 0 if unknown.
    #[serde(default)]
    pub join_time: i64,
}

/// Response of `get_guild_service_profile`.
///
/// A missing or zero `tiny_id` means the account has no guild-side identity;
/// that is "not supported", not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuildServiceProfile {
    /// The account's guild-side identifier.
    #[serde(default)]
    pub tiny_id: Option<String>,
    /// The guild-side nickname.
    #[serde(default)]
    pub nickname: String,
    /// The guild-side avatar URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}
