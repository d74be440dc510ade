//! Typed views over the notice payloads the adapter consumes.
//!
//! Inbound events arrive on the bus as untyped `{type, sub_type, payload}`
//! records; these structs give the correlation and diagnostic paths a typed
//! window into the payloads they care about.

use serde::Deserialize;
use serde_json::Value;

/// Event type of notice events.
pub const NOTICE: &str = "notice";

/// Sub-type of the emoji-reaction notice.
pub const GROUP_MSG_EMOJI_LIKE: &str = "group_msg_emoji_like";

/// One emoji reaction on a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmojiLike {
    /// Platform emoji identifier.
    #[serde(default)]
    pub emoji_id: String,
    /// How many members reacted with this emoji.
    #[serde(default)]
    pub count: i64,
}

/// Payload of a `group_msg_emoji_like` notice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmojiLikeNotice {
    /// The reacted-to message's identifier.
    ///
    /// Kept as a raw [`Value`]: implementations deliver it as either a
    /// number or a string, so comparisons must normalize first.
    #[serde(default)]
    pub message_id: Value,
    /// The group the message lives in.
    #[serde(default)]
    pub group_id: i64,
    /// The reacting member.
    #[serde(default)]
    pub user_id: i64,
    /// Current reactions on the message.
    #[serde(default)]
    pub likes: Vec<EmojiLike>,
}
