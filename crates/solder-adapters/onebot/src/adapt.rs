//! Adaptation of native group/member records into canonical entities.
//!
//! Pure mapping functions, total over well-formed input: a record with an id
//! always adapts, and absent optional fields map to defined defaults rather
//! than failures. QQ has no channel concept beneath a group, so a group
//! adapts to both a [`Guild`] and a [`Channel`] that share its identity.

use solder_core::{Channel, Guild, GuildMember, User};

use crate::model::api::{GroupInfo, GroupMemberInfo};

/// Role assigned to members whose record carries none.
const DEFAULT_ROLE: &str = "member";

/// Returns the avatar URL for a QQ account.
pub fn avatar_url(user_id: impl std::fmt::Display) -> String {
    format!("http://q.qlogo.cn/headimg_dl?dst_uin={user_id}&spec=640")
}

/// Adapts a group record into a canonical guild.
pub fn adapt_guild(info: &GroupInfo) -> Guild {
    Guild {
        id: info.group_id.to_string(),
        name: info.group_name.clone(),
    }
}

/// Adapts a group record into a canonical channel.
///
/// The channel mirrors the group: same identifier, same name, and the guild
/// it belongs to is the group itself.
pub fn adapt_channel(info: &GroupInfo) -> Channel {
    let id = info.group_id.to_string();
    Channel {
        guild_id: id.clone(),
        id,
        name: info.group_name.clone(),
    }
}

/// Adapts a member record into a canonical guild member.
///
/// The group card becomes the nickname when set; the role list carries the
/// single native role, defaulting to `"member"` when the record has none.
pub fn adapt_member(info: &GroupMemberInfo) -> GuildMember {
    let role = if info.role.is_empty() {
        DEFAULT_ROLE.to_string()
    } else {
        info.role.clone()
    };

    GuildMember {
        user: User {
            id: info.user_id.to_string(),
            name: info.nickname.clone(),
            avatar: Some(avatar_url(info.user_id)),
        },
        nickname: (!info.card.is_empty()).then(|| info.card.clone()),
        roles: vec![role],
        joined_at: (info.join_time != 0).then_some(info.join_time),
    }
}
