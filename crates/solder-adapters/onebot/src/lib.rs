//! # Solder Adapter for OneBot v11
//!
//! Represents one OneBot (QQ) account to a Solder host: establishes the
//! account's identity, brings it online, projects the platform's native
//! group/member records into the host's canonical model, evaluates
//! group-role permissions, and supports a diagnostic round-trip that
//! correlates an outbound message with a later emoji-reaction notice.
//!
//! ## Bring-up
//!
//! [`OneBotBot::initialize`] runs login confirmation and guild-service
//! discovery concurrently. Discovery is optional and may fail silently;
//! login is not. An account with a guild-side identity gets a dependent
//! [`QQGuildBot`] registered in the host's [`BotRegistry`] and deregistered
//! again on [`stop`](solder_core::Bot::stop).
//!
//! ## Event correlation
//!
//! Reaction notices arrive out of band on the inbound event stream. The
//! [`Correlator`] binds a just-sent message to the notice that answers it:
//! first match wins, a fixed timeout bounds the wait, and resolution is
//! exactly-once.
//!
//! ```rust,ignore
//! use solder_adapter_onebot::{OneBotBot, OneBotConfig};
//!
//! let bot = OneBotBot::new(config, caller, bus, registry);
//! bot.initialize().await;
//! let report = bot.probe_emoji_reaction("123456").await?;
//! ```
//!
//! [`BotRegistry`]: solder_core::BotRegistry

pub mod adapt;
pub mod bot;
pub mod config;
pub mod correlate;
pub mod emoji;
pub mod guild;
pub mod model;
pub mod permission;

pub use adapt::{adapt_channel, adapt_guild, adapt_member, avatar_url};
pub use bot::{BotIdentity, LifecycleState, OneBotBot, PLATFORM};
pub use config::OneBotConfig;
pub use correlate::{CorrelationOutcome, Correlator, normalize_key};
pub use emoji::{Emoji, EmojiRegistry};
pub use guild::{GUILD_PLATFORM, QQGuildBot};
pub use model::api::{GroupInfo, GroupMemberInfo, GuildServiceProfile, LoginInfo};
pub use model::event::{EmojiLike, EmojiLikeNotice, GROUP_MSG_EMOJI_LIKE, NOTICE};
pub use permission::check_permission;
