//! The OneBot account lifecycle manager.
//!
//! `OneBotBot` owns one account's identity and lifecycle state, drives the
//! concurrent bring-up sequence, and exposes the adapter operations the host
//! composes: thin transport calls whose results pass through the adaptation
//! layer. Bring-up runs login confirmation and guild-service discovery
//! concurrently and joins them with asymmetric failure handling — discovery
//! may fail silently, login may not.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde_json::json;
use tokio::sync::RwLock;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use solder_core::{
    ApiError, ApiResult, Bot, BotRegistry, Channel, EventBus, Guild, GuildMember, MethodCaller,
    PermissionGate, Session,
};

use crate::adapt::{adapt_channel, adapt_guild, adapt_member, avatar_url};
use crate::config::OneBotConfig;
use crate::correlate::{CorrelationOutcome, Correlator, normalize_key};
use crate::emoji::EmojiRegistry;
use crate::guild::QQGuildBot;
use crate::model::api::{GroupInfo, GroupMemberInfo, GuildServiceProfile, LoginInfo};
use crate::model::event::{EmojiLikeNotice, GROUP_MSG_EMOJI_LIKE, NOTICE};
use crate::permission::check_permission;

/// Platform name of the primary account.
pub const PLATFORM: &str = "onebot";

/// Candidate prompt emojis for the reaction diagnostic.
const PROMPT_EMOJIS: [&str; 6] = ["👍", "❤️", "😂", "🎉", "🔥", "👏"];

/// Where the bot is in its lifecycle.
///
/// Transitions are driven only by bring-up completion and teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    /// Not yet brought up, or torn down.
    Offline,
    /// Bring-up in progress.
    Initializing,
    /// Bring-up succeeded; adapter operations are available.
    Online,
    /// Bring-up failed; carries the login failure.
    OfflineWithError(String),
}

/// The account's identity, fixed once bring-up confirms it.
#[derive(Debug, Clone)]
pub struct BotIdentity {
    /// Account number.
    pub user_id: String,
    /// Nickname reported at login.
    pub nickname: String,
    /// Avatar URL, derived deterministically from the account number.
    pub avatar: String,
    /// Access token, if configured.
    pub token: Option<String>,
}

/// A OneBot account adapter instance.
pub struct OneBotBot {
    config: OneBotConfig,
    avatar: String,
    caller: Arc<dyn MethodCaller>,
    bus: EventBus,
    registry: Arc<BotRegistry>,
    base_permissions: Arc<dyn PermissionGate>,
    emojis: EmojiRegistry,
    state: RwLock<LifecycleState>,
    nickname: RwLock<String>,
    guild_sid: RwLock<Option<String>>,
}

impl OneBotBot {
    /// Creates a bot over the given transport, event bus, and host registry.
    ///
    /// The base permission gate defaults to deny-all; see
    /// [`with_permission_gate`](Self::with_permission_gate).
    pub fn new(
        config: OneBotConfig,
        caller: Arc<dyn MethodCaller>,
        bus: EventBus,
        registry: Arc<BotRegistry>,
    ) -> Self {
        Self {
            avatar: avatar_url(&config.self_id),
            config,
            caller,
            bus,
            registry,
            base_permissions: Arc::new(solder_core::DenyAll),
            emojis: EmojiRegistry::new(),
            state: RwLock::new(LifecycleState::Offline),
            nickname: RwLock::new(String::new()),
            guild_sid: RwLock::new(None),
        }
    }

    /// Replaces the base permission gate consulted for names this adapter
    /// does not special-case.
    pub fn with_permission_gate(mut self, gate: Arc<dyn PermissionGate>) -> Self {
        self.base_permissions = gate;
        self
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> LifecycleState {
        self.state.read().await.clone()
    }

    /// Identity snapshot; the nickname is empty until bring-up confirms it.
    pub async fn identity(&self) -> BotIdentity {
        BotIdentity {
            user_id: self.config.self_id.clone(),
            nickname: self.nickname.read().await.clone(),
            avatar: self.avatar.clone(),
            token: self.config.token.clone(),
        }
    }

    /// The platform emoji registry.
    pub fn emojis(&self) -> &EmojiRegistry {
        &self.emojis
    }

    // =========================================================================
    // Bring-up and teardown
    // =========================================================================

    /// Runs bring-up: login confirmation and guild-service discovery,
    /// concurrently.
    ///
    /// Discovery failure is logged and discarded — the guild service is
    /// optional. Login failure is fatal and leaves the bot in
    /// [`LifecycleState::OfflineWithError`]; success transitions to
    /// [`LifecycleState::Online`].
    pub async fn initialize(&self) {
        *self.state.write().await = LifecycleState::Initializing;

        let (login, discovery) = tokio::join!(self.confirm_login(), self.setup_guild_service());

        if let Err(err) = discovery {
            warn!(self_id = %self.config.self_id, error = %err, "guild service discovery failed");
        }

        match login {
            Ok(login) => {
                *self.nickname.write().await = login.nickname;
                *self.state.write().await = LifecycleState::Online;
                info!(self_id = %self.config.self_id, "bot online");
            }
            Err(err) => {
                warn!(self_id = %self.config.self_id, error = %err, "login confirmation failed");
                *self.state.write().await = LifecycleState::OfflineWithError(err.to_string());
            }
        }
    }

    async fn confirm_login(&self) -> ApiResult<LoginInfo> {
        let data = self.caller.call("get_login_info", json!({})).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Discovers the optional guild service and registers the dependent bot.
    ///
    /// A profile whose `tiny_id` is absent, empty, or `"0"` means the
    /// account has no guild-side identity; that is not an error.
    async fn setup_guild_service(&self) -> ApiResult<()> {
        let data = self.caller.call("get_guild_service_profile", json!({})).await?;
        let profile: GuildServiceProfile = serde_json::from_value(data)?;

        let tiny_id = match profile.tiny_id.as_deref() {
            None | Some("") | Some("0") => {
                debug!(self_id = %self.config.self_id, "guild service not supported");
                return Ok(());
            }
            Some(tiny_id) => tiny_id.to_string(),
        };

        let guild_bot = Arc::new(QQGuildBot::new(tiny_id, profile, self.sid()));
        let sid = guild_bot.sid();
        self.registry.register(guild_bot).await?;
        *self.guild_sid.write().await = Some(sid.clone());
        info!(sid = %sid, "guild service bot registered");
        Ok(())
    }

    // =========================================================================
    // Queries and mutations
    // =========================================================================

    /// Fetches a channel. On this platform the channel is the group itself.
    pub async fn get_channel(&self, channel_id: &str) -> ApiResult<Channel> {
        let data = self
            .caller
            .call("get_group_info", json!({ "group_id": parse_id(channel_id)? }))
            .await?;
        let info: GroupInfo = serde_json::from_value(data)?;
        Ok(adapt_channel(&info))
    }

    /// Fetches a guild.
    pub async fn get_guild(&self, guild_id: &str) -> ApiResult<Guild> {
        let data = self
            .caller
            .call("get_group_info", json!({ "group_id": parse_id(guild_id)? }))
            .await?;
        let info: GroupInfo = serde_json::from_value(data)?;
        Ok(adapt_guild(&info))
    }

    /// Lists all guilds the account is in.
    pub async fn get_guild_list(&self) -> ApiResult<Vec<Guild>> {
        let data = self.caller.call("get_group_list", json!({})).await?;
        let groups: Vec<GroupInfo> = serde_json::from_value(data)?;
        Ok(groups.iter().map(adapt_guild).collect())
    }

    /// Lists the channels of a guild.
    ///
    /// The platform has no channels beneath a group, so this is always a
    /// single-element list containing the guild's own channel form.
    pub async fn get_channel_list(&self, guild_id: &str) -> ApiResult<Vec<Channel>> {
        Ok(vec![self.get_channel(guild_id).await?])
    }

    /// Fetches one guild member.
    pub async fn get_guild_member(&self, guild_id: &str, user_id: &str) -> ApiResult<GuildMember> {
        let data = self
            .caller
            .call(
                "get_group_member_info",
                json!({ "group_id": parse_id(guild_id)?, "user_id": parse_id(user_id)? }),
            )
            .await?;
        let info: GroupMemberInfo = serde_json::from_value(data)?;
        Ok(adapt_member(&info))
    }

    /// Lists all members of a guild.
    pub async fn get_guild_member_list(&self, guild_id: &str) -> ApiResult<Vec<GuildMember>> {
        let data = self
            .caller
            .call(
                "get_group_member_list",
                json!({ "group_id": parse_id(guild_id)? }),
            )
            .await?;
        let members: Vec<GroupMemberInfo> = serde_json::from_value(data)?;
        Ok(members.iter().map(adapt_member).collect())
    }

    /// Kicks a member; `permanent` also rejects future join requests.
    pub async fn kick_guild_member(
        &self,
        guild_id: &str,
        user_id: &str,
        permanent: bool,
    ) -> ApiResult<()> {
        self.caller
            .call(
                "set_group_kick",
                json!({
                    "group_id": parse_id(guild_id)?,
                    "user_id": parse_id(user_id)?,
                    "reject_add_request": permanent,
                }),
            )
            .await?;
        Ok(())
    }

    /// Mutes a member for `duration_ms` milliseconds (0 unmutes).
    ///
    /// The protocol counts whole seconds; the duration is rounded to the
    /// nearest second before the call.
    pub async fn mute_guild_member(
        &self,
        guild_id: &str,
        user_id: &str,
        duration_ms: u64,
    ) -> ApiResult<()> {
        let duration_secs = (duration_ms as f64 / 1000.0).round() as u64;
        self.caller
            .call(
                "set_group_ban",
                json!({
                    "group_id": parse_id(guild_id)?,
                    "user_id": parse_id(user_id)?,
                    "duration": duration_secs,
                }),
            )
            .await?;
        Ok(())
    }

    /// Enables or disables the whole-channel mute.
    pub async fn mute_channel(&self, channel_id: &str, enable: bool) -> ApiResult<()> {
        self.caller
            .call(
                "set_group_whole_ban",
                json!({ "group_id": parse_id(channel_id)?, "enable": enable }),
            )
            .await?;
        Ok(())
    }

    /// Sends a group message and returns its identifier in canonical string
    /// form.
    pub async fn send_message(&self, channel_id: &str, content: &str) -> ApiResult<String> {
        let data = self
            .caller
            .call(
                "send_group_msg",
                json!({ "group_id": parse_id(channel_id)?, "message": content }),
            )
            .await?;
        data.get("message_id")
            .map(normalize_key)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::Serialization("missing message_id in reply".into()))
    }

    /// Decides whether `session` holds the named permission.
    ///
    /// Independent of lifecycle state.
    pub async fn check_permission(&self, name: &str, session: &Session) -> bool {
        check_permission(name, session, self.base_permissions.as_ref()).await
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Sends a reaction prompt and waits for the correlated emoji-reaction
    /// notice.
    ///
    /// Returns a human-readable summary: the reactions received on the
    /// prompt message, or a timeout notice. A timeout is a normal outcome,
    /// not an error; only the send itself can fail.
    pub async fn probe_emoji_reaction(&self, channel_id: &str) -> ApiResult<String> {
        let prompt = *PROMPT_EMOJIS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&PROMPT_EMOJIS[0]);

        let timeout = Duration::from_secs(self.config.reaction_timeout_secs);
        let correlator = Correlator::new(self.bus.clone(), timeout);

        let outcome = correlator
            .correlate(
                || async move {
                    self.send_message(
                        channel_id,
                        &format!("react to this message with {prompt}"),
                    )
                    .await
                },
                |event| {
                    if !event.is(NOTICE, GROUP_MSG_EMOJI_LIKE) {
                        return None;
                    }
                    event.payload.get("message_id").cloned()
                },
            )
            .await?;

        match outcome {
            CorrelationOutcome::Matched(event) => {
                let notice: EmojiLikeNotice = serde_json::from_value(event.payload)?;
                let likes = notice
                    .likes
                    .iter()
                    .map(|like| match self.emojis.by_id(&like.emoji_id) {
                        Some(emoji) => {
                            format!("{} ({}) x{}", like.emoji_id, emoji.name, like.count)
                        }
                        None => format!("{} x{}", like.emoji_id, like.count),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                Ok(format!(
                    "reaction received on message {}: {likes}",
                    normalize_key(&notice.message_id)
                ))
            }
            CorrelationOutcome::TimedOut => Ok(format!(
                "no reaction received within {} seconds",
                self.config.reaction_timeout_secs
            )),
        }
    }
}

#[async_trait]
impl Bot for OneBotBot {
    fn sid(&self) -> String {
        format!("{PLATFORM}:{}", self.config.self_id)
    }

    fn platform(&self) -> &str {
        PLATFORM
    }

    /// Tears the bot down: the dependent guild bot is deregistered first so
    /// no dangling registry entry survives the base teardown.
    async fn stop(&self) {
        if let Some(sid) = self.guild_sid.write().await.take()
            && let Some(guild_bot) = self.registry.deregister(&sid).await
        {
            guild_bot.stop().await;
        }

        self.registry.deregister(&self.sid()).await;
        *self.state.write().await = LifecycleState::Offline;
        info!(self_id = %self.config.self_id, "bot stopped");
    }
}

/// Validates a platform identifier string into its wire form.
fn parse_id(id: &str) -> ApiResult<i64> {
    id.parse()
        .map_err(|_| ApiError::Serialization(format!("invalid platform id '{id}'")))
}
