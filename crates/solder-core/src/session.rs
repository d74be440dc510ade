//! Session context and the base permission gate.

use async_trait::async_trait;

/// The author of the activity a session describes.
#[derive(Debug, Clone, Default)]
pub struct Author {
    /// The author's user identifier.
    pub user_id: String,
    /// The author's roles, most significant first.
    pub roles: Vec<String>,
}

/// A (possibly partial) session snapshot handed to permission checks.
///
/// Only the fields a given check needs are required to be present; absent
/// fields mean "unknown", not "invalid".
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The session's author, if known.
    pub author: Option<Author>,
    /// The guild the session belongs to, if any.
    pub guild_id: Option<String>,
}

impl Session {
    /// Returns the author's first-listed (primary) role, if any.
    pub fn primary_role(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|a| a.roles.first())
            .map(String::as_str)
    }
}

/// Base permission evaluator.
///
/// Adapters special-case their platform-specific permission names and
/// delegate everything else here.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Decides whether `session` holds the named permission.
    async fn check(&self, name: &str, session: &Session) -> bool;
}

/// A base gate that denies every permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait]
impl PermissionGate for DenyAll {
    async fn check(&self, _name: &str, _session: &Session) -> bool {
        false
    }
}
