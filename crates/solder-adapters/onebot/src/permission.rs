//! Platform-specific permission evaluation.
//!
//! OneBot group roles map onto two named permissions; everything else is the
//! base evaluator's business. A session that carries no usable role
//! information also falls through to the base gate, which default-denies.

use solder_core::{PermissionGate, Session};

/// The permission names this adapter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PermissionName<'a> {
    /// `onebot.group.admin`: the author's primary role is `admin`.
    GroupAdmin,
    /// `onebot.group.owner`: the author's primary role is `owner`.
    GroupOwner,
    /// Anything else, delegated to the base gate unchanged.
    Other(&'a str),
}

impl<'a> PermissionName<'a> {
    fn parse(name: &'a str) -> Self {
        match name {
            "onebot.group.admin" => Self::GroupAdmin,
            "onebot.group.owner" => Self::GroupOwner,
            other => Self::Other(other),
        }
    }
}

/// Decides whether `session` holds the named permission.
pub async fn check_permission(name: &str, session: &Session, base: &dyn PermissionGate) -> bool {
    match (PermissionName::parse(name), session.primary_role()) {
        (PermissionName::GroupAdmin, Some(role)) => role == "admin",
        (PermissionName::GroupOwner, Some(role)) => role == "owner",
        (PermissionName::Other(other), _) => base.check(other, session).await,
        // Recognized name but no usable role information: the base
        // evaluator decides (and default-denies).
        _ => base.check(name, session).await,
    }
}
