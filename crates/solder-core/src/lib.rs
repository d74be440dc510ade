//! # Solder Core
//!
//! Host-side abstractions of the Solder bot framework: the seams a protocol
//! adapter is written against.
//!
//! ## What lives here
//!
//! - **Transport seam**: [`MethodCaller`] — "send a named method call, get a
//!   structured reply". Concrete transports (WebSocket, HTTP polling) live
//!   outside this workspace.
//! - **Event bus**: [`EventBus`] / [`InboundEvent`] — the inbound
//!   notification stream transports publish into and adapters subscribe to.
//! - **Bot management**: the [`Bot`] trait and the sid-keyed [`BotRegistry`].
//! - **Canonical entities**: [`Guild`], [`Channel`], [`GuildMember`] — the
//!   platform-independent shapes adapters project native records into.
//! - **Sessions and permissions**: [`Session`] plus the [`PermissionGate`]
//!   base evaluator adapters fall back to.
//! - **Errors**: the [`ApiError`] taxonomy shared by all of the above.

pub mod bot;
pub mod entity;
pub mod error;
pub mod event;
pub mod registry;
pub mod session;
pub mod transport;

pub use bot::{Bot, BoxedBot};
pub use entity::{Channel, Guild, GuildMember, User};
pub use error::{ApiError, ApiResult};
pub use event::{EventBus, InboundEvent};
pub use registry::BotRegistry;
pub use session::{Author, DenyAll, PermissionGate, Session};
pub use transport::MethodCaller;
