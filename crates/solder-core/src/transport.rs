//! The method-call seam between adapters and their transports.
//!
//! Adapters never touch sockets directly: they issue named method calls with
//! JSON parameters and receive structured JSON replies. Whether those calls
//! travel over a WebSocket, an HTTP endpoint, or a test double is the
//! transport's business.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;

/// A transport capable of executing named protocol method calls.
///
/// Implementations live outside this workspace (and in test doubles inside
/// it). Calls are request/response: the transport is responsible for matching
/// replies to requests and for its own retry policy, if any.
#[async_trait]
pub trait MethodCaller: Send + Sync {
    /// Executes `action` with the given JSON parameters and returns the
    /// reply's data payload.
    async fn call(&self, action: &str, params: Value) -> ApiResult<Value>;
}
