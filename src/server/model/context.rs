//! Per-request observability context.
//!
//! Carries the identifiers a request is about to every lookup and merge call, so log
//! lines and spans can be correlated without any global span state.

use uuid::Uuid;

/// Identifiers describing the request being served.
///
/// Created by the controller for each inbound request and passed by reference through
/// the service, orchestrator, and remote lookups. Never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Random identifier unique to this request.
    pub request_id: String,
    /// Owner the request targets, if any.
    pub owner_id: Option<i32>,
    /// Pet the request targets, if any.
    pub pet_id: Option<i32>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestContext {
    /// Creates a context with a fresh request id and no entity identifiers.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            owner_id: None,
            pet_id: None,
        }
    }

    pub fn with_owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_pet(mut self, pet_id: i32) -> Self {
        self.pet_id = Some(pet_id);
        self
    }

    /// Opens a tracing span for `operation` carrying this context's identifiers.
    pub fn span(&self, operation: &'static str) -> tracing::Span {
        tracing::info_span!(
            "request",
            operation,
            request_id = %self.request_id,
            owner_id = ?self.owner_id,
            pet_id = ?self.pet_id,
        )
    }
}
