//! Remote lookup collaborators.
//!
//! A `RemoteLookup` fetches one typed value for a key from another service. Failures
//! are reported as `LookupError` and are otherwise opaque to callers; the enrichment
//! orchestrator decides what a failure means for the request.

pub mod http;
pub mod insurance;
pub mod nutrition;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;

use crate::server::{error::lookup::LookupError, model::context::RequestContext};

/// Fetches a single value by key from a remote collaborator.
#[async_trait]
pub trait RemoteLookup: Send + Sync {
    type Key: Send + Sync;
    type Value: Send;

    /// Fetches the value for `key`.
    ///
    /// # Arguments
    /// - `ctx` - Identifiers of the request the lookup is issued for
    /// - `key` - Lookup key
    ///
    /// # Returns
    /// - `Ok(Value)` - The fetched value
    /// - `Err(LookupError)` - The lookup failed
    async fn fetch(&self, ctx: &RequestContext, key: &Self::Key)
        -> Result<Self::Value, LookupError>;
}
