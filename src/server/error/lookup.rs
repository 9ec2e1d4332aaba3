use std::time::Duration;
use thiserror::Error;

/// Failure of a single remote lookup.
///
/// Produced by every `RemoteLookup` implementation and by the orchestrator when a
/// lookup exceeds its timeout. The enrichment failure policy is applied to all
/// variants alike.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The remote service has no record for the requested key.
    #[error("{0} not found")]
    NotFound(String),

    /// The remote service could not be reached or answered with an error status.
    #[error("Remote service unavailable: {0}")]
    Unavailable(String),

    /// The lookup did not complete within its timeout.
    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The remote service answered with a payload that could not be decoded.
    #[error("Malformed response: {0}")]
    Malformed(String),
}
