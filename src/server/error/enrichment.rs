use thiserror::Error;

use crate::server::error::lookup::LookupError;

/// Errors that cross the enrichment orchestrator boundary.
///
/// Failures of `Tolerate` sources never appear here; they are absorbed and logged
/// by the orchestrator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnrichmentError {
    /// The primary entity does not exist. No enrichment was attempted.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFoundPrimary(String),

    /// The primary lookup failed for a reason other than a missing record.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Primary lookup failed: {0}")]
    Primary(#[source] LookupError),

    /// A `Propagate` enrichment source failed. Later sources were not merged.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Enrichment source '{source_name}' failed: {error}")]
    Secondary {
        /// Name of the failing enrichment source
        source_name: String,
        /// The lookup failure, unchanged
        #[source]
        error: LookupError,
    },
}
