use std::time::Duration;
use thiserror::Error;

use crate::server::service::purge::PurgeReport;

/// Failure of a single store call issued by the purge engine.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),
}

/// Run-level purge failure for one target kind.
///
/// Per-record delete failures are never surfaced as errors; they are counted as
/// skipped in the report. Only a failed page fetch ends a run early.
#[derive(Error, Debug)]
pub enum PurgeError {
    #[error("Failed to fetch page of {kind} records after {} deletions: {source}", .report.deleted)]
    PageFetch {
        /// Target kind whose run was stopped
        kind: &'static str,
        /// Counts accumulated before the failed fetch
        report: PurgeReport,
        #[source]
        source: StoreError,
    },
}
