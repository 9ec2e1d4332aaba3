//! Bounded purge engine.
//!
//! Deletes every record matching a predicate one page at a time. Each record is deleted
//! individually so a single failure is counted and skipped rather than ending the run.
//! A per-run ceiling on successful deletions bounds how much one run removes.

use async_trait::async_trait;
use std::{fmt, future::Future, time::Duration};
use tracing::Instrument;

use crate::server::{
    data::{owner::OwnerRepository, pet::PetRepository},
    error::purge::{PurgeError, StoreError},
};

/// Which records a purge run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgePredicate {
    /// Records whose purge-relevant name starts with the given prefix.
    NameStartsWith(String),
}

impl fmt::Display for PurgePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameStartsWith(prefix) => write!(f, "name starts with '{}'", prefix),
        }
    }
}

/// A store of one kind of record that the purge engine can page through and delete.
///
/// `find_page` must return matching records in ascending key order, so that resuming
/// after the last key seen never revisits a record.
#[async_trait]
pub trait PurgeTarget: Send + Sync {
    type Record: Send + Sync;
    type Key: Copy + Send + Sync + fmt::Display;

    /// Name of the record kind, used in logs and reports.
    fn kind(&self) -> &'static str;

    /// Ordering key of a record.
    fn key(&self, record: &Self::Record) -> Self::Key;

    /// Fetches up to `limit` matching records whose key is greater than `after`.
    async fn find_page(
        &self,
        predicate: &PurgePredicate,
        after: Option<Self::Key>,
        limit: u64,
    ) -> Result<Vec<Self::Record>, StoreError>;

    /// Deletes one record. Deleting a record that no longer exists succeeds.
    async fn delete(&self, record: &Self::Record) -> Result<(), StoreError>;
}

/// Bounds applied to every purge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeSettings {
    /// Maximum records fetched per page. At least 1.
    pub page_size: u64,
    /// Maximum successful deletions per run. At least 1.
    pub ceiling: u64,
    /// Timeout applied independently to each page fetch and each delete.
    pub store_timeout: Duration,
}

/// Counts for one purge run of one target kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeReport {
    pub kind: &'static str,
    pub deleted: u64,
    pub skipped: u64,
    /// Number of page fetches issued.
    pub pages: u64,
    /// Whether the run stopped at the ceiling with matching records left behind.
    pub truncated: bool,
}

impl PurgeReport {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            deleted: 0,
            skipped: 0,
            pages: 0,
            truncated: false,
        }
    }
}

pub struct PurgeEngine {
    settings: PurgeSettings,
}

impl PurgeEngine {
    pub fn new(settings: PurgeSettings) -> Self {
        Self { settings }
    }

    /// Purges every record of `target` matching `predicate`.
    ///
    /// Pages are always refetched with the same predicate, resuming after the last
    /// record seen. Deleted records no longer match, and records whose delete failed or
    /// timed out lie behind the resume point, so no record is attempted twice in a run.
    ///
    /// # Arguments
    /// - `target` - Store to purge
    /// - `predicate` - Which records to delete
    ///
    /// # Returns
    /// - `Ok(PurgeReport)` - The matching set was exhausted or the ceiling was reached
    /// - `Err(PurgeError::PageFetch)` - A page fetch failed; the error carries the counts
    ///   accumulated up to that point
    pub async fn run<T: PurgeTarget>(
        &self,
        target: &T,
        predicate: &PurgePredicate,
    ) -> Result<PurgeReport, PurgeError> {
        let span = tracing::info_span!("purge", kind = target.kind(), %predicate);

        async {
            let report = self.purge_pages(target, predicate).await?;

            if report.truncated {
                tracing::warn!(
                    ceiling = self.settings.ceiling,
                    "Purge stopped at safety ceiling"
                );
            }
            tracing::info!("purged: {}, skipped: {}", report.deleted, report.skipped);

            Ok(report)
        }
        .instrument(span)
        .await
    }

    async fn purge_pages<T: PurgeTarget>(
        &self,
        target: &T,
        predicate: &PurgePredicate,
    ) -> Result<PurgeReport, PurgeError> {
        let PurgeSettings {
            page_size,
            ceiling,
            store_timeout,
        } = self.settings;
        let mut report = PurgeReport::new(target.kind());
        let mut after = None;

        loop {
            let page = self
                .fetch_page(target, predicate, after, page_size, &mut report)
                .await?;
            let exhausted = (page.len() as u64) < page_size;

            for record in &page {
                if report.deleted >= ceiling {
                    report.truncated = true;
                    return Ok(report);
                }

                let key = target.key(record);
                match with_timeout(store_timeout, target.delete(record)).await {
                    Ok(()) => report.deleted += 1,
                    Err(error) => {
                        tracing::warn!(
                            record_id = %key,
                            %error,
                            "Failed to delete record, skipping"
                        );
                        report.skipped += 1;
                    }
                }
                after = Some(key);
            }

            if exhausted {
                return Ok(report);
            }
            if report.deleted >= ceiling {
                report.truncated = self.has_more(target, predicate, after, &mut report).await;
                return Ok(report);
            }
        }
    }

    async fn fetch_page<T: PurgeTarget>(
        &self,
        target: &T,
        predicate: &PurgePredicate,
        after: Option<T::Key>,
        limit: u64,
        report: &mut PurgeReport,
    ) -> Result<Vec<T::Record>, PurgeError> {
        report.pages += 1;

        with_timeout(
            self.settings.store_timeout,
            target.find_page(predicate, after, limit),
        )
        .await
        .map_err(|source| {
            tracing::error!(error = %source, "Failed to fetch purge page");
            PurgeError::PageFetch {
                kind: target.kind(),
                report: report.clone(),
                source,
            }
        })
    }

    /// Whether a matching record remains after the ceiling was reached on a full page.
    ///
    /// A failed check is reported as records remaining.
    async fn has_more<T: PurgeTarget>(
        &self,
        target: &T,
        predicate: &PurgePredicate,
        after: Option<T::Key>,
        report: &mut PurgeReport,
    ) -> bool {
        match self.fetch_page(target, predicate, after, 1, report).await {
            Ok(page) => !page.is_empty(),
            Err(_) => true,
        }
    }
}

async fn with_timeout<T>(
    timeout: Duration,
    fut: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    tokio::time::timeout(timeout, fut)
        .await
        .unwrap_or(Err(StoreError::Timeout(timeout)))
}

#[async_trait]
impl<'a> PurgeTarget for PetRepository<'a> {
    type Record = entity::pet::Model;
    type Key = i32;

    fn kind(&self) -> &'static str {
        "pet"
    }

    fn key(&self, record: &entity::pet::Model) -> i32 {
        record.id
    }

    async fn find_page(
        &self,
        predicate: &PurgePredicate,
        after: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::pet::Model>, StoreError> {
        let PurgePredicate::NameStartsWith(prefix) = predicate;
        Ok(self.find_page_by_name_prefix(prefix, after, limit).await?)
    }

    async fn delete(&self, record: &entity::pet::Model) -> Result<(), StoreError> {
        Ok(PetRepository::delete(self, record.id).await?)
    }
}

#[async_trait]
impl<'a> PurgeTarget for OwnerRepository<'a> {
    type Record = entity::owner::Model;
    type Key = i32;

    fn kind(&self) -> &'static str {
        "owner"
    }

    fn key(&self, record: &entity::owner::Model) -> i32 {
        record.id
    }

    async fn find_page(
        &self,
        predicate: &PurgePredicate,
        after: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::owner::Model>, StoreError> {
        let PurgePredicate::NameStartsWith(prefix) = predicate;
        Ok(self
            .find_page_by_first_name_prefix(prefix, after, limit)
            .await?)
    }

    async fn delete(&self, record: &entity::owner::Model) -> Result<(), StoreError> {
        Ok(OwnerRepository::delete(self, record.id).await?)
    }
}
