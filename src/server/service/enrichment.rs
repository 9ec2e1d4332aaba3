//! Generic enrichment orchestrator.
//!
//! Builds a view entity from one mandatory primary lookup followed by an ordered list of
//! optional secondary lookups. Each secondary source is declared with a `FailurePolicy`
//! that decides whether its failure is absorbed or returned to the caller, so every
//! enrichment path goes through the same loop.

use async_trait::async_trait;
use std::{fmt, future::Future, str::FromStr, sync::Arc, time::Duration};
use tracing::Instrument;

use crate::server::{
    error::{enrichment::EnrichmentError, lookup::LookupError},
    model::context::RequestContext,
    remote::RemoteLookup,
};

/// What to do when a secondary lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Leave the source's fields unset and continue with the next source.
    Tolerate,
    /// Abort and return the failure to the caller. Later sources are not attempted.
    Propagate,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tolerate" => Ok(Self::Tolerate),
            "propagate" => Ok(Self::Propagate),
            other => Err(format!("expected 'tolerate' or 'propagate', got '{}'", other)),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tolerate => write!(f, "tolerate"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

/// How secondary lookups are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanOut {
    /// One lookup at a time in declared order, each keyed off the entity merged so far.
    #[default]
    Sequential,
    /// All lookups at once, keyed off the primary entity. Results are still merged in
    /// declared order.
    Concurrent,
}

impl FromStr for FanOut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            other => Err(format!(
                "expected 'sequential' or 'concurrent', got '{}'",
                other
            )),
        }
    }
}

/// Deferred merge of one successful lookup result into the entity.
pub type Merge<E> = Box<dyn FnOnce(E) -> E + Send>;

/// One secondary source as seen by the orchestrator.
///
/// Implemented by `EnrichmentDescriptor`; the trait erases the lookup's key and value
/// types so descriptors for different sources can share one list.
#[async_trait]
pub trait Enrichment<E>: Send + Sync {
    /// Name of the source, used in logs and errors.
    fn source(&self) -> &str;

    fn policy(&self) -> FailurePolicy;

    /// Looks up this source's data for `entity` and returns the merge to apply.
    async fn fetch(&self, ctx: &RequestContext, entity: &E) -> Result<Merge<E>, LookupError>;
}

/// A secondary source: a remote lookup, how to key it, and how to merge its result.
///
/// Merge functions may only add fields to the entity and must not clear fields set by
/// an earlier source.
pub struct EnrichmentDescriptor<E, L: RemoteLookup> {
    source: String,
    policy: FailurePolicy,
    lookup: L,
    key: fn(&E) -> Option<L::Key>,
    merge: fn(E, L::Value) -> E,
}

impl<E, L: RemoteLookup> EnrichmentDescriptor<E, L> {
    /// Creates a descriptor.
    ///
    /// # Arguments
    /// - `source` - Name of the source
    /// - `policy` - Failure policy for this source
    /// - `lookup` - Remote lookup to call
    /// - `key` - Derives the lookup key from the entity; `None` means there is nothing
    ///   to look up and is reported as a `NotFound` failure
    /// - `merge` - Merges a successful result into the entity
    pub fn new(
        source: impl Into<String>,
        policy: FailurePolicy,
        lookup: L,
        key: fn(&E) -> Option<L::Key>,
        merge: fn(E, L::Value) -> E,
    ) -> Self {
        Self {
            source: source.into(),
            policy,
            lookup,
            key,
            merge,
        }
    }
}

#[async_trait]
impl<E, L> Enrichment<E> for EnrichmentDescriptor<E, L>
where
    E: Send + Sync + 'static,
    L: RemoteLookup,
    L::Value: 'static,
{
    fn source(&self) -> &str {
        &self.source
    }

    fn policy(&self) -> FailurePolicy {
        self.policy
    }

    async fn fetch(&self, ctx: &RequestContext, entity: &E) -> Result<Merge<E>, LookupError> {
        let key = (self.key)(entity)
            .ok_or_else(|| LookupError::NotFound(format!("{} lookup key", self.source)))?;

        let value = self.lookup.fetch(ctx, &key).await?;

        let merge = self.merge;
        Ok(Box::new(move |entity| merge(entity, value)))
    }
}

/// Produces a merged view entity from a primary lookup and declared enrichments.
///
/// Holds no per-request state and is shared across requests behind an `Arc`.
pub struct EnrichmentOrchestrator<E> {
    enrichments: Vec<Arc<dyn Enrichment<E>>>,
    fan_out: FanOut,
    timeout: Duration,
}

impl<E> EnrichmentOrchestrator<E>
where
    E: Send + Sync + 'static,
{
    /// Creates an orchestrator with no enrichments and sequential fan-out.
    ///
    /// # Arguments
    /// - `timeout` - Independent timeout applied to the primary lookup and to each
    ///   secondary lookup
    pub fn new(timeout: Duration) -> Self {
        Self {
            enrichments: Vec::new(),
            fan_out: FanOut::Sequential,
            timeout,
        }
    }

    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Appends an enrichment. Enrichments run and merge in the order they are added.
    pub fn with_enrichment(mut self, enrichment: impl Enrichment<E> + 'static) -> Self {
        self.enrichments.push(Arc::new(enrichment));
        self
    }

    /// Fetches the primary entity and applies every declared enrichment.
    ///
    /// # Arguments
    /// - `ctx` - Identifiers of the request being served
    /// - `primary` - Lookup for the primary entity
    /// - `key` - Primary key
    ///
    /// # Returns
    /// - `Ok(E)` - The merged entity; sources that failed under `Tolerate` leave their
    ///   fields unset
    /// - `Err(EnrichmentError::NotFoundPrimary)` - The primary entity does not exist; no
    ///   secondary lookup was issued
    /// - `Err(EnrichmentError::Primary)` - The primary lookup failed otherwise
    /// - `Err(EnrichmentError::Secondary)` - A `Propagate` source failed
    pub async fn enrich<P>(
        &self,
        ctx: &RequestContext,
        primary: &P,
        key: &P::Key,
    ) -> Result<E, EnrichmentError>
    where
        P: RemoteLookup<Value = E>,
    {
        async {
            let entity = match with_timeout(self.timeout, primary.fetch(ctx, key)).await {
                Ok(entity) => entity,
                Err(e @ LookupError::NotFound(_)) => {
                    return Err(EnrichmentError::NotFoundPrimary(e.to_string()))
                }
                Err(e) => return Err(EnrichmentError::Primary(e)),
            };

            match self.fan_out {
                FanOut::Sequential => self.enrich_sequential(ctx, entity).await,
                FanOut::Concurrent => self.enrich_concurrent(ctx, entity).await,
            }
        }
        .instrument(ctx.span("enrich"))
        .await
    }

    async fn enrich_sequential(&self, ctx: &RequestContext, mut entity: E) -> Result<E, EnrichmentError> {
        for enrichment in &self.enrichments {
            let result = with_timeout(self.timeout, enrichment.fetch(ctx, &entity)).await;
            entity = apply(enrichment.as_ref(), entity, result)?;
        }

        Ok(entity)
    }

    async fn enrich_concurrent(&self, ctx: &RequestContext, entity: E) -> Result<E, EnrichmentError> {
        let results = futures::future::join_all(
            self.enrichments
                .iter()
                .map(|enrichment| with_timeout(self.timeout, enrichment.fetch(ctx, &entity))),
        )
        .await;

        self.enrichments
            .iter()
            .zip(results)
            .try_fold(entity, |entity, (enrichment, result)| {
                apply(enrichment.as_ref(), entity, result)
            })
    }
}

/// Applies one lookup outcome to the entity according to the source's policy.
fn apply<E>(
    enrichment: &dyn Enrichment<E>,
    entity: E,
    result: Result<Merge<E>, LookupError>,
) -> Result<E, EnrichmentError> {
    match (result, enrichment.policy()) {
        (Ok(merge), _) => Ok(merge(entity)),
        (Err(error), FailurePolicy::Tolerate) => {
            tracing::warn!(
                source = enrichment.source(),
                %error,
                "Enrichment failed, continuing without it"
            );
            Ok(entity)
        }
        (Err(error), FailurePolicy::Propagate) => {
            tracing::error!(source = enrichment.source(), %error, "Enrichment failed");
            Err(EnrichmentError::Secondary {
                source_name: enrichment.source().to_string(),
                error,
            })
        }
    }
}

async fn with_timeout<T>(
    timeout: Duration,
    fut: impl Future<Output = Result<T, LookupError>>,
) -> Result<T, LookupError> {
    tokio::time::timeout(timeout, fut)
        .await
        .unwrap_or(Err(LookupError::Timeout(timeout)))
}
