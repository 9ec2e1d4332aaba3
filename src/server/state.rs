//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{model::pet::PetDetails, service::enrichment::EnrichmentOrchestrator};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<EnrichmentOrchestrator>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Orchestrator for the pet details endpoint.
    ///
    /// Holds the declared insurance and nutrition sources together with their HTTP
    /// clients and failure policies. Stateless across requests.
    pub pet_enrichment: Arc<EnrichmentOrchestrator<PetDetails>>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `pet_enrichment` - Orchestrator for pet details
    pub fn new(db: DatabaseConnection, pet_enrichment: EnrichmentOrchestrator<PetDetails>) -> Self {
        Self {
            db,
            pet_enrichment: Arc::new(pet_enrichment),
        }
    }
}
