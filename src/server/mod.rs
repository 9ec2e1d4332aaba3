//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the customers service,
//! including API endpoints, business logic, data access, remote lookups, and the
//! scheduled data retention job. The backend uses Axum as the web framework, SeaORM for
//! database operations, and reqwest for calls to the insurance and nutrition services.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, the enrichment orchestrator, and the purge engine
//! - **Data Layer** (`data/`) - Database operations on entity models
//! - **Remote Layer** (`remote/`) - Lookups against the insurance and nutrition services
//! - **Model Layer** (`model/`) - Domain models, operation-specific parameter types, and request context
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, enrichment orchestrator)
//! - **Startup** (`startup`) - Initialization of database, HTTP client, and logging
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job purging stale owners and pets
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, builds the request context, calls service
//! 3. **Service** executes business logic, orchestrates data operations and remote lookups
//! 4. **Data** queries database and returns entity models
//! 5. **Service** converts to domain models and returns them to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod remote;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
