//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Merging remote enrichments into primary records
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Data Retention**: Paged, bounded deletion of stale records

pub mod enrichment;
pub mod owner;
pub mod pet;
pub mod purge;
