//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take foreign keys explicitly, while the
//! `helpers` module creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::owner::create_owner(&db).await?;
//!
//!     // Create with all dependencies
//!     let (owner, pet_type, pet) = factory::helpers::create_pet_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let owner = factory::owner::OwnerFactory::new(&db)
//!     .first_name("firstName-42")
//!     .city("Madison")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `owner` - Create owner entities
//! - `pet_type` - Create pet type entities
//! - `pet` - Create pet entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod owner;
pub mod pet;
pub mod pet_type;

pub use owner::create_owner;
pub use pet::create_pet;
pub use pet_type::create_pet_type;
