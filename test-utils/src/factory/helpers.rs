//! Shared helper utilities for factory methods.
//!
//! Provides ID generation shared by all factories and convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, a pet type, and a pet belonging to both.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, pet_type, pet))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pet_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::owner::Model,
        entity::pet_type::Model,
        entity::pet::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::owner::create_owner(db).await?;
    let pet_type = crate::factory::pet_type::create_pet_type(db, "dog").await?;
    let pet = crate::factory::pet::PetFactory::new(db, owner.id)
        .type_id(Some(pet_type.id))
        .build()
        .await?;

    Ok((owner, pet_type, pet))
}

/// Creates `count` pets for an owner whose names all start with `prefix`.
///
/// Names are `"{prefix}-{n}"` with `n` unique across the test run.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - Owner the pets belong to
/// - `prefix` - Name prefix shared by every created pet
/// - `count` - Number of pets to create
///
/// # Returns
/// - `Ok(Vec<entity::pet::Model>)` - Created pets in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pets_with_prefix(
    db: &DatabaseConnection,
    owner_id: i32,
    prefix: &str,
    count: usize,
) -> Result<Vec<entity::pet::Model>, DbErr> {
    let mut pets = Vec::with_capacity(count);
    for _ in 0..count {
        let pet = crate::factory::pet::PetFactory::new(db, owner_id)
            .name(format!("{}-{}", prefix, next_id()))
            .build()
            .await?;
        pets.push(pet);
    }

    Ok(pets)
}

/// Creates `count` owners whose first names all start with `prefix`.
///
/// # Arguments
/// - `db` - Database connection
/// - `prefix` - First-name prefix shared by every created owner
/// - `count` - Number of owners to create
///
/// # Returns
/// - `Ok(Vec<entity::owner::Model>)` - Created owners in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_owners_with_prefix(
    db: &DatabaseConnection,
    prefix: &str,
    count: usize,
) -> Result<Vec<entity::owner::Model>, DbErr> {
    let mut owners = Vec::with_capacity(count);
    for _ in 0..count {
        let owner = crate::factory::owner::OwnerFactory::new(db)
            .first_name(format!("{}-{}", prefix, next_id()))
            .build()
            .await?;
        owners.push(owner);
    }

    Ok(owners)
}
