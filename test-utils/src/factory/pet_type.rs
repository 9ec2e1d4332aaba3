//! Pet type factory for creating test pet type entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pet type with the given name.
///
/// Pet type names are unique, so create each name at most once per test database.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Pet type name (e.g. `"dog"`)
///
/// # Returns
/// - `Ok(entity::pet_type::Model)` - Created pet type entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pet_type(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::pet_type::Model, DbErr> {
    entity::pet_type::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
