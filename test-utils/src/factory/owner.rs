//! Owner factory for creating test owner entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test owners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::owner::OwnerFactory;
///
/// let owner = OwnerFactory::new(&db)
///     .first_name("George")
///     .last_name("Franklin")
///     .build()
///     .await?;
/// ```
pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

impl<'a> OwnerFactory<'a> {
    /// Creates a new OwnerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Owner{id}"` where id is auto-incremented
    /// - last_name: `"Tester"`
    /// - address: `"110 W. Liberty St."`
    /// - city: `"Madison"`
    /// - telephone: `"6085551023"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Owner{}", id),
            last_name: "Tester".to_string(),
            address: "110 W. Liberty St.".to_string(),
            city: "Madison".to_string(),
            telephone: "6085551023".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    /// Builds and inserts the owner entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::owner::Model)` - Created owner entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            telephone: ActiveValue::Set(self.telephone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner with default values.
///
/// Shorthand for `OwnerFactory::new(db).build().await`.
pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db).build().await
}
