//! Pet factory for creating test pet entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pet::PetFactory;
///
/// let pet = PetFactory::new(&db, owner.id)
///     .name("Leo")
///     .type_id(Some(cat.id))
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    birth_date: Option<NaiveDate>,
    type_id: Option<i32>,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"` where id is auto-incremented
    /// - birth_date: `2020-09-07`
    /// - type_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning owner (must exist)
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Pet {}", next_id()),
            birth_date: NaiveDate::from_ymd_opt(2020, 9, 7),
            type_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn type_id(mut self, type_id: Option<i32>) -> Self {
        self.type_id = type_id;
        self
    }

    /// Builds and inserts the pet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pet::Model)` - Created pet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            name: ActiveValue::Set(self.name),
            birth_date: ActiveValue::Set(self.birth_date),
            type_id: ActiveValue::Set(self.type_id),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet with default values for the given owner.
pub async fn create_pet(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db, owner_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_pet_with_type_and_owner() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (owner, pet_type, pet) =
            crate::factory::helpers::create_pet_with_dependencies(db).await?;

        assert_eq!(pet.owner_id, owner.id);
        assert_eq!(pet.type_id, Some(pet_type.id));

        Ok(())
    }
}
