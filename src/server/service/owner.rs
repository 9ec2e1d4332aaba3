use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{owner::OwnerRepository, pet::PetRepository},
    error::AppError,
    model::{
        owner::{Owner, OwnerFields, UpdateOwnerParams},
        pet::Pet,
    },
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new owner with no pets
    pub async fn create(&self, fields: OwnerFields) -> Result<Owner, AppError> {
        let owner = OwnerRepository::new(self.db).create(fields).await?;

        Ok(Owner::from_entity(owner, Vec::new()))
    }

    /// Gets an owner with their pets
    ///
    /// # Returns
    /// - `Ok(Owner)`: Owner found
    /// - `Err(AppError::BadRequest)`: `id` is less than 1
    /// - `Err(AppError::NotFound)`: No owner with this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Owner, AppError> {
        if id < 1 {
            return Err(AppError::BadRequest(format!(
                "Owner ID must be at least 1, got {}",
                id
            )));
        }

        let owner = OwnerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Owner {} not found", id)))?;

        let mut owners = self.with_pets(vec![owner]).await?;
        owners
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Owner {} lost while loading pets", id)))
    }

    /// Gets all owners with their pets
    pub async fn get_all(&self) -> Result<Vec<Owner>, AppError> {
        let owners = OwnerRepository::new(self.db).get_all().await?;

        self.with_pets(owners).await
    }

    /// Replaces all contact fields of an owner
    ///
    /// # Returns
    /// - `Ok(())`: Owner updated
    /// - `Err(AppError::NotFound)`: No owner with this ID
    pub async fn update(&self, params: UpdateOwnerParams) -> Result<(), AppError> {
        let id = params.id;

        OwnerRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Owner {} not found", id)))?;

        Ok(())
    }

    /// Attaches pets to owners with a single query, keeping the owners' order
    async fn with_pets(&self, owners: Vec<entity::owner::Model>) -> Result<Vec<Owner>, AppError> {
        let owner_ids = owners.iter().map(|o| o.id).collect();
        let pets = PetRepository::new(self.db).get_by_owner_ids(owner_ids).await?;

        let mut pets_by_owner: HashMap<i32, Vec<Pet>> = HashMap::new();
        for (pet, pet_type) in pets {
            pets_by_owner
                .entry(pet.owner_id)
                .or_default()
                .push(Pet::from_entity(pet, pet_type));
        }

        Ok(owners
            .into_iter()
            .map(|owner| {
                let pets = pets_by_owner.remove(&owner.id).unwrap_or_default();
                Owner::from_entity(owner, pets)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};

    fn fields(first_name: &str) -> OwnerFields {
        OwnerFields {
            first_name: first_name.to_string(),
            last_name: "Black".to_string(),
            address: "1450 Oak Blvd.".to_string(),
            city: "Monona".to_string(),
            telephone: "6085555387".to_string(),
        }
    }

    #[tokio::test]
    async fn gets_owner_with_pets_and_types() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (owner, pet_type, pet) = factory::helpers::create_pet_with_dependencies(db).await?;
        factory::create_pet(db, factory::create_owner(db).await?.id).await?;

        let found = OwnerService::new(db).get_by_id(owner.id).await.unwrap();

        assert_eq!(found.id, owner.id);
        assert_eq!(found.pets.len(), 1);
        assert_eq!(found.pets[0].id, pet.id);
        assert_eq!(
            found.pets[0].pet_type.as_ref().map(|t| t.name.as_str()),
            Some(pet_type.name.as_str())
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejects_non_positive_id() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        for id in [0, -3] {
            let result = OwnerService::new(db).get_by_id(id).await;

            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        Ok(())
    }

    #[tokio::test]
    async fn reports_missing_owner() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = OwnerService::new(db);

        let get = service.get_by_id(999999).await;
        let update = service
            .update(UpdateOwnerParams {
                id: 999999,
                fields: fields("Nobody"),
            })
            .await;

        assert!(matches!(get, Err(AppError::NotFound(_))));
        assert!(matches!(update, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn lists_every_owner_with_own_pets() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = OwnerService::new(db);

        let carlos = service.create(fields("Carlos")).await.unwrap();
        let david = service.create(fields("David")).await.unwrap();
        factory::create_pet(db, carlos.id).await?;
        factory::create_pet(db, carlos.id).await?;

        let owners = service.get_all().await.unwrap();

        assert_eq!(owners.len(), 2);
        let carlos = owners.iter().find(|o| o.id == carlos.id).unwrap();
        let david = owners.iter().find(|o| o.id == david.id).unwrap();
        assert_eq!(carlos.pets.len(), 2);
        assert!(david.pets.is_empty());

        Ok(())
    }
}
