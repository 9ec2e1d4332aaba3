use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::starts_with,
    model::pet::{CreatePetParams, UpdatePetParams},
};

pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pet
    ///
    /// A `type_id` that does not reference an existing pet type is dropped so the
    /// pet is stored untyped.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created pet
    /// - `Err(DbErr)`: Database error (including a missing owner)
    pub async fn create(&self, params: CreatePetParams) -> Result<entity::pet::Model, DbErr> {
        let type_id = self.existing_type_id(params.type_id).await?;

        entity::pet::ActiveModel {
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            type_id: ActiveValue::Set(type_id),
            owner_id: ActiveValue::Set(params.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a pet by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::pet::Model>, DbErr> {
        entity::prelude::Pet::find_by_id(id).one(self.db).await
    }

    /// Gets a pet with its owner and type
    ///
    /// # Returns
    /// - `Ok(Some((pet, owner, pet_type)))`: Pet found
    /// - `Ok(None)`: Pet not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_owner_and_type(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::pet::Model,
            entity::owner::Model,
            Option<entity::pet_type::Model>,
        )>,
        DbErr,
    > {
        let Some((pet, pet_type)) = entity::prelude::Pet::find_by_id(id)
            .find_also_related(entity::prelude::PetType)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let owner = entity::prelude::Owner::find_by_id(pet.owner_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Owner {} of pet {}", pet.owner_id, id)))?;

        Ok(Some((pet, owner, pet_type)))
    }

    /// Updates a pet's name, birth date, and type
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated pet
    /// - `Ok(None)`: Pet not found
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, params: UpdatePetParams) -> Result<Option<entity::pet::Model>, DbErr> {
        let Some(pet) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let type_id = self.existing_type_id(params.type_id).await?;

        let mut active = pet.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.birth_date = ActiveValue::Set(params.birth_date);
        active.type_id = ActiveValue::Set(type_id);

        active.update(self.db).await.map(Some)
    }

    /// Gets all pet types ordered by name
    pub async fn get_pet_types(&self) -> Result<Vec<entity::pet_type::Model>, DbErr> {
        entity::prelude::PetType::find()
            .order_by_asc(entity::pet_type::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets pets of the given owners with their types
    pub async fn get_by_owner_ids(
        &self,
        owner_ids: Vec<i32>,
    ) -> Result<Vec<(entity::pet::Model, Option<entity::pet_type::Model>)>, DbErr> {
        entity::prelude::Pet::find()
            .filter(entity::pet::Column::OwnerId.is_in(owner_ids))
            .order_by_asc(entity::pet::Column::Name)
            .find_also_related(entity::prelude::PetType)
            .all(self.db)
            .await
    }

    /// Gets one page of pets whose name starts with `prefix`, ordered by ID
    ///
    /// The prefix match is case-sensitive and treats every character literally.
    ///
    /// # Arguments
    /// - `prefix`: Name prefix to match
    /// - `after_id`: Only pets with a greater ID are returned; `None` starts from the first
    /// - `limit`: Maximum number of pets to return
    pub async fn find_page_by_name_prefix(
        &self,
        prefix: &str,
        after_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::pet::Model>, DbErr> {
        let mut query = entity::prelude::Pet::find()
            .filter(starts_with(entity::pet::Column::Name, prefix));
        if let Some(after_id) = after_id {
            query = query.filter(entity::pet::Column::Id.gt(after_id));
        }

        query
            .order_by_asc(entity::pet::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Deletes a pet by ID
    ///
    /// Deleting a pet that no longer exists succeeds.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Pet::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    async fn existing_type_id(&self, type_id: Option<i32>) -> Result<Option<i32>, DbErr> {
        let Some(type_id) = type_id else {
            return Ok(None);
        };

        let pet_type = entity::prelude::PetType::find_by_id(type_id)
            .one(self.db)
            .await?;

        Ok(pet_type.map(|t| t.id))
    }
}
