use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::starts_with,
    model::owner::{OwnerFields, UpdateOwnerParams},
};

pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new owner
    pub async fn create(&self, fields: OwnerFields) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            first_name: ActiveValue::Set(fields.first_name),
            last_name: ActiveValue::Set(fields.last_name),
            address: ActiveValue::Set(fields.address),
            city: ActiveValue::Set(fields.city),
            telephone: ActiveValue::Set(fields.telephone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an owner by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(id).one(self.db).await
    }

    /// Gets all owners ordered by last name, then first name
    pub async fn get_all(&self) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .order_by_asc(entity::owner::Column::LastName)
            .order_by_asc(entity::owner::Column::FirstName)
            .all(self.db)
            .await
    }

    /// Replaces all contact fields of an owner
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated owner
    /// - `Ok(None)`: Owner not found
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        params: UpdateOwnerParams,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        let Some(owner) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active = owner.into_active_model();
        active.first_name = ActiveValue::Set(params.fields.first_name);
        active.last_name = ActiveValue::Set(params.fields.last_name);
        active.address = ActiveValue::Set(params.fields.address);
        active.city = ActiveValue::Set(params.fields.city);
        active.telephone = ActiveValue::Set(params.fields.telephone);

        active.update(self.db).await.map(Some)
    }

    /// Gets one page of owners whose first name starts with `prefix`, ordered by ID
    ///
    /// The prefix match is case-sensitive and treats every character literally.
    ///
    /// # Arguments
    /// - `prefix`: First-name prefix to match
    /// - `after_id`: Only owners with a greater ID are returned; `None` starts from the first
    /// - `limit`: Maximum number of owners to return
    pub async fn find_page_by_first_name_prefix(
        &self,
        prefix: &str,
        after_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        let mut query = entity::prelude::Owner::find()
            .filter(starts_with(entity::owner::Column::FirstName, prefix));
        if let Some(after_id) = after_id {
            query = query.filter(entity::owner::Column::Id.gt(after_id));
        }

        query
            .order_by_asc(entity::owner::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Deletes an owner by ID, cascading to the owner's pets
    ///
    /// Deleting an owner that no longer exists succeeds.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Owner::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
