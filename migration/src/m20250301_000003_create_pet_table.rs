use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_owner_table::Owner, m20250301_000002_create_pet_type_table::PetType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(string(Pet::Name))
                    .col(date_null(Pet::BirthDate))
                    .col(integer_null(Pet::TypeId))
                    .col(integer(Pet::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_owner_id")
                            .from(Pet::Table, Pet::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_type_id")
                            .from(Pet::Table, Pet::TypeId)
                            .to(PetType::Table, PetType::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pets_name")
                    .table(Pet::Table)
                    .col(Pet::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    #[sea_orm(iden = "pets")]
    Table,
    Id,
    Name,
    BirthDate,
    TypeId,
    OwnerId,
}
