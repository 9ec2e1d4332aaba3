use sea_orm_migration::{prelude::*, schema::*};

/// Pet types every clinic starts with.
const DEFAULT_PET_TYPES: [&str; 6] = ["cat", "dog", "lizard", "snake", "bird", "hamster"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetType::Table)
                    .if_not_exists()
                    .col(pk_auto(PetType::Id))
                    .col(string_uniq(PetType::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(PetType::Table)
            .columns([PetType::Name]);
        for name in DEFAULT_PET_TYPES {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PetType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PetType {
    #[sea_orm(iden = "pet_types")]
    Table,
    Id,
    Name,
}
