use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_auto(Owner::Id))
                    .col(string(Owner::FirstName))
                    .col(string(Owner::LastName))
                    .col(string(Owner::Address))
                    .col(string(Owner::City))
                    .col(string_len(Owner::Telephone, 12))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_owners_first_name")
                    .table(Owner::Table)
                    .col(Owner::FirstName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Owner {
    #[sea_orm(iden = "owners")]
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    City,
    Telephone,
}
