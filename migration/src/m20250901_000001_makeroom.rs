use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Makeroom::Table)
                    .if_not_exists()
                    .col(pk_auto(Makeroom::Id))
                    .col(string(Makeroom::Title))
                    .col(string_null(Makeroom::Description))
                    .col(double(Makeroom::PricePerNight))
                    .col(integer_null(Makeroom::NumOfRooms))
                    .col(integer_null(Makeroom::AdultCapacity))
                    .col(integer_null(Makeroom::ChildCapacity))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Makeroom::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Makeroom {
    Table,
    Id,
    Title,
    Description,
    PricePerNight,
    NumOfRooms,
    AdultCapacity,
    ChildCapacity,
}
