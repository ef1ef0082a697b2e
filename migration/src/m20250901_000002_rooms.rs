use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_makeroom::Makeroom;

static FK_ROOMS_MAKEROOM_ID: &str = "fk_rooms_makeroom_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys to an existing table, so they are
        // declared inline with the table.
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(pk_auto(Rooms::Id))
                    .col(integer(Rooms::MakeroomId))
                    .col(string(Rooms::RoomNumber))
                    .col(string(Rooms::Status).default("available"))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROOMS_MAKEROOM_ID)
                            .from(Rooms::Table, Rooms::MakeroomId)
                            .to(Makeroom::Table, Makeroom::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Rooms {
    Table,
    Id,
    MakeroomId,
    RoomNumber,
    Status,
}
