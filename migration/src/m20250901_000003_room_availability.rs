use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000002_rooms::Rooms;

static FK_ROOM_AVAILABILITY_ROOM_ID: &str = "fk_room_availability_room_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomAvailability::Id))
                    .col(integer(RoomAvailability::RoomId))
                    .col(date(RoomAvailability::Date))
                    .col(boolean(RoomAvailability::IsAvailable).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROOM_AVAILABILITY_ROOM_ID)
                            .from(RoomAvailability::Table, RoomAvailability::RoomId)
                            .to(Rooms::Table, Rooms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAvailability::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RoomAvailability {
    Table,
    Id,
    RoomId,
    Date,
    IsAvailable,
}
