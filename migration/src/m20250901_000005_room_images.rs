use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_makeroom::Makeroom;

static FK_ROOM_IMAGES_MAKEROOM_ID: &str = "fk_room_images_makeroom_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomImages::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomImages::Id))
                    .col(integer_null(RoomImages::MakeroomId))
                    .col(string(RoomImages::ImagePath))
                    .col(boolean(RoomImages::IsThumbnail).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROOM_IMAGES_MAKEROOM_ID)
                            .from(RoomImages::Table, RoomImages::MakeroomId)
                            .to(Makeroom::Table, Makeroom::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomImages::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RoomImages {
    Table,
    Id,
    MakeroomId,
    ImagePath,
    IsThumbnail,
}
