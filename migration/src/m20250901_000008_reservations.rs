use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250901_000002_rooms::Rooms, m20250901_000006_customers::Customers};

static FK_RESERVATIONS_CUSTOMER_ID: &str = "fk_reservations_customer_id";
static FK_RESERVATIONS_ROOM_ID: &str = "fk_reservations_room_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservations::Id))
                    .col(integer(Reservations::CustomerId))
                    .col(integer_null(Reservations::RoomId))
                    .col(date(Reservations::CheckIn))
                    .col(date(Reservations::CheckOut))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESERVATIONS_CUSTOMER_ID)
                            .from(Reservations::Table, Reservations::CustomerId)
                            .to(Customers::Table, Customers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESERVATIONS_ROOM_ID)
                            .from(Reservations::Table, Reservations::RoomId)
                            .to(Rooms::Table, Rooms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reservations {
    Table,
    Id,
    CustomerId,
    RoomId,
    CheckIn,
    CheckOut,
}
