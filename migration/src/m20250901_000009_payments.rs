use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000008_reservations::Reservations;

static FK_PAYMENTS_RESERVATION_ID: &str = "fk_payments_reservation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::Id))
                    .col(integer(Payments::ReservationId))
                    .col(timestamp(Payments::PaymentDate))
                    .col(double(Payments::Amount))
                    .col(string_null(Payments::PaymentMethod))
                    .col(string_null(Payments::TransactionId))
                    .col(string_null(Payments::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PAYMENTS_RESERVATION_ID)
                            .from(Payments::Table, Payments::ReservationId)
                            .to(Reservations::Table, Reservations::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    Id,
    ReservationId,
    PaymentDate,
    Amount,
    PaymentMethod,
    TransactionId,
    Status,
}
