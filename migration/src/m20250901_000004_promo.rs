use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_makeroom::Makeroom;

static FK_PROMO_MAKEROOM_ID: &str = "fk_promo_makeroom_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promo::Table)
                    .if_not_exists()
                    .col(pk_auto(Promo::Id))
                    .col(integer_null(Promo::MakeroomId))
                    .col(string_null(Promo::Title))
                    .col(string_null(Promo::Description))
                    .col(double_null(Promo::Discount))
                    .col(date_null(Promo::DateStart))
                    .col(date_null(Promo::DateEnd))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROMO_MAKEROOM_ID)
                            .from(Promo::Table, Promo::MakeroomId)
                            .to(Makeroom::Table, Makeroom::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Promo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Promo {
    Table,
    Id,
    MakeroomId,
    Title,
    Description,
    Discount,
    DateStart,
    DateEnd,
}
