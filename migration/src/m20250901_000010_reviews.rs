use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000006_customers::Customers;

static FK_REVIEWS_CUSTOMER_ID: &str = "fk_reviews_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::Id))
                    .col(integer(Reviews::CustomerId))
                    .col(integer(Reviews::Rating))
                    .col(string_null(Reviews::Comment))
                    .col(timestamp(Reviews::ReviewDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEWS_CUSTOMER_ID)
                            .from(Reviews::Table, Reviews::CustomerId)
                            .to(Customers::Table, Customers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    CustomerId,
    Rating,
    Comment,
    ReviewDate,
}
