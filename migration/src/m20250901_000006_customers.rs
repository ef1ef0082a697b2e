use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(pk_auto(Customers::Id))
                    .col(string(Customers::FullName))
                    .col(string_uniq(Customers::Email))
                    .col(
                        ColumnDef::new(Customers::MobileNumber)
                            .string()
                            .unique_key(),
                    )
                    .col(string_null(Customers::Address))
                    .col(string_uniq(Customers::Username))
                    .col(string(Customers::Password))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customers {
    Table,
    Id,
    FullName,
    Email,
    MobileNumber,
    Address,
    Username,
    Password,
}
