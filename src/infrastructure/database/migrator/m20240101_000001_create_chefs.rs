//! Create chefs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chefs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Chefs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Chefs::DisplayName).string().not_null())
                    .col(
                        ColumnDef::new(Chefs::Specialties)
                            .string()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Chefs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chefs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Chefs {
    Table,
    Id,
    DisplayName,
    Specialties,
    CreatedAt,
}
