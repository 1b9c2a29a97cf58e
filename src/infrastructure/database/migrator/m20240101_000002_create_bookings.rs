//! Create bookings table
//!
//! Bookings are never deleted; terminal states are retained for history.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_chefs::Chefs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bookings::ChefId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::DinerId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::Day).date().not_null())
                    .col(ColumnDef::new(Bookings::Time).string().not_null())
                    .col(ColumnDef::new(Bookings::Dishes).string().not_null())
                    .col(ColumnDef::new(Bookings::PartySize).integer().not_null())
                    .col(ColumnDef::new(Bookings::Price).string().not_null())
                    .col(ColumnDef::new(Bookings::Comment).string())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_chef")
                            .from(Bookings::Table, Bookings::ChefId)
                            .to(Chefs::Table, Chefs::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_chef")
                    .table(Bookings::Table)
                    .col(Bookings::ChefId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_diner")
                    .table(Bookings::Table)
                    .col(Bookings::DinerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bookings {
    Table,
    Id,
    ChefId,
    DinerId,
    Day,
    Time,
    Dishes,
    PartySize,
    Price,
    Comment,
    Status,
    CreatedAt,
    UpdatedAt,
}
