//! Create booked_days table (the availability ledger)
//!
//! The unique index on (chef_id, day) is what makes `commit_day` atomic:
//! two concurrent inserts for the same pair cannot both succeed.

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
                    .table(BookedDays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookedDays::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BookedDays::ChefId).uuid().not_null())
                    .col(ColumnDef::new(BookedDays::Day).date().not_null())
                    .col(ColumnDef::new(BookedDays::BookingId).uuid().not_null())
                    .col(
                        ColumnDef::new(BookedDays::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_days_chef")
                            .from(BookedDays::Table, BookedDays::ChefId)
                            .to(Chefs::Table, Chefs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booked_days_chef_day")
                    .table(BookedDays::Table)
                    .col(BookedDays::ChefId)
                    .col(BookedDays::Day)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookedDays::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BookedDays {
    Table,
    Id,
    ChefId,
    Day,
    BookingId,
    CreatedAt,
}
