//! SeaORM implementation of LedgerRepository
//!
//! `commit_day` leans on the UNIQUE index over (chef_id, day): the insert
//! either lands or violates the index, so no row-level locking is needed.
//! When the insert loses, the existing row is re-read to name the holder.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet,
    QueryFilter, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::domain::availability::{AvailabilityLedger, LedgerRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booked_day;

pub struct SeaOrmLedgerRepository {
    db: DatabaseConnection,
}

impl SeaOrmLedgerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entry(
        &self,
        chef_id: Uuid,
        day: NaiveDate,
    ) -> DomainResult<Option<booked_day::Model>> {
        booked_day::Entity::find()
            .filter(booked_day::Column::ChefId.eq(chef_id))
            .filter(booked_day::Column::Day.eq(day))
            .one(&self.db)
            .await
            .map_err(db_err)
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl LedgerRepository for SeaOrmLedgerRepository {
    async fn load(&self, chef_id: Uuid) -> DomainResult<AvailabilityLedger> {
        let models = booked_day::Entity::find()
            .filter(booked_day::Column::ChefId.eq(chef_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(AvailabilityLedger::from_entries(
            models.into_iter().map(|m| (m.day, m.booking_id)),
        ))
    }

    async fn commit_day(
        &self,
        chef_id: Uuid,
        day: NaiveDate,
        booking_id: Uuid,
    ) -> DomainResult<()> {
        debug!("Committing day {} for chef {}", day, chef_id);

        let model = booked_day::ActiveModel {
            id: NotSet,
            chef_id: Set(chef_id),
            day: Set(day),
            booking_id: Set(booking_id),
            created_at: Set(Utc::now()),
        };

        match model.insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(insert_err) => {
                // Distinguish "lost the race" from a real storage fault by
                // re-reading the row the unique index protected.
                match self.find_entry(chef_id, day).await? {
                    Some(existing) => Err(DomainError::Conflict {
                        day,
                        held_by: existing.booking_id,
                    }),
                    None => Err(db_err(insert_err)),
                }
            }
        }
    }

    async fn release_day(
        &self,
        chef_id: Uuid,
        day: NaiveDate,
        booking_id: Uuid,
    ) -> DomainResult<()> {
        debug!("Releasing day {} for chef {}", day, chef_id);

        let Some(entry) = self.find_entry(chef_id, day).await? else {
            return Err(DomainError::NotOwner {
                day,
                caller: booking_id,
                owner: Uuid::nil(),
            });
        };
        if entry.booking_id != booking_id {
            return Err(DomainError::NotOwner {
                day,
                caller: booking_id,
                owner: entry.booking_id,
            });
        }

        entry.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
