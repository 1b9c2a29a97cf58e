//! SeaORM implementation of BookingRepository

use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingQuery, BookingRepository, BookingStatus, SortOrder};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> DomainResult<Booking> {
    let dishes = serde_json::from_str(&m.dishes)
        .map_err(|e| DomainError::Storage(format!("corrupt dishes column: {}", e)))?;
    let price = Decimal::from_str(&m.price)
        .map_err(|e| DomainError::Storage(format!("corrupt price column: {}", e)))?;
    let status = BookingStatus::parse(&m.status)
        .ok_or_else(|| DomainError::Storage(format!("unknown booking status: {}", m.status)))?;
    Ok(Booking {
        id: m.id,
        chef_id: m.chef_id,
        diner_id: m.diner_id,
        day: m.day,
        time: m.time,
        dishes,
        party_size: m.party_size as u32,
        price,
        comment: m.comment,
        status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_to_active(b: Booking) -> DomainResult<booking::ActiveModel> {
    let dishes =
        serde_json::to_string(&b.dishes).map_err(|e| DomainError::Storage(e.to_string()))?;
    Ok(booking::ActiveModel {
        id: Set(b.id),
        chef_id: Set(b.chef_id),
        diner_id: Set(b.diner_id),
        day: Set(b.day),
        time: Set(b.time),
        dishes: Set(dishes),
        party_size: Set(b.party_size as i32),
        price: Set(b.price.to_string()),
        comment: Set(b.comment),
        status: Set(b.status.as_str().to_string()),
        created_at: Set(b.created_at),
        updated_at: Set(b.updated_at),
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn apply_query(
    mut select: sea_orm::Select<booking::Entity>,
    query: BookingQuery,
) -> sea_orm::Select<booking::Entity> {
    if let Some(status) = query.status {
        select = select.filter(booking::Column::Status.eq(status.as_str()));
    }
    match query.order {
        SortOrder::Ascending => select.order_by_asc(booking::Column::Day),
        SortOrder::Descending => select.order_by_desc(booking::Column::Day),
    }
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn save(&self, b: Booking) -> DomainResult<()> {
        debug!("Saving booking: {}", b.id);
        domain_to_active(b)?.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, b: Booking, expected_status: BookingStatus) -> DomainResult<()> {
        debug!("Updating booking: {}", b.id);

        // Conditional write: the row is touched only while its status still
        // matches what the caller read, so concurrent transitions of the
        // same booking resolve to exactly one winner.
        let result = booking::Entity::update_many()
            .set(domain_to_active(b.clone())?)
            .filter(booking::Column::Id.eq(b.id))
            .filter(booking::Column::Status.eq(expected_status.as_str()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            // Re-read to tell a missing row from a lost race
            return match booking::Entity::find_by_id(b.id)
                .one(&self.db)
                .await
                .map_err(db_err)?
            {
                None => Err(DomainError::NotFound {
                    entity: "Booking",
                    field: "id",
                    value: b.id.to_string(),
                }),
                Some(current) => Err(DomainError::InvalidTransition {
                    from: current.status,
                    to: b.status.to_string(),
                }),
            };
        }
        Ok(())
    }

    async fn list_for_chef(
        &self,
        chef_id: Uuid,
        query: BookingQuery,
    ) -> DomainResult<Vec<Booking>> {
        let select =
            booking::Entity::find().filter(booking::Column::ChefId.eq(chef_id));
        let models = apply_query(select, query)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn list_for_diner(
        &self,
        diner_id: Uuid,
        query: BookingQuery,
    ) -> DomainResult<Vec<Booking>> {
        let select =
            booking::Entity::find().filter(booking::Column::DinerId.eq(diner_id));
        let models = apply_query(select, query)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
