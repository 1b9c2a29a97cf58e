//! SeaORM implementation of ChefRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::debug;
use uuid::Uuid;

use crate::domain::chef::{Chef, ChefRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::chef;

pub struct SeaOrmChefRepository {
    db: DatabaseConnection,
}

impl SeaOrmChefRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: chef::Model) -> DomainResult<Chef> {
    let specialties = serde_json::from_str(&m.specialties)
        .map_err(|e| DomainError::Storage(format!("corrupt specialties column: {}", e)))?;
    Ok(Chef {
        id: m.id,
        display_name: m.display_name,
        specialties,
        created_at: m.created_at,
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── ChefRepository impl ─────────────────────────────────────────

#[async_trait]
impl ChefRepository for SeaOrmChefRepository {
    async fn save(&self, c: Chef) -> DomainResult<()> {
        debug!("Saving chef: {}", c.id);

        let specialties = serde_json::to_string(&c.specialties)
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        let model = chef::ActiveModel {
            id: Set(c.id),
            display_name: Set(c.display_name),
            specialties: Set(specialties),
            created_at: Set(c.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Chef>> {
        let model = chef::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Chef>> {
        let models = chef::Entity::find().all(&self.db).await.map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
