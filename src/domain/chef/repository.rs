//! Chef repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Chef;
use crate::domain::DomainResult;

#[async_trait]
pub trait ChefRepository: Send + Sync {
    /// Save a new chef
    async fn save(&self, chef: Chef) -> DomainResult<()>;

    /// Find chef by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Chef>>;

    /// All registered chefs
    async fn find_all(&self) -> DomainResult<Vec<Chef>>;
}
