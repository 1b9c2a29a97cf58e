//! Chef DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Chef;

/// Request to register a chef
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChefRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    /// Cuisine specialties, free-form
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Chef details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ChefDto {
    pub id: Uuid,
    pub display_name: String,
    pub specialties: Vec<String>,
    pub created_at: String,
}

impl From<Chef> for ChefDto {
    fn from(c: Chef) -> Self {
        Self {
            id: c.id,
            display_name: c.display_name,
            specialties: c.specialties,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}
