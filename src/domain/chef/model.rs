//! Chef domain entity
//!
//! Deliberately minimal: the booking engine only needs to resolve a chef and
//! surface enough profile to render search results. Full profile/catalog
//! CRUD lives in a separate system.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A chef offering per-day engagements
#[derive(Debug, Clone)]
pub struct Chef {
    /// Unique chef ID
    pub id: Uuid,
    pub display_name: String,
    /// Cuisine specialties, free-form
    pub specialties: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Chef {
    pub fn new(display_name: impl Into<String>, specialties: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            specialties,
            created_at: Utc::now(),
        }
    }
}
