//! Availability DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query for a chef's availability over a date range (inclusive).
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Range start, `YYYY-MM-DD`
    pub start: String,
    /// Range end, `YYYY-MM-DD`
    pub end: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub chef_id: uuid::Uuid,
    pub start: String,
    pub end: String,
    /// True when at least one day in the range is uncommitted.
    pub available: bool,
}

/// Query for the available-chefs search. Either `date` alone, or
/// `start` and `end` together.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailableChefsQuery {
    /// Single day, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Range start, `YYYY-MM-DD`
    pub start: Option<String>,
    /// Range end, `YYYY-MM-DD`
    pub end: Option<String>,
}
