//! Booking DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Booking;

/// Request to create a new booking. The diner id comes from the
/// `X-Caller-Id` header, not the body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    /// Chef to book
    pub chef_id: Uuid,
    /// Target day, `YYYY-MM-DD`
    pub day: String,
    /// Time of day, free-form (e.g. "19:00")
    #[validate(length(min = 1, max = 32))]
    pub time: String,
    /// Selected dishes
    pub dishes: Vec<String>,
    /// Number of persons
    pub party_size: u32,
    /// Agreed price
    pub price: Decimal,
    /// Optional free-text comment
    pub comment: Option<String>,
}

/// Request to move a booking through its lifecycle
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionRequest {
    /// Target status: Accepted, Rejected, Completed or Cancelled
    pub target: String,
}

/// Booking details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: Uuid,
    pub chef_id: Uuid,
    pub diner_id: Uuid,
    /// `YYYY-MM-DD`
    pub day: String,
    pub time: String,
    pub dishes: Vec<String>,
    pub party_size: u32,
    pub price: Decimal,
    pub comment: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            chef_id: b.chef_id,
            diner_id: b.diner_id,
            day: b.day.to_string(),
            time: b.time,
            dishes: b.dishes,
            party_size: b.party_size,
            price: b.price,
            comment: b.comment,
            status: b.status.as_str().to_string(),
            created_at: b.created_at.to_rfc3339(),
            updated_at: b.updated_at.to_rfc3339(),
        }
    }
}

/// Per-status booking counts for a listing
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct StatusCounts {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Ordered booking listing with grouped-by-status counts
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingDto>,
    pub total: usize,
    pub stats: StatusCounts,
}

/// Query parameters for booking listings
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ListBookingsParams {
    /// Whose bookings: "chef" or "diner"
    pub role: String,
    /// Owner id; must match the caller
    pub owner_id: Uuid,
    /// Optional status filter
    pub status: Option<String>,
    /// "asc" or "desc" (default) by target day
    pub sort: Option<String>,
}
