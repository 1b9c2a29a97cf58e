//! Booking repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Booking, BookingStatus};
use crate::domain::DomainResult;

/// Sort order for booking listings, applied to the target day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    /// Most recent target day first (listing default)
    #[default]
    Descending,
}

/// Filter and ordering for booking listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingQuery {
    /// Only bookings in this status, if set
    pub status: Option<BookingStatus>,
    pub order: SortOrder,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>>;

    /// Update an existing booking, guarded by the status the caller read.
    ///
    /// The write lands only while the stored status still equals
    /// `expected_status`, so two concurrent transitions of the same booking
    /// cannot both succeed. `NotFound` if the id is absent;
    /// `InvalidTransition` (from the actual stored status) when the guard
    /// fails.
    async fn update(&self, booking: Booking, expected_status: BookingStatus)
        -> DomainResult<()>;

    /// All bookings addressed to a chef, filtered and ordered by target day
    async fn list_for_chef(&self, chef_id: Uuid, query: BookingQuery)
        -> DomainResult<Vec<Booking>>;

    /// All bookings placed by a diner, filtered and ordered by target day
    async fn list_for_diner(
        &self,
        diner_id: Uuid,
        query: BookingQuery,
    ) -> DomainResult<Vec<Booking>>;
}
