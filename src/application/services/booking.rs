//! Booking creation service

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::availability;
use crate::domain::{Booking, DomainError, DomainResult, RepositoryProvider};

/// Validated request to create a booking.
///
/// DTO parsing already guarantees well-formed dates and uuids; field-level
/// business rules are enforced once here, not re-checked downstream.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub chef_id: Uuid,
    pub diner_id: Uuid,
    pub day: NaiveDate,
    pub time: String,
    pub dishes: Vec<String>,
    pub party_size: u32,
    pub price: Decimal,
    pub comment: Option<String>,
}

/// Orchestrates creation of new bookings
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a booking in `Pending` state.
    ///
    /// The target day is only checked for availability here, not claimed;
    /// day occupancy is committed when the chef accepts (see
    /// `StatusTransitionEngine`). Several diners can therefore hold Pending
    /// bookings for the same day, and acceptance is first-come-first-served.
    pub async fn create_booking(&self, request: NewBooking) -> DomainResult<Booking> {
        validate(&request)?;

        let chef = self
            .repos
            .chefs()
            .find_by_id(request.chef_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Chef",
                field: "id",
                value: request.chef_id.to_string(),
            })?;

        let ledger = self.repos.ledgers().load(chef.id).await?;
        if !availability::is_available(&ledger, request.day) {
            // owner_of is Some whenever is_available is false
            let held_by = ledger.owner_of(request.day).unwrap_or_default();
            return Err(DomainError::Conflict {
                day: request.day,
                held_by,
            });
        }

        let booking = Booking::new(
            chef.id,
            request.diner_id,
            request.day,
            request.time,
            request.dishes,
            request.party_size,
            request.price,
            request.comment,
        );
        self.repos.bookings().save(booking.clone()).await?;

        info!(
            booking_id = %booking.id,
            chef_id = %booking.chef_id,
            day = %booking.day,
            "Booking created"
        );

        Ok(booking)
    }
}

/// Field validation, reporting the first violated field.
fn validate(request: &NewBooking) -> DomainResult<()> {
    if request.dishes.is_empty() {
        return Err(DomainError::Validation {
            field: "dishes",
            message: "at least one dish must be selected".to_string(),
        });
    }
    if request.party_size == 0 {
        return Err(DomainError::Validation {
            field: "party_size",
            message: "must be a positive integer".to_string(),
        });
    }
    if request.price < Decimal::ZERO {
        return Err(DomainError::Validation {
            field: "price",
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
