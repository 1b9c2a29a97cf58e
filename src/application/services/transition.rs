//! Booking lifecycle transitions
//!
//! Drives the state machine `Pending -> {Accepted, Rejected}`,
//! `Accepted -> {Completed, Cancelled}` and applies the ledger side effect
//! of each edge. The at-most-one-claim invariant for a (chef, day) pair is
//! enforced here, at the `Accepted` edge, by the atomic `commit_day`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{Booking, BookingStatus, DomainError, DomainResult, RepositoryProvider};

/// Applies lifecycle transitions with their ledger side effects
pub struct StatusTransitionEngine {
    repos: Arc<dyn RepositoryProvider>,
}

impl StatusTransitionEngine {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Move a booking to `target`, acting as `acting_party`.
    ///
    /// The acting party must be the booking's chef or diner; ids are assumed
    /// to be already authenticated upstream. Returns the updated booking.
    pub async fn transition(
        &self,
        booking_id: Uuid,
        target: BookingStatus,
        acting_party: Uuid,
    ) -> DomainResult<Booking> {
        let mut booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        if !booking.involves(acting_party) {
            return Err(DomainError::Forbidden(format!(
                "party {} is neither the chef nor the diner of booking {}",
                acting_party, booking_id
            )));
        }

        let from = booking.status;
        if !from.can_transition_to(target) {
            return Err(DomainError::InvalidTransition {
                from: from.to_string(),
                to: target.to_string(),
            });
        }

        match target {
            BookingStatus::Accepted => {
                // The invariant is enforced here: the conditional insert
                // admits exactly one Accepted claim per (chef, day). On
                // Conflict the booking stays Pending.
                self.repos
                    .ledgers()
                    .commit_day(booking.chef_id, booking.day, booking.id)
                    .await?;

                booking.status = target;
                booking.updated_at = Utc::now();
                if let Err(update_err) = self.repos.bookings().update(booking.clone(), from).await {
                    // Compensate: the day must not stay committed to a
                    // booking the store still records as Pending.
                    if let Err(release_err) = self
                        .repos
                        .ledgers()
                        .release_day(booking.chef_id, booking.day, booking.id)
                        .await
                    {
                        error!(
                            booking_id = %booking.id,
                            error = %release_err,
                            "Compensating release failed after update failure"
                        );
                    }
                    return Err(update_err);
                }
            }
            BookingStatus::Cancelled | BookingStatus::Rejected => {
                // Only an Accepted booking holds its day
                if from == BookingStatus::Accepted {
                    self.release_committed_day(&booking).await?;
                }
                booking.status = target;
                booking.updated_at = Utc::now();
                if let Err(update_err) = self.repos.bookings().update(booking.clone(), from).await {
                    // Compensate: put the released day back so the ledger
                    // keeps matching whatever state the store settled on.
                    if from == BookingStatus::Accepted {
                        if let Err(commit_err) = self
                            .repos
                            .ledgers()
                            .commit_day(booking.chef_id, booking.day, booking.id)
                            .await
                        {
                            error!(
                                booking_id = %booking.id,
                                error = %commit_err,
                                "Compensating re-commit failed after update failure"
                            );
                        }
                    }
                    return Err(update_err);
                }
            }
            BookingStatus::Completed => {
                // The day stays committed permanently as historical occupancy
                booking.status = target;
                booking.updated_at = Utc::now();
                self.repos.bookings().update(booking.clone(), from).await?;
            }
            BookingStatus::Pending => unreachable!("no edge leads back to Pending"),
        }

        info!(
            booking_id = %booking.id,
            from = %from,
            to = %target,
            acting_party = %acting_party,
            "Booking transitioned"
        );

        Ok(booking)
    }

    async fn release_committed_day(&self, booking: &Booking) -> DomainResult<()> {
        match self
            .repos
            .ledgers()
            .release_day(booking.chef_id, booking.day, booking.id)
            .await
        {
            Ok(()) => Ok(()),
            Err(err @ DomainError::NotOwner { .. }) => {
                // An Accepted booking must own its day; a mismatch means the
                // ledger and the store disagree.
                error!(
                    booking_id = %booking.id,
                    chef_id = %booking.chef_id,
                    day = %booking.day,
                    error = %err,
                    "Ledger/store mismatch on release"
                );
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
