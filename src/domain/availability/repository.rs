//! Ledger repository interface
//!
//! `commit_day` and `release_day` are the write path for day occupancy and
//! must be mutually exclusive per chef. Implementations back `commit_day`
//! with a conditional insert (unique index, per-key lock) so that two
//! concurrent commits for the same `(chef, day)` cannot both succeed.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::ledger::AvailabilityLedger;
use crate::domain::DomainResult;

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Snapshot of a chef's committed days. May be slightly stale under
    /// concurrent writes; search tolerates that.
    async fn load(&self, chef_id: Uuid) -> DomainResult<AvailabilityLedger>;

    /// Atomically claim `day` for `booking_id`. Fails with `Conflict`
    /// (naming the holder) if the day is already committed.
    async fn commit_day(
        &self,
        chef_id: Uuid,
        day: NaiveDate,
        booking_id: Uuid,
    ) -> DomainResult<()>;

    /// Free `day`, which must be held by `booking_id`; `NotOwner` otherwise.
    async fn release_day(
        &self,
        chef_id: Uuid,
        day: NaiveDate,
        booking_id: Uuid,
    ) -> DomainResult<()>;
}
