//! Availability ledger
//!
//! The authoritative set of days a chef has committed to a booking. An entry
//! exists iff exactly one booking in `Accepted` (or, historically,
//! `Completed`) state owns that day. Only `commit` and `release` may mutate
//! the map; repositories persist it but never edit entries directly.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::shared::errors::{DomainError, DomainResult};

/// Per-chef committed-day ledger
#[derive(Debug, Clone, Default)]
pub struct AvailabilityLedger {
    /// Day -> owning booking id. At most one entry per day.
    committed: BTreeMap<NaiveDate, Uuid>,
}

impl AvailabilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted entries. Later duplicates for the
    /// same day are ignored; the store's unique index prevents them anyway.
    pub fn from_entries(entries: impl IntoIterator<Item = (NaiveDate, Uuid)>) -> Self {
        let mut ledger = Self::new();
        for (day, booking_id) in entries {
            ledger.committed.entry(day).or_insert(booking_id);
        }
        ledger
    }

    /// True iff no booking holds `day`.
    pub fn is_free(&self, day: NaiveDate) -> bool {
        !self.committed.contains_key(&day)
    }

    /// The booking holding `day`, if any.
    pub fn owner_of(&self, day: NaiveDate) -> Option<Uuid> {
        self.committed.get(&day).copied()
    }

    /// Claim `day` for `booking_id`. Fails with `Conflict` if the day is
    /// already committed, naming the holder.
    pub fn commit(&mut self, day: NaiveDate, booking_id: Uuid) -> DomainResult<()> {
        if let Some(&held_by) = self.committed.get(&day) {
            return Err(DomainError::Conflict { day, held_by });
        }
        self.committed.insert(day, booking_id);
        Ok(())
    }

    /// Free `day`, which must be held by `booking_id`. A mismatch means a
    /// stale caller and fails with `NotOwner`.
    pub fn release(&mut self, day: NaiveDate, booking_id: Uuid) -> DomainResult<()> {
        match self.committed.get(&day) {
            Some(&owner) if owner == booking_id => {
                self.committed.remove(&day);
                Ok(())
            }
            Some(&owner) => Err(DomainError::NotOwner {
                day,
                caller: booking_id,
                owner,
            }),
            None => Err(DomainError::NotOwner {
                day,
                caller: booking_id,
                owner: Uuid::nil(),
            }),
        }
    }

    /// All committed days with their owning bookings, ascending by day.
    pub fn entries(&self) -> impl Iterator<Item = (NaiveDate, Uuid)> + '_ {
        self.committed.iter().map(|(d, id)| (*d, *id))
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn fresh_ledger_is_free_everywhere() {
        let ledger = AvailabilityLedger::new();
        assert!(ledger.is_free(day(1)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn commit_claims_the_day() {
        let mut ledger = AvailabilityLedger::new();
        let id = Uuid::new_v4();
        ledger.commit(day(1), id).unwrap();
        assert!(!ledger.is_free(day(1)));
        assert_eq!(ledger.owner_of(day(1)), Some(id));
        assert!(ledger.is_free(day(2)));
    }

    #[test]
    fn double_commit_reports_the_holder() {
        let mut ledger = AvailabilityLedger::new();
        let first = Uuid::new_v4();
        ledger.commit(day(1), first).unwrap();

        let err = ledger.commit(day(1), Uuid::new_v4()).unwrap_err();
        match err {
            DomainError::Conflict { day: d, held_by } => {
                assert_eq!(d, day(1));
                assert_eq!(held_by, first);
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
        // Holder unchanged
        assert_eq!(ledger.owner_of(day(1)), Some(first));
    }

    #[test]
    fn release_frees_the_day_for_the_owner() {
        let mut ledger = AvailabilityLedger::new();
        let id = Uuid::new_v4();
        ledger.commit(day(1), id).unwrap();
        ledger.release(day(1), id).unwrap();
        assert!(ledger.is_free(day(1)));
    }

    #[test]
    fn release_by_non_owner_fails_and_keeps_entry() {
        let mut ledger = AvailabilityLedger::new();
        let owner = Uuid::new_v4();
        ledger.commit(day(1), owner).unwrap();

        let err = ledger.release(day(1), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DomainError::NotOwner { .. }));
        assert_eq!(ledger.owner_of(day(1)), Some(owner));
    }

    #[test]
    fn release_of_uncommitted_day_fails() {
        let mut ledger = AvailabilityLedger::new();
        let err = ledger.release(day(1), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DomainError::NotOwner { .. }));
    }

    #[test]
    fn entries_are_ordered_by_day() {
        let mut ledger = AvailabilityLedger::new();
        ledger.commit(day(3), Uuid::new_v4()).unwrap();
        ledger.commit(day(1), Uuid::new_v4()).unwrap();
        ledger.commit(day(2), Uuid::new_v4()).unwrap();

        let days: Vec<NaiveDate> = ledger.entries().map(|(d, _)| d).collect();
        assert_eq!(days, vec![day(1), day(2), day(3)]);
    }

    #[test]
    fn from_entries_keeps_first_duplicate() {
        let first = Uuid::new_v4();
        let ledger =
            AvailabilityLedger::from_entries([(day(1), first), (day(1), Uuid::new_v4())]);
        assert_eq!(ledger.owner_of(day(1)), Some(first));
        assert_eq!(ledger.len(), 1);
    }
}
