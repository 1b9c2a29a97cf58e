//! Availability queries against a ledger
//!
//! Pure functions; no storage access. Range search is deliberately coarse:
//! a chef counts as available for `[start, end]` when ANY day in the
//! inclusive range is open, not when the whole range is free.

use chrono::NaiveDate;

use super::ledger::AvailabilityLedger;
use crate::shared::errors::{DomainError, DomainResult};

/// True iff `day` is open in the ledger.
pub fn is_available(ledger: &AvailabilityLedger, day: NaiveDate) -> bool {
    ledger.is_free(day)
}

/// True iff at least one day in the inclusive range `[start, end]` is open.
/// Fails with `InvalidRange` when `end < start`.
pub fn any_available_in_range(
    ledger: &AvailabilityLedger,
    start: NaiveDate,
    end: NaiveDate,
) -> DomainResult<bool> {
    if end < start {
        return Err(DomainError::InvalidRange { start, end });
    }
    // A range of N days with fewer than N commitments must have a hole,
    // but committed days outside the range don't count, so walk the days.
    let mut day = start;
    loop {
        if ledger.is_free(day) {
            return Ok(true);
        }
        if day == end {
            return Ok(false);
        }
        day = day.succ_opt().ok_or(DomainError::InvalidRange { start, end })?;
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn ledger_with(days: &[u32]) -> AvailabilityLedger {
        let mut ledger = AvailabilityLedger::new();
        for &d in days {
            ledger.commit(day(d), Uuid::new_v4()).unwrap();
        }
        ledger
    }

    #[test]
    fn is_available_delegates_to_ledger() {
        let ledger = ledger_with(&[1]);
        assert!(!is_available(&ledger, day(1)));
        assert!(is_available(&ledger, day(2)));
    }

    #[test]
    fn range_with_one_open_day_is_available() {
        // Only 2024-06-02 committed; [01, 03] still has open days
        let ledger = ledger_with(&[2]);
        assert!(any_available_in_range(&ledger, day(1), day(3)).unwrap());
    }

    #[test]
    fn fully_committed_range_is_unavailable() {
        let ledger = ledger_with(&[1, 2, 3]);
        assert!(!any_available_in_range(&ledger, day(1), day(3)).unwrap());
    }

    #[test]
    fn single_day_range_works() {
        let ledger = ledger_with(&[1]);
        assert!(!any_available_in_range(&ledger, day(1), day(1)).unwrap());
        assert!(any_available_in_range(&ledger, day(2), day(2)).unwrap());
    }

    #[test]
    fn commitments_outside_range_do_not_count() {
        let ledger = ledger_with(&[1, 5]);
        assert!(any_available_in_range(&ledger, day(2), day(4)).unwrap());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let ledger = AvailabilityLedger::new();
        let err = any_available_in_range(&ledger, day(3), day(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRange { .. }));
    }

    #[test]
    fn range_spanning_month_boundary() {
        let ledger = AvailabilityLedger::new();
        let start = NaiveDate::from_ymd_opt(2024, 6, 29).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        assert!(any_available_in_range(&ledger, start, end).unwrap());
    }
}
