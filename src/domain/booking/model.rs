//! Booking domain entity

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Booking lifecycle status
///
/// Legal transitions:
/// `Pending -> {Accepted, Rejected}`, `Accepted -> {Completed, Cancelled}`.
/// `Rejected`, `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Awaiting the chef's decision; the day is NOT yet claimed
    Pending,
    /// Confirmed by the chef; the day is committed in the ledger
    Accepted,
    /// Declined by the chef (terminal)
    Rejected,
    /// Engagement took place; the day stays committed as history (terminal)
    Completed,
    /// Called off after acceptance; the day was released (terminal)
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Accepted" => Some(Self::Accepted),
            "Rejected" => Some(Self::Rejected),
            "Completed" => Some(Self::Completed),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether the edge `self -> target` is legal.
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Rejected)
                | (Self::Accepted, Self::Completed)
                | (Self::Accepted, Self::Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A requested engagement of a chef for one calendar day
#[derive(Debug, Clone)]
pub struct Booking {
    /// Unique booking ID
    pub id: Uuid,
    /// Chef being booked
    pub chef_id: Uuid,
    /// Diner who requested the booking
    pub diner_id: Uuid,
    /// Target calendar day (day granularity only)
    pub day: NaiveDate,
    /// Time of day, free-form (e.g. "19:00")
    pub time: String,
    /// Selected dishes, non-empty and ordered
    pub dishes: Vec<String>,
    /// Number of persons
    pub party_size: u32,
    /// Agreed price
    pub price: Decimal,
    /// Optional free-text comment
    pub comment: Option<String>,
    /// Current lifecycle status
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        chef_id: Uuid,
        diner_id: Uuid,
        day: NaiveDate,
        time: impl Into<String>,
        dishes: Vec<String>,
        party_size: u32,
        price: Decimal,
        comment: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            chef_id,
            diner_id,
            day,
            time: time.into(),
            dishes,
            party_size,
            price,
            comment,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `party_id` is one of the two parties to this booking.
    pub fn involves(&self, party_id: Uuid) -> bool {
        self.chef_id == party_id || self.diner_id == party_id
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            "19:00",
            vec!["Plov".to_string()],
            4,
            Decimal::new(15000, 2),
            None,
        )
    }

    #[test]
    fn new_booking_is_pending() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Pending);
        assert_eq!(b.created_at, b.updated_at);
    }

    #[test]
    fn pending_can_only_be_accepted_or_rejected() {
        let s = BookingStatus::Pending;
        assert!(s.can_transition_to(BookingStatus::Accepted));
        assert!(s.can_transition_to(BookingStatus::Rejected));
        assert!(!s.can_transition_to(BookingStatus::Completed));
        assert!(!s.can_transition_to(BookingStatus::Cancelled));
        assert!(!s.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn accepted_can_only_complete_or_cancel() {
        let s = BookingStatus::Accepted;
        assert!(s.can_transition_to(BookingStatus::Completed));
        assert!(s.can_transition_to(BookingStatus::Cancelled));
        assert!(!s.can_transition_to(BookingStatus::Pending));
        assert!(!s.can_transition_to(BookingStatus::Rejected));
    }

    #[test]
    fn terminal_states_never_transition() {
        for terminal in [
            BookingStatus::Rejected,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert!(terminal.is_terminal());
            for target in [
                BookingStatus::Pending,
                BookingStatus::Accepted,
                BookingStatus::Rejected,
                BookingStatus::Completed,
                BookingStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn no_state_can_return_to_pending() {
        for from in [
            BookingStatus::Accepted,
            BookingStatus::Rejected,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert!(!from.can_transition_to(BookingStatus::Pending));
        }
    }

    #[test]
    fn status_parse_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Accepted,
            BookingStatus::Rejected,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("Unknown"), None);
    }

    #[test]
    fn involves_matches_both_parties() {
        let b = sample_booking();
        assert!(b.involves(b.chef_id));
        assert!(b.involves(b.diner_id));
        assert!(!b.involves(Uuid::new_v4()));
    }
}
