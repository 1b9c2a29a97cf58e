//! Domain error taxonomy
//!
//! Every failure path in the service returns one of these variants; nothing
//! is silently swallowed. `Storage` is the only class eligible for transient
//! retry (see `shared::retry`).

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Malformed input, reported with the first violated field.
    #[error("Validation: {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// The day is already committed to another booking. Expected business
    /// condition, surfaced as a normal negative result.
    #[error("Day {day} is already booked by {held_by}")]
    Conflict { day: NaiveDate, held_by: Uuid },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Illegal state-machine edge.
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Ledger entry is owned by a different booking. Indicates a bug if
    /// triggered; callers log this at error severity.
    #[error("Day {day} is not owned by booking {caller} (owner: {owner})")]
    NotOwner {
        day: NaiveDate,
        caller: Uuid,
        owner: Uuid,
    },

    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_storage_is_transient() {
        assert!(DomainError::Storage("connection reset".into()).is_transient());
        assert!(!DomainError::Forbidden("nope".into()).is_transient());
        assert!(!DomainError::Validation {
            field: "dishes",
            message: "must not be empty".into()
        }
        .is_transient());
    }

    #[test]
    fn conflict_message_names_the_holder() {
        let held_by = Uuid::new_v4();
        let err = DomainError::Conflict {
            day: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            held_by,
        };
        let msg = err.to_string();
        assert!(msg.contains("2024-06-01"));
        assert!(msg.contains(&held_by.to_string()));
    }
}
