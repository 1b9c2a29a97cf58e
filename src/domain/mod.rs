pub mod availability;
pub mod booking;
pub mod chef;
pub mod repositories;

// Re-export commonly used types
pub use availability::{AvailabilityLedger, LedgerRepository};
pub use booking::{Booking, BookingQuery, BookingRepository, BookingStatus, SortOrder};
pub use chef::{Chef, ChefRepository};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export the error type for convenience
pub use crate::shared::errors::DomainError;
