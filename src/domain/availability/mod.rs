//! Availability: the committed-day ledger and queries over it

pub mod checker;
pub mod ledger;
pub mod repository;

pub use checker::{any_available_in_range, is_available};
pub use ledger::AvailabilityLedger;
pub use repository::LedgerRepository;
