//! Repository access for the domain layer
//!
//! `RepositoryProvider` gives unified access to all per-aggregate
//! repositories. Consumers request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let chef = repos.chefs().find_by_id(chef_id).await?;
//!     let ledger = repos.ledgers().load(chef_id).await?;
//! }
//! ```

use super::availability::LedgerRepository;
use super::booking::BookingRepository;
use super::chef::ChefRepository;

pub use crate::shared::errors::DomainResult;

/// Provides access to all domain repositories.
pub trait RepositoryProvider: Send + Sync {
    fn chefs(&self) -> &dyn ChefRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn ledgers(&self) -> &dyn LedgerRepository;
}
