//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::availability::LedgerRepository;
use crate::domain::booking::BookingRepository;
use crate::domain::chef::ChefRepository;
use crate::domain::RepositoryProvider;

use super::booking_repository::SeaOrmBookingRepository;
use super::chef_repository::SeaOrmChefRepository;
use super::ledger_repository::SeaOrmLedgerRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    chefs: SeaOrmChefRepository,
    bookings: SeaOrmBookingRepository,
    ledgers: SeaOrmLedgerRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            chefs: SeaOrmChefRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            ledgers: SeaOrmLedgerRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn chefs(&self) -> &dyn ChefRepository {
        &self.chefs
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn ledgers(&self) -> &dyn LedgerRepository {
        &self.ledgers
    }
}
