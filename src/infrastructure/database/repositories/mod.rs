//! SeaORM repository implementations

pub mod booking_repository;
pub mod chef_repository;
pub mod ledger_repository;
pub mod repository_provider;

pub use booking_repository::SeaOrmBookingRepository;
pub use chef_repository::SeaOrmChefRepository;
pub use ledger_repository::SeaOrmLedgerRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
