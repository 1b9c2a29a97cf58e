//! # Chefbook
//!
//! Availability and booking consistency engine for personal-chef
//! engagements: diners request a chef for a day, chefs accept or
//! reject, and an append-only per-chef ledger of committed days
//! guarantees no chef is ever double-booked.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the availability ledger and repository traits
//! - **application**: Booking creation, status transitions and availability queries
//! - **infrastructure**: Storage backends (in-memory, SeaORM/SQLite)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
