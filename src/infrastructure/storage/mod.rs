//! Storage backends that do not require a database

pub mod memory;

pub use memory::InMemoryRepositoryProvider;
