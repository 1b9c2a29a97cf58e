//! Cross-cutting types shared by every layer

pub mod errors;
pub mod retry;

pub use errors::{DomainError, DomainResult};
