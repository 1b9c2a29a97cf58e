//! Chef aggregate

pub mod model;
pub mod repository;

pub use model::Chef;
pub use repository::ChefRepository;
