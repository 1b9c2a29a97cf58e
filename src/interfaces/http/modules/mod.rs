pub mod availability;
pub mod bookings;
pub mod chefs;
pub mod health;
