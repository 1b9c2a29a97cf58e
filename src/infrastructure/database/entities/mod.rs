//! SeaORM entities

pub mod booked_day;
pub mod booking;
pub mod chef;
