//! Application services

pub mod availability;
pub mod booking;
pub mod transition;

pub use availability::AvailabilityService;
pub use booking::{BookingService, NewBooking};
pub use transition::StatusTransitionEngine;
