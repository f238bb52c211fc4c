//! Schedule evaluation for tours.
//!
//! Recurrence-occurrence computation over departures and the availability
//! views derived from them.

pub mod availability;
pub mod models;
pub mod recurrence;

// Re-export commonly used items
pub use availability::{active_departures, has_available_departures, next_departure};
pub use models::{
    DateRange, Departure, RecurrencePattern, ScheduleCadence, ScheduleRecurrence, ScheduleType,
    TourSchedule,
};
pub use recurrence::next_occurrence;
