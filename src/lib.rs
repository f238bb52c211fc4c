//! Scheduling and pricing resolution engine for bookable tours.
//!
//! A tour carries a departure schedule (a flexible date range, fixed
//! departures, or recurring patterns) and a pricing structure (named
//! options, optionally discounted). This crate answers, for an explicit
//! reference instant: which departures are active or next upcoming, whether
//! the tour is bookable at all, and what each pricing option really costs
//! once time-bounded discounts apply.
//!
//! The engine is a pure function library. It performs no I/O, never reads a
//! system clock, and holds no state across calls; the surrounding API and
//! persistence layers construct the value types, validate them at that
//! boundary, and serialize the derived views.

pub mod error;
pub mod pricing;
pub mod scheduling;

pub use error::{Result, ValidationError};
