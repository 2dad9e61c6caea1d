//! Time representation for the Swati transit engine.
//!
//! This crate provides:
//! - `Instant`, an absolute point in time as signed milliseconds since the
//!   Unix epoch (UTC-equivalent, no timezone semantics)
//! - Julian Date conversion (proleptic Gregorian calendar)
//! - `UtcTime`, a calendar date/time with sub-second precision
//!
//! All computation downstream is a pure function of `Instant`; the calendar
//! type exists only for parsing and display at the outer surface.

pub mod instant;
pub mod julian;
pub mod utc_time;

pub use instant::{Instant, J2000_JD, J2000_UNIX_MS, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
pub use julian::{calendar_to_jd, jd_to_calendar};
pub use utc_time::UtcTime;
