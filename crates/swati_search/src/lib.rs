//! Nakshatra transit window search.
//!
//! This crate provides:
//! - `Band`, a half-open angular interval on the ecliptic circle (with
//!   wraparound support)
//! - The 27 nakshatra divisions as band sources
//! - `locate`, the coarse-scan / fine-refine search that brackets the time
//!   window during which the Moon's sidereal longitude stays inside a band
//!
//! The search consumes any `swati_moon::LongitudeProvider`, so ephemeris
//! fidelity is a caller choice, not a structural one.

pub mod band;
pub mod error;
pub mod locate;
pub mod locate_types;
pub mod nakshatra;

pub use band::Band;
pub use error::SearchError;
pub use locate::locate;
pub use locate_types::{LocateConfig, Period};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra};
