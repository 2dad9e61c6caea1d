//! Lunar sidereal longitude approximation.
//!
//! This crate provides:
//! - Fundamental lunar/solar arguments as polynomials in Julian centuries
//! - Truncated periodic-series tropical longitude (Meeus Ch. 47 principal terms)
//! - Linear-in-time ayanamsha (precession offset) for the sidereal frame
//! - `LongitudeProvider`, the swappable ephemeris strategy consumed by the
//!   transit search
//!
//! All formulas are from published astronomical references (Meeus,
//! *Astronomical Algorithms* 2nd ed.); trigonometric evaluation is in
//! radians, stored and returned angles in degrees.

pub mod ayanamsha;
pub mod fundamental;
pub mod longitude;
pub mod provider;

pub use ayanamsha::{ANNUAL_PRECESSION_DEG, AYANAMSHA_J2000_DEG, ayanamsha_deg};
pub use fundamental::{FundamentalArgs, eccentricity_factor, fundamental_args};
pub use longitude::{normalize_360, sidereal_longitude_deg, tropical_longitude_deg};
pub use provider::{LongitudeProvider, MeanMotion, TruncatedSeries};
