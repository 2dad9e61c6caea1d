//! Ayanamsha: the angular offset between the tropical and sidereal zodiacs.
//!
//! As the equinox precesses westward the ayanamsha grows; over the spans
//! this engine cares about (decades around the present) a linear model in
//! time is accurate to well under an arcminute, far below the one-minute
//! time resolution of the transit search.
//!
//! The reference value anchors the sidereal zodiac at J2000.0
//! (2000-01-01T12:00:00 UTC); the annual rate is the general precession in
//! longitude, 50.29 arcseconds per Julian year.

use swati_time::Instant;

/// Ayanamsha at the J2000.0 epoch, in degrees.
pub const AYANAMSHA_J2000_DEG: f64 = 23.85575;

/// Annual precession rate in degrees per Julian year (50.29 arcsec/yr).
pub const ANNUAL_PRECESSION_DEG: f64 = 50.29 / 3600.0;

/// Ayanamsha in degrees at a given instant.
///
/// Not normalized: the value stays near 24 deg for any realistic epoch, so
/// callers subtract it directly from a tropical longitude.
pub fn ayanamsha_deg(at: Instant) -> f64 {
    AYANAMSHA_J2000_DEG + at.years_since_j2000() * ANNUAL_PRECESSION_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use swati_time::{J2000_UNIX_MS, MS_PER_DAY};

    #[test]
    fn exact_at_j2000() {
        let val = ayanamsha_deg(Instant::from_unix_ms(J2000_UNIX_MS));
        assert!(
            (val - AYANAMSHA_J2000_DEG).abs() < 1e-15,
            "ayanamsha at J2000 = {val}"
        );
    }

    #[test]
    fn one_year_drift() {
        let year_ms = (365.25 * MS_PER_DAY as f64) as i64;
        let at_0 = ayanamsha_deg(Instant::from_unix_ms(J2000_UNIX_MS));
        let at_1 = ayanamsha_deg(Instant::from_unix_ms(J2000_UNIX_MS + year_ms));
        let diff = at_1 - at_0;
        assert!(
            (diff - ANNUAL_PRECESSION_DEG).abs() < 1e-12,
            "one year drift = {diff}"
        );
    }

    #[test]
    fn decreases_for_past_epochs() {
        let at_epoch = ayanamsha_deg(Instant::from_unix_ms(J2000_UNIX_MS));
        let at_past = ayanamsha_deg(Instant::from_unix_ms(0));
        assert!(at_past < at_epoch, "ayanamsha should decrease going back");
    }

    #[test]
    fn near_24_deg_in_2024() {
        // ~24 years after J2000: 23.85575 + 24 * 0.013969 ≈ 24.19
        let ms = J2000_UNIX_MS + (24.0 * 365.25 * MS_PER_DAY as f64) as i64;
        let val = ayanamsha_deg(Instant::from_unix_ms(ms));
        assert!((val - 24.19).abs() < 0.01, "ayanamsha in 2024 = {val}");
    }
}
