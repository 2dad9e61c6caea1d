//! Swappable lunar longitude strategies.
//!
//! The transit search only needs "sidereal longitude at an instant", so the
//! ephemeris is a strategy trait: the truncated periodic series is the
//! default, and a single-term mean-motion model is available as an explicit
//! low-fidelity fallback. A high-fidelity external ephemeris can slot in
//! behind the same trait without touching the search.

use crate::ayanamsha::ayanamsha_deg;
use crate::longitude::{normalize_360, sidereal_longitude_deg};
use swati_time::Instant;

/// A source of the Moon's sidereal ecliptic longitude.
///
/// Implementations must be pure functions of the instant and must return
/// values normalized to [0, 360).
pub trait LongitudeProvider {
    /// Moon's sidereal ecliptic longitude in degrees [0, 360).
    fn sidereal_longitude_deg(&self, at: Instant) -> f64;
}

/// Default provider: truncated periodic series (Meeus Ch. 47 principal
/// terms) plus linear ayanamsha.
///
/// Boundary crossings computed from this model are good to a fraction of a
/// minute of time against a full-series ephemeris.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatedSeries;

impl LongitudeProvider for TruncatedSeries {
    fn sidereal_longitude_deg(&self, at: Instant) -> f64 {
        sidereal_longitude_deg(at)
    }
}

/// Low-fidelity fallback: the mean-motion term of L' only, no periodic
/// corrections.
///
/// The omitted corrections reach ±7 deg of longitude, which shifts band
/// crossings by tens of minutes. Selecting this provider is a calibration
/// choice the caller makes explicitly; it is never substituted silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotion;

/// L' linear coefficient converted from deg/century to deg/day.
const MEAN_MOTION_DEG_PER_DAY: f64 = 481_267.881_234_21 / 36_525.0;

/// L' constant term at J2000.0.
const MEAN_LONGITUDE_J2000_DEG: f64 = 218.316_447_7;

impl LongitudeProvider for MeanMotion {
    fn sidereal_longitude_deg(&self, at: Instant) -> f64 {
        let days = at.julian_centuries() * 36_525.0;
        let tropical = normalize_360(MEAN_LONGITUDE_J2000_DEG + MEAN_MOTION_DEG_PER_DAY * days);
        let mut lon = tropical - ayanamsha_deg(at);
        if lon < 0.0 {
            lon += 360.0;
        }
        if lon >= 360.0 {
            lon -= 360.0;
        }
        lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swati_time::{J2000_UNIX_MS, MS_PER_DAY};

    #[test]
    fn both_providers_normalized() {
        let series = TruncatedSeries;
        let mean = MeanMotion;
        for i in 0..60 {
            let at = Instant::from_unix_ms(J2000_UNIX_MS + i * MS_PER_DAY / 2);
            let a = series.sidereal_longitude_deg(at);
            let b = mean.sidereal_longitude_deg(at);
            assert!((0.0..360.0).contains(&a), "series at step {i}: {a}");
            assert!((0.0..360.0).contains(&b), "mean at step {i}: {b}");
        }
    }

    #[test]
    fn providers_agree_within_series_amplitude() {
        // The periodic corrections sum to at most ~7.5 deg
        let series = TruncatedSeries;
        let mean = MeanMotion;
        for i in 0..60 {
            let at = Instant::from_unix_ms(J2000_UNIX_MS + i * MS_PER_DAY / 2);
            let mut diff = series.sidereal_longitude_deg(at) - mean.sidereal_longitude_deg(at);
            if diff > 180.0 {
                diff -= 360.0;
            }
            if diff < -180.0 {
                diff += 360.0;
            }
            assert!(diff.abs() < 9.0, "step {i}: providers differ by {diff} deg");
        }
    }

    #[test]
    fn provider_is_pure() {
        let series = TruncatedSeries;
        let at = Instant::from_unix_ms(1_711_000_000_000);
        let a = series.sidereal_longitude_deg(at);
        let b = series.sidereal_longitude_deg(at);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
