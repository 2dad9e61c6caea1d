//! Tropical and sidereal lunar longitude from the truncated periodic series.
//!
//! The tropical longitude is the Moon's mean longitude L' plus the sum of
//! the principal sine terms of Meeus Table 47.A (amplitudes in 1e-6 deg,
//! arguments as integer combinations of D, M, M', F). The 22 terms kept
//! here bound the truncation error below ~0.06 deg, which moves a band
//! crossing by well under the one-minute search resolution budget.
//!
//! The sidereal longitude subtracts the ayanamsha and re-normalizes.

use crate::ayanamsha::ayanamsha_deg;
use crate::fundamental::{eccentricity_factor, fundamental_args};
use swati_time::Instant;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Principal longitude terms from Meeus Table 47.A.
///
/// Columns: [nD, nM, nM', nF, amplitude_1e6_deg]. Each term contributes
/// `amplitude * sin(nD*D + nM*M + nM'*M' + nF*F)`, scaled by the
/// eccentricity factor E once per power of M.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 22] = [
    // nD    nM    nM'   nF    amplitude (1e-6 deg)
    [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [ 2.0,  0.0,  0.0,  0.0,    658_314.0],
    [ 0.0,  0.0,  2.0,  0.0,    213_618.0],
    [ 0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [ 0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [ 2.0,  0.0, -2.0,  0.0,     58_793.0],
    [ 2.0, -1.0, -1.0,  0.0,     57_066.0],
    [ 2.0,  0.0,  1.0,  0.0,     53_322.0],
    [ 2.0, -1.0,  0.0,  0.0,     45_758.0],
    [ 0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [ 1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [ 0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [ 2.0,  0.0,  0.0, -2.0,     15_327.0],
    [ 0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [ 0.0,  0.0,  1.0, -2.0,     10_980.0],
    [ 4.0,  0.0, -1.0,  0.0,     10_675.0],
    [ 0.0,  0.0,  3.0,  0.0,     10_034.0],
    [ 4.0,  0.0, -2.0,  0.0,      8_548.0],
    [ 2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [ 2.0,  1.0,  0.0,  0.0,     -6_766.0],
    [ 1.0,  0.0, -1.0,  0.0,     -5_163.0],
];

/// Moon's tropical ecliptic longitude in degrees [0, 360).
pub fn tropical_longitude_deg(at: Instant) -> f64 {
    let t = at.julian_centuries();
    let args = fundamental_args(t);
    let e = eccentricity_factor(t);

    let d = args.d.to_radians();
    let m = args.m.to_radians();
    let m_prime = args.m_prime.to_radians();
    let f = args.f.to_radians();

    let mut sum_1e6 = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let angle = term[0] * d + term[1] * m + term[2] * m_prime + term[3] * f;
        let e_scale = match term[1].abs() as u32 {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum_1e6 += term[4] * e_scale * angle.sin();
    }

    normalize_360(args.l_prime + sum_1e6 * 1e-6)
}

/// Moon's sidereal ecliptic longitude in degrees [0, 360).
///
/// Tropical longitude minus the ayanamsha. The offset is small (~24 deg),
/// so two conditional corrections restore [0, 360).
pub fn sidereal_longitude_deg(at: Instant) -> f64 {
    let mut lon = tropical_longitude_deg(at) - ayanamsha_deg(at);
    if lon < 0.0 {
        lon += 360.0;
    }
    if lon >= 360.0 {
        lon -= 360.0;
    }
    lon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ayanamsha::ayanamsha_deg;
    use swati_time::{J2000_UNIX_MS, MS_PER_DAY};

    #[test]
    fn tropical_normalized_over_a_month() {
        // Probe every 6 hours across one sidereal month
        for i in 0..110 {
            let at = Instant::from_unix_ms(J2000_UNIX_MS + i * MS_PER_DAY / 4);
            let lon = tropical_longitude_deg(at);
            assert!((0.0..360.0).contains(&lon), "step {i}: lon = {lon}");
        }
    }

    #[test]
    fn sidereal_normalized_over_a_month() {
        for i in 0..110 {
            let at = Instant::from_unix_ms(J2000_UNIX_MS + i * MS_PER_DAY / 4);
            let lon = sidereal_longitude_deg(at);
            assert!((0.0..360.0).contains(&lon), "step {i}: lon = {lon}");
        }
    }

    #[test]
    fn sidereal_is_tropical_minus_ayanamsha() {
        let at = Instant::from_unix_ms(1_711_000_000_000);
        let sid = sidereal_longitude_deg(at);
        let expected = normalize_360(tropical_longitude_deg(at) - ayanamsha_deg(at));
        assert!((sid - expected).abs() < 1e-12, "sid = {sid}, expected = {expected}");
    }

    #[test]
    fn advances_about_13_deg_per_day() {
        let a = Instant::from_unix_ms(J2000_UNIX_MS);
        let b = a.offset_ms(MS_PER_DAY);
        let moved = normalize_360(tropical_longitude_deg(b) - tropical_longitude_deg(a));
        // mean 13.18 deg/day, varies ~11.8-15.4 with anomaly
        assert!(
            (11.0..16.0).contains(&moved),
            "daily motion = {moved} deg"
        );
    }

    #[test]
    fn full_circle_in_a_sidereal_month() {
        let a = Instant::from_unix_ms(J2000_UNIX_MS);
        let b = a.offset_ms((27.321_661 * MS_PER_DAY as f64) as i64);
        let drift = normalize_360(tropical_longitude_deg(b) - tropical_longitude_deg(a));
        // after one sidereal month the Moon is back within a few degrees
        let drift = if drift > 180.0 { drift - 360.0 } else { drift };
        assert!(drift.abs() < 5.0, "drift after one month = {drift} deg");
    }
}
