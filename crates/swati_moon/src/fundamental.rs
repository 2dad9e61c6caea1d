//! Fundamental lunar and solar arguments.
//!
//! Degree-valued polynomials in Julian centuries of the standard truncated
//! lunar theory (Meeus, *Astronomical Algorithms* 2nd ed., Ch. 47):
//! the Moon's mean longitude L', mean elongation D, the Sun's mean anomaly
//! M, the Moon's mean anomaly M', and the argument of latitude F.

use crate::longitude::normalize_360;

/// The five fundamental arguments at an epoch, in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArgs {
    /// Moon's mean longitude L'.
    pub l_prime: f64,
    /// Mean elongation of the Moon from the Sun, D.
    pub d: f64,
    /// Sun's mean anomaly M.
    pub m: f64,
    /// Moon's mean anomaly M'.
    pub m_prime: f64,
    /// Moon's argument of latitude F.
    pub f: f64,
}

/// Evaluate the fundamental arguments at `t` Julian centuries since J2000.0.
///
/// Each argument is an order-4 polynomial with coefficients from Meeus
/// Ch. 47; all results are normalized to [0, 360).
pub fn fundamental_args(t: f64) -> FundamentalArgs {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l_prime =
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    FundamentalArgs {
        l_prime: normalize_360(l_prime),
        d: normalize_360(d),
        m: normalize_360(m),
        m_prime: normalize_360(m_prime),
        f: normalize_360(f),
    }
}

/// Eccentricity correction factor E for terms involving the Sun's anomaly.
///
/// `E = 1 − 0.002516 T − 0.0000074 T²` (Meeus eq. 47.6); applied once per
/// power of M in a periodic term's argument.
pub fn eccentricity_factor(t: f64) -> f64 {
    1.0 - 0.002_516 * t - 0.000_007_4 * t * t
}
