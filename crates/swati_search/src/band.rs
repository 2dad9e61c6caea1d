//! Half-open angular bands on the 0-360 ecliptic circle.

use swati_moon::normalize_360;

/// A fixed half-open interval `[start_deg, end_deg)` of ecliptic longitude.
///
/// The lower bound is inclusive, the upper bound exclusive; the tie-break
/// at exact boundary longitudes is part of the contract and must not
/// change, or period boundaries stop being reproducible.
///
/// A band whose normalized start exceeds its end wraps through 0/360
/// (e.g. Revati-to-Ashwini spans).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    start_deg: f64,
    end_deg: f64,
}

impl Band {
    /// Construct a band; both bounds are normalized to [0, 360).
    pub fn new(start_deg: f64, end_deg: f64) -> Self {
        Self {
            start_deg: normalize_360(start_deg),
            end_deg: normalize_360(end_deg),
        }
    }

    /// Inclusive lower bound in degrees [0, 360).
    pub fn start_deg(&self) -> f64 {
        self.start_deg
    }

    /// Exclusive upper bound in degrees [0, 360).
    pub fn end_deg(&self) -> f64 {
        self.end_deg
    }

    /// Whether the band wraps through the 0/360 seam.
    pub fn wraps(&self) -> bool {
        self.start_deg > self.end_deg
    }

    /// Angular width in degrees.
    pub fn width_deg(&self) -> f64 {
        if self.wraps() {
            360.0 - self.start_deg + self.end_deg
        } else {
            self.end_deg - self.start_deg
        }
    }

    /// Half-open membership test: `lon ∈ [start, end)`.
    pub fn contains(&self, lon_deg: f64) -> bool {
        let lon = normalize_360(lon_deg);
        if self.wraps() {
            lon >= self.start_deg || lon < self.end_deg
        } else {
            lon >= self.start_deg && lon < self.end_deg
        }
    }
}
