//! Absolute instants as signed milliseconds since the Unix epoch.
//!
//! Millisecond integer arithmetic keeps the search stepping exact: repeated
//! runs over the same inputs land on identical probe instants, so results
//! are reproducible bit-for-bit.

/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Unix milliseconds of the J2000.0 epoch (2000-01-01T12:00:00 UTC).
pub const J2000_UNIX_MS: i64 = 946_728_000_000;

/// Days per Julian year.
const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days per Julian century.
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// An absolute point in time: signed milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    ms: i64,
}

impl Instant {
    /// Construct from Unix milliseconds.
    pub const fn from_unix_ms(ms: i64) -> Self {
        Self { ms }
    }

    /// Unix milliseconds.
    pub const fn unix_ms(self) -> i64 {
        self.ms
    }

    /// Julian Date (UTC-equivalent).
    pub fn to_jd(self) -> f64 {
        self.ms as f64 / MS_PER_DAY as f64 + UNIX_EPOCH_JD
    }

    /// Construct from a Julian Date, rounding to the nearest millisecond.
    pub fn from_jd(jd: f64) -> Self {
        Self {
            ms: ((jd - UNIX_EPOCH_JD) * MS_PER_DAY as f64).round() as i64,
        }
    }

    /// Julian centuries since J2000.0.
    pub fn julian_centuries(self) -> f64 {
        (self.to_jd() - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian years since J2000.0.
    pub fn years_since_j2000(self) -> f64 {
        (self.ms - J2000_UNIX_MS) as f64 / (MS_PER_DAY as f64 * DAYS_PER_JULIAN_YEAR)
    }

    /// This instant shifted by a signed millisecond delta.
    pub const fn offset_ms(self, delta_ms: i64) -> Self {
        Self {
            ms: self.ms + delta_ms,
        }
    }

    /// Signed millisecond difference `self - other`.
    pub const fn delta_ms(self, other: Self) -> i64 {
        self.ms - other.ms
    }
}
