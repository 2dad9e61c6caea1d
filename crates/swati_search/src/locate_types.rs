//! Types for the period locator.

use swati_time::{Instant, MS_PER_DAY, MS_PER_MINUTE};

/// A maximal time interval during which the longitude stays inside a band.
///
/// `start` is the first instant inside the band at fine-step resolution;
/// `end` is the first instant outside it after the last instant known to be
/// inside. Invariant: `start <= end`. A `Period` is a pure computed result
/// owned by the caller; repeated `locate` calls with the same reference
/// produce bit-identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Entry instant (inside the band).
    pub start: Instant,
    /// Exit instant (first instant outside the band).
    pub end: Instant,
}

impl Period {
    /// Duration in milliseconds.
    pub const fn duration_ms(&self) -> i64 {
        self.end.delta_ms(self.start)
    }

    /// Whether an instant falls within `[start, end)`.
    pub fn contains(&self, at: Instant) -> bool {
        self.start <= at && at < self.end
    }
}

/// Configuration for the coarse-scan / fine-refine search.
///
/// The coarse step must stay well below the band's minimum dwell time
/// (band width / max lunar speed, ~22 hours for a 13.33-deg band) so no
/// crossing is skipped; the fine step sets the boundary resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateConfig {
    /// Coarse scan step in milliseconds (default 30 minutes).
    pub coarse_step_ms: i64,
    /// Fine refinement step in milliseconds (default 60 seconds).
    pub fine_step_ms: i64,
    /// Forward search horizon in milliseconds (default 30 days).
    ///
    /// Also bounds every other scan loop, so a pathological longitude
    /// source terminates with an error instead of spinning.
    pub horizon_ms: i64,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            coarse_step_ms: 30 * MS_PER_MINUTE,
            fine_step_ms: MS_PER_MINUTE,
            horizon_ms: 30 * MS_PER_DAY,
        }
    }
}

impl LocateConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.fine_step_ms <= 0 {
            return Err("fine_step_ms must be positive");
        }
        if self.coarse_step_ms < self.fine_step_ms {
            return Err("coarse_step_ms must be >= fine_step_ms");
        }
        if self.horizon_ms <= self.coarse_step_ms {
            return Err("horizon_ms must exceed coarse_step_ms");
        }
        Ok(())
    }

    /// Horizon in days, for error reporting.
    pub(crate) fn horizon_days(&self) -> f64 {
        self.horizon_ms as f64 / MS_PER_DAY as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let c = LocateConfig::default();
        assert_eq!(c.coarse_step_ms, 1_800_000);
        assert_eq!(c.fine_step_ms, 60_000);
        assert_eq!(c.horizon_ms, 2_592_000_000);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_steps() {
        let mut c = LocateConfig::default();
        c.fine_step_ms = 0;
        assert!(c.validate().is_err());

        let mut c = LocateConfig::default();
        c.coarse_step_ms = c.fine_step_ms - 1;
        assert!(c.validate().is_err());

        let mut c = LocateConfig::default();
        c.horizon_ms = c.coarse_step_ms;
        assert!(c.validate().is_err());
    }

    #[test]
    fn period_duration_and_contains() {
        let p = Period {
            start: Instant::from_unix_ms(1_000),
            end: Instant::from_unix_ms(5_000),
        };
        assert_eq!(p.duration_ms(), 4_000);
        assert!(p.contains(Instant::from_unix_ms(1_000)));
        assert!(p.contains(Instant::from_unix_ms(4_999)));
        assert!(!p.contains(Instant::from_unix_ms(5_000)));
        assert!(!p.contains(Instant::from_unix_ms(999)));
    }
}
