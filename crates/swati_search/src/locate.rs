//! Period locator: coarse-scan / fine-refine bracketing of band transits.
//!
//! Given a longitude provider and a band, `locate` finds the maximal time
//! window around (or next after) a reference instant during which the
//! longitude stays inside the band.
//!
//! A single fine-grained linear scan over a multi-day horizon would burn
//! millions of series evaluations; instead a coarse step — kept below the
//! band's minimum dwell time so no transit is skipped — brackets each
//! crossing, and a fine step resolves it to the configured resolution.
//! All four scan directions (backward-into, forward-into, forward-out,
//! backward-out) are the one `scan` helper with different polarity and
//! step sign.

use crate::band::Band;
use crate::error::SearchError;
use crate::locate_types::{LocateConfig, Period};
use swati_moon::LongitudeProvider;
use swati_time::Instant;

/// Step from `from` in `step_ms` increments while band membership equals
/// `while_inside`; returns the first probe where it flips.
///
/// Every scan is bounded by the configured horizon so a longitude source
/// that never flips terminates with `Exhausted` instead of spinning.
fn scan<P: LongitudeProvider>(
    provider: &P,
    band: &Band,
    from: Instant,
    step_ms: i64,
    while_inside: bool,
    config: &LocateConfig,
) -> Result<Instant, SearchError> {
    let mut t = from;
    while band.contains(provider.sidereal_longitude_deg(t)) == while_inside {
        t = t.offset_ms(step_ms);
        if t.delta_ms(from).abs() > config.horizon_ms {
            return Err(SearchError::Exhausted {
                horizon_days: config.horizon_days(),
            });
        }
    }
    Ok(t)
}

/// Locate the band transit window enclosing `reference`, or the next one.
///
/// If `reference` is inside the band, the enclosing window is returned;
/// otherwise the forward coarse scan (bounded by the horizon) finds the
/// next entry. `start` is the first fine-step instant inside the band;
/// `end` is the first instant outside it after the last instant known to
/// be inside. The asymmetry between the two boundaries is intentional
/// (see DESIGN.md) and must not be symmetrized: downstream consumers key
/// idempotency on these exact values.
pub fn locate<P: LongitudeProvider>(
    provider: &P,
    band: &Band,
    reference: Instant,
    config: &LocateConfig,
) -> Result<Period, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let inside = band.contains(provider.sidereal_longitude_deg(reference));

    let (start, exit_scan_origin) = if inside {
        // backward coarse out of the band, then forward fine back in
        let exited = scan(provider, band, reference, -config.coarse_step_ms, true, config)?;
        let start = scan(provider, band, exited, config.fine_step_ms, false, config)?;
        (start, reference)
    } else {
        // forward coarse into the band, then backward fine to the entry
        let entered = scan(provider, band, reference, config.coarse_step_ms, false, config)?;
        let exited = scan(provider, band, entered, -config.fine_step_ms, true, config)?;
        let start = exited.offset_ms(config.fine_step_ms);
        (start, start)
    };

    // forward coarse out of the band, then backward fine to the last
    // instant inside; end is one fine step past it (first instant outside)
    let exited = scan(
        provider,
        band,
        exit_scan_origin,
        config.coarse_step_ms,
        true,
        config,
    )?;
    let last_inside = scan(provider, band, exited, -config.fine_step_ms, false, config)?;
    let end = last_inside.offset_ms(config.fine_step_ms);

    Ok(Period { start, end })
}
