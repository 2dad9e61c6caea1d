//! Error types for the transit search.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the period locator.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A scan exceeded its time budget without the band membership flipping.
    ///
    /// The Moon traverses the full circle in ~27.3 days, so a 30-day
    /// forward horizon is a correctness margin; hitting it means the
    /// longitude model and the band cannot meet. The locator never
    /// recovers from this internally — a synthesized period would corrupt
    /// every downstream consumer silently.
    Exhausted {
        /// The budget that was exceeded, in days.
        horizon_days: f64,
    },
    /// Invalid locate configuration.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted { horizon_days } => {
                write!(f, "search exhausted: no band crossing within {horizon_days} days")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {}
