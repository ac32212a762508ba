use thiserror::Error;

use crate::costing::TravelMode;

/// Failures building a costing model.
///
/// Construction is the only fallible boundary of this crate: a record
/// of the wrong shape fails here, while out-of-range values are
/// saturated silently. Every contract operation of a built model is
/// total and error-free.
#[derive(Error, Debug)]
pub enum CostingError {
    /// The supplied configuration record had the wrong shape.
    #[error("malformed costing configuration: {0}")]
    Configuration(#[from] serde_json::Error),

    /// No costing model is registered for the requested mode.
    #[error("no costing model registered for travel mode {0}")]
    UnsupportedMode(TravelMode),
}
