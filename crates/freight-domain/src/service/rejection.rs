//! Reasons a candidate job is discarded

use freight_types::JobType;
use thiserror::Error;

/// Internal control signal: the candidate is skipped and the caller may retry.
///
/// Never surfaced to consumers as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("no {job_type} destination within band")]
    NoDestinationFound { job_type: JobType },

    #[error("resolved distance {distance:?} km is missing or out of range")]
    DistanceOutOfRange { distance: Option<f64> },

    #[error("catalog has no {0} to draw from")]
    EmptyCatalog(&'static str),

    #[error("every job id in range has been issued")]
    IdsExhausted,
}
