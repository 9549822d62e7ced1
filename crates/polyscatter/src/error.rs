//! Error type shared by the geometry adapter and the placement core.
//!
//! Only run-level problems are errors. A shape that exhausts its retry budget
//! is not an error: it is reported through `PlacementOutcome::contained`.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlaceError {
    /// Region has no polygons, non-finite coordinates, or zero area.
    #[error("degenerate region: {reason}")]
    DegenerateRegion { reason: String },
    /// Rejection sampling never hit the region (vanishing fill ratio of its box).
    #[error("no point inside the region after {draws} draws")]
    PointSamplingExhausted { draws: u64 },
    #[error("invalid placement config: {reason}")]
    InvalidConfig { reason: String },
    /// Shape has no centroid, so it cannot be recentered.
    #[error("degenerate shape at index {index}: {reason}")]
    DegenerateShape { index: usize, reason: String },
}

impl PlaceError {
    pub(crate) fn region(reason: impl Into<String>) -> Self {
        Self::DegenerateRegion {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn shape(index: usize, reason: impl Into<String>) -> Self {
        Self::DegenerateShape {
            index,
            reason: reason.into(),
        }
    }
}
