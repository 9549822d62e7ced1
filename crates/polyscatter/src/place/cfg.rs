//! Placement configuration.

use crate::error::PlaceError;

/// Budgets and seeding for a placement run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceCfg {
    /// Retries after the first attempt before giving up (total attempts = 1 + this).
    pub max_retries: u32,
    /// Cap on rejection-sampling draws for one anchor point.
    /// Only reached when the region covers a vanishing share of its box.
    pub max_point_draws: u64,
    /// Master seed; shape `i` draws from `ReplayToken { seed, index: i }`.
    pub seed: u64,
    /// Place shapes on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for PlaceCfg {
    fn default() -> Self {
        Self {
            max_retries: 1000,
            max_point_draws: 1_000_000,
            seed: 0,
            parallel: false,
        }
    }
}

impl PlaceCfg {
    pub fn validate(&self) -> Result<(), PlaceError> {
        if self.max_point_draws == 0 {
            return Err(PlaceError::invalid("max_point_draws must be > 0"));
        }
        Ok(())
    }

    #[inline]
    pub fn max_attempts(&self) -> u64 {
        u64::from(self.max_retries) + 1
    }
}
