//! Deterministic union workloads.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use crate::params::UnionBenchParams;

/// Errors raised while preparing a workload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    /// A workload needs at least one element to draw pairs from.
    #[error("element_count must be at least 1")]
    NoElements,
    /// Element ids are `u32`, so larger universes cannot be addressed.
    #[error("element_count {element_count} exceeds the u32 id space")]
    TooManyElements {
        /// Requested number of elements.
        element_count: usize,
    },
}

/// Draws `params.union_count` random pairs over `0..params.element_count`.
///
/// The same seed always yields the same pairs.
///
/// # Errors
/// Returns [`WorkloadError`] when the element count is zero or does not fit
/// in a `u32`.
pub fn random_pairs(params: UnionBenchParams, seed: u64) -> Result<Vec<(u32, u32)>, WorkloadError> {
    if params.element_count == 0 {
        return Err(WorkloadError::NoElements);
    }
    let upper = u32::try_from(params.element_count).map_err(|_| WorkloadError::TooManyElements {
        element_count: params.element_count,
    })?;
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..params.union_count)
        .map(|_| (rng.gen_range(0..upper), rng.gen_range(0..upper)))
        .collect())
}

/// Pairs linking `0..element_count` into one chain, the worst case for a
/// forest without compression.
///
/// # Errors
/// Returns [`WorkloadError::TooManyElements`] when the element count does not
/// fit in a `u32`.
pub fn chain_pairs(element_count: usize) -> Result<Vec<(u32, u32)>, WorkloadError> {
    let upper = u32::try_from(element_count)
        .map_err(|_| WorkloadError::TooManyElements { element_count })?;
    Ok((1..upper).map(|id| (id - 1, id)).collect())
}
