//! Benchmark parameter types.

use std::fmt;

/// Parameters for a union/find benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct UnionBenchParams {
    /// Number of distinct elements touched by the workload.
    pub element_count: usize,
    /// Number of union operations applied.
    pub union_count: usize,
}

impl fmt::Display for UnionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},unions={}", self.element_count, self.union_count)
    }
}
