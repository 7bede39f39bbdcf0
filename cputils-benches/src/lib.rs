//! Benchmark support crate for cputils.
//!
//! Generates deterministic union workloads and the parameter labels used by
//! the Criterion benchmarks.

pub mod params;
pub mod workload;
