//! Parallel midpoint-rule π estimator.
//!
//! This module provides the orchestration layer for the quadrature run:
//!
//! 1. Static partitioning of `[0, N)` (via [`partition`])
//! 2. Sequential block summation into private accumulators
//!    (via [`midpoint_term`](crate::integrand::midpoint_term))
//! 3. Combination of the partial sums after the parallel join
//! 4. Scaling by the subinterval width
//!
//! # Worker Pool
//!
//! The estimator owns a dedicated Rayon pool sized at construction time, so
//! the degree of parallelism is fixed for the lifetime of the estimator and
//! reportable after the fact. Each block is summed on one worker; the only
//! synchronisation point is the implicit join of the parallel reduction.

use rayon::prelude::*;

use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::integrand::midpoint_term;
use crate::partition::{partition, Block};

/// Result of a quadrature run.
///
/// # Examples
///
/// ```rust
/// use quadrature_core::{EstimatorConfig, PiEstimator};
///
/// let config = EstimatorConfig::builder().intervals(10_000).build().unwrap();
/// let estimate = PiEstimator::new(config).unwrap().estimate();
///
/// println!("PI ~= {:.12}", estimate.value);
/// println!("Threads used: {}", estimate.threads);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate {
    /// The π approximation, `sum * step`.
    pub value: f64,
    /// Number of subintervals evaluated.
    pub intervals: u64,
    /// Width of each subinterval.
    pub step: f64,
    /// Worker threads available to the run.
    pub threads: usize,
}

impl PiEstimate {
    /// Absolute deviation from the true value of π.
    #[inline]
    pub fn absolute_error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }
}

/// Midpoint-rule π estimation engine.
///
/// Owns the validated configuration and a dedicated worker pool. The pool is
/// built once and reused across `estimate` calls, so repeated runs carry no
/// thread start-up cost.
///
/// # Examples
///
/// ```rust
/// use quadrature_core::{EstimatorConfig, PiEstimator};
///
/// let config = EstimatorConfig::builder()
///     .intervals(1_000_000)
///     .threads(2)
///     .build()
///     .unwrap();
///
/// let estimator = PiEstimator::new(config).unwrap();
/// let estimate = estimator.estimate();
/// assert!(estimate.absolute_error() < 1e-8);
/// assert_eq!(estimate.threads, 2);
/// ```
pub struct PiEstimator {
    config: EstimatorConfig,
    pool: rayon::ThreadPool,
}

impl PiEstimator {
    /// Creates an estimator with a dedicated worker pool.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::ThreadPool`] if the pool cannot be built
    /// (environment-level thread exhaustion).
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.resolved_threads())
            .build()?;
        Ok(Self { config, pool })
    }

    /// Returns the configuration this estimator runs with.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Returns the number of worker threads available to the pool.
    #[inline]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs the parallel quadrature.
    ///
    /// The iteration space is split into one contiguous block per worker,
    /// assigned once before execution. Every block accumulates its own
    /// partial sum; the partial sums are combined by ordinary floating-point
    /// addition after all blocks complete. Combination order is unspecified,
    /// so the result may differ across runs in the last few bits.
    pub fn estimate(&self) -> PiEstimate {
        let step = self.config.step();
        let sum: f64 = self
            .pool
            .install(|| self.blocks().into_par_iter().map(|b| block_sum(b, step)).sum());

        self.result(sum * step)
    }

    /// Runs the same quadrature on the calling thread only.
    ///
    /// Reference path for verifying the parallel reduction; the summation
    /// order is the plain ascending index order.
    pub fn estimate_sequential(&self) -> PiEstimate {
        let step = self.config.step();
        let whole = Block {
            start: 0,
            end: self.config.intervals(),
        };
        self.result(block_sum(whole, step) * step)
    }

    /// Returns the per-block partial sums of the parallel run.
    ///
    /// The sum of the returned values equals (within floating-point
    /// reduction-order tolerance) the sequential sum over `[0, N)`.
    pub fn partial_sums(&self) -> Vec<f64> {
        let step = self.config.step();
        self.pool
            .install(|| self.blocks().into_par_iter().map(|b| block_sum(b, step)).collect())
    }

    fn blocks(&self) -> Vec<Block> {
        partition(self.config.intervals(), self.threads())
    }

    fn result(&self, value: f64) -> PiEstimate {
        PiEstimate {
            value,
            intervals: self.config.intervals(),
            step: self.config.step(),
            threads: self.threads(),
        }
    }
}

/// Sums the midpoint terms of one block into a private accumulator.
fn block_sum(block: Block, step: f64) -> f64 {
    let mut acc = 0.0;
    for i in block.start..block.end {
        acc += midpoint_term(i, step);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn estimator(intervals: u64, threads: usize) -> PiEstimator {
        let config = EstimatorConfig::builder()
            .intervals(intervals)
            .threads(threads)
            .build()
            .unwrap();
        PiEstimator::new(config).unwrap()
    }

    #[test]
    fn test_single_interval_is_exact() {
        // One midpoint at x = 0.5, step = 1.0: 4 / 1.25 = 3.2 exactly.
        let estimate = estimator(1, 1).estimate();
        assert_eq!(estimate.value, 3.2);
        assert_eq!(estimate.intervals, 1);
        assert_eq!(estimate.step, 1.0);
    }

    #[test]
    fn test_converges_to_pi() {
        let estimate = estimator(1_000_000, 4).estimate();
        assert!(estimate.absolute_error() < 1e-8);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let est = estimator(100_000, 4);
        let parallel = est.estimate();
        let sequential = est.estimate_sequential();
        assert_relative_eq!(parallel.value, sequential.value, max_relative = 1e-12);
    }

    #[test]
    fn test_partial_sums_combine_to_sequential_sum() {
        for threads in [1, 2, 3, 8] {
            let est = estimator(100_000, threads);
            let combined: f64 = est.partial_sums().iter().sum();
            let sequential = est.estimate_sequential();
            let sequential_sum = sequential.value / sequential.step;
            assert_relative_eq!(combined, sequential_sum, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_reported_threads_match_pool() {
        let est = estimator(1000, 3);
        assert_eq!(est.threads(), 3);
        assert_eq!(est.estimate().threads, 3);
    }

    #[test]
    fn test_more_threads_than_intervals() {
        let est = estimator(2, 8);
        let estimate = est.estimate();
        // 2 midpoints at 0.25 and 0.75: (4/1.0625 + 4/1.5625) / 2
        let expected = (4.0 / 1.0625 + 4.0 / 1.5625) * 0.5;
        assert_relative_eq!(estimate.value, expected, max_relative = 1e-15);
    }

    #[test]
    fn test_accuracy_improves_with_intervals() {
        let coarse = estimator(10_000, 2).estimate();
        let fine = estimator(1_000_000, 2).estimate();
        assert!(fine.absolute_error() <= coarse.absolute_error());
    }

    #[test]
    fn test_estimate_is_repeatable() {
        let est = estimator(500_000, 4);
        let a = est.estimate();
        let b = est.estimate();
        assert!((a.value - b.value).abs() < 1e-9);
    }

    #[test]
    fn test_absolute_error_of_pi_itself_is_zero() {
        let estimate = PiEstimate {
            value: PI,
            intervals: 1,
            step: 1.0,
            threads: 1,
        };
        assert_eq!(estimate.absolute_error(), 0.0);
    }
}
