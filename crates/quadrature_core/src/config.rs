//! Estimator configuration.
//!
//! This module provides configuration types and builders for the midpoint
//! quadrature run: how many subintervals to evaluate and how many worker
//! threads to use.

use crate::error::ConfigError;

/// Reference number of subintervals.
///
/// Large enough that the parallel speed-up is visible; the midpoint-rule
/// truncation error at this count is far below the accumulated
/// floating-point rounding error (~1e-10).
pub const DEFAULT_INTERVALS: u64 = 200_000_000;

/// Maximum number of subintervals allowed.
///
/// The iteration index must stay representable in a 64-bit signed integer.
pub const MAX_INTERVALS: u64 = i64::MAX as u64;

/// Midpoint quadrature configuration.
///
/// Immutable configuration specifying the integration parameters.
/// Use [`EstimatorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use quadrature_core::EstimatorConfig;
///
/// let config = EstimatorConfig::builder()
///     .intervals(1_000_000)
///     .threads(4)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.intervals(), 1_000_000);
/// assert_eq!(config.threads(), Some(4));
/// ```
#[derive(Clone, Debug)]
pub struct EstimatorConfig {
    /// Number of subintervals of [0,1].
    intervals: u64,
    /// Worker thread count; `None` means all logical cores.
    threads: Option<usize>,
}

impl EstimatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Returns the number of subintervals.
    #[inline]
    pub fn intervals(&self) -> u64 {
        self.intervals
    }

    /// Returns the requested thread count, if one was set.
    #[inline]
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Returns the thread count the estimator will actually use.
    ///
    /// Falls back to the number of logical cores when no explicit count was
    /// requested, mirroring an environment-sized worker team.
    #[inline]
    pub fn resolved_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Returns the width of each subinterval, `1.0 / intervals`.
    #[inline]
    pub fn step(&self) -> f64 {
        1.0 / self.intervals as f64
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `intervals` is 0 or greater than `i64::MAX`
    /// - `threads` was explicitly set to 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intervals == 0 || self.intervals > MAX_INTERVALS {
            return Err(ConfigError::InvalidIntervalCount {
                intervals: self.intervals,
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreadCount { threads: 0 });
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVALS,
            threads: None,
        }
    }
}

/// Builder for [`EstimatorConfig`].
///
/// Provides a fluent API for constructing quadrature configurations with
/// validation at build time.
///
/// # Examples
///
/// ```rust
/// use quadrature_core::EstimatorConfig;
///
/// let config = EstimatorConfig::builder()
///     .intervals(10_000)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    intervals: Option<u64>,
    threads: Option<usize>,
}

impl EstimatorConfigBuilder {
    /// Sets the number of subintervals.
    ///
    /// # Arguments
    ///
    /// * `intervals` - Subinterval count in [1, i64::MAX]
    #[inline]
    pub fn intervals(mut self, intervals: u64) -> Self {
        self.intervals = Some(intervals);
        self
    }

    /// Sets the worker thread count.
    ///
    /// # Arguments
    ///
    /// * `threads` - Worker count; must be at least 1
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Builds the configuration.
    ///
    /// Unset fields take their defaults: [`DEFAULT_INTERVALS`] subintervals
    /// and an all-cores worker team.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `intervals` or `threads` is invalid.
    pub fn build(self) -> Result<EstimatorConfig, ConfigError> {
        let config = EstimatorConfig {
            intervals: self.intervals.unwrap_or(DEFAULT_INTERVALS),
            threads: self.threads,
        };
        config.validate()?;
        Ok(config)
    }
}
