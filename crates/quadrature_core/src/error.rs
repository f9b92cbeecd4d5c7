//! Error types for the quadrature kernel.
//!
//! This module provides:
//! - `ConfigError`: validation failures when building an [`EstimatorConfig`]
//! - `EstimatorError`: runtime failures when constructing the estimator
//!
//! [`EstimatorConfig`]: crate::config::EstimatorConfig

use thiserror::Error;

/// Configuration error for the π estimator.
///
/// These errors occur during construction when invalid parameters are
/// provided.
///
/// # Examples
/// ```
/// use quadrature_core::ConfigError;
///
/// let err = ConfigError::InvalidIntervalCount { intervals: 0 };
/// assert!(format!("{}", err).contains("interval count"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Interval count outside the valid range [1, i64::MAX].
    #[error("Invalid interval count {intervals}: must be in range [1, 9223372036854775807]")]
    InvalidIntervalCount {
        /// The invalid interval count
        intervals: u64,
    },

    /// Thread count of zero requested.
    #[error("Invalid thread count {threads}: must be at least 1")]
    InvalidThreadCount {
        /// The invalid thread count
        threads: usize,
    },
}

/// Runtime error for the π estimator.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The dedicated worker pool could not be constructed.
    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
