//! # quadrature_core: Parallel Midpoint-Rule π Estimation
//!
//! ## Role
//!
//! quadrature_core is the kernel layer of the midpoint-pi workspace. It
//! approximates π by Riemann midpoint-rule integration of f(x) = 4/(1+x²)
//! over [0,1]:
//!
//! - Integrand and midpoint evaluation (`integrand`)
//! - Static contiguous partitioning of the iteration space (`partition`)
//! - Validated estimator configuration (`config`)
//! - Parallel reduction engine over a dedicated Rayon pool (`estimator`)
//! - Structured error types (`error`)
//!
//! ## Minimal Dependency Principle
//!
//! The kernel layer carries only what the reduction needs:
//! - rayon: block-level data parallelism
//! - num_cpus: default degree of parallelism
//! - thiserror: structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use quadrature_core::{EstimatorConfig, PiEstimator};
//!
//! let config = EstimatorConfig::builder()
//!     .intervals(1_000_000)
//!     .build()
//!     .unwrap();
//!
//! let estimator = PiEstimator::new(config).unwrap();
//! let estimate = estimator.estimate();
//!
//! assert!((estimate.value - std::f64::consts::PI).abs() < 1e-8);
//! assert!(estimate.threads >= 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod estimator;
pub mod integrand;
pub mod partition;

// Re-exports for convenient access
pub use config::{EstimatorConfig, EstimatorConfigBuilder, DEFAULT_INTERVALS, MAX_INTERVALS};
pub use error::{ConfigError, EstimatorError};
pub use estimator::{PiEstimate, PiEstimator};
pub use integrand::{integrand, midpoint, midpoint_term};
pub use partition::{partition, Block};
