//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the `pi` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid quadrature parameters.
    #[error("Invalid configuration: {0}")]
    Config(#[from] quadrature_core::ConfigError),

    /// Estimator construction failed.
    #[error("Estimator error: {0}")]
    Estimator(#[from] quadrature_core::EstimatorError),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use quadrature_core::ConfigError;

    #[test]
    fn test_cli_error_from_config_error() {
        let err: CliError = ConfigError::InvalidIntervalCount { intervals: 0 }.into();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
