//! Parallelism configuration for table classification.
//!
//! Rows are independent of each other, so classification can be sharded
//! across rayon's thread pool without changing the result.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Configuration for parallel classification.
///
/// # Example
///
/// ```rust
/// use backup_seeds::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
/// };
/// assert_eq!(config.effective_concurrency(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    ///
    /// When disabled, rows are classified sequentially on the calling thread.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum worker threads (default: num_cpus)
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
        }
    }
}

impl ParallelConfig {
    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Get the effective concurrency level.
    ///
    /// Returns the configured max_concurrency, or the number of
    /// available CPU cores if not specified.
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.filter(|n| *n > 0).unwrap_or_else(num_cpus)
    }
}

/// Returns the number of available CPU cores.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(config.enabled);
        assert!(config.max_concurrency.is_none());
    }

    #[test]
    fn test_parallel_config_sequential() {
        let config = ParallelConfig::sequential();
        assert!(!config.enabled);
    }

    #[test]
    fn test_effective_concurrency() {
        let config = ParallelConfig {
            enabled: true,
            max_concurrency: Some(4),
        };
        assert_eq!(config.effective_concurrency(), 4);

        let config = ParallelConfig {
            enabled: true,
            max_concurrency: None,
        };
        assert!(config.effective_concurrency() >= 1);
    }

    #[test]
    fn test_zero_concurrency_means_all_cores() {
        let config = ParallelConfig {
            enabled: true,
            max_concurrency: Some(0),
        };
        assert!(config.effective_concurrency() >= 1);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ParallelConfig = toml::from_str("max_concurrency = 2").unwrap();
        assert!(config.enabled);
        assert_eq!(config.max_concurrency, Some(2));
    }
}
