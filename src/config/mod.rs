//! Configuration APIs for fieldscan
//!
//! Configuration selects which strategy answers field queries, which
//! delimiter separates fields, and how the word-parallel scanner chunks its
//! loads.
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON file persistence.
//!
//! # Preset Configurations
//!
//! ```rust
//! use fieldscan::config::{Config, ScanConfig};
//! use fieldscan::Strategy;
//!
//! // Word-parallel scanning at the native word width
//! let config = ScanConfig::performance_preset();
//! assert_eq!(config.strategy, Strategy::WordParallel);
//!
//! // Allocation-free single pass
//! let config = ScanConfig::memory_preset();
//! assert_eq!(config.strategy, Strategy::OnePass);
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use fieldscan::config::{Config, ScanConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads FIELDSCAN_STRATEGY, FIELDSCAN_DELIMITER, ...
//! let config = ScanConfig::from_env()?;
//!
//! // Or with a custom prefix
//! let config = ScanConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::path::Path;

pub mod scan;

#[cfg(test)]
mod tests;

pub use scan::ScanConfig;

/// Environment variable prefix used by [`Config::from_env`]
pub const ENV_PREFIX: &str = "FIELDSCAN_";

/// Common configuration trait providing validation, environment
/// initialization, and preset management.
pub trait Config: Clone + std::fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the
    /// `FIELDSCAN_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset optimized for throughput.
    fn performance_preset() -> Self;

    /// Preset optimized for minimal memory usage.
    fn memory_preset() -> Self;

    /// Preset optimized for predictable latency.
    fn realtime_preset() -> Self;

    /// Balanced preset, the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is
/// unset or unparsable.
///
/// A value that is present but cannot be parsed is logged and ignored.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var_name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring {}={:?}: {}", var_name, raw, e);
                default
            }
        },
        Err(_) => default,
    }
}
