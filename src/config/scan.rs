//! Field scanning configuration.

use super::{parse_env_var, Config};
use crate::error::{Result, ScanError};
use crate::scan::{Strategy, DEFAULT_DELIMITER};
use crate::simd::{LaneOrder, WordWidth};
use crate::string::CodeUnit;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for field matching.
///
/// # Examples
///
/// ```rust
/// use fieldscan::config::{Config, ScanConfig};
/// use fieldscan::simd::WordWidth;
/// use fieldscan::Strategy;
///
/// let config = ScanConfig {
///     strategy: Strategy::WordParallel,
///     delimiter: ',',
///     word_width: WordWidth::W32,
///     ..ScanConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Strategy answering field queries
    pub strategy: Strategy,
    /// Field delimiter
    pub delimiter: char,
    /// Word width for word-parallel scanning
    pub word_width: WordWidth,
    /// Lane order for word-parallel scanning
    pub lane_order: LaneOrder,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            delimiter: DEFAULT_DELIMITER,
            word_width: WordWidth::native(),
            lane_order: LaneOrder::Native,
        }
    }
}

impl Config for ScanConfig {
    fn validate(&self) -> Result<()> {
        if u16::from_char(self.delimiter).is_none() {
            return Err(ScanError::configuration(format!(
                "delimiter {:?} (U+{:04X}) is not a single UTF-16 code unit",
                self.delimiter,
                u32::from(self.delimiter)
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.strategy = parse_env_var(&format!("{}STRATEGY", prefix), config.strategy);
        config.delimiter = parse_env_var(&format!("{}DELIMITER", prefix), config.delimiter);
        config.word_width = parse_env_var(&format!("{}WORD_WIDTH", prefix), config.word_width);
        config.lane_order = parse_env_var(&format!("{}LANE_ORDER", prefix), config.lane_order);
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            strategy: Strategy::WordParallel,
            ..Self::default()
        }
    }

    fn memory_preset() -> Self {
        Self {
            strategy: Strategy::OnePass,
            ..Self::default()
        }
    }

    fn realtime_preset() -> Self {
        Self {
            strategy: Strategy::OnePass,
            ..Self::default()
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::configuration(format!("Failed to serialize scan config: {}", e)))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ScanError::configuration(format!("Failed to parse scan config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
