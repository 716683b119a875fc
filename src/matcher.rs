//! Configured field matcher
//!
//! [`FieldMatcher`] binds a validated [`ScanConfig`] so callers only pass the
//! value and the token. Word-parallel scanning honors the configured word
//! width and lane order instead of the native defaults.

use crate::config::{Config, ScanConfig};
use crate::error::Result;
use crate::scan::{FieldScan, Strategy, WordParallelScanner};
use crate::simd::WordWidth;
use crate::string::CodeUnit;

/// Field matcher driven by a [`ScanConfig`]
///
/// # Examples
///
/// ```rust
/// use fieldscan::config::{Config, ScanConfig};
/// use fieldscan::FieldMatcher;
///
/// let matcher = FieldMatcher::new(ScanConfig::performance_preset())?;
/// assert!(matcher.contains("Foo;Bar", "Bar"));
/// assert!(!matcher.contains("Foo;FooBar;Whatever", "Foo"));
/// # Ok::<(), fieldscan::ScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    config: ScanConfig,
}

impl FieldMatcher {
    /// Create a matcher from a configuration, validating it first
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Field matcher: strategy={}, delimiter={:?}, word_width={}, lane_order={}",
            config.strategy,
            config.delimiter,
            config.word_width,
            config.lane_order
        );
        if config.strategy == Strategy::WordParallel && !crate::simd::native_swar_verified() {
            log::warn!("Native word layout unverified for this target; configured word width is still used");
        }
        Ok(Self { config })
    }

    /// Create a matcher from `FIELDSCAN_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ScanConfig::from_env()?)
    }

    /// The active configuration
    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Check whether any field of `value` equals `token`
    #[inline]
    pub fn contains(&self, value: &str, token: &str) -> bool {
        self.contains_str(value, token, self.config.delimiter)
    }

    /// Check whether any field of a code-unit `value` equals `token`
    ///
    /// If the configured delimiter does not fit in `U` it cannot occur in
    /// `value`, so the whole value is the only field. For `u8` only ASCII
    /// delimiters fit; use [`FieldMatcher::contains`] to split UTF-8 text on
    /// a non-ASCII delimiter.
    pub fn contains_code_units<U: CodeUnit>(&self, value: &[U], token: &[U]) -> bool {
        match U::from_char(self.config.delimiter) {
            Some(delimiter) => self.contains_units(value, token, delimiter),
            None => !value.is_empty() && value == token,
        }
    }
}

impl Default for FieldMatcher {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }
}

impl FieldScan for FieldMatcher {
    fn contains_units<U: CodeUnit>(&self, value: &[U], token: &[U], delimiter: U) -> bool {
        match self.config.strategy {
            Strategy::WordParallel => {
                let order = self.config.lane_order;
                match self.config.word_width {
                    WordWidth::W32 => {
                        WordParallelScanner::<U, u32>::with_order(token, delimiter, order).contains(value)
                    }
                    WordWidth::W64 => {
                        WordParallelScanner::<U, u64>::with_order(token, delimiter, order).contains(value)
                    }
                }
            }
            strategy => strategy.contains(value, token, delimiter),
        }
    }
}
