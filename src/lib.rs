//! # fieldscan: Exact delimited-field membership
//!
//! Answers one question as fast as possible: does a delimiter-separated value
//! contain a field that equals a token in its entirety? `"Foo;Bar"` contains
//! the field `"Bar"`; `"Foo;FooBar;Whatever"` does not contain the field
//! `"Foo"`, because `FooBar` is a different field.
//!
//! ## Key Features
//!
//! - **Six interchangeable strategies**: from a split-and-compare reference to
//!   a word-parallel scanner, all computing the identical predicate
//! - **Word-parallel scanning**: whole-word token comparison and SWAR
//!   delimiter detection, with word width and lane order as parameters
//! - **Bounds-checked loads**: no read ever goes past the end of a value
//! - **Generic code units**: bytes (`u8`, including UTF-8) and UTF-16 (`u16`)
//! - **Configuration**: presets, `FIELDSCAN_*` environment variables and JSON
//!   files
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldscan::{contains_token, FieldMatcher, FieldScan, Strategy};
//! use fieldscan::config::{Config, ScanConfig};
//!
//! // Default strategy (single pass, allocation free)
//! assert!(contains_token("Foo;Bar", "Bar", ';'));
//! assert!(!contains_token("Foo;FooBar;Whatever", "Foo", ';'));
//!
//! // Any specific strategy
//! assert!(Strategy::WordParallel.contains_str("Bar1;Bar2;Bar", "Bar", ';'));
//!
//! // UTF-16 code units
//! let value: Vec<u16> = "Foo;Bar".encode_utf16().collect();
//! let token: Vec<u16> = "Bar".encode_utf16().collect();
//! assert!(Strategy::LengthPrecheck.contains(&value, &token, b';' as u16));
//!
//! // Configured matcher
//! let matcher = FieldMatcher::new(ScanConfig::performance_preset()).unwrap();
//! assert!(matcher.contains("Foo;Bar", "Bar"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod matcher;
pub mod scan;
pub mod simd;
pub mod string;

// Re-export core types
pub use error::{Result, ScanError};
pub use matcher::FieldMatcher;
pub use scan::{FieldScan, Strategy, TokenPlan, WordParallelScanner, DEFAULT_DELIMITER};
pub use simd::{LaneOrder, WordWidth};
pub use string::CodeUnit;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check whether any field of `value` equals `token`, using the default strategy
///
/// Returns `false` when `value` or `token` is empty.
#[inline]
pub fn contains_token(value: &str, token: &str, delimiter: char) -> bool {
    Strategy::default().contains_str(value, token, delimiter)
}

/// Check whether any field of a code-unit `value` equals `token`, using the
/// default strategy
#[inline]
pub fn contains_token_units<U: CodeUnit>(value: &[U], token: &[U], delimiter: U) -> bool {
    Strategy::default().contains(value, token, delimiter)
}

/// Check if the native word-parallel layout was verified at build time
pub fn has_native_word_parallel() -> bool {
    simd::native_swar_verified()
}

/// Initialize the library (currently only logs, for future use)
pub fn init() {
    log::debug!(
        "Initializing fieldscan v{} (native word {} bits, {} lane order, verified: {})",
        VERSION,
        WordWidth::native(),
        LaneOrder::native(),
        has_native_word_parallel()
    );
}
