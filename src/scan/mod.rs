//! Delimited-field membership strategies
//!
//! Six interchangeable ways to answer the same question: does some field of
//! `value`, split at `delimiter`, equal `token` in its entirety?
//!
//! | Strategy | Module | Approach |
//! |---|---|---|
//! | [`Strategy::SplitScan`] | [`split`] | materialize fields, compare each (reference) |
//! | [`Strategy::OccurrenceRescan`] | [`occurrence`] | raw substring hits, boundary check |
//! | [`Strategy::BoundedDoubleScan`] | [`bounded`] | bounded compare, jump past next delimiter |
//! | [`Strategy::LengthPrecheck`] | [`length_precheck`] | reject fields by length first |
//! | [`Strategy::WordParallel`] | [`word_parallel`] | word-at-a-time compare, SWAR delimiter search |
//! | [`Strategy::OnePass`] | [`one_pass`] | single pass, two-state machine (default) |
//!
//! Every strategy returns `false` for an empty value or token. A token that
//! contains the delimiter can never equal a field, so it never matches.

pub mod bounded;
pub mod length_precheck;
pub mod occurrence;
pub mod one_pass;
pub mod split;
pub mod word_parallel;

pub use word_parallel::{TokenPlan, WordParallelScanner};

use crate::error::{Result, ScanError};
use crate::string::CodeUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ';';

/// A token can only equal a field if it is non-empty and delimiter-free
#[inline]
pub(crate) fn token_is_searchable<U: CodeUnit>(token: &[U], delimiter: U) -> bool {
    !token.is_empty() && !token.contains(&delimiter)
}

/// Field membership over code units, with a string layer on top
pub trait FieldScan {
    /// Check whether any field of `value` equals `token`
    fn contains_units<U: CodeUnit>(&self, value: &[U], token: &[U], delimiter: U) -> bool;

    /// Check whether any field of the string `value` equals `token`
    ///
    /// ASCII delimiters scan the UTF-8 bytes directly: an ASCII byte never
    /// occurs inside a multi-byte sequence. Other delimiters in the Basic
    /// Multilingual Plane re-encode both strings as UTF-16. Delimiters beyond
    /// it are not a single code unit in either encoding and fall back to a
    /// `char` split.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldscan::{FieldScan, Strategy};
    ///
    /// for strategy in Strategy::ALL {
    ///     assert!(strategy.contains_str("Foo;Bar", "Bar", ';'));
    ///     assert!(strategy.contains_str("caf\u{e9}\u{b7}th\u{e9}", "th\u{e9}", '\u{b7}'));
    /// }
    /// ```
    fn contains_str(&self, value: &str, token: &str, delimiter: char) -> bool {
        if delimiter.is_ascii() {
            return self.contains_units(value.as_bytes(), token.as_bytes(), delimiter as u8);
        }

        match u16::from_char(delimiter) {
            Some(unit) => {
                let value: Vec<u16> = value.encode_utf16().collect();
                let token: Vec<u16> = token.encode_utf16().collect();
                self.contains_units(&value, &token, unit)
            }
            None => {
                !value.is_empty()
                    && !token.is_empty()
                    && value.split(delimiter).any(|field| field == token)
            }
        }
    }
}

/// Field matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Split into fields and compare each one
    SplitScan,
    /// Re-scan for raw occurrences and check their boundaries
    OccurrenceRescan,
    /// Bounded comparison per field, jumping past mismatches
    BoundedDoubleScan,
    /// Compare field lengths before contents
    LengthPrecheck,
    /// Word-at-a-time comparison with SWAR delimiter detection
    WordParallel,
    /// Single forward pass with a two-state machine
    #[default]
    OnePass,
}

impl Strategy {
    /// Every strategy, reference first
    pub const ALL: [Strategy; 6] = [
        Strategy::SplitScan,
        Strategy::OccurrenceRescan,
        Strategy::BoundedDoubleScan,
        Strategy::LengthPrecheck,
        Strategy::WordParallel,
        Strategy::OnePass,
    ];

    /// Name used in configuration files, environment variables and benchmarks
    pub const fn name(self) -> &'static str {
        match self {
            Self::SplitScan => "split_scan",
            Self::OccurrenceRescan => "occurrence_rescan",
            Self::BoundedDoubleScan => "bounded_double_scan",
            Self::LengthPrecheck => "length_precheck",
            Self::WordParallel => "word_parallel",
            Self::OnePass => "one_pass",
        }
    }

    /// Whether a call allocates on the heap
    pub const fn allocates(self) -> bool {
        matches!(self, Self::SplitScan)
    }

    /// Check whether any field of `value` equals `token`
    #[inline]
    pub fn contains<U: CodeUnit>(self, value: &[U], token: &[U], delimiter: U) -> bool {
        match self {
            Self::SplitScan => split::contains_token(value, token, delimiter),
            Self::OccurrenceRescan => occurrence::contains_token(value, token, delimiter),
            Self::BoundedDoubleScan => bounded::contains_token(value, token, delimiter),
            Self::LengthPrecheck => length_precheck::contains_token(value, token, delimiter),
            Self::WordParallel => word_parallel::contains_token(value, token, delimiter),
            Self::OnePass => one_pass::contains_token(value, token, delimiter),
        }
    }
}

impl FieldScan for Strategy {
    #[inline]
    fn contains_units<U: CodeUnit>(&self, value: &[U], token: &[U], delimiter: U) -> bool {
        self.contains(value, token, delimiter)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| ScanError::invalid_data(format!("unknown strategy '{}'", s)))
    }
}
