//! Fixed-width code units
//!
//! Values, tokens and delimiters are sequences of fixed-width code units.
//! `u8` covers raw bytes and UTF-8 text, `u16` covers UTF-16.

use std::fmt;

/// A fixed-width code unit that can be scanned for delimited fields.
pub trait CodeUnit: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Width of the unit in bits
    const BITS: u32;

    /// Zero-extend the unit to 64 bits
    fn widen(self) -> u64;

    /// Convert a `char` to a single unit of this width, if it fits
    fn from_char(c: char) -> Option<Self>;
}

impl CodeUnit for u8 {
    const BITS: u32 = 8;

    #[inline]
    fn widen(self) -> u64 {
        self as u64
    }

    /// Only ASCII is a single UTF-8 byte
    #[inline]
    fn from_char(c: char) -> Option<Self> {
        c.is_ascii().then(|| c as u8)
    }
}

impl CodeUnit for u16 {
    const BITS: u32 = 16;

    #[inline]
    fn widen(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_char(c: char) -> Option<Self> {
        u16::try_from(u32::from(c)).ok()
    }
}
