//! Word-parallel field scan
//!
//! Compares the token against the value a machine word at a time and finds
//! the next delimiter with a branch-free zero-lane test instead of a unit by
//! unit search.
//!
//! ## Token plan
//!
//! The token is split once into `words` full-word chunks followed by a tail
//! shorter than a word. The tail is compared in descending power-of-two
//! chunks (half word, quarter word, ... single unit), one per set bit of the
//! tail length. For UTF-16 units in a 64-bit word that is at most one
//! two-unit chunk and one single unit.
//!
//! ## Safety
//!
//! Every load goes through a checked slice range. Field comparison only
//! starts once at least a token's length of units remains, and the delimiter
//! search switches to a sequential tail scan when less than a word remains,
//! so nothing past the end of the value is ever read.

use super::{one_pass, token_is_searchable};
use crate::simd::{first_lane, lanes, load_at, low_bits_mask, native_swar_verified, splat, zero_lanes};
use crate::simd::{LaneOrder, Word};
use crate::string::{find_unit, CodeUnit};
use std::marker::PhantomData;

/// Precomputed chunking of a token for a given word width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPlan {
    /// Units per word
    pub lanes: usize,
    /// Number of full-word chunks
    pub words: usize,
    /// Units left over after the full words, always `< lanes`
    pub tail: usize,
    /// Token length in units
    pub len: usize,
}

impl TokenPlan {
    /// Plan the chunking of a `len`-unit token into `lanes`-unit words
    pub fn new(len: usize, lanes: usize) -> Self {
        debug_assert!(lanes.is_power_of_two());
        Self {
            lanes,
            words: len / lanes,
            tail: len % lanes,
            len,
        }
    }

    /// Tail chunk sizes in comparison order
    pub fn tail_chunks(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.lanes >> 1), |&chunk| (chunk > 1).then_some(chunk >> 1))
            .filter(move |&chunk| self.tail & chunk != 0)
    }
}

/// Word-parallel scanner for one token and delimiter
///
/// `U` is the code unit and `W` the machine word used for chunked loads.
/// Build it once and reuse it across values.
///
/// # Examples
///
/// ```rust
/// use fieldscan::scan::WordParallelScanner;
/// use fieldscan::simd::LaneOrder;
///
/// let value: Vec<u16> = "Foo;FooBar;Bar".encode_utf16().collect();
/// let token: Vec<u16> = "Bar".encode_utf16().collect();
///
/// let scanner = WordParallelScanner::<u16, u64>::new(&token, b';' as u16);
/// assert!(scanner.contains(&value));
///
/// let big = WordParallelScanner::<u16, u32>::with_order(&token, b';' as u16, LaneOrder::Big);
/// assert!(big.contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct WordParallelScanner<'t, U, W> {
    token: &'t [U],
    delimiter: U,
    order: LaneOrder,
    plan: TokenPlan,
    searchable: bool,
    delimiter_lanes: W,
    low_mask: W,
    _word: PhantomData<W>,
}

impl<'t, U: CodeUnit, W: Word> WordParallelScanner<'t, U, W> {
    /// Create a scanner using the target's native lane order
    pub fn new(token: &'t [U], delimiter: U) -> Self {
        Self::with_order(token, delimiter, LaneOrder::Native)
    }

    /// Create a scanner with an explicit lane order
    pub fn with_order(token: &'t [U], delimiter: U, order: LaneOrder) -> Self {
        Self {
            token,
            delimiter,
            order: order.resolve(),
            plan: TokenPlan::new(token.len(), lanes::<U, W>()),
            searchable: token_is_searchable(token, delimiter),
            delimiter_lanes: splat(delimiter.widen(), U::BITS),
            low_mask: low_bits_mask(U::BITS),
            _word: PhantomData,
        }
    }

    /// The token chunking this scanner uses
    #[inline]
    pub fn plan(&self) -> &TokenPlan {
        &self.plan
    }

    /// The resolved lane order
    #[inline]
    pub fn order(&self) -> LaneOrder {
        self.order
    }

    /// Check whether any field of `value` equals the token
    pub fn contains(&self, value: &[U]) -> bool {
        if value.is_empty() || !self.searchable {
            return false;
        }

        let mut cursor = 0;
        loop {
            if value.len() - cursor < self.plan.len {
                return false;
            }

            let resume = match self.match_at(value, cursor) {
                Ok(end) => {
                    match value.get(end) {
                        None => return true,
                        Some(&unit) if unit == self.delimiter => return true,
                        Some(_) => end,
                    }
                }
                Err(mismatch) => mismatch,
            };

            match self.skip_past_delimiter(value, resume) {
                Some(next) => cursor = next,
                None => return false,
            }
        }
    }

    /// Compare the whole token at `start`
    ///
    /// Returns the position after the token on a match, or the start of the
    /// mismatching chunk.
    #[inline]
    fn match_at(&self, value: &[U], start: usize) -> Result<usize, usize> {
        let mut pos = start;
        let mut offset = 0;

        for _ in 0..self.plan.words {
            self.compare_chunk(value, pos, offset, self.plan.lanes)?;
            pos += self.plan.lanes;
            offset += self.plan.lanes;
        }

        for chunk in self.plan.tail_chunks() {
            self.compare_chunk(value, pos, offset, chunk)?;
            pos += chunk;
            offset += chunk;
        }

        Ok(pos)
    }

    #[inline]
    fn compare_chunk(&self, value: &[U], pos: usize, offset: usize, count: usize) -> Result<(), usize> {
        let actual: Option<W> = load_at(value, pos, count, self.order);
        let expected: Option<W> = load_at(self.token, offset, count, self.order);
        match (actual, expected) {
            (Some(a), Some(e)) if a == e => Ok(()),
            _ => Err(pos),
        }
    }

    /// Position just after the first delimiter at or after `from`
    fn skip_past_delimiter(&self, value: &[U], mut from: usize) -> Option<usize> {
        let lanes = self.plan.lanes;

        while let Some(word) = load_at::<U, W>(value, from, lanes, self.order) {
            let hits = zero_lanes(word ^ self.delimiter_lanes, self.low_mask);
            if hits != W::ZERO {
                return Some(from + first_lane(hits, self.order, U::BITS) + 1);
            }
            from += lanes;
        }

        find_unit(value.get(from..)?, self.delimiter).map(|offset| from + offset + 1)
    }
}

/// Check whether any field of `value` equals `token`
///
/// Uses the target's pointer-width word and native lane order. When the build
/// could not verify those, falls back to the sequential one-pass scan.
///
/// # Examples
///
/// ```rust
/// use fieldscan::scan::word_parallel;
///
/// assert!(word_parallel::contains_token(b"Foo;Bar", b"Bar", b';'));
/// assert!(!word_parallel::contains_token(b"Foo;FooBar;Whatever", b"Foo", b';'));
/// ```
pub fn contains_token<U: CodeUnit>(value: &[U], token: &[U], delimiter: U) -> bool {
    if !native_swar_verified() {
        return one_pass::contains_token(value, token, delimiter);
    }

    #[cfg(target_pointer_width = "64")]
    {
        WordParallelScanner::<U, u64>::new(token, delimiter).contains(value)
    }
    #[cfg(not(target_pointer_width = "64"))]
    {
        WordParallelScanner::<U, u32>::new(token, delimiter).contains(value)
    }
}
