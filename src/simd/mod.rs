//! # Word-parallel primitives
//!
//! Portable SIMD-within-a-register building blocks used by the word-parallel
//! scanner: lane-ordered checked loads, delimiter splatting and zero-lane
//! detection for 8- and 16-bit lanes in 32- and 64-bit words.
//!
//! ## Example
//!
//! ```
//! use fieldscan::simd::{first_lane, load, low_bits_mask, splat, zero_lanes, LaneOrder};
//!
//! let word: u64 = load(b"Foo;Bar!", LaneOrder::Little);
//! let hits = zero_lanes(word ^ splat::<u64>(b';' as u64, 8), low_bits_mask(8));
//! assert_eq!(first_lane(hits, LaneOrder::Little, 8), 3);
//! ```

pub mod swar;

pub use swar::{
    first_lane, lanes, load, load_at, low_bits_mask, native_swar_verified, splat, zero_lanes,
    LaneOrder, Word, WordWidth,
};
