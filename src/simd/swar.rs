//! SIMD-within-a-register helpers
//!
//! A machine word is treated as a row of code-unit lanes. Loads are assembled
//! from checked slices, so the lane order is a parameter rather than a
//! property of the host: `Little` puts the unit at the lowest index in the
//! least significant lane (what a little-endian memory load produces), `Big`
//! puts it in the most significant lane.
//!
//! Zero-lane detection follows the exact (no false positive) form:
//!
//! ```text
//! t     = ((x & L) + L) | x     // lane top bit set iff the lane is non-zero
//! zeros = !(t | L)              // lane top bit set iff the lane is zero
//! ```
//!
//! where `L` has every bit of each lane set except the top one. `x & L` keeps
//! each lane below its top bit, so the addition never carries across lanes.

use crate::error::{Result, ScanError};
use crate::string::CodeUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl};
use std::str::FromStr;

/// Lane order used when assembling a word from consecutive code units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneOrder {
    /// First unit in the least significant lane
    Little,
    /// First unit in the most significant lane
    Big,
    /// Whatever the target's memory loads produce
    Native,
}

impl LaneOrder {
    /// Lane order of the current target
    #[inline]
    pub const fn native() -> Self {
        #[cfg(target_endian = "little")]
        {
            Self::Little
        }
        #[cfg(target_endian = "big")]
        {
            Self::Big
        }
    }

    /// Replace `Native` with the concrete order of the current target
    #[inline]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Native => Self::native(),
            other => other,
        }
    }

    /// Name used in configuration files and environment variables
    pub const fn name(self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
            Self::Native => "native",
        }
    }
}

impl Default for LaneOrder {
    fn default() -> Self {
        Self::Native
    }
}

impl fmt::Display for LaneOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LaneOrder {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Self::Little),
            "big" | "be" => Ok(Self::Big),
            "native" => Ok(Self::Native),
            other => Err(ScanError::invalid_data(format!("unknown lane order '{}'", other))),
        }
    }
}

/// Machine word width used for chunked comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordWidth {
    /// 32-bit words
    W32,
    /// 64-bit words
    W64,
}

impl WordWidth {
    /// Word width matching the target's pointer width
    #[inline]
    pub const fn native() -> Self {
        #[cfg(target_pointer_width = "64")]
        {
            Self::W64
        }
        #[cfg(not(target_pointer_width = "64"))]
        {
            Self::W32
        }
    }

    /// Width in bits
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Width for a bit count, if the scanner supports it
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            other => Err(ScanError::not_supported(format!("{}-bit words", other))),
        }
    }
}

impl Default for WordWidth {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl FromStr for WordWidth {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix('w')
            .or_else(|| lowered.strip_prefix('u'))
            .unwrap_or(&lowered);
        let bits: u32 = digits
            .parse()
            .map_err(|_| ScanError::invalid_data(format!("unknown word width '{}'", s)))?;
        Self::from_bits(bits)
    }
}

/// Unsigned machine word usable as a row of lanes
pub trait Word:
    Copy
    + Eq
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Width in bits
    const BITS: u32;
    /// All bits clear
    const ZERO: Self;

    /// Truncating conversion from 64 bits
    fn from_u64(value: u64) -> Self;
    /// Wrapping addition
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Number of trailing zero bits
    fn trailing_zeros(self) -> u32;
    /// Number of leading zero bits
    fn leading_zeros(self) -> u32;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }
            }
        )*
    };
}

impl_word!(u32, u64);

/// Number of `U` lanes in a `W` word
#[inline]
pub fn lanes<U: CodeUnit, W: Word>() -> usize {
    (W::BITS / U::BITS) as usize
}

/// Repeat `lane` into every `lane_bits`-wide lane of a word
#[inline]
pub fn splat<W: Word>(lane: u64, lane_bits: u32) -> W {
    let mut word = W::ZERO;
    for _ in 0..W::BITS / lane_bits {
        word = (word << lane_bits) | W::from_u64(lane);
    }
    word
}

/// Mask with every bit of each lane set except the lane's top bit
#[inline]
pub fn low_bits_mask<W: Word>(lane_bits: u32) -> W {
    splat((1u64 << (lane_bits - 1)) - 1, lane_bits)
}

/// Top bit of each lane set iff that lane of `x` is zero
///
/// `low` must come from [`low_bits_mask`] for the same lane width.
#[inline]
pub fn zero_lanes<W: Word>(x: W, low: W) -> W {
    let t = (x & low).wrapping_add(low) | x;
    !(t | low)
}

/// Index of the first flagged lane in a full-width zero-lane mask
///
/// `hits` must be non-zero and `order` must already be resolved.
#[inline]
pub fn first_lane<W: Word>(hits: W, order: LaneOrder, lane_bits: u32) -> usize {
    debug_assert!(hits != W::ZERO);
    let bit = match order {
        LaneOrder::Big => hits.leading_zeros(),
        _ => hits.trailing_zeros(),
    };
    (bit / lane_bits) as usize
}

/// Assemble a word from at most one word's worth of units
///
/// Fewer units than lanes leave the remaining lanes zero, which keeps
/// equality between two loads of the same length exact.
#[inline]
pub fn load<U: CodeUnit, W: Word>(units: &[U], order: LaneOrder) -> W {
    debug_assert!(units.len() <= lanes::<U, W>());
    let push = |word: W, unit: &U| (word << U::BITS) | W::from_u64(unit.widen());
    match order.resolve() {
        LaneOrder::Big => units.iter().fold(W::ZERO, push),
        _ => units.iter().rev().fold(W::ZERO, push),
    }
}

/// Bounds-checked load of `count` units starting at `at`
#[inline]
pub fn load_at<U: CodeUnit, W: Word>(units: &[U], at: usize, count: usize, order: LaneOrder) -> Option<W> {
    let end = at.checked_add(count)?;
    units.get(at..end).map(|chunk| load(chunk, order))
}

/// Whether the build script verified the native word width and lane order
#[inline]
pub const fn native_swar_verified() -> bool {
    cfg!(fieldscan_swar_native)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat() {
        assert_eq!(splat::<u32>(0x3B, 16), 0x003B_003B);
        assert_eq!(splat::<u64>(0x3B, 16), 0x003B_003B_003B_003B);
        assert_eq!(splat::<u32>(0x3B, 8), 0x3B3B_3B3B);
        assert_eq!(splat::<u64>(0x3B, 8), 0x3B3B_3B3B_3B3B_3B3B);
    }

    #[test]
    fn test_low_bits_mask() {
        assert_eq!(low_bits_mask::<u32>(16), 0x7FFF_7FFF);
        assert_eq!(low_bits_mask::<u64>(16), 0x7FFF_7FFF_7FFF_7FFF);
        assert_eq!(low_bits_mask::<u32>(8), 0x7F7F_7F7F);
    }

    #[test]
    fn test_zero_lanes_16_bit_in_32() {
        let low = low_bits_mask::<u32>(16);
        assert_eq!(zero_lanes(0x0001_0001u32, low), 0);
        assert_eq!(zero_lanes(0x0000_0001u32, low), 0x8000_0000);
        assert_eq!(zero_lanes(0x0001_0000u32, low), 0x0000_8000);
        assert_eq!(zero_lanes(0x0000_0000u32, low), 0x8000_8000);
        // High bit alone is a non-zero lane.
        assert_eq!(zero_lanes(0x8000_8000u32, low), 0);
        assert_eq!(zero_lanes(0xFFFF_0000u32, low), 0x0000_8000);
    }

    #[test]
    fn test_zero_lanes_16_bit_in_64() {
        let low = low_bits_mask::<u64>(16);
        assert_eq!(zero_lanes(0x0001_0002_0003_0004u64, low), 0);
        assert_eq!(zero_lanes(0x0001_0000_0003_0004u64, low), 0x0000_8000_0000_0000);
        assert_eq!(zero_lanes(0x0000_0002_0003_0000u64, low), 0x8000_0000_0000_8000);
    }

    #[test]
    fn test_zero_lanes_8_bit() {
        let low = low_bits_mask::<u64>(8);
        assert_eq!(zero_lanes(0x0101_0101_0101_0101u64, low), 0);
        assert_eq!(zero_lanes(0x0101_0100_0101_0101u64, low), 0x0000_0080_0000_0000);
        assert_eq!(zero_lanes(0x8080_8080_8080_8080u64, low), 0);

        let low32 = low_bits_mask::<u32>(8);
        assert_eq!(zero_lanes(0x00FF_FF01u32, low32), 0x8000_0000);
    }

    #[test]
    fn test_zero_lanes_is_exact() {
        // Exhaustive over two 8-bit lanes packed into the low half of a u32:
        // no lane may be flagged unless it is zero.
        let low = low_bits_mask::<u32>(8);
        for a in 0u32..=255 {
            for b in 0u32..=255 {
                let x = 0x0101_0000 | (a << 8) | b;
                let hits = zero_lanes(x, low);
                assert_eq!(hits & 0x80 != 0, b == 0);
                assert_eq!(hits & 0x8000 != 0, a == 0);
                assert_eq!(hits & 0x8080_0000, 0);
            }
        }
    }

    #[test]
    fn test_load_lane_order() {
        let units: [u16; 2] = [0x0041, 0x0042];
        assert_eq!(load::<u16, u32>(&units, LaneOrder::Little), 0x0042_0041);
        assert_eq!(load::<u16, u32>(&units, LaneOrder::Big), 0x0041_0042);

        let bytes = b"ABCDEFGH";
        assert_eq!(load::<u8, u64>(bytes, LaneOrder::Little), u64::from_le_bytes(*bytes));
        assert_eq!(load::<u8, u64>(bytes, LaneOrder::Big), u64::from_be_bytes(*bytes));
    }

    #[test]
    fn test_load_native_matches_memory_order() {
        let bytes = *b"Foo;";
        assert_eq!(load::<u8, u32>(&bytes, LaneOrder::Native), u32::from_ne_bytes(bytes));
    }

    #[test]
    fn test_partial_load_equality() {
        let a: [u16; 3] = [1, 2, 3];
        let b: [u16; 3] = [1, 2, 4];
        let wa: u64 = load(&a, LaneOrder::Little);
        let wb: u64 = load(&b, LaneOrder::Little);
        assert_ne!(wa, wb);
        assert_eq!(wa, load::<u16, u64>(&a, LaneOrder::Little));
    }

    #[test]
    fn test_load_at_bounds() {
        let units = b"Foo;Bar";
        assert_eq!(load_at::<u8, u32>(units, 0, 4, LaneOrder::Big), Some(u32::from_be_bytes(*b"Foo;")));
        assert_eq!(load_at::<u8, u32>(units, 4, 4, LaneOrder::Big), None);
        assert_eq!(load_at::<u8, u32>(units, usize::MAX, 4, LaneOrder::Big), None);
    }

    #[test]
    fn test_first_lane_both_orders() {
        let delimiter = splat::<u64>(b';' as u64, 16);
        let low = low_bits_mask::<u64>(16);
        let units: Vec<u16> = "ab;c".encode_utf16().collect();

        for order in [LaneOrder::Little, LaneOrder::Big] {
            let word: u64 = load(&units, order);
            let hits = zero_lanes(word ^ delimiter, low);
            assert_eq!(first_lane(hits, order, 16), 2, "order {:?}", order);
        }
    }

    #[test]
    fn test_first_lane_picks_earliest() {
        let delimiter = splat::<u32>(b';' as u64, 8);
        let low = low_bits_mask::<u32>(8);
        for order in [LaneOrder::Little, LaneOrder::Big] {
            let word: u32 = load(b"a;;b", order);
            let hits = zero_lanes(word ^ delimiter, low);
            assert_eq!(first_lane(hits, order, 8), 1);
        }
    }

    #[test]
    fn test_lane_order_parse() {
        assert_eq!("little".parse::<LaneOrder>().unwrap(), LaneOrder::Little);
        assert_eq!("BE".parse::<LaneOrder>().unwrap(), LaneOrder::Big);
        assert_eq!(" native ".parse::<LaneOrder>().unwrap(), LaneOrder::Native);
        assert!("middle".parse::<LaneOrder>().is_err());
        assert_ne!(LaneOrder::Native.resolve(), LaneOrder::Native);
    }

    #[test]
    fn test_word_width_parse() {
        assert_eq!("64".parse::<WordWidth>().unwrap(), WordWidth::W64);
        assert_eq!("u32".parse::<WordWidth>().unwrap(), WordWidth::W32);
        assert_eq!("W64".parse::<WordWidth>().unwrap(), WordWidth::W64);

        let err = "16".parse::<WordWidth>().unwrap_err();
        assert_eq!(err.category(), "unsupported");
        let err = "wide".parse::<WordWidth>().unwrap_err();
        assert_eq!(err.category(), "data");
    }

    #[test]
    fn test_word_width_native() {
        let native = WordWidth::native();
        assert_eq!(native.bits() as usize, usize::BITS.max(32) as usize);
        assert_eq!(lanes::<u16, u64>(), 4);
        assert_eq!(lanes::<u16, u32>(), 2);
        assert_eq!(lanes::<u8, u64>(), 8);
    }
}
