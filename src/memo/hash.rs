// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-pattern hash and fixed-size bitmap for the hashed membership filters.
//!
//! # Hash
//!
//! [`mix`] folds both 64-bit words of a value and runs the SplitMix64
//! finalizer over the result. It depends only on the numeric value, so two
//! runs (or two widths holding the same number) always agree.

use crate::error::SearchError;
use crate::power::WidePower;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Hash a power value to 64 well-mixed bits.
#[inline]
pub fn mix<W: WidePower>(value: W) -> u64 {
    let [low, high] = value.words();
    let mut z = low ^ high.wrapping_mul(GOLDEN_GAMMA).rotate_left(29);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Reduce a hash to a slot in a table of `size` entries (`size` is 2^k).
#[inline]
pub fn slot<W: WidePower>(value: W, size: usize) -> usize {
    debug_assert!(size.is_power_of_two());
    (mix(value) as usize) & (size - 1)
}

/// Accept `size` as a slot count only if it is a power of two.
pub fn checked_size(size: usize) -> Result<usize, SearchError> {
    if size.is_power_of_two() {
        Ok(size)
    } else {
        Err(SearchError::BitmapSizeNotPowerOfTwo { bits: size })
    }
}

/// Fixed-size bit array. Bits are only ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    bits: usize,
    words: Vec<u64>,
}

impl Bitmap {
    /// An all-zero bitmap of `bits` bits. `bits` must be a power of two.
    pub fn new(bits: usize) -> Self {
        debug_assert!(bits.is_power_of_two());
        Self {
            bits,
            words: vec![0; bits.div_ceil(u64::BITS as usize)],
        }
    }

    /// Number of bits.
    #[inline]
    pub fn size(&self) -> usize {
        self.bits
    }

    #[inline]
    pub fn insert(&mut self, bit: usize) {
        let (word, mask) = locate(bit);
        self.words[word] |= mask;
    }

    #[inline]
    pub fn contains(&self, bit: usize) -> bool {
        let (word, mask) = locate(bit);
        self.words[word] & mask != 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[inline]
fn locate(bit: usize) -> (usize, u64) {
    (bit >> 6, 1u64 << (bit & 63))
}
