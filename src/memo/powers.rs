// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Table of fifth powers.
//!
//! The table holds `x^5` for every `x` in `0..N`. Entry `x` is the power of
//! base `x`, so a table index and a base are the same number throughout the
//! crate. Entries are strictly increasing, which the range-scan lookup
//! relies on.
//!
//! # Memory
//!
//! - Size: N × width bytes (≈ 1.4 MB for N = 86000 with `u128`)
//! - Built once at driver construction, never modified

use tracing::debug;

use crate::error::SearchError;
use crate::power::WidePower;

/// Fifth powers of `0..N`, indexed by base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerTable<W> {
    powers: Vec<W>,
}

impl<W: WidePower> PowerTable<W> {
    /// Compute `x^5` for `x` in `0..bound`.
    ///
    /// Fails with [`SearchError::BoundTooLarge`] before allocating if the
    /// bound exceeds the capacity of `W`, and with [`SearchError::Overflow`]
    /// if a power cannot be represented.
    pub fn build(bound: usize) -> Result<Self, SearchError> {
        let capacity = W::capacity();
        if bound > capacity {
            return Err(SearchError::BoundTooLarge {
                bound,
                capacity,
                width: W::WIDTH,
            });
        }

        let mut powers = Vec::with_capacity(bound);
        for base in 0..bound as u64 {
            let power = W::checked_fifth(base).ok_or(SearchError::Overflow { base })?;
            powers.push(power);
        }

        debug!(bound, width = %W::WIDTH, "built power table");

        Ok(Self { powers })
    }

    /// Power of `base`.
    #[inline]
    pub fn get(&self, base: usize) -> W {
        self.powers[base]
    }

    /// The bound `N` (one past the largest base).
    #[inline]
    pub fn bound(&self) -> usize {
        self.powers.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[W] {
        &self.powers
    }

    /// Largest tabulated power, if any.
    pub fn max_value(&self) -> Option<W> {
        self.powers.last().copied()
    }

    /// Iterate `(base, power)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, W)> + '_ {
        self.powers.iter().copied().enumerate()
    }
}
