// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::error::SearchError;
use crate::membership::Strategy;
use crate::power::Width;

/// Bound that covers the Lander & Parkin counterexample (root 144).
pub const DEFAULT_BOUND: usize = 150;

/// Default bitmap / bucket array size.
pub const DEFAULT_BITMAP_BITS: usize = 1 << 17;

/// Default number of iterations between progress events.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1 << 22;

/// Everything needed to run one search, resolved before the core starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Table bound `N`: bases are drawn from `2..N`, roots from `0..N`.
    pub bound: usize,

    /// Integer width for powers and sums.
    pub width: Width,

    /// Membership test used for each candidate sum.
    pub strategy: Strategy,

    /// Bitmap bits (`BitmapFiltered`) or bucket count (`BucketHash`).
    /// Must be a power of two.
    pub bitmap_bits: usize,

    /// Iterations between progress events; 0 disables them.
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            width: Width::Auto,
            strategy: Strategy::default(),
            bitmap_bits: DEFAULT_BITMAP_BITS,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SearchConfig {
    pub fn new(bound: usize) -> Self {
        Self {
            bound,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn with_bitmap_bits(mut self, bits: usize) -> Self {
        self.bitmap_bits = bits;
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Check the configuration and resolve `Width::Auto`.
    ///
    /// Returns the concrete width the search will run with.
    pub fn validate(&self) -> Result<Width, SearchError> {
        if self.strategy.is_hashed() && !self.bitmap_bits.is_power_of_two() {
            return Err(SearchError::BitmapSizeNotPowerOfTwo {
                bits: self.bitmap_bits,
            });
        }

        let width = match self.width {
            Width::Auto => Width::for_bound(self.bound).unwrap_or(Width::U128),
            concrete => concrete,
        };
        let capacity = width.capacity();
        if self.bound > capacity {
            return Err(SearchError::BoundTooLarge {
                bound: self.bound,
                capacity,
                width,
            });
        }
        Ok(width)
    }
}
