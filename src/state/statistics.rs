// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are bumped by the search loop and reported in progress events and
//! the final summary.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Quadruples probed.
    Iterations,
    /// Probes that got past the pre-filter.
    FilterPasses,
    /// Probes whose sum was a tabulated power.
    Hits,
    /// Hits admitted by the duplicate filter.
    Primitive,
    /// Hits rejected as multiples of an earlier root.
    Duplicates,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    #[inline]
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Iterations per filter pass; how much work the pre-filter saves.
    pub fn filter_ratio(&self) -> Option<u64> {
        let passes = self.get(Counters::FilterPasses);
        (passes > 0).then(|| self.get(Counters::Iterations) / passes)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Iterations);
        stats.increment(Counters::Iterations);
        stats.increment(Counters::Hits);
        assert_eq!(stats.get(Counters::Iterations), 2);
        assert_eq!(stats.get(Counters::Hits), 1);
        assert_eq!(stats.get(Counters::Duplicates), 0);
    }

    #[test]
    fn test_filter_ratio() {
        let mut stats = Statistics::new();
        assert_eq!(stats.filter_ratio(), None);
        for _ in 0..10 {
            stats.increment(Counters::Iterations);
        }
        stats.increment(Counters::FilterPasses);
        stats.increment(Counters::FilterPasses);
        assert_eq!(stats.filter_ratio(), Some(5));
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Primitive);
        assert_eq!(
            stats.to_string(),
            "iterations=0 filter_passes=0 hits=0 primitive=1 duplicates=0"
        );
    }
}
