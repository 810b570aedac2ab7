// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search driver.
//!
//! The driver owns the power table, builds the configured membership index
//! over it, and runs the enumerator to exhaustion. For every quadruple it
//! probes the index with the quadruple's sum; hits go through the duplicate
//! filter and out to the result sink.
//!
//! # Architecture
//!
//! ```text
//! SearchConfig ──validate──▶ Width ──▶ SearchDriver<W>
//!                                        ├─ PowerTable<W>       (owned, immutable)
//!                                        ├─ MembershipIndex<W>  (built per run, borrows table)
//!                                        ├─ Enumerator<W>       (borrows table)
//!                                        ├─ DuplicateFilter
//!                                        └─ Statistics
//! ```
//!
//! Width and strategy are resolved at run time; the inner loop is
//! monomorphized for each (width, strategy) pair.
//!
//! # Example
//!
//! ```
//! use euler_search::config::SearchConfig;
//! use euler_search::engine::{search, MatchEvent, NoProgress};
//!
//! let mut found: Vec<MatchEvent> = Vec::new();
//! let summary = search(&SearchConfig::new(20), &mut found, &mut NoProgress).unwrap();
//! assert!(found.is_empty());
//! assert_eq!(summary.iterations(), 5985);
//! ```

pub mod events;

pub use events::{LogSink, MatchEvent, NoProgress, ProgressEvent, ProgressSink, ResultSink};

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::enumerator::Enumerator;
use crate::error::SearchError;
use crate::memo::PowerTable;
use crate::membership::{
    BitmapFiltered, BucketHash, ExactMap, MembershipIndex, Probe, RangeScan, Strategy,
};
use crate::power::{WidePower, Width};
use crate::state::{Counters, DuplicateFilter, Statistics};

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub bound: usize,
    pub width: Width,
    pub strategy: Strategy,
    pub statistics: Statistics,
    /// Primitive roots in discovery order.
    pub roots: Vec<usize>,
    pub elapsed: Duration,
}

impl SearchSummary {
    pub fn iterations(&self) -> u64 {
        self.statistics.get(Counters::Iterations)
    }

    pub fn hits(&self) -> u64 {
        self.statistics.get(Counters::Hits)
    }

    /// Iterations per millisecond.
    pub fn throughput(&self) -> Option<u64> {
        events::per_millisecond(self.iterations(), self.elapsed)
    }

    /// Iterations per probe that passed the pre-filter.
    pub fn filter_ratio(&self) -> Option<u64> {
        self.statistics.filter_ratio()
    }
}

/// Owns the power table for one configuration and runs searches over it.
#[derive(Debug, Clone)]
pub struct SearchDriver<W> {
    config: SearchConfig,
    table: PowerTable<W>,
}

impl<W: WidePower> SearchDriver<W> {
    /// Validate `config` and build the power table.
    ///
    /// An explicit width in `config` must match `W`. `Width::Auto` accepts
    /// any `W` whose capacity admits the bound.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let resolved = config.validate()?;
        if config.width != Width::Auto && resolved != W::WIDTH {
            return Err(SearchError::WidthMismatch {
                requested: resolved,
                driver: W::WIDTH,
            });
        }

        let started = Instant::now();
        let table = PowerTable::build(config.bound)?;
        info!(
            bound = config.bound,
            width = %W::WIDTH,
            elapsed = ?started.elapsed(),
            "power table ready"
        );

        Ok(Self { config, table })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn table(&self) -> &PowerTable<W> {
        &self.table
    }

    /// Build the configured membership index and search the whole range.
    pub fn run<R, P>(
        &self,
        results: &mut R,
        progress: &mut P,
    ) -> Result<SearchSummary, SearchError>
    where
        R: ResultSink + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let bits = self.config.bitmap_bits;
        let summary = match self.config.strategy {
            Strategy::ExactMap => self.run_with(&ExactMap::new(&self.table), results, progress),
            Strategy::BitmapFiltered => {
                let index = BitmapFiltered::new(&self.table, bits)?;
                debug!(bits, occupancy = index.occupancy(), "bitmap filter ready");
                self.run_with(&index, results, progress)
            }
            Strategy::BucketHash => {
                let index = BucketHash::new(&self.table, bits)?;
                debug!(buckets = bits, max_chain = index.max_chain(), "buckets ready");
                self.run_with(&index, results, progress)
            }
            Strategy::RangeScan => self.run_with(&RangeScan::new(&self.table), results, progress),
        };
        Ok(summary)
    }

    /// Search the whole range with a caller-supplied index.
    pub fn run_with<M, R, P>(&self, index: &M, results: &mut R, progress: &mut P) -> SearchSummary
    where
        M: MembershipIndex<W> + ?Sized,
        R: ResultSink + ?Sized,
        P: ProgressSink + ?Sized,
    {
        info!(
            bound = self.config.bound,
            width = %W::WIDTH,
            strategy = %index.strategy(),
            "starting search"
        );

        let started = Instant::now();
        let mut stats = Statistics::new();
        let mut filter = DuplicateFilter::new();
        let mut enumerator = Enumerator::new(&self.table);

        let interval = self.config.progress_interval;
        let mut until_progress = interval;

        while let Some(quadruple) = enumerator.current() {
            let sum = enumerator.current_sum();
            stats.increment(Counters::Iterations);

            let probe = index.probe(sum, enumerator.hint_mut());
            if probe.passed_filter() {
                stats.increment(Counters::FilterPasses);
            }
            if let Probe::Hit(root) = probe {
                stats.increment(Counters::Hits);
                let event = MatchEvent {
                    quadruple,
                    root,
                    elapsed: started.elapsed(),
                    iterations: stats.get(Counters::Iterations),
                };
                if filter.admit(root) {
                    stats.increment(Counters::Primitive);
                    results.on_match(&event);
                } else {
                    stats.increment(Counters::Duplicates);
                    results.on_duplicate(&event);
                }
            }

            if interval > 0 {
                until_progress -= 1;
                if until_progress == 0 {
                    until_progress = interval;
                    progress.on_progress(&ProgressEvent {
                        iterations: stats.get(Counters::Iterations),
                        elapsed: started.elapsed(),
                        position: quadruple,
                        hits: stats.get(Counters::Hits),
                        filter_passes: stats.get(Counters::FilterPasses),
                    });
                }
            }

            enumerator.advance();
        }

        let summary = SearchSummary {
            bound: self.config.bound,
            width: W::WIDTH,
            strategy: index.strategy(),
            statistics: stats,
            roots: filter.into_roots(),
            elapsed: started.elapsed(),
        };
        info!(
            elapsed = ?summary.elapsed,
            roots = ?summary.roots,
            "search complete: {}",
            summary.statistics
        );
        summary
    }
}

/// Resolve the width in `config`, build a driver for it, and search.
pub fn search<R, P>(
    config: &SearchConfig,
    results: &mut R,
    progress: &mut P,
) -> Result<SearchSummary, SearchError>
where
    R: ResultSink + ?Sized,
    P: ProgressSink + ?Sized,
{
    match config.validate()? {
        Width::U64 => SearchDriver::<u64>::new(config.clone())?.run(results, progress),
        Width::U128 | Width::Auto => {
            SearchDriver::<u128>::new(config.clone())?.run(results, progress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::{quadruple_count, Quadruple};

    /// Counts duplicates as well as matches.
    #[derive(Default)]
    struct Recorder {
        matches: Vec<MatchEvent>,
        duplicates: Vec<MatchEvent>,
    }

    impl ResultSink for Recorder {
        fn on_match(&mut self, event: &MatchEvent) {
            self.matches.push(*event);
        }

        fn on_duplicate(&mut self, event: &MatchEvent) {
            self.duplicates.push(*event);
        }
    }

    /// Index that reports a fixed root at chosen positions of the traversal.
    struct Planted {
        at: Vec<u64>,
        roots: Vec<usize>,
        calls: std::cell::Cell<u64>,
    }

    impl MembershipIndex<u64> for Planted {
        fn probe(&self, _sum: u64, _hint: &mut usize) -> Probe {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            match self.at.iter().position(|&c| c == call) {
                Some(i) => Probe::Hit(self.roots[i]),
                None => Probe::Rejected,
            }
        }

        fn strategy(&self) -> Strategy {
            Strategy::ExactMap
        }
    }

    #[test]
    fn test_iterations_match_quadruple_count() {
        let driver = SearchDriver::<u64>::new(SearchConfig::new(30)).unwrap();
        let summary = driver.run(&mut Vec::<MatchEvent>::new(), &mut NoProgress).unwrap();
        assert_eq!(summary.iterations() as u128, quadruple_count(30));
        assert_eq!(summary.hits(), 0);
        assert!(summary.roots.is_empty());
    }

    #[test]
    fn test_duplicates_are_routed_to_on_duplicate() {
        let driver = SearchDriver::<u64>::new(SearchConfig::new(10)).unwrap();
        let index = Planted {
            at: vec![3, 5, 8, 9],
            roots: vec![144, 288, 7, 21],
            calls: Default::default(),
        };
        let mut recorder = Recorder::default();
        let summary = driver.run_with(&index, &mut recorder, &mut NoProgress);

        let roots: Vec<_> = recorder.matches.iter().map(|e| e.root).collect();
        assert_eq!(roots, vec![144, 7]);
        let dups: Vec<_> = recorder.duplicates.iter().map(|e| e.root).collect();
        assert_eq!(dups, vec![288, 21]);
        assert_eq!(recorder.matches[0].iterations, 3);
        assert_eq!(recorder.matches[0].quadruple, Quadruple::new(4, 2, 2, 2));

        assert_eq!(summary.roots, vec![144, 7]);
        assert_eq!(summary.statistics.get(Counters::Hits), 4);
        assert_eq!(summary.statistics.get(Counters::Primitive), 2);
        assert_eq!(summary.statistics.get(Counters::Duplicates), 2);
        assert_eq!(summary.statistics.get(Counters::FilterPasses), 4);
    }

    #[test]
    fn test_progress_cadence() {
        let config = SearchConfig::new(12).with_progress_interval(7);
        let driver = SearchDriver::<u64>::new(config).unwrap();
        let mut progress: Vec<ProgressEvent> = Vec::new();
        let summary = driver.run(&mut Vec::<MatchEvent>::new(), &mut progress).unwrap();

        assert_eq!(progress.len() as u64, summary.iterations() / 7);
        for (k, event) in progress.iter().enumerate() {
            assert_eq!(event.iterations, 7 * (k as u64 + 1));
        }
    }

    #[test]
    fn test_progress_disabled() {
        let config = SearchConfig::new(12).with_progress_interval(0);
        let driver = SearchDriver::<u64>::new(config).unwrap();
        let mut progress: Vec<ProgressEvent> = Vec::new();
        driver.run(&mut Vec::<MatchEvent>::new(), &mut progress).unwrap();
        assert!(progress.is_empty());
    }

    #[test]
    fn test_search_rejects_bad_config() {
        let config = SearchConfig::new(10).with_bitmap_bits(3);
        let err = search(&config, &mut Vec::<MatchEvent>::new(), &mut NoProgress).unwrap_err();
        assert_eq!(err, SearchError::BitmapSizeNotPowerOfTwo { bits: 3 });
    }

    #[test]
    fn test_search_resolves_width() {
        let mut found = Vec::<MatchEvent>::new();
        let summary = search(&SearchConfig::new(10), &mut found, &mut NoProgress).unwrap();
        assert_eq!(summary.width, Width::U64);

        let config = SearchConfig::new(10).with_width(Width::U128);
        let summary = search(&config, &mut Vec::<MatchEvent>::new(), &mut NoProgress).unwrap();
        assert_eq!(summary.width, Width::U128);
    }

    #[test]
    fn test_driver_width_must_match_explicit_width() {
        let config = SearchConfig::new(10).with_width(Width::U128);
        assert_eq!(
            SearchDriver::<u64>::new(config.clone()).unwrap_err(),
            SearchError::WidthMismatch {
                requested: Width::U128,
                driver: Width::U64,
            }
        );
        let driver = SearchDriver::<u128>::new(config).unwrap();
        assert_eq!(driver.table().bound(), 10);
    }

    #[test]
    fn test_auto_width_accepts_any_wide_enough_driver() {
        assert!(SearchDriver::<u128>::new(SearchConfig::new(10)).is_ok());
        let too_big = SearchConfig::new(u64::capacity() + 1);
        assert!(matches!(
            SearchDriver::<u64>::new(too_big),
            Err(SearchError::BoundTooLarge { width: Width::U64, .. })
        ));
    }
}
