// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force search for counterexamples to Euler's sum of powers
//! conjecture for fifth powers.
//!
//! Euler conjectured that at least k k-th powers are needed to sum to a k-th
//! power. Lander and Parkin disproved it in 1966 with
//! `27^5 + 84^5 + 110^5 + 133^5 = 144^5`; Frye found
//! `55^5 + 3183^5 + 28969^5 + 85282^5 = 85359^5` in 2004. This crate
//! enumerates every quadruple of bases below a bound `N`, checks whether the
//! sum of their fifth powers is itself a fifth power, and reports the hits.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Built once before the search and never changed:
//! - [`memo::PowerTable`] - `x^5` for `x` in `0..N`
//! - A [`membership::MembershipIndex`] over the table (hash map, bitmap
//!   filter, hash buckets, or nothing extra for range scans)
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Changed on every iteration:
//! - [`enumerator::Enumerator`] - the four indices, the cached outer sum and
//!   the range-scan hint
//! - [`state::DuplicateFilter`] - primitive roots found so far
//! - [`state::Statistics`] - counters
//!
//! # Search Algorithm
//!
//! 1. Build the power table for the configured width (`u64` or `u128`)
//! 2. Build the membership index for the configured strategy
//! 3. Walk all quadruples `2 <= i3 <= i2 <= i1 <= i0 < N`, `i0` fastest
//! 4. Probe each sum; a hit whose root is not a multiple of an earlier root
//!    is reported as a match
//!
//! # Parallelization
//!
//! The MEMO tier is read-only, so the outer index `i3` could be split across
//! workers. The duplicate filter depends on discovery order, so roots would
//! have to be merged in a fixed order (for instance by
//! [`enumerator::Quadruple::product`]) before filtering. The search here is
//! single-threaded.
//!
//! # Example
//!
//! ```
//! use euler_search::{search, MatchEvent, NoProgress, SearchConfig};
//!
//! let mut found: Vec<MatchEvent> = Vec::new();
//! search(&SearchConfig::new(150), &mut found, &mut NoProgress).unwrap();
//! assert_eq!(found[0].root, 144);
//! ```

pub mod config;
pub mod engine;
pub mod enumerator;
pub mod error;
pub mod membership;
pub mod memo;
pub mod power;
pub mod state;

// Re-export commonly used types
pub use config::SearchConfig;
pub use engine::{
    search, LogSink, MatchEvent, NoProgress, ProgressEvent, ProgressSink, ResultSink,
    SearchDriver, SearchSummary,
};
pub use enumerator::{Enumerator, Quadruple};
pub use error::SearchError;
pub use membership::{MembershipIndex, Strategy};
pub use memo::PowerTable;
pub use power::{WidePower, Width};
