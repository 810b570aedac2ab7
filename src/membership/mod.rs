// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Membership tests: is a candidate sum some tabulated `x^5`, and which `x`?
//!
//! Four interchangeable strategies implement [`MembershipIndex`]. They agree
//! on every answer and differ only in cost:
//!
//! | Strategy          | Extra memory            | Per-probe cost                  |
//! |-------------------|-------------------------|---------------------------------|
//! | `ExactMap`        | hash map                | one hash map lookup             |
//! | `BitmapFiltered`  | bitmap + hash map       | one bit test, map on a set bit  |
//! | `BucketHash`      | bucket array            | one bucket scan                 |
//! | `RangeScan`       | none (borrows the table)| amortized forward scan from hint|
//!
//! # Hints
//!
//! Every probe receives a mutable hint, the lowest base not yet ruled out
//! for the current outer triple. Only `RangeScan` reads or advances it; the
//! enumerator resets it when the outer triple changes.
//!
//! # Example
//!
//! ```
//! use euler_search::memo::PowerTable;
//! use euler_search::membership::{MembershipIndex, RangeScan};
//!
//! let table = PowerTable::<u64>::build(150).unwrap();
//! let index = RangeScan::new(&table);
//! let sum = table.get(27) + table.get(84) + table.get(110) + table.get(133);
//! let mut hint = 133;
//! assert_eq!(index.lookup(sum, &mut hint), Some(144));
//! ```

pub mod bitmap;
pub mod bucket;
pub mod exact;
pub mod range;

pub use bitmap::BitmapFiltered;
pub use bucket::BucketHash;
pub use exact::ExactMap;
pub use range::RangeScan;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::power::WidePower;

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Turned away by the strategy's cheap pre-filter.
    Rejected,

    /// Passed (or had no) pre-filter, but is not a tabulated power.
    Miss,

    /// The sum is `base^5`.
    Hit(usize),
}

impl Probe {
    #[inline]
    pub fn base(self) -> Option<usize> {
        match self {
            Probe::Hit(base) => Some(base),
            Probe::Rejected | Probe::Miss => None,
        }
    }

    /// Whether the probe got past the pre-filter.
    #[inline]
    pub fn passed_filter(self) -> bool {
        !matches!(self, Probe::Rejected)
    }
}

/// Maps a candidate sum back to its fifth root, if it has one in the table.
pub trait MembershipIndex<W: WidePower> {
    /// Probe `sum`, reporting whether a pre-filter rejected it.
    ///
    /// Strategies without a pre-filter never return [`Probe::Rejected`].
    fn probe(&self, sum: W, hint: &mut usize) -> Probe;

    /// Base whose fifth power equals `sum`, or `None`.
    #[inline]
    fn lookup(&self, sum: W, hint: &mut usize) -> Option<usize> {
        self.probe(sum, hint).base()
    }

    /// Strategy name (for logging).
    fn strategy(&self) -> Strategy;
}

/// Run-time choice of membership strategy.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Hash map from power to base.
    ExactMap,

    /// Bitmap pre-filter in front of the hash map.
    #[default]
    BitmapFiltered,

    /// Hand-managed buckets selected by the bitmap hash.
    BucketHash,

    /// Forward scan over the sorted table starting at the hint.
    RangeScan,
}

impl Strategy {
    /// Whether the strategy needs `bitmap_bits`.
    pub fn is_hashed(self) -> bool {
        matches!(self, Strategy::BitmapFiltered | Strategy::BucketHash)
    }
}
