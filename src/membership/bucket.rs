// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hand-managed hash buckets.
//!
//! Uses the same slot function as the bitmap filter, but each slot holds the
//! `(power, base)` pairs that landed there. Pairs are pushed in table order,
//! so every bucket is sorted by power and a scan can stop at the first entry
//! larger than the probe.

use super::{MembershipIndex, Probe, Strategy};
use crate::error::SearchError;
use crate::memo::hash::{checked_size, slot};
use crate::memo::PowerTable;
use crate::power::WidePower;

#[derive(Debug, Clone)]
pub struct BucketHash<W> {
    buckets: Vec<Vec<(W, usize)>>,
}

impl<W: WidePower> BucketHash<W> {
    /// Build `size` buckets. `size` must be a power of two.
    pub fn new(table: &PowerTable<W>, size: usize) -> Result<Self, SearchError> {
        let size = checked_size(size)?;
        let mut buckets = vec![Vec::new(); size];
        for (base, power) in table.iter() {
            buckets[slot(power, size)].push((power, base));
        }
        Ok(Self { buckets })
    }

    /// Length of the longest bucket.
    pub fn max_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl<W: WidePower> MembershipIndex<W> for BucketHash<W> {
    #[inline]
    fn probe(&self, sum: W, _hint: &mut usize) -> Probe {
        let bucket = &self.buckets[slot(sum, self.buckets.len())];
        if bucket.is_empty() {
            return Probe::Rejected;
        }
        for &(power, base) in bucket {
            if power == sum {
                return Probe::Hit(base);
            }
            if power > sum {
                break;
            }
        }
        Probe::Miss
    }

    fn strategy(&self) -> Strategy {
        Strategy::BucketHash
    }
}
