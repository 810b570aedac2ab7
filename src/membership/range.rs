// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Forward scan over the sorted power table.
//!
//! For a fixed outer triple the probed sums grow with `i0`, and the table is
//! strictly increasing, so the scan position never has to move backwards.
//! The hint carries the position from one probe to the next:
//!
//! - `table[hint] == sum`: found, hint stays put
//! - `table[hint] > sum`: no match, hint stays put
//! - `table[hint] < sum`: advance the hint and look again
//!
//! Each table entry is passed at most once per outer triple, so the cost is
//! amortized over the inner loop.

use super::{MembershipIndex, Probe, Strategy};
use crate::memo::PowerTable;
use crate::power::WidePower;

#[derive(Debug, Clone, Copy)]
pub struct RangeScan<'t, W> {
    table: &'t PowerTable<W>,
}

impl<'t, W: WidePower> RangeScan<'t, W> {
    pub fn new(table: &'t PowerTable<W>) -> Self {
        Self { table }
    }
}

impl<W: WidePower> MembershipIndex<W> for RangeScan<'_, W> {
    #[inline]
    fn probe(&self, sum: W, hint: &mut usize) -> Probe {
        let powers = self.table.as_slice();
        while let Some(&power) = powers.get(*hint) {
            if power == sum {
                return Probe::Hit(*hint);
            }
            if power > sum {
                return Probe::Miss;
            }
            *hint += 1;
        }
        Probe::Miss
    }

    fn strategy(&self) -> Strategy {
        Strategy::RangeScan
    }
}
