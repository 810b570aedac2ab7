// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bitmap pre-filter in front of an exact map.
//!
//! Each tabulated power sets the bit at `mix(power) & (bits - 1)`. A probe
//! whose bit is clear cannot be a power and is rejected without touching the
//! map. Several powers may share a bit, so a set bit only means "maybe" and
//! the exact map settles it. For N = 150 and 2^17 bits nearly every probe is
//! rejected by the bitmap alone.

use super::{ExactMap, MembershipIndex, Probe, Strategy};
use crate::error::SearchError;
use crate::memo::hash::{checked_size, slot};
use crate::memo::{Bitmap, PowerTable};
use crate::power::WidePower;

#[derive(Debug, Clone)]
pub struct BitmapFiltered<W> {
    bitmap: Bitmap,
    exact: ExactMap<W>,
}

impl<W: WidePower> BitmapFiltered<W> {
    /// Build the filter with `bits` bits.
    ///
    /// Fails with [`SearchError::BitmapSizeNotPowerOfTwo`] unless `bits` is
    /// a power of two.
    pub fn new(table: &PowerTable<W>, bits: usize) -> Result<Self, SearchError> {
        let bits = checked_size(bits)?;
        let mut bitmap = Bitmap::new(bits);
        for (_, power) in table.iter() {
            bitmap.insert(slot(power, bits));
        }
        Ok(Self {
            bitmap,
            exact: ExactMap::new(table),
        })
    }

    /// Fraction of bits set; the false-positive rate for random sums.
    pub fn occupancy(&self) -> f64 {
        self.bitmap.count_ones() as f64 / self.bitmap.size() as f64
    }
}

impl<W: WidePower> MembershipIndex<W> for BitmapFiltered<W> {
    #[inline]
    fn probe(&self, sum: W, _hint: &mut usize) -> Probe {
        if !self.bitmap.contains(slot(sum, self.bitmap.size())) {
            return Probe::Rejected;
        }
        match self.exact.get(sum) {
            Some(base) => Probe::Hit(base),
            None => Probe::Miss,
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::BitmapFiltered
    }
}
