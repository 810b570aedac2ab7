// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact hash map lookup.

use std::collections::HashMap;

use super::{MembershipIndex, Probe, Strategy};
use crate::memo::PowerTable;
use crate::power::WidePower;

/// Hash map from every tabulated power to its base.
///
/// Keys are unique because fifth powers of distinct non-negative integers
/// are distinct.
#[derive(Debug, Clone)]
pub struct ExactMap<W> {
    bases: HashMap<W, usize>,
}

impl<W: WidePower> ExactMap<W> {
    pub fn new(table: &PowerTable<W>) -> Self {
        let mut bases = HashMap::with_capacity(table.len() + 1);
        for (base, power) in table.iter() {
            bases.insert(power, base);
        }
        Self { bases }
    }

    /// Base of `sum`, without touching any hint.
    #[inline]
    pub fn get(&self, sum: W) -> Option<usize> {
        self.bases.get(&sum).copied()
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl<W: WidePower> MembershipIndex<W> for ExactMap<W> {
    #[inline]
    fn probe(&self, sum: W, _hint: &mut usize) -> Probe {
        match self.get(sum) {
            Some(base) => Probe::Hit(base),
            None => Probe::Miss,
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::ExactMap
    }
}
