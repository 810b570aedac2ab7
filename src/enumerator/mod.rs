// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Odometer traversal of non-decreasing base quadruples.
//!
//! The enumerator visits every `(i0, i1, i2, i3)` with
//! `2 <= i3 <= i2 <= i1 <= i0 < N` exactly once. `i0` turns fastest; when it
//! runs off the end it carries into `i1`, then `i2`, then `i3`, and every
//! index to the left of the carry restarts at the carried value:
//!
//! ```text
//! (2,2,2,2) (3,2,2,2) ... (N-1,2,2,2)
//! (3,3,2,2) (4,3,2,2) ... (N-1,N-1,2,2)
//! (3,3,3,2) ...
//! ...
//! (N-1,N-1,N-1,N-1)
//! ```
//!
//! Bases 0 and 1 are never used.
//!
//! # Partial sum
//!
//! The powers of the outer triple `(i1, i2, i3)` are summed once when the
//! triple changes. An inner step then costs a single addition.
//!
//! # Scan hint
//!
//! Whenever the outer triple changes the hint is reset to
//! `max(i1, i2, i3, 2)`. Any root of the sum is larger than `i0 >= i1`, so no
//! entry below that can match for this triple or any later one.

use crate::memo::PowerTable;
use crate::power::WidePower;

/// Smallest base that takes part in a quadruple.
pub const FIRST_BASE: usize = 2;

/// Position of the enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadruple {
    /// Inner, fastest-varying, largest index.
    pub i0: usize,
    pub i1: usize,
    pub i2: usize,
    /// Outermost, slowest-varying, smallest index.
    pub i3: usize,
}

impl Quadruple {
    pub const fn new(i0: usize, i1: usize, i2: usize, i3: usize) -> Self {
        Self { i0, i1, i2, i3 }
    }

    /// Bases in ascending order.
    pub fn ascending(&self) -> [usize; 4] {
        [self.i3, self.i2, self.i1, self.i0]
    }

    /// The outer triple `(i1, i2, i3)`.
    pub fn outer(&self) -> [usize; 3] {
        [self.i1, self.i2, self.i3]
    }

    /// Product of the four bases, used to order roots found by separate
    /// workers.
    pub fn product(&self) -> u128 {
        self.ascending().iter().map(|&b| b as u128).product()
    }
}

impl std::fmt::Display for Quadruple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}^5 + {}^5 + {}^5 + {}^5",
            self.i3, self.i2, self.i1, self.i0
        )
    }
}

/// What changed on the last [`Enumerator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Only `i0` moved.
    Inner,

    /// A carry moved the outer triple; partial sum and hint were reset.
    Outer,

    /// `i3` ran past the bound. No further positions.
    Exhausted,
}

/// Odometer over base quadruples with a cached outer partial sum.
#[derive(Debug, Clone)]
pub struct Enumerator<'t, W> {
    table: &'t PowerTable<W>,
    position: Quadruple,
    partial: W,
    hint: usize,
    exhausted: bool,
}

impl<'t, W: WidePower> Enumerator<'t, W> {
    /// Start at `(2, 2, 2, 2)`. Tables with `N <= 2` start exhausted.
    pub fn new(table: &'t PowerTable<W>) -> Self {
        let mut enumerator = Self {
            table,
            position: Quadruple::new(FIRST_BASE, FIRST_BASE, FIRST_BASE, FIRST_BASE),
            partial: W::ZERO,
            hint: FIRST_BASE,
            exhausted: table.bound() <= FIRST_BASE,
        };
        if !enumerator.exhausted {
            enumerator.reset_outer();
        }
        enumerator
    }

    /// Current position, or `None` once exhausted.
    #[inline]
    pub fn current(&self) -> Option<Quadruple> {
        (!self.exhausted).then_some(self.position)
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Sum of the four powers at the current position.
    ///
    /// Meaningless once exhausted.
    #[inline]
    pub fn current_sum(&self) -> W {
        self.partial + self.table.get(self.position.i0)
    }

    /// Cached `P[i1] + P[i2] + P[i3]`.
    #[inline]
    pub fn partial_sum(&self) -> W {
        self.partial
    }

    /// The range-scan hint for the current outer triple.
    #[inline]
    pub fn hint_mut(&mut self) -> &mut usize {
        &mut self.hint
    }

    #[inline]
    pub fn hint(&self) -> usize {
        self.hint
    }

    /// Move to the next quadruple.
    pub fn advance(&mut self) -> Step {
        if self.exhausted {
            return Step::Exhausted;
        }

        let n = self.table.bound();
        let q = &mut self.position;

        q.i0 += 1;
        if q.i0 < n {
            return Step::Inner;
        }

        q.i1 += 1;
        q.i0 = q.i1;
        if q.i1 >= n {
            q.i2 += 1;
            q.i1 = q.i2;
            q.i0 = q.i2;
        }
        if q.i2 >= n {
            q.i3 += 1;
            q.i2 = q.i3;
            q.i1 = q.i3;
            q.i0 = q.i3;
        }
        if q.i3 >= n {
            self.exhausted = true;
            return Step::Exhausted;
        }

        self.reset_outer();
        Step::Outer
    }

    fn reset_outer(&mut self) {
        let q = self.position;
        self.partial = self.table.get(q.i1) + self.table.get(q.i2) + self.table.get(q.i3);
        self.hint = q.i1.max(q.i2).max(q.i3).max(FIRST_BASE);
    }
}

impl<W: WidePower> Iterator for Enumerator<'_, W> {
    type Item = Quadruple;

    fn next(&mut self) -> Option<Quadruple> {
        let current = self.current()?;
        self.advance();
        Some(current)
    }
}

/// Number of quadruples an enumerator over `bound` visits: C(N-2+3, 4).
pub fn quadruple_count(bound: usize) -> u128 {
    if bound <= FIRST_BASE {
        return 0;
    }
    let m = (bound - FIRST_BASE) as u128;
    m * (m + 1) * (m + 2) * (m + 3) / 24
}
