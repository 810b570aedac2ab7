// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wide unsigned integers for fifth powers.
//!
//! Fifth powers grow quickly: a `u64` holds them only up to about 7131^5,
//! and the Frye counterexample (85359^5 ≈ 4.5 × 10^24) needs 128 bits. The search is
//! generic over [`WidePower`], and [`Width`] selects the concrete type at run
//! time.
//!
//! # Capacity
//!
//! The enumerator adds four table entries, so a width admits a bound `N` only
//! if `4 · (N-1)^5` is representable. [`WidePower::capacity`] returns the
//! largest such `N`.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Add;

use strum_macros::{Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Number of terms on the left-hand side of the equation.
pub const TERMS: u64 = 4;

/// An unsigned integer wide enough to hold a sum of four fifth powers.
pub trait WidePower:
    Copy + Ord + Eq + Hash + Debug + Display + Add<Output = Self> + Send + Sync + 'static
{
    /// The matching [`Width`] selector.
    const WIDTH: Width;

    /// Zero.
    const ZERO: Self;

    /// Lossless conversion from a base.
    fn from_base(base: u64) -> Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// The value as two 64-bit words, low word first.
    fn words(self) -> [u64; 2];

    /// `base^5`, or `None` on overflow.
    fn checked_fifth(base: u64) -> Option<Self> {
        let x = Self::from_base(base);
        x.checked_mul(x)?
            .checked_mul(x)?
            .checked_mul(x)?
            .checked_mul(x)
    }

    /// Largest bound `N` such that the sum of four powers below `N` fits.
    fn capacity() -> usize {
        let fits = |n: u64| {
            n == 0
                || Self::checked_fifth(n - 1)
                    .and_then(|p| p.checked_mul(Self::from_base(TERMS)))
                    .is_some()
        };

        // Binary search for the last n that fits; 2^32 never fits in 128 bits.
        let (mut lo, mut hi) = (0u64, 1u64 << 32);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if fits(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo as usize
    }
}

macro_rules! impl_wide_power {
    ($ty:ty, $width:expr, |$v:ident| $words:expr) => {
        impl WidePower for $ty {
            const WIDTH: Width = $width;
            const ZERO: Self = 0;

            #[inline]
            fn from_base(base: u64) -> Self {
                base as $ty
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_mul(self, rhs)
            }

            #[inline]
            fn words(self) -> [u64; 2] {
                let $v = self;
                $words
            }
        }
    };
}

impl_wide_power!(u64, Width::U64, |v| [v, 0]);
impl_wide_power!(u128, Width::U128, |v| [v as u64, (v >> 64) as u64]);

/// Run-time choice of the integer width used for powers and sums.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Width {
    /// Narrowest width whose capacity admits the bound.
    #[default]
    Auto,
    U64,
    U128,
}

impl Width {
    /// The narrowest concrete width that admits `bound`, if any.
    pub fn for_bound(bound: usize) -> Option<Width> {
        if bound <= u64::capacity() {
            Some(Width::U64)
        } else if bound <= u128::capacity() {
            Some(Width::U128)
        } else {
            None
        }
    }

    /// Capacity of a concrete width. `Auto` reports the widest capacity.
    pub fn capacity(self) -> usize {
        match self {
            Width::U64 => u64::capacity(),
            Width::U128 | Width::Auto => u128::capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifth_powers() {
        assert_eq!(u64::checked_fifth(0), Some(0));
        assert_eq!(u64::checked_fifth(2), Some(32));
        assert_eq!(u64::checked_fifth(144), Some(61_917_364_224));
        assert_eq!(
            u128::checked_fifth(85_359),
            Some(4_531_548_087_264_753_520_490_799)
        );
        assert_eq!(u64::checked_fifth(85_359), None);
    }

    #[test]
    fn test_u64_capacity_is_tight() {
        let cap = u64::capacity() as u64;
        let top = u64::checked_fifth(cap - 1).unwrap();
        assert!(top.checked_mul(4).is_some());
        let over = u64::checked_fifth(cap).and_then(|p| p.checked_mul(4));
        assert!(over.is_none());
        assert!(cap < 7131);
    }

    #[test]
    fn test_u128_capacity_admits_frye_bound() {
        assert!(u128::capacity() > 86_000);
        let cap = u128::capacity() as u64;
        assert!(u128::checked_fifth(cap)
            .and_then(|p| p.checked_mul(4))
            .is_none());
    }

    #[test]
    fn test_width_for_bound() {
        assert_eq!(Width::for_bound(150), Some(Width::U64));
        assert_eq!(Width::for_bound(86_000), Some(Width::U128));
        assert_eq!(Width::for_bound(u128::capacity() + 1), None);
    }

    #[test]
    fn test_words() {
        assert_eq!(7u64.words(), [7, 0]);
        let v: u128 = (3u128 << 64) | 5;
        assert_eq!(v.words(), [5, 3]);
    }

    #[test]
    fn test_width_parses() {
        assert_eq!("u128".parse::<Width>().unwrap(), Width::U128);
        assert_eq!(Width::U64.to_string(), "u64");
    }
}
