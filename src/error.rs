// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuring and preparing a search.
//!
//! Once the power table and membership index exist, nothing in the search
//! can fail: lookups always answer, enumeration is finite, and the duplicate
//! filter accepts any sequence of roots.

use thiserror::Error;

use crate::power::Width;

/// Errors detected before the search loop starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The bound is too large for the selected integer width.
    #[error("bound {bound} exceeds capacity {capacity} of width {width}")]
    BoundTooLarge {
        bound: usize,
        capacity: usize,
        width: Width,
    },

    /// Bitmap filters index bits with a mask, so the size must be 2^k.
    #[error("bitmap size {bits} is not a power of two")]
    BitmapSizeNotPowerOfTwo { bits: usize },

    /// A driver was built for one width while the configuration asks for
    /// another.
    #[error("configuration requests width {requested} but the driver uses {driver}")]
    WidthMismatch { requested: Width, driver: Width },

    /// Checked arithmetic overflowed while building the power table.
    #[error("overflow computing {base}^5")]
    Overflow { base: u64 },
}
