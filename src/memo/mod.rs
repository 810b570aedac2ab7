// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data: the power table and the hash used to index it.

pub mod hash;
pub mod powers;

pub use hash::{mix, Bitmap};
pub use powers::PowerTable;
