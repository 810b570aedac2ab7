// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state: roots found so far and the search counters.

pub mod roots;
pub mod statistics;

pub use roots::{is_primitive, DuplicateFilter};
pub use statistics::{Counters, Statistics};
