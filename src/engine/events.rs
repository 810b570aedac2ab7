// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Events emitted by the search and the sinks that consume them.
//!
//! The search loop knows nothing about rendering. It hands a [`MatchEvent`]
//! to a [`ResultSink`] for every hit and a [`ProgressEvent`] to a
//! [`ProgressSink`] at a fixed cadence. Collecting into a `Vec` is enough
//! for tests; [`LogSink`] reports through `tracing`.

use std::time::Duration;

use tracing::{debug, info};

use crate::enumerator::Quadruple;

/// A quadruple whose sum is a fifth power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    pub quadruple: Quadruple,
    /// Base whose fifth power equals the sum.
    pub root: usize,
    /// Time since the search loop started.
    pub elapsed: Duration,
    /// Iterations performed up to and including this one.
    pub iterations: u64,
}

impl MatchEvent {
    /// The equation, smallest base first.
    pub fn equation(&self) -> String {
        format!("{} = {}^5", self.quadruple, self.root)
    }
}

/// Periodic snapshot of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub iterations: u64,
    pub elapsed: Duration,
    /// Position of the enumerator; `outer()` gives `(i1, i2, i3)`.
    pub position: Quadruple,
    pub hits: u64,
    pub filter_passes: u64,
}

impl ProgressEvent {
    /// Iterations per millisecond so far.
    pub fn throughput(&self) -> Option<u64> {
        per_millisecond(self.iterations, self.elapsed)
    }
}

pub(crate) fn per_millisecond(iterations: u64, elapsed: Duration) -> Option<u64> {
    let millis = elapsed.as_millis() as u64;
    (millis > 0).then(|| iterations / millis)
}

/// Receives hits from the search.
pub trait ResultSink {
    /// A hit whose root passed the duplicate filter.
    fn on_match(&mut self, event: &MatchEvent);

    /// A hit whose root is a multiple of an earlier root.
    fn on_duplicate(&mut self, _event: &MatchEvent) {}
}

/// Receives progress snapshots from the search.
pub trait ProgressSink {
    fn on_progress(&mut self, event: &ProgressEvent);
}

impl ResultSink for Vec<MatchEvent> {
    fn on_match(&mut self, event: &MatchEvent) {
        self.push(*event);
    }
}

impl ProgressSink for Vec<ProgressEvent> {
    fn on_progress(&mut self, event: &ProgressEvent) {
        self.push(*event);
    }
}

/// Discards progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _event: &ProgressEvent) {}
}

/// Reports events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ResultSink for LogSink {
    fn on_match(&mut self, event: &MatchEvent) {
        info!(
            elapsed = ?event.elapsed,
            iterations = event.iterations,
            "found {}",
            event.equation()
        );
    }

    fn on_duplicate(&mut self, event: &MatchEvent) {
        debug!(root = event.root, "duplicate {}", event.equation());
    }
}

impl ProgressSink for LogSink {
    fn on_progress(&mut self, event: &ProgressEvent) {
        let q = event.position;
        info!(
            i3 = q.i3,
            i2 = q.i2,
            i1 = q.i1,
            i0 = q.i0,
            elapsed = ?event.elapsed,
            iterations = event.iterations,
            per_ms = event.throughput().unwrap_or(0),
            hits = event.hits,
            "progress"
        );
    }
}
