// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use euler_search::{MatchEvent, Quadruple, ResultSink};

/// Lander & Parkin (1966): 27^5 + 84^5 + 110^5 + 133^5 = 144^5.
pub const LANDER_PARKIN: Quadruple = Quadruple::new(133, 110, 84, 27);
pub const LANDER_PARKIN_ROOT: usize = 144;

/// Result sink that keeps both primitive matches and duplicates.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub matches: Vec<MatchEvent>,
    pub duplicates: Vec<MatchEvent>,
}

impl ResultSink for RecordingSink {
    fn on_match(&mut self, event: &MatchEvent) {
        self.matches.push(*event);
    }

    fn on_duplicate(&mut self, event: &MatchEvent) {
        self.duplicates.push(*event);
    }
}

/// All quadruples below `bound` by nested loops, `i0` innermost.
pub fn nested_loop_quadruples(bound: usize) -> Vec<Quadruple> {
    let mut all = Vec::new();
    for i3 in 2..bound {
        for i2 in i3..bound {
            for i1 in i2..bound {
                for i0 in i1..bound {
                    all.push(Quadruple::new(i0, i1, i2, i3));
                }
            }
        }
    }
    all
}
