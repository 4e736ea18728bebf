// history.rs - Spots a simulation that has fallen into a repeating state

use crate::config::HISTORY_LEN;
use conway::Grid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Ring buffer of the hashes of the most recent generations.
#[derive(Debug, Default)]
pub struct CycleDetector {
    history : [u64; HISTORY_LEN],
    count   : usize,
}

impl CycleDetector {
    /// Records `grid` and reports whether it matches one of the last
    /// `HISTORY_LEN` recorded generations.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.history[..filled].contains(&hash) {
            return true;
        }

        self.history[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}
