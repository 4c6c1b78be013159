use serde::{Deserialize, Serialize};

use crate::*;

/// Per-cell neighbor information fixed at board setup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjacency {
    /// The cell itself holds a mine and has no count.
    Mine,
    /// Number of mines among the up to 8 neighbors.
    Count(u8),
}

impl Adjacency {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

/// Counts neighboring mines for every cell of `layout`.
///
/// Builds a fresh grid each time, so recomputing on the same layout yields the same counts.
pub fn count_adjacent_mines(layout: &MineLayout) -> Grid<Adjacency> {
    Grid::from_fn(layout.size(), |coords| {
        if layout.contains_mine(coords) {
            Adjacency::Mine
        } else {
            let count = layout
                .iter_neighbors(coords)
                .filter(|&pos| layout.contains_mine(pos))
                .count();
            Adjacency::Count(count as u8)
        }
    })
}
