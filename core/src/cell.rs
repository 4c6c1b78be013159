use serde::{Deserialize, Serialize};

use crate::*;

/// State of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub adjacency: Adjacency,
    pub covered: bool,
    pub flagged: bool,
}

impl Cell {
    pub const fn new(adjacency: Adjacency) -> Self {
        Self {
            adjacency,
            covered: true,
            flagged: false,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.adjacency.is_mine()
    }

    /// Whether a click may reveal this cell.
    pub const fn is_revealable(&self) -> bool {
        self.covered && !self.flagged
    }
}

/// Read-only projection of a [`Cell`] that is safe to hand to a renderer.
///
/// Mine status is only present once the cell is open or the game has ended, and the count only for
/// open non-mine cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub covered: bool,
    pub flagged: bool,
    pub is_mine: Option<bool>,
    pub adjacent_mines: Option<u8>,
}

impl CellView {
    pub fn project(cell: &Cell, game_over: bool) -> Self {
        let is_mine = (!cell.covered || game_over).then_some(cell.is_mine());
        let adjacent_mines = if cell.covered {
            None
        } else {
            cell.adjacency.count()
        };
        Self {
            covered: cell.covered,
            flagged: cell.flagged,
            is_mine,
            adjacent_mines,
        }
    }
}
