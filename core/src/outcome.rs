use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both end states are final, only building a new board starts over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything a single reveal changed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealResult {
    /// Cells uncovered by this reveal in the order they were opened, including mines shown at the
    /// end of the game.
    pub opened: Vec<(Coord2, CellView)>,
    pub outcome: Outcome,
}

impl RevealResult {
    pub(crate) fn unchanged(outcome: Outcome) -> Self {
        Self {
            opened: Vec::new(),
            outcome,
        }
    }

    pub fn has_update(&self) -> bool {
        !self.opened.is_empty()
    }
}

impl Board {
    /// Decides the outcome after `coords` was successfully revealed.
    pub(crate) fn evaluate_reveal(&mut self, coords: Coord2) -> Outcome {
        if self.cells[coords].is_mine() {
            self.triggered_mine = Some(coords);
            self.end_game(Outcome::Lost);
        } else if self.covered_count() == self.mine_count() {
            self.end_game(Outcome::Won);
        }
        self.outcome
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_finished() {
            return;
        }
        log::debug!(
            "Game ended {:?} with {} of {} safe cells open",
            outcome,
            self.uncovered_count(),
            self.layout.safe_cell_count()
        );
        self.outcome = outcome;
    }

    /// Uncovers every mine regardless of flags, returning the cells that changed.
    pub(crate) fn reveal_all_mines(&mut self) -> Vec<Coord2> {
        let mines: Vec<_> = self
            .layout
            .mine_coords()
            .filter(|&coords| self.cells[coords].covered)
            .collect();
        for &coords in &mines {
            self.uncover(coords);
        }
        mines
    }
}
