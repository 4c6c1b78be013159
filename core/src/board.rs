use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one game, from setup until the game ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) layout: MineLayout,
    pub(crate) cells: Grid<Cell>,
    pub(crate) covered_count: CellCount,
    pub(crate) flag_count: CellCount,
    pub(crate) outcome: Outcome,
    pub(crate) triggered_mine: Option<Coord2>,
}

/// Builds a board with randomly placed mines.
pub fn new_board(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Result<Board> {
    Board::new(Difficulty::new(rows, cols, mines), RandomPlacer::new(seed))
}

impl Board {
    /// Places mines and counts neighbors, no partial board is built on error.
    pub fn new(difficulty: Difficulty, placer: impl MinePlacer) -> Result<Self> {
        let layout = placer.place(difficulty.validate()?)?;
        Ok(Self::from_layout(layout))
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        let adjacency = count_adjacent_mines(&layout);
        let cells = Grid::from_fn(layout.size(), |coords| Cell::new(adjacency[coords]));
        let covered_count = layout.total_cells();
        log::debug!(
            "New {}x{} board with {} mines",
            layout.size().0,
            layout.size().1,
            layout.mine_count()
        );
        Self {
            layout,
            cells,
            covered_count,
            flag_count: 0,
            outcome: Outcome::Playing,
            triggered_mine: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.layout.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn covered_count(&self) -> CellCount {
        self.covered_count
    }

    pub fn uncovered_count(&self) -> CellCount {
        self.total_cells() - self.covered_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flag_count as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    /// Full cell state, including hidden mine information. Renderers should use
    /// [`Board::cell_view`].
    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords)
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        self.cells
            .get(coords)
            .map(|cell| CellView::project(cell, self.is_finished()))
    }

    /// Reveals a covered, unflagged cell.
    ///
    /// Out of bounds, open or flagged cells, and any cell once the game has ended, are left alone
    /// and an empty result with the current outcome is returned.
    pub fn reveal_cell(&mut self, coords: Coord2) -> RevealResult {
        if self.is_finished() {
            return RevealResult::unchanged(self.outcome);
        }
        let Some(cell) = self.cells.get(coords).copied() else {
            log::trace!("Ignoring reveal outside the board at {:?}", coords);
            return RevealResult::unchanged(self.outcome);
        };
        if !cell.is_revealable() {
            return RevealResult::unchanged(self.outcome);
        }

        let mut opened = if cell.is_mine() {
            self.uncover(coords);
            Vec::from([coords])
        } else {
            self.flood_reveal(coords)
        };

        let outcome = self.evaluate_reveal(coords);
        if outcome.is_finished() {
            opened.extend(self.reveal_all_mines());
        }

        let opened = opened
            .into_iter()
            .map(|coords| (coords, CellView::project(&self.cells[coords], outcome.is_finished())))
            .collect();
        RevealResult { opened, outcome }
    }

    /// Toggles the flag on a covered cell and returns the new flag state.
    ///
    /// Out of bounds and open cells report `false`, after the game has ended the current flag is
    /// reported unchanged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> bool {
        let finished = self.is_finished();
        let Some(cell) = self.cells.get_mut(coords) else {
            return false;
        };
        if finished || !cell.covered {
            return cell.flagged && cell.covered;
        }

        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        cell.flagged
    }

    pub(crate) fn uncover(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords];
        if cell.covered {
            cell.covered = false;
            self.covered_count -= 1;
        }
    }
}
