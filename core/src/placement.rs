use serde::{Deserialize, Serialize};

use crate::*;

/// Where the mines are on a board. Immutable once placed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Grid<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Grid<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.mine_mask.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Out of bounds coordinates never contain a mine.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask.get(coords).copied().unwrap_or(false)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .coords()
            .filter(|&coords| self.mine_mask[coords])
    }
}

/// Strategy deciding which cells of a fresh board hold mines.
pub trait MinePlacer {
    fn place(self, difficulty: Difficulty) -> Result<MineLayout>;
}

/// Uniform placement by rejection sampling: draw a random cell, draw again if it already has a
/// mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, difficulty: Difficulty) -> Result<MineLayout> {
        use rand::prelude::*;

        let difficulty = difficulty.validate()?;
        let size = difficulty.size();
        let total_cells = difficulty.total_cells();
        let mines = difficulty.clamped_mines();

        // full boards would take the longest to sample
        if mines == total_cells {
            if difficulty.mines > total_cells {
                log::warn!(
                    "Board already full, requested {} mines but only {} fit",
                    difficulty.mines,
                    total_cells
                );
            }
            return Ok(MineLayout::from_mine_mask(Grid::from_elem(size, true)));
        }

        let mut mine_mask = Grid::from_elem(size, false);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut draws: u32 = 0;
        let mut placed: CellCount = 0;
        while placed < mines {
            let index = rng.random_range(0..usize::from(total_cells));
            draws += 1;
            let cell = &mut mine_mask[from_flat_index(index, size)];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board with seed {} in {} draws",
            placed,
            size.0,
            size.1,
            self.seed,
            draws
        );
        Ok(MineLayout::from_mine_mask(mine_mask))
    }
}

/// Places mines at the given coordinates, duplicates count once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedPlacer<'a> {
    mine_coords: &'a [Coord2],
}

impl<'a> FixedPlacer<'a> {
    pub const fn new(mine_coords: &'a [Coord2]) -> Self {
        Self { mine_coords }
    }
}

impl MinePlacer for FixedPlacer<'_> {
    fn place(self, difficulty: Difficulty) -> Result<MineLayout> {
        let difficulty = difficulty.validate()?;
        let mut mine_mask = Grid::from_elem(difficulty.size(), false);

        for &coords in self.mine_coords {
            *mine_mask.get_mut(coords).ok_or(GameError::InvalidCoords)? = true;
        }

        Ok(MineLayout::from_mine_mask(mine_mask))
    }
}
