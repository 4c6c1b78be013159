use core::fmt;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a plain click does to a covered cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickMode {
    #[default]
    Clear,
    Flag,
}

impl ClickMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Clear => Self::Flag,
            Self::Flag => Self::Clear,
        }
    }
}

impl fmt::Display for ClickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clear => "Clear",
            Self::Flag => "Flag",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickResult {
    Reveal(RevealResult),
    Flag(bool),
}

/// One game from the host's point of view: the current board plus what is needed to start over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    difficulty: Difficulty,
    seed: u64,
    board: Board,
    click_mode: ClickMode,
    elapsed: Duration,
}

impl Session {
    pub fn new(difficulty: Difficulty, seed: u64) -> Result<Self> {
        let board = Board::new(difficulty, RandomPlacer::new(seed))?;
        Ok(Self::with_board(seed, board))
    }

    pub fn from_preset(preset: Preset, seed: u64) -> Result<Self> {
        Self::new(preset.difficulty(), seed)
    }

    /// Wraps an already built board, e.g. one with a fixed layout. Restarts reuse the board's
    /// size and mine count.
    pub fn with_board(seed: u64, board: Board) -> Self {
        let (rows, cols) = board.size();
        Self {
            difficulty: Difficulty::new(rows, cols, board.mine_count()),
            seed,
            board,
            click_mode: ClickMode::default(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn click_mode(&self) -> ClickMode {
        self.click_mode
    }

    pub fn toggle_click_mode(&mut self) -> ClickMode {
        self.click_mode = self.click_mode.toggled();
        log::debug!("Click mode is now {}", self.click_mode);
        self.click_mode
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advances the game clock, time stops once the game has ended.
    pub fn tick(&mut self, dt: Duration) {
        if !self.board.is_finished() {
            self.elapsed = self.elapsed.saturating_add(dt);
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealResult {
        self.board.reveal_cell(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> bool {
        self.board.toggle_flag(coords)
    }

    /// Reveals or flags depending on the current [`ClickMode`].
    pub fn click(&mut self, coords: Coord2) -> ClickResult {
        match self.click_mode {
            ClickMode::Clear => ClickResult::Reveal(self.reveal(coords)),
            ClickMode::Flag => ClickResult::Flag(self.toggle_flag(coords)),
        }
    }

    /// Starts over on a fresh board of the same difficulty.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        self.set_difficulty(self.difficulty, seed)
    }

    /// Replaces the board with one of a new difficulty, the session is untouched on error.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, seed: u64) -> Result<()> {
        *self = Self::new(difficulty, seed)?;
        log::debug!("Session restarted with {:?} and seed {}", difficulty, seed);
        Ok(())
    }
}
