use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board size and requested mine density for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl Difficulty {
    pub const fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Requested mine count clamped to what the board can hold.
    pub const fn clamped_mines(&self) -> CellCount {
        let total = self.total_cells();
        if self.mines > total { total } else { self.mines }
    }

    pub fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 {
            Err(GameError::InvalidDifficulty {
                rows: self.rows,
                cols: self.cols,
            })
        } else {
            Ok(self)
        }
    }
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        preset.difficulty()
    }
}

/// Built-in difficulties offered by the launcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    Easy,
    Medium,
    Hard,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Easy, Preset::Medium, Preset::Hard];

    pub const fn difficulty(self) -> Difficulty {
        use Preset::*;
        match self {
            Easy => Difficulty::new(16, 16, 24),
            Medium => Difficulty::new(32, 32, 100),
            Hard => Difficulty::new(64, 64, 400),
        }
    }

    pub const fn name(self) -> &'static str {
        use Preset::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Preset {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownPreset)
    }
}
