use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid difficulty, board must be at least 1x1 but got {rows}x{cols}")]
    InvalidDifficulty { rows: Coord, cols: Coord },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Unknown difficulty preset")]
    UnknownPreset,
}

pub type Result<T> = core::result::Result<T, GameError>;
