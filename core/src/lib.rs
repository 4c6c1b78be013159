#![no_std]

extern crate alloc;

pub use adjacency::*;
pub use board::*;
pub use cell::*;
pub use difficulty::*;
pub use error::*;
pub use grid::*;
pub use outcome::*;
pub use placement::*;
pub use session::*;
pub use types::*;

mod adjacency;
mod board;
mod cell;
mod difficulty;
mod error;
mod flood;
mod grid;
mod outcome;
mod placement;
mod session;
mod types;
