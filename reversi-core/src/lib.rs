//! `reversi-core` implements the rules of Othello/Reversi on an 8x8 board.
//!
//! The crate is organized in three layers:
//!
//!  - [`BoardAccessor`] is the capability through which the rules read and write cells.
//!    Any board representation can implement it; [`Grid`] is the in-memory one.
//!  - [`rules`] is the rules engine: move legality and disc flipping, written
//!    against [`BoardAccessor`] only.
//!  - [`Game`] pairs a board with a [`GameState`] and runs the
//!    check, apply, switch-player sequence for a single move request.

pub mod rules;
pub mod test_utils;

mod accessor;
mod direction;
mod error;
mod game;
mod grid;
mod location;
mod player;
mod utils;

pub use accessor::*;
pub use direction::*;
pub use error::*;
pub use game::*;
pub use grid::*;
pub use location::*;
pub use player::*;
pub use rules::Flips;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = EDGE_LENGTH * EDGE_LENGTH;
