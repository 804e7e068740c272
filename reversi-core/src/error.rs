use crate::{Location, Player};
use derive_more::{Display, Error};

/// Why a move request was turned down. A rejected move leaves the game untouched.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The requested index does not name a cell on the board.
    #[display(fmt = "index {} is off the board", index)]
    OutOfBounds { index: usize },

    /// The cell is occupied, or placing there sandwiches no opponent disc.
    #[display(fmt = "{} is not a legal move for {}", location, player)]
    IllegalMove { location: Location, player: Player },
}
