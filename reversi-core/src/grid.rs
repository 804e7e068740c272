//! An in-memory Othello board: one enum-valued cell per location.

use crate::{utils, BoardAccessor, Location, Player, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// The contents of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// The color of the disc in this cell, if any.
    #[inline]
    pub fn disc(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// The character this cell is drawn as.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl From<Option<Player>> for Cell {
    fn from(disc: Option<Player>) -> Self {
        disc.map_or(Cell::Empty, Cell::from)
    }
}

/// Disc counts for both colors.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
#[display(fmt = "Black: {}, White: {}", black, white)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// The number of discs of `player`'s color.
    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The player with more discs, or None on a tie.
    pub fn leader(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A complete board stored as a flat row-major array of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; NUM_SPACES],
}

impl Default for Grid {
    /// Gets the starting layout with black to move first.
    fn default() -> Self {
        Self::starting(Player::default())
    }
}

impl Grid {
    /// A board with no discs on it.
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SPACES],
        }
    }

    /// The starting layout: the first player owns the upper-left and lower-right
    /// squares of the central 2x2 block, the opponent owns the other two.
    pub fn starting(first: Player) -> Self {
        let mid = EDGE_LENGTH / 2;
        let mut grid = Self::empty();

        for &(row, col, color) in &[
            (mid - 1, mid - 1, first),
            (mid - 1, mid, !first),
            (mid, mid - 1, !first),
            (mid, mid, first),
        ] {
            if let Some(loc) = Location::from_coords(row, col) {
                grid.cells[loc.to_index()] = color.into();
            }
        }

        grid
    }

    /// The contents of the cell at `loc`.
    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        self.cells[loc.to_index()]
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Count the discs of each color.
    pub fn score(&self) -> Score {
        self.cells().fold(Score::default(), |mut score, cell| {
            match cell {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
            score
        })
    }

    /// Count the empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&cell| cell == Cell::Empty).count()
    }
}

impl BoardAccessor for Grid {
    #[inline]
    fn color_at(&self, loc: Location) -> Option<Player> {
        self.cell(loc).disc()
    }

    #[inline]
    fn set_disc(&mut self, loc: Location, color: Player) {
        debug_assert!(!self.is_occupied(loc), "{} is already occupied", loc);
        self.cells[loc.to_index()] = color.into();
    }

    #[inline]
    fn flip_color(&mut self, loc: Location) {
        let cell = &mut self.cells[loc.to_index()];
        *cell = cell.disc().map(|color| !color).into();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::to_char), f)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid board string")]
pub struct ParseGridError;

/// Parse a board from 64 cell characters in row-major order, ignoring whitespace.
/// Black is `X`, `B` or `#`; white is `O` or `W`; empty is `-` or `.`.
impl std::str::FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = utils::board_chars(s).ok_or(ParseGridError)?;
        let mut grid = Self::empty();

        for (cell, c) in grid.cells.iter_mut().zip(chars) {
            *cell = match c.to_ascii_uppercase() {
                'X' | 'B' | '#' => Cell::Black,
                'O' | 'W' => Cell::White,
                '-' | '.' => Cell::Empty,
                _ => return Err(ParseGridError),
            };
        }

        Ok(grid)
    }
}
