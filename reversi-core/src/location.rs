//! Code for working with [`Location`]s on the Othello board.

use crate::{Direction, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// A cell on the Othello board, stored as its row-major index (0 is the upper-left).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(u8);

/// A set of locations on the Othello board, which can be iterated to retrieve them
/// in ascending index order. Bit `i` stands for the location with index `i`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(u64);

impl Location {
    /// Convert from a row-major index, or None if the index is off the board.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SPACES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Convert into a row-major index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    /// Convert from row and column coordinates, or None if either is off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self((row * EDGE_LENGTH + col) as u8))
        } else {
            None
        }
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.to_index() / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.to_index() % EDGE_LENGTH
    }

    /// The adjacent location one step in `dir`, or None if that step would
    /// leave the board. Never wraps across a row edge.
    pub fn neighbor(self, dir: Direction) -> Option<Self> {
        let (d_row, d_col) = dir.offset();
        let row = self.row() as isize + d_row;
        let col = self.col() as isize + d_col;

        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Iterate over every location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }
}

/// Convert this [`Location`] into string notation ("A4" is column A, row 4).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4"), ignoring case.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & (1 << loc.0) != 0
    }

    /// Add `loc` to this list.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= 1 << loc.0;
    }

    /// Returns whether the list holds no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::default();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 ^= 1 << index;

        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
