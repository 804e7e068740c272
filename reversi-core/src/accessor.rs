//! The capability through which the rules engine reads and writes a board.

use crate::{Direction, Location, Player};

/// Cell-level access to an Othello board, independent of how the board is
/// stored or displayed.
///
/// Implementations must keep occupancy monotonic: a cell that holds a disc
/// never becomes empty again, only its color changes.
pub trait BoardAccessor {
    /// The color of the disc at `loc`, or None if the cell is empty.
    fn color_at(&self, loc: Location) -> Option<Player>;

    /// Place a new disc of `color` on the empty cell at `loc`.
    fn set_disc(&mut self, loc: Location, color: Player);

    /// Toggle the color of the disc at `loc`. The cell must be occupied.
    fn flip_color(&mut self, loc: Location);

    /// Whether the cell at `loc` holds a disc.
    #[inline]
    fn is_occupied(&self, loc: Location) -> bool {
        self.color_at(loc).is_some()
    }

    /// The location one step from `loc` in `dir`, or None if the step leaves the board.
    ///
    /// Overriding this changes the board's geometry. The rules walk at most
    /// [`MAX_RUN`](crate::rules::MAX_RUN) + 1 steps along any ray, so longer
    /// or cyclic rays are safe but never capture past that point.
    #[inline]
    fn neighbor_index(&self, loc: Location, dir: Direction) -> Option<Location> {
        loc.neighbor(dir)
    }
}
