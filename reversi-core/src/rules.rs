//! The rules engine: move legality and disc flipping.
//!
//! Every operation here reads and writes the board only through a
//! [`BoardAccessor`], so the same rules drive [`Grid`](crate::Grid) and any
//! other board representation. Nothing in this module touches turn order;
//! switching players is left to [`GameState`](crate::GameState).
//!
//! A move captures along a direction when the ray leaving the placed disc
//! crosses one or more opponent discs and then reaches a disc of the mover's
//! color, with no empty cell or board edge in between.

use crate::{BoardAccessor, Direction, Location, LocationList, Player, EDGE_LENGTH};
use arrayvec::ArrayVec;
use tracing::debug;

/// The longest run one direction can capture: a closed run fits strictly
/// inside one board line.
pub const MAX_RUN: usize = EDGE_LENGTH - 2;

/// Upper bound on the discs one move can flip, whatever geometry the
/// accessor's `neighbor_index` describes.
pub const MAX_FLIPS: usize = Direction::ALL.len() * MAX_RUN;

/// The locations flipped by a single move, grouped by direction and ordered
/// outward from the placed disc.
pub type Flips = ArrayVec<Location, MAX_FLIPS>;

/// Count the opponent discs `player` would sandwich by playing at `loc`,
/// looking only along `dir`. Returns 0 when the direction does not capture:
/// the first neighbor is empty, off the board or `player`'s own disc, or the
/// opponent run ends at an empty cell or the board edge.
///
/// The walk takes at most `MAX_RUN + 1` steps; a longer run never captures.
/// The contents of `loc` itself are never inspected.
pub fn captures_in_direction<B>(board: &B, loc: Location, dir: Direction, player: Player) -> usize
where
    B: BoardAccessor + ?Sized,
{
    let mut cursor = loc;

    for run in 0..=MAX_RUN {
        cursor = match board.neighbor_index(cursor, dir) {
            Some(next) => next,
            // Ran off the board before closing the sandwich.
            None => return 0,
        };
        match board.color_at(cursor) {
            Some(color) if color == player => return run,
            Some(_) => {}
            None => return 0,
        }
    }

    0
}

/// Whether `player` may place a disc at `loc`: the cell is empty and at least
/// one direction captures. Never modifies the board.
pub fn is_legal_move<B>(board: &B, loc: Location, player: Player) -> bool
where
    B: BoardAccessor + ?Sized,
{
    if board.is_occupied(loc) {
        return false;
    }

    Direction::ALL
        .iter()
        .any(|&dir| captures_in_direction(board, loc, dir, player) > 0)
}

/// Place a `player` disc at `loc` and flip every captured opponent disc,
/// returning the flipped locations.
///
/// Each direction is re-checked independently before anything along it is
/// flipped, so calling this for an illegal move just places the disc. The
/// caller is expected to have checked [`is_legal_move`] and is responsible
/// for switching the active player afterward.
pub fn apply_move<B>(board: &mut B, loc: Location, player: Player) -> Flips
where
    B: BoardAccessor + ?Sized,
{
    board.set_disc(loc, player);

    let mut flips = Flips::new();
    for &dir in Direction::ALL.iter() {
        let run = captures_in_direction(board, loc, dir, player);

        let mut cursor = loc;
        for _ in 0..run {
            let Some(next) = board.neighbor_index(cursor, dir) else {
                break;
            };
            board.flip_color(next);
            flips.push(next);
            cursor = next;
        }
    }

    debug!(location = %loc, %player, flipped = flips.len(), "applied move");
    flips
}

/// Every location where `player` has a legal move.
pub fn legal_moves<B>(board: &B, player: Player) -> LocationList
where
    B: BoardAccessor + ?Sized,
{
    Location::all()
        .filter(|&loc| is_legal_move(board, loc, player))
        .collect()
}
