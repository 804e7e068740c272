//! Implements game-level Othello logic: turn order on top of the rules engine.
//!
//! The rules in [`rules`](crate::rules) never look at whose turn it is.
//! [`GameState`] tracks that, and [`Game`] ties the two together so that a
//! move request is checked, applied and followed by a player switch as one step.

use crate::{
    rules, BoardAccessor, Flips, Grid, Location, LocationList, MoveError, Player, Score,
    EDGE_LENGTH,
};
use std::fmt;
use tracing::trace;

/// Turn state for one game. Holds no board data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    current_player: Player,
    board_size: usize,
}

impl Default for GameState {
    /// Black to move on an 8x8 board.
    fn default() -> Self {
        Self::new(Player::default())
    }
}

impl GameState {
    pub fn new(first: Player) -> Self {
        Self {
            current_player: first,
            board_size: EDGE_LENGTH,
        }
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Hand the turn to the other player. Always succeeds.
    #[inline]
    pub fn switch_player(&mut self) {
        self.current_player = !self.current_player;
    }

    /// The number of cells along one edge of the board.
    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }
}

/// A board together with its turn state.
///
/// There is no pass and no end-of-game detection: if the player to move has
/// no legal move, every request is rejected until the caller gives up.
/// [`Game::legal_moves`] lets callers notice that situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game<B = Grid> {
    pub board: B,
    pub state: GameState,
}

impl Default for Game<Grid> {
    fn default() -> Self {
        Self::new(Player::default())
    }
}

impl Game<Grid> {
    /// A new game in the starting layout with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: Grid::starting(first),
            state: GameState::new(first),
        }
    }

    /// Disc counts on the board.
    pub fn score(&self) -> Score {
        self.board.score()
    }
}

impl<B: BoardAccessor> Game<B> {
    /// Resume a game from an existing board and turn state.
    pub fn from_parts(board: B, state: GameState) -> Self {
        Self { board, state }
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Whether the player to move may play at `loc`.
    pub fn is_legal(&self, loc: Location) -> bool {
        rules::is_legal_move(&self.board, loc, self.current_player())
    }

    /// Every legal move for the player to move.
    pub fn legal_moves(&self) -> LocationList {
        rules::legal_moves(&self.board, self.current_player())
    }

    /// Play at `loc` for the player to move, then pass the turn to the opponent.
    /// Returns the flipped discs, or an error without touching the game.
    pub fn play(&mut self, loc: Location) -> Result<Flips, MoveError> {
        let player = self.current_player();

        if !rules::is_legal_move(&self.board, loc, player) {
            trace!(location = %loc, %player, "rejected move");
            return Err(MoveError::IllegalMove {
                location: loc,
                player,
            });
        }

        let flips = rules::apply_move(&mut self.board, loc, player);
        self.state.switch_player();
        Ok(flips)
    }

    /// Like [`Game::play`], for a raw row-major cell index.
    pub fn play_index(&mut self, index: usize) -> Result<Flips, MoveError> {
        let loc = Location::from_index(index).ok_or(MoveError::OutOfBounds { index })?;
        self.play(loc)
    }
}

impl fmt::Display for Game<Grid> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.current_player())
    }
}
