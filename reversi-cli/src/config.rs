//! Command-line configuration for a terminal session.

use clap::Parser;
use reversi_core::Player;

/// Play Othello against another person at the same terminal.
///
/// Enter moves in column-row notation (`d3`) or as a cell index from 0 to 63.
/// Set `RUST_LOG` to control diagnostic output on stderr.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(name = "reversi", version)]
pub struct SessionConfig {
    /// Which color moves first. It also owns the upper-left and lower-right
    /// discs of the starting block.
    #[arg(long, default_value_t = Player::Black)]
    pub first: Player,

    /// Do not list the legal moves before each prompt.
    #[arg(long)]
    pub no_hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first: Player::default(),
            no_hints: false,
        }
    }
}

impl SessionConfig {
    pub fn show_hints(&self) -> bool {
        !self.no_hints
    }
}
