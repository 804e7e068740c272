//! An interactive game over any line-based input and text output.

use crate::config::SessionConfig;
use derive_more::{Display, Error};
use reversi_core::{Game, Location, Score};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Play at a raw cell index. Not yet checked against the board.
    Play(usize),
    Quit,
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "cannot parse move")]
pub struct ParseRequestError;

/// Accepts `quit`, a location in notation ("d3") or a cell index ("19").
impl std::str::FromStr for Request {
    type Err = ParseRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("quit") || s.eq_ignore_ascii_case("q") {
            return Ok(Request::Quit);
        }

        // Any all-digit input is an index; too large to represent is still off the board.
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Request::Play(s.parse().unwrap_or(usize::MAX)));
        }

        s.parse::<Location>()
            .map(|loc| Request::Play(loc.to_index()))
            .or(Err(ParseRequestError))
    }
}

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player to move had no legal move. The rules have no pass, so play cannot continue.
    Stalled,
    Quit,
    EndOfInput,
}

/// What a finished session leaves behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub end: SessionEnd,
    pub score: Score,
    pub moves_played: usize,
}

/// A terminal game: renders the board, reads moves and reports the score.
pub struct Session<R, W> {
    game: Game,
    config: SessionConfig,
    input: R,
    output: W,
    moves_played: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        Self {
            game: Game::new(config.first),
            config,
            input,
            output,
            moves_played: 0,
        }
    }

    /// Start from an existing position instead of the opening layout.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the player to move is stuck, the user quits or input runs out.
    pub fn run(mut self) -> io::Result<Summary> {
        info!(first = %self.config.first, "starting session");

        let end = loop {
            let moves = self.game.legal_moves();
            writeln!(self.output, "\n{}", self.game)?;
            writeln!(self.output, "{}", self.game.score())?;

            if moves.is_empty() {
                writeln!(
                    self.output,
                    "{} has no legal moves.",
                    self.game.current_player()
                )?;
                break SessionEnd::Stalled;
            }
            if self.config.show_hints() {
                writeln!(self.output, "Legal moves: {}", moves)?;
            }

            write!(self.output, "Enter a move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break SessionEnd::EndOfInput;
            }

            match line.parse() {
                Ok(Request::Quit) => break SessionEnd::Quit,
                Ok(Request::Play(index)) => self.play(index)?,
                Err(err) => {
                    debug!(input = line.trim(), "unparsed input");
                    writeln!(self.output, "{}: {:?}", err, line.trim())?;
                }
            }
        };

        let summary = Summary {
            end,
            score: self.game.score(),
            moves_played: self.moves_played,
        };
        self.report(summary)?;
        info!(?summary, "session over");
        Ok(summary)
    }

    fn play(&mut self, index: usize) -> io::Result<()> {
        match self.game.play_index(index) {
            Ok(flips) => {
                self.moves_played += 1;
                writeln!(
                    self.output,
                    "{} flipped {} disc(s).",
                    !self.game.current_player(),
                    flips.len()
                )
            }
            // The board is unchanged; say why and prompt again.
            Err(err) => writeln!(self.output, "Invalid move: {}.", err),
        }
    }

    fn report(&mut self, summary: Summary) -> io::Result<()> {
        writeln!(self.output, "\nFinal score: {}", summary.score)?;
        match summary.score.leader() {
            Some(player) => writeln!(self.output, "{} leads.", player),
            None => writeln!(self.output, "Tied."),
        }
    }
}
