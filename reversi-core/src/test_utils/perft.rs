//! Leaf counts of the full move tree from the opening, used to check the rules
//! engine against published totals (http://www.aartbik.com/MISC/reversi.html).

use crate::{rules, Game, Location, Player};

/// Published leaf counts for depths 1 through 7. Passes first occur at depth 9.
pub const KNOWN_LEAVES: [u64; 7] = [4, 12, 56, 244, 1396, 8200, 55092];

/// Count the leaves `depth` plies below the starting position, black to move.
///
/// The core rules have no pass move, so a player without a legal move passes
/// here only for counting purposes; two passes in a row end the line.
pub fn run_perft(depth: u64) -> u64 {
    count_leaves(Game::new(Player::Black), depth, false)
}

/// The position after the player to move plays `loc`, or passes if `loc` is None.
fn advance(mut game: Game, loc: Option<Location>) -> Game {
    if let Some(loc) = loc {
        let player = game.current_player();
        rules::apply_move(&mut game.board, loc, player);
    }
    game.state.switch_player();
    game
}

fn count_leaves(game: Game, depth: u64, passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();
    match (moves.is_empty(), passed) {
        (true, true) => 1,
        (true, false) => count_leaves(advance(game, None), depth - 1, true),
        (false, _) => moves
            .map(|loc| count_leaves(advance(game, Some(loc)), depth - 1, false))
            .sum(),
    }
}

#[test]
fn shallow_leaf_counts() {
    for (depth, &expected) in KNOWN_LEAVES.iter().enumerate().take(5) {
        assert_eq!(run_perft(depth as u64 + 1), expected, "depth {}", depth + 1);
    }
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), KNOWN_LEAVES[5]);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), KNOWN_LEAVES[6]);
}

#[test]
fn depth_zero_is_the_root() {
    assert_eq!(run_perft(0), 1);
}
