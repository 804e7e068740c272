//! Rules engine properties, checked against a plain coordinate-walking model.

use proptest::prelude::*;
use reversi_core::rules::{
    apply_move, captures_in_direction, is_legal_move, legal_moves, MAX_RUN,
};
use reversi_core::{
    BoardAccessor, Cell, Direction, Game, Grid, Location, Player, EDGE_LENGTH, NUM_SPACES,
};
use std::collections::HashMap;

fn at(row: usize, col: usize) -> Location {
    Location::from_coords(row, col).unwrap()
}

/// Sandwiched run length using raw (row, col) arithmetic instead of the crate's geometry.
fn model_run(grid: &Grid, loc: Location, (d_row, d_col): (isize, isize), player: Player) -> usize {
    let (mut row, mut col) = (loc.row() as isize, loc.col() as isize);
    let mut run = 0;
    loop {
        row += d_row;
        col += d_col;
        if row < 0 || col < 0 || row >= EDGE_LENGTH as isize || col >= EDGE_LENGTH as isize {
            return 0;
        }
        match grid.cell(at(row as usize, col as usize)).disc() {
            None => return 0,
            Some(color) if color == player => return run,
            Some(_) => run += 1,
        }
    }
}

fn arb_cell() -> impl Strategy<Value = char> {
    prop_oneof![Just('-'), Just('X'), Just('O')]
}

/// Random boards, biased toward crowded positions so captures are common.
fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop_oneof![1 => Just('-'), 2 => arb_cell()], NUM_SPACES)
        .prop_map(|cells| cells.into_iter().collect::<String>().parse().unwrap())
}

fn arb_location() -> impl Strategy<Value = Location> {
    (0..NUM_SPACES).prop_map(|index| Location::from_index(index).unwrap())
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Black), Just(Player::White)]
}

proptest! {
    #[test]
    fn occupied_cells_are_illegal(grid in arb_grid(), loc in arb_location(), player in arb_player()) {
        prop_assume!(grid.is_occupied(loc));
        prop_assert!(!is_legal_move(&grid, loc, player));
    }

    #[test]
    fn captures_match_model(grid in arb_grid(), loc in arb_location(), player in arb_player()) {
        for dir in Direction::ALL {
            prop_assert_eq!(
                captures_in_direction(&grid, loc, dir, player),
                model_run(&grid, loc, dir.offset(), player)
            );
        }
    }

    #[test]
    fn legality_matches_model(grid in arb_grid(), loc in arb_location(), player in arb_player()) {
        let expected = !grid.is_occupied(loc)
            && Direction::ALL.iter().any(|d| model_run(&grid, loc, d.offset(), player) > 0);
        prop_assert_eq!(is_legal_move(&grid, loc, player), expected);
    }

    #[test]
    fn legality_check_never_mutates(grid in arb_grid(), loc in arb_location(), player in arb_player()) {
        let before = grid;
        for _ in 0..3 {
            is_legal_move(&grid, loc, player);
            legal_moves(&grid, player).count();
        }
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn apply_flips_exactly_the_runs(grid in arb_grid(), player in arb_player(), pick in any::<prop::sample::Index>()) {
        let moves: Vec<_> = legal_moves(&grid, player).collect();
        if moves.is_empty() {
            return Ok(());
        }
        let loc = *pick.get(&moves);

        let mut expected = grid;
        expected.set_disc(loc, player);
        let mut expected_flips = 0;
        for dir in Direction::ALL {
            let run = model_run(&grid, loc, dir.offset(), player);
            let mut cursor = loc;
            for _ in 0..run {
                cursor = cursor.neighbor(dir).unwrap();
                expected.flip_color(cursor);
            }
            expected_flips += run;
        }

        let mut actual = grid;
        let flips = apply_move(&mut actual, loc, player);

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(flips.len(), expected_flips);
        prop_assert_eq!(actual.color_at(loc), Some(player));
        prop_assert_eq!(actual.count_empty(), grid.count_empty() - 1);
        prop_assert_eq!(
            actual.score().of(player) as usize,
            grid.score().of(player) as usize + 1 + flips.len()
        );
    }

    #[test]
    fn players_alternate(choices in prop::collection::vec(any::<prop::sample::Index>(), 0..40)) {
        let mut game = Game::new(Player::Black);
        let mut applied = 0;

        for choice in choices {
            let moves: Vec<_> = game.legal_moves().collect();
            if moves.is_empty() {
                break;
            }
            game.play(*choice.get(&moves)).unwrap();
            applied += 1;

            let expected = if applied % 2 == 0 { Player::Black } else { Player::White };
            prop_assert_eq!(game.current_player(), expected);
        }
    }
}

#[test]
fn black_captures_one_disc_from_start() {
    let mut game = Game::new(Player::Black);
    assert!(game.is_legal(at(3, 5)));

    let flips = game.play(at(3, 5)).unwrap();

    assert_eq!(flips.as_slice(), &[at(3, 4)]);
    assert_eq!(game.board.cell(at(3, 4)), Cell::Black);
    assert_eq!(game.score().black, 4);
    assert_eq!(game.score().white, 1);
    assert_eq!(game.current_player(), Player::White);
}

#[test]
fn move_beside_own_disc_is_rejected_from_start() {
    // (3,2) touches black's own (3,3) and the diagonal white disc leads to an empty cell.
    let mut game = Game::new(Player::Black);
    assert!(!game.is_legal(at(3, 2)));
    assert!(game.play(at(3, 2)).is_err());
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.board, Grid::starting(Player::Black));
}

#[test]
fn isolated_cells_are_illegal() {
    let grid = Grid::default();
    for loc in Location::all() {
        let has_occupied_neighbor = Direction::ALL
            .iter()
            .filter_map(|&dir| loc.neighbor(dir))
            .any(|n| grid.is_occupied(n));
        if !has_occupied_neighbor {
            assert!(!is_legal_move(&grid, loc, Player::Black), "{}", loc);
            assert!(!is_legal_move(&grid, loc, Player::White), "{}", loc);
        }
    }
}

#[test]
fn only_own_neighbors_is_illegal() {
    let grid: Grid = "
        --------
        --------
        --XXX---
        --X-X---
        --XXX---
        --------
        --------
        --------"
        .parse()
        .unwrap();
    assert!(!is_legal_move(&grid, at(3, 3), Player::Black));
}

#[test]
fn sequence_of_plays() {
    let mut game = Game::new(Player::Black);
    for notation in ["F4", "F5", "E6", "F3"] {
        let loc: Location = notation.parse().unwrap();
        game.play(loc).unwrap();
    }

    let expected: Grid = "
        --------
        --------
        -----O--
        ---XOO--
        ---OXO--
        ----X---
        --------
        --------"
        .parse()
        .unwrap();
    assert_eq!(game.board, expected);
    assert_eq!(game.current_player(), Player::Black);
}

/// A board kept as a sparse map, counting every write made through it.
#[derive(Default)]
struct SparseBoard {
    discs: HashMap<Location, Player>,
    writes: usize,
}

impl BoardAccessor for SparseBoard {
    fn color_at(&self, loc: Location) -> Option<Player> {
        self.discs.get(&loc).copied()
    }

    fn set_disc(&mut self, loc: Location, color: Player) {
        self.writes += 1;
        self.discs.insert(loc, color);
    }

    fn flip_color(&mut self, loc: Location) {
        self.writes += 1;
        if let Some(color) = self.discs.get_mut(&loc) {
            *color = !*color;
        }
    }
}

#[test]
fn rules_run_over_any_accessor() {
    let mut sparse = SparseBoard::default();
    for loc in Location::all() {
        if let Some(color) = Grid::default().color_at(loc) {
            sparse.set_disc(loc, color);
        }
    }
    sparse.writes = 0;

    let mut game = Game::from_parts(sparse, Default::default());
    let mut reference = Game::new(Player::Black);

    for notation in ["F4", "F5", "E6", "F3", "C4"] {
        let loc: Location = notation.parse().unwrap();
        assert_eq!(game.legal_moves(), reference.legal_moves());
        assert_eq!(game.play(loc), reference.play(loc));
    }

    for loc in Location::all() {
        assert_eq!(game.board.color_at(loc), reference.board.color_at(loc));
    }
    // One placement per move plus one write per flipped disc.
    assert_eq!(game.board.writes, 5 + 1 + 1 + 1 + 2 + 1);
    assert!(game.play_index(0).is_err());
    assert_eq!(game.board.writes, 11);
}

/// Discs strung along a custom geometry: east follows `next`, every other
/// direction leaves the board.
struct Strand {
    discs: [Option<Player>; NUM_SPACES],
    next: fn(usize) -> Option<usize>,
}

impl Strand {
    /// White discs on `1..=whites`, closed by a black disc right after them.
    fn closed_run(whites: usize) -> Self {
        let mut discs = [None; NUM_SPACES];
        for disc in &mut discs[1..=whites] {
            *disc = Some(Player::White);
        }
        discs[whites + 1] = Some(Player::Black);
        Strand {
            discs,
            next: |index| Some(index + 1),
        }
    }
}

impl BoardAccessor for Strand {
    fn color_at(&self, loc: Location) -> Option<Player> {
        self.discs[loc.to_index()]
    }

    fn set_disc(&mut self, loc: Location, color: Player) {
        self.discs[loc.to_index()] = Some(color);
    }

    fn flip_color(&mut self, loc: Location) {
        if let Some(color) = &mut self.discs[loc.to_index()] {
            *color = !*color;
        }
    }

    fn neighbor_index(&self, loc: Location, dir: Direction) -> Option<Location> {
        match dir {
            Direction::East => (self.next)(loc.to_index()).and_then(Location::from_index),
            _ => None,
        }
    }
}

#[test]
fn longest_run_on_a_strand_is_captured() {
    let mut strand = Strand::closed_run(MAX_RUN);
    let start = Location::from_index(0).unwrap();
    assert!(is_legal_move(&strand, start, Player::Black));

    let flips = apply_move(&mut strand, start, Player::Black);
    assert_eq!(flips.len(), MAX_RUN);
    assert!(strand.discs[..=MAX_RUN + 1]
        .iter()
        .all(|&disc| disc == Some(Player::Black)));
}

#[test]
fn run_longer_than_a_board_line_never_captures() {
    for whites in [MAX_RUN + 1, 30, NUM_SPACES - 2] {
        let mut strand = Strand::closed_run(whites);
        let start = Location::from_index(0).unwrap();
        assert_eq!(
            captures_in_direction(&strand, start, Direction::East, Player::Black),
            0
        );
        assert!(!is_legal_move(&strand, start, Player::Black));

        let flips = apply_move(&mut strand, start, Player::Black);
        assert!(flips.is_empty());
        assert_eq!(strand.discs[1], Some(Player::White));
    }
}

#[test]
fn cyclic_ray_terminates() {
    // 10 leads into the white cycle 0 -> 1 -> 2 -> 3 -> 0, which never closes.
    let mut discs = [None; NUM_SPACES];
    for disc in &mut discs[0..4] {
        *disc = Some(Player::White);
    }
    let mut strand = Strand {
        discs,
        next: |index| Some(if index < 4 { (index + 1) % 4 } else { 0 }),
    };
    let start = Location::from_index(10).unwrap();

    assert!(!is_legal_move(&strand, start, Player::Black));
    assert!(apply_move(&mut strand, start, Player::Black).is_empty());
    assert!(strand.discs[0..4]
        .iter()
        .all(|&disc| disc == Some(Player::White)));
}
