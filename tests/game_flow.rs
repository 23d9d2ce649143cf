//! End-to-end games through the public API: scripted opening, full
//! AI-driven playouts, and consistency between the outcome resolver and the
//! move enumerator at every step.

use deadblock::{
    has_any_legal_move, select_move, Difficulty, Game, Move, Outcome, PieceKind, Player,
    Transform, CELLS_PER_PIECE,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[test]
fn scripted_opening() {
    let mut game = Game::new();
    assert!(game.used_pieces().is_empty());

    // Player 1 opens with the I pentomino along the top edge.
    let opening = Move::new(PieceKind::I, Transform::default(), 0, 0);
    assert_eq!(game.try_move(opening), Ok(Outcome::Ongoing));
    for col in 0..CELLS_PER_PIECE {
        assert_eq!(game.board().owner(0, col), Some(Player::One));
        assert_eq!(game.board().piece_at(0, col), Some(PieceKind::I));
    }
    assert_eq!(game.used_pieces().len(), 1);
    assert!(game.used_pieces().contains(PieceKind::I));

    // Player 2 answers with the X in the middle.
    let answer = Move::new(PieceKind::X, Transform::default(), 3, 3);
    assert_eq!(game.try_move(answer), Ok(Outcome::Ongoing));
    assert_eq!(game.used_pieces().len(), 2);
    assert!(game.used_pieces().contains(PieceKind::X));
    assert_eq!(game.to_move(), Player::One);
    assert_eq!(game.board().count_owned(Player::One), 5);
    assert_eq!(game.board().count_owned(Player::Two), 5);
}

/// Plays one full AI game and checks every invariant along the way; returns
/// the final state.
fn play_out(seed: u64, p1: Difficulty, p2: Difficulty) -> Game {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut game = Game::new();

    while !game.is_over() {
        let mover = game.to_move();
        let difficulty = if mover == Player::One { p1 } else { p2 };
        let mv = select_move(game.board(), game.used_pieces(), difficulty, mover, &mut rng)
            .expect("ongoing game must have a legal move for the side to move");
        assert!(game.is_legal(&mv));
        game.try_move(mv).expect("selected move must commit");

        // Usage grows by exactly one piece per ply, cells by five.
        let plies = game.history().len();
        assert_eq!(game.used_pieces().len(), plies);
        assert_eq!(
            game.board().count_owned(Player::One) + game.board().count_owned(Player::Two),
            plies * CELLS_PER_PIECE
        );
    }
    game
}

#[test]
fn ai_playouts_terminate_consistently() {
    for seed in 0..25 {
        let game = play_out(seed, Difficulty::Easy, Difficulty::Easy);
        let unused = game.used_pieces().complement();

        match game.outcome() {
            Outcome::Ongoing => panic!("playout ended on an ongoing game"),
            Outcome::BlockingWin(winner) => {
                // The loser to move must genuinely have no placement left.
                assert!(!has_any_legal_move(game.board(), unused));
                assert!(!unused.is_empty());
                assert_eq!(winner, game.to_move().opponent());
            }
            Outcome::ExhaustionWin(winner) => {
                assert!(unused.is_empty());
                let p1 = game.board().count_owned(Player::One);
                let p2 = game.board().count_owned(Player::Two);
                assert_eq!(p1 + p2, PieceKind::COUNT * CELLS_PER_PIECE);
                match winner {
                    Player::One => assert!(p1 > p2),
                    Player::Two => assert!(p2 > p1),
                }
            }
            Outcome::Draw => {
                assert!(unused.is_empty());
                assert_eq!(
                    game.board().count_owned(Player::One),
                    game.board().count_owned(Player::Two)
                );
            }
        }
    }
}

#[test]
fn greedy_tier_finishes_games_too() {
    for seed in [1u64, 2, 3] {
        let game = play_out(seed, Difficulty::Hard, Difficulty::Easy);
        assert!(game.outcome().is_over());
        assert!(!game.history().is_empty());
    }
}

#[test]
fn seeded_playouts_are_reproducible() {
    let a = play_out(99, Difficulty::Easy, Difficulty::Hard);
    let b = play_out(99, Difficulty::Easy, Difficulty::Hard);
    assert_eq!(a.history(), b.history());
    assert_eq!(a.outcome(), b.outcome());
}

#[test]
fn finished_game_rejects_further_moves() {
    let mut game = play_out(5, Difficulty::Easy, Difficulty::Easy);
    let result = game.try_move(Move::new(PieceKind::F, Transform::default(), 0, 0));
    assert!(result.is_err());
}
