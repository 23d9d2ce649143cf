//! # AI Move Selector
//!
//! Computer-opponent move choice over the shared legality rules. Two tiers:
//! `Easy` picks uniformly among the legal moves, `Hard` plays the greedy
//! one-ply heuristic of minimizing the opponent's reply mobility. Hard is
//! not minimax; it is "hard" only relative to random play.
//!
//! Selection is generic over [`rand::Rng`], so callers can pass a seeded
//! `rand_xoshiro` generator for reproducible games or a thread RNG for
//! casual play.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Player};
use crate::moves::Move;
use crate::pieces::PieceSet;
use crate::rules::{count_legal_moves, legal_moves};

/// AI strength tier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Difficulty {
    /// Uniform random choice among the legal moves.
    #[default]
    Easy,
    /// Greedy one-ply mobility reduction, ties broken randomly.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    /// Lenient by contract: an unrecognized tier falls back to `Easy` so the
    /// game stays playable under unexpected input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(Difficulty::Hard),
            _ => Ok(Difficulty::Easy),
        }
    }
}

/// The selector was invoked for a player with no legal move.
///
/// A caller contract violation, not a game condition: the outcome must be
/// resolved before asking the AI to move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no legal move available for {0}")]
pub struct NoLegalMove(pub Player);

/// Chooses a move for `for_player` from the current position.
///
/// Fails with [`NoLegalMove`] when the unused pieces admit no placement.
pub fn select_move<R: Rng>(
    board: &Board,
    used: PieceSet,
    difficulty: Difficulty,
    for_player: Player,
    rng: &mut R,
) -> Result<Move, NoLegalMove> {
    let candidates = legal_moves(board, used.complement());
    if candidates.is_empty() {
        return Err(NoLegalMove(for_player));
    }

    let chosen = match difficulty {
        Difficulty::Easy => candidates[rng.gen_range(0..candidates.len())],
        Difficulty::Hard => pick_blocking_move(board, used, for_player, &candidates, rng),
    };
    debug!(
        "{} ({}) chose {} out of {} candidates",
        for_player,
        difficulty,
        chosen,
        candidates.len()
    );
    Ok(chosen)
}

/// Simulates each candidate on a scratch board and keeps the ones leaving
/// the opponent the fewest replies, then picks among those at random.
fn pick_blocking_move<R: Rng>(
    board: &Board,
    used: PieceSet,
    for_player: Player,
    candidates: &[Move],
    rng: &mut R,
) -> Move {
    let mut best = Vec::new();
    let mut best_mobility = usize::MAX;
    for &mv in candidates {
        let mut scratch = board.clone();
        scratch.place(&mv, for_player);
        let mut after = used;
        after.insert(mv.piece);
        let mobility = count_legal_moves(&scratch, after.complement());
        if mobility < best_mobility {
            best_mobility = mobility;
            best.clear();
        }
        if mobility == best_mobility {
            best.push(mv);
        }
    }
    debug!(
        "greedy tier: {} candidates leave the opponent {} replies",
        best.len(),
        best_mobility
    );
    best[rng.gen_range(0..best.len())]
}
