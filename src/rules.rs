//! # Placement Rules
//!
//! Placement legality, legal-move enumeration, and end-of-game
//! classification. Everything here is a pure function over an explicit
//! `(board, usage, turn)` snapshot; nothing is cached, because the board
//! mutates between calls and a full scan is cheap (worst case roughly
//! 12 pieces × 8 orientations × 64 anchors × 5 cells, around 31k checks).
//!
//! [`has_any_legal_move`] is the single source of truth for "does the side
//! to move have a move"; the outcome resolver and the AI both go through it
//! so the two can never disagree.

use crate::board::{Board, Player, BOARD_SIZE};
use crate::moves::Move;
use crate::pieces::{PieceKind, PieceSet, CELLS_PER_PIECE};

/// How a game stands after a committed move.
///
/// Recomputed fresh from board + usage state after every move; never stored
/// where it could drift out of sync with the board.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The game continues.
    Ongoing,
    /// The side to move had no legal placement; the named player wins.
    BlockingWin(Player),
    /// All twelve pieces are placed; the named player owns more cells.
    ExhaustionWin(Player),
    /// All twelve pieces are placed and both players own thirty cells.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Tests whether oriented offsets fit at an anchor: every resulting cell
/// must be in bounds and empty. Short-circuits on the first violation; pure
/// predicate, no side effects.
pub fn can_place(
    board: &Board,
    oriented: &[(i32, i32); CELLS_PER_PIECE],
    anchor_row: i32,
    anchor_col: i32,
) -> bool {
    for &(dr, dc) in oriented {
        let row = anchor_row + dr;
        let col = anchor_col + dc;
        if row < 0 || row >= BOARD_SIZE as i32 || col < 0 || col >= BOARD_SIZE as i32 {
            return false;
        }
        if !board.is_empty(row as usize, col as usize) {
            return false;
        }
    }
    true
}

/// [`can_place`] for a fully specified candidate move.
pub fn is_legal(board: &Board, mv: &Move) -> bool {
    can_place(
        board,
        &mv.oriented_offsets(),
        mv.row as i32,
        mv.col as i32,
    )
}

/// All legal `(piece, transform, anchor)` moves for the unused pieces.
///
/// Orientations are deduplicated per piece by resulting cell set, so
/// symmetric pentominoes are not over-represented; the list is uniform over
/// distinct placements. Recomputed eagerly on every call.
pub fn legal_moves(board: &Board, unused: PieceSet) -> Vec<Move> {
    let mut moves = Vec::new();
    for_each_legal_move(board, unused, |mv| {
        moves.push(mv);
        true
    });
    moves
}

/// Number of legal moves, without materializing them. Used by the greedy AI
/// as its mobility measure.
pub fn count_legal_moves(board: &Board, unused: PieceSet) -> usize {
    let mut count = 0;
    for_each_legal_move(board, unused, |_| {
        count += 1;
        true
    });
    count
}

/// Whether the unused pieces admit at least one legal placement. Stops at
/// the first hit.
pub fn has_any_legal_move(board: &Board, unused: PieceSet) -> bool {
    let mut found = false;
    for_each_legal_move(board, unused, |_| {
        found = true;
        false
    });
    found
}

/// Drives the piece × orientation × anchor scan shared by the enumeration
/// entry points. The visitor returns false to stop early.
fn for_each_legal_move<F: FnMut(Move) -> bool>(board: &Board, unused: PieceSet, mut visit: F) {
    for piece in unused.iter() {
        for transform in piece.distinct_transforms() {
            let oriented = transform.apply(piece.offsets());
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    if can_place(board, &oriented, row as i32, col as i32)
                        && !visit(Move::new(piece, transform, row, col))
                    {
                        return;
                    }
                }
            }
        }
    }
}

/// Classifies the game after a committed move, from the next mover's
/// perspective (evaluated before that player acts).
///
/// Exhaustion of the twelve pieces is the termination trigger, not board
/// fullness; pentominoes leave gaps, so the board is never full. With unused
/// pieces remaining, a next mover without a single legal placement loses on
/// the spot. No minimum-piece guard is needed before the blocking check:
/// with at most one pentomino on an 8×8 board every piece still fits, so
/// the check cannot fire early.
pub fn resolve_outcome(board: &Board, used: PieceSet, next_mover: Player) -> Outcome {
    if used.len() == PieceKind::COUNT {
        let p1 = board.count_owned(Player::One);
        let p2 = board.count_owned(Player::Two);
        return match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Outcome::ExhaustionWin(Player::One),
            std::cmp::Ordering::Less => Outcome::ExhaustionWin(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
    }

    if !has_any_legal_move(board, used.complement()) {
        return Outcome::BlockingWin(next_mover.opponent());
    }

    Outcome::Ongoing
}
