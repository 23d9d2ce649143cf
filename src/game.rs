//! # Game Session
//!
//! A turn-taking session owning one board/usage pair and threading it
//! through the pure rules functions: validate, commit, resolve outcome,
//! repeat. The session keeps a numbered move history for replay and undo;
//! callers that only need legality or outcome checks can use the `rules`
//! functions directly on their own snapshots.

use thiserror::Error;

use crate::board::{Board, Player};
use crate::moves::Move;
use crate::pieces::{PieceKind, PieceSet};
use crate::rules::{is_legal, resolve_outcome, Outcome};

/// One committed move in the session history.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HistoryEntry {
    /// Sequential move number, starting from 1.
    pub move_number: u32,
    /// Which player committed the move.
    pub player: Player,
    /// The move itself.
    pub mv: Move,
}

/// Why a candidate move was rejected.
///
/// An expected, recoverable condition of interactive play (an overlapping or
/// out-of-bounds drop), returned as a value rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("the game is already over")]
    GameOver,
    #[error("piece {0} has already been played")]
    PieceAlreadyUsed(PieceKind),
    #[error("placement is out of bounds or overlaps an occupied cell")]
    Illegal,
}

/// A Deadblock game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    used: PieceSet,
    to_move: Player,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// Fresh game: empty board, all twelve pieces available, player one to
    /// move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            used: PieceSet::EMPTY,
            to_move: Player::One,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pieces played so far, by either player.
    pub fn used_pieces(&self) -> PieceSet {
        self.used
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Committed moves, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Classifies the current position from the next mover's perspective.
    pub fn outcome(&self) -> Outcome {
        resolve_outcome(&self.board, self.used, self.to_move)
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Whether `mv` would be accepted for the side to move right now.
    pub fn is_legal(&self, mv: &Move) -> bool {
        !self.used.contains(mv.piece) && is_legal(&self.board, mv)
    }

    /// Validates and commits a move for the side to move, then returns the
    /// resulting outcome (evaluated for the opponent, who moves next).
    pub fn try_move(&mut self, mv: Move) -> Result<Outcome, PlaceError> {
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }
        if self.used.contains(mv.piece) {
            return Err(PlaceError::PieceAlreadyUsed(mv.piece));
        }
        if !is_legal(&self.board, &mv) {
            return Err(PlaceError::Illegal);
        }

        self.board.place(&mv, self.to_move);
        self.used.insert(mv.piece);
        self.history.push(HistoryEntry {
            move_number: self.history.len() as u32 + 1,
            player: self.to_move,
            mv,
        });
        self.to_move = self.to_move.opponent();
        Ok(self.outcome())
    }

    /// Reverts the most recent move, if any, and returns its history entry.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop()?;
        self.board.clear(&entry.mv);
        self.used.remove(entry.mv.piece);
        self.to_move = entry.player;
        Some(entry)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Transform;

    #[test]
    fn new_game_state() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::One);
        assert!(game.used_pieces().is_empty());
        assert!(game.history().is_empty());
        assert_eq!(game.outcome(), Outcome::Ongoing);
        assert!(!game.is_over());
    }

    #[test]
    fn committing_alternates_turns_and_tracks_usage() {
        let mut game = Game::new();
        let first = Move::new(PieceKind::I, Transform::default(), 0, 0);
        assert_eq!(game.try_move(first), Ok(Outcome::Ongoing));
        assert_eq!(game.to_move(), Player::Two);
        assert!(game.used_pieces().contains(PieceKind::I));
        assert_eq!(game.board().owner(0, 4), Some(Player::One));

        let second = Move::new(PieceKind::X, Transform::default(), 3, 3);
        assert_eq!(game.try_move(second), Ok(Outcome::Ongoing));
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1].move_number, 2);
        assert_eq!(game.history()[1].player, Player::Two);
    }

    #[test]
    fn rejects_reused_piece_and_illegal_placement() {
        let mut game = Game::new();
        game.try_move(Move::new(PieceKind::I, Transform::default(), 0, 0))
            .unwrap();

        assert_eq!(
            game.try_move(Move::new(PieceKind::I, Transform::default(), 2, 0)),
            Err(PlaceError::PieceAlreadyUsed(PieceKind::I))
        );
        // Overlaps the I on row 0.
        assert_eq!(
            game.try_move(Move::new(PieceKind::X, Transform::default(), 0, 0)),
            Err(PlaceError::Illegal)
        );
        // Runs off the right edge.
        assert_eq!(
            game.try_move(Move::new(PieceKind::L, Transform::default(), 4, 7)),
            Err(PlaceError::Illegal)
        );
        // Rejections leave the state untouched.
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.used_pieces().len(), 1);
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut game = Game::new();
        let snapshot = game.clone();
        let mv = Move::new(PieceKind::W, Transform::default(), 2, 2);
        game.try_move(mv).unwrap();

        let entry = game.undo().expect("one move to undo");
        assert_eq!(entry.mv, mv);
        assert_eq!(entry.player, Player::One);
        assert_eq!(game.board(), snapshot.board());
        assert_eq!(game.used_pieces(), snapshot.used_pieces());
        assert_eq!(game.to_move(), Player::One);
        assert!(game.undo().is_none());
    }
}
