//! # Board Model
//!
//! The 8×8 game board: a grid of cell ownership plus a parallel provenance
//! grid recording which piece occupies each cell. Ownership decides legality
//! and scoring; provenance exists for rendering and undo, never for
//! legality.
//!
//! Invariant: a cell has an owner iff it has a provenance entry. The engine
//! preserves it through [`Board::place`] and [`Board::clear`]; external
//! snapshots are checked once at import in [`Board::from_parts`].

use std::fmt;

use thiserror::Error;

use crate::moves::Move;
use crate::pieces::PieceKind;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// One of the two players.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// An imported board snapshot whose owner and provenance grids disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("owner and provenance grids disagree at ({row}, {col})")]
pub struct SnapshotError {
    pub row: usize,
    pub col: usize,
}

/// The 8×8 board: cell ownership plus piece provenance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    /// Owner of each cell, `None` for empty.
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
    /// Piece occupying each cell, `None` for empty.
    provenance: [[Option<PieceKind>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            provenance: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from an externally produced snapshot (a persistence or
    /// sync layer handing over plain grids).
    ///
    /// This is the one place the owner/provenance agreement invariant is
    /// verified; the grids must mark exactly the same cells occupied.
    pub fn from_parts(
        cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
        provenance: [[Option<PieceKind>; BOARD_SIZE]; BOARD_SIZE],
    ) -> Result<Self, SnapshotError> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if cells[row][col].is_some() != provenance[row][col].is_some() {
                    return Err(SnapshotError { row, col });
                }
            }
        }
        Ok(Board { cells, provenance })
    }

    /// Owner of the cell at `(row, col)`, or `None` if empty.
    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Piece occupying the cell at `(row, col)`, or `None` if empty.
    pub fn piece_at(&self, row: usize, col: usize) -> Option<PieceKind> {
        self.provenance[row][col]
    }

    /// Returns true if the cell at `(row, col)` is unoccupied.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Number of cells owned by `player`.
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    /// Writes `mv`'s five cells as owned by `player`.
    ///
    /// Does NOT re-validate: the caller must have accepted `mv` through
    /// [`crate::rules::can_place`] first. Given an illegal move this will
    /// index out of bounds or silently overwrite occupied cells; validation
    /// is deliberately the caller's responsibility so interactive play pays
    /// for it exactly once per candidate.
    pub fn place(&mut self, mv: &Move, player: Player) {
        for (row, col) in mv.absolute_cells() {
            let (row, col) = (row as usize, col as usize);
            self.cells[row][col] = Some(player);
            self.provenance[row][col] = Some(mv.piece);
        }
    }

    /// Empties `mv`'s five cells, owner and provenance both. Supports undo;
    /// the caller is responsible for `mv` being the most recent placement.
    pub fn clear(&mut self, mv: &Move) {
        for (row, col) in mv.absolute_cells() {
            let (row, col) = (row as usize, col as usize);
            self.cells[row][col] = None;
            self.provenance[row][col] = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row][col] {
                    Some(Player::One) => "X",
                    Some(Player::Two) => "O",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
