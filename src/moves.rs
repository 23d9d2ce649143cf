//! # Move Type
//!
//! A candidate or committed action: which piece, in which orientation, placed
//! at which anchor cell. The anchor is the board cell receiving the oriented
//! shape's normalized `(0, 0)` offset.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::pieces::{PieceKind, Transform, CELLS_PER_PIECE};

/// A piece placement: piece identity, orientation, anchor `(row, col)`.
///
/// A committed move is legal iff [`crate::rules::can_place`] accepted it at
/// commit time; moves are never retroactively invalidated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    /// Which pentomino to place.
    pub piece: PieceKind,
    /// Orientation of the piece.
    pub transform: Transform,
    /// Anchor row.
    pub row: usize,
    /// Anchor column.
    pub col: usize,
}

impl Move {
    pub fn new(piece: PieceKind, transform: Transform, row: usize, col: usize) -> Self {
        Move { piece, transform, row, col }
    }

    /// The oriented, normalized offsets of this move's piece.
    pub fn oriented_offsets(&self) -> [(i32, i32); CELLS_PER_PIECE] {
        self.transform.apply(self.piece.offsets())
    }

    /// The absolute board cells this move would occupy. Cells are signed and
    /// unclamped; bounds checking belongs to the validator.
    pub fn absolute_cells(&self) -> [(i32, i32); CELLS_PER_PIECE] {
        let mut cells = self.oriented_offsets();
        for cell in &mut cells {
            cell.0 += self.row as i32;
            cell.1 += self.col as i32;
        }
        cells
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{},{},{})",
            self.piece,
            self.transform.rotation % 4,
            self.transform.reflected as u8,
            self.row,
            self.col
        )
    }
}

/// A move string that does not name a `(piece,rotation,reflect,row,col)`
/// tuple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected format: (piece,rotation,reflect,row,col)")]
    Format,
    #[error(transparent)]
    Piece(#[from] crate::pieces::InvalidShapeName),
    #[error("invalid {field}: {value:?}")]
    Field { field: &'static str, value: String },
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.starts_with('(') || !s.ends_with(')') {
            return Err(ParseMoveError::Format);
        }
        let parts: Vec<&str> = s[1..s.len() - 1].split(',').map(|p| p.trim()).collect();
        if parts.len() != 5 {
            return Err(ParseMoveError::Format);
        }

        let piece = parts[0].parse::<PieceKind>()?;
        let rotation = parts[1].parse::<u8>().map_err(|_| ParseMoveError::Field {
            field: "rotation",
            value: parts[1].to_string(),
        })?;
        let reflected = match parts[2] {
            "0" => false,
            "1" => true,
            other => {
                return Err(ParseMoveError::Field {
                    field: "reflect",
                    value: other.to_string(),
                })
            }
        };
        let row = parts[3].parse::<usize>().map_err(|_| ParseMoveError::Field {
            field: "row",
            value: parts[3].to_string(),
        })?;
        let col = parts[4].parse::<usize>().map_err(|_| ParseMoveError::Field {
            field: "col",
            value: parts[4].to_string(),
        })?;

        Ok(Move::new(piece, Transform { rotation: rotation % 4, reflected }, row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_cells_offset_by_anchor() {
        let mv = Move::new(PieceKind::I, Transform::default(), 2, 3);
        assert_eq!(
            mv.absolute_cells(),
            [(2, 3), (2, 4), (2, 5), (2, 6), (2, 7)]
        );
    }

    #[test]
    fn display_round_trips() {
        let moves = [
            Move::new(PieceKind::I, Transform::default(), 0, 0),
            Move::new(PieceKind::F, Transform { rotation: 3, reflected: true }, 5, 2),
            Move::new(PieceKind::X, Transform { rotation: 1, reflected: false }, 3, 3),
        ];
        for mv in moves {
            assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
        }
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!("".parse::<Move>().is_err());
        assert!("I,0,0,0,0".parse::<Move>().is_err());
        assert!("(I,0,0,0)".parse::<Move>().is_err());
        assert!("(Q,0,0,0,0)".parse::<Move>().is_err());
        assert!("(I,0,maybe,0,0)".parse::<Move>().is_err());
        assert!("(I,0,0,0,-1)".parse::<Move>().is_err());
    }

    #[test]
    fn parse_wraps_rotation() {
        let mv = "(L,6,0,1,1)".parse::<Move>().unwrap();
        assert_eq!(mv.transform.rotation, 2);
    }
}
