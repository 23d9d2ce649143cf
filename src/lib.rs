//! # Deadblock Engine
//!
//! Rules and AI engine for Deadblock, a two-player pentomino blocking game:
//! players alternate placing pieces from a shared pool of the twelve free
//! pentominoes onto an 8×8 board. A piece may land on any empty in-bounds
//! cells. Whoever faces a position with no legal placement loses on the
//! spot; if all twelve pieces get placed, the larger occupied area wins and
//! equal areas draw.
//!
//! The engine is UI- and transport-agnostic: every operation is a pure or
//! deterministic function over an explicit `(board, usage, turn)` snapshot,
//! with no I/O, no caches, and no shared mutable state. An embedding layer
//! (rendering, persistence, matchmaking, notifications) owns its snapshots
//! and threads them through these calls sequentially; the worst-case scan is
//! tens of thousands of cell checks, well under a millisecond, so nothing
//! here needs cancellation or background execution.
//!
//! ## Modules
//! - [`pieces`]: the pentomino catalog, orientation transforms, usage set
//! - [`board`]: owner grid plus piece-provenance grid
//! - [`moves`]: the `(piece, transform, anchor)` move type and its text form
//! - [`rules`]: placement legality, move enumeration, outcome resolution
//! - [`ai`]: random and greedy-blocking computer opponents
//! - [`game`]: a turn-taking session with history and undo
//!
//! ## Example
//! ```
//! use deadblock::{Difficulty, Game, Move, Outcome, PieceKind, Transform};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut game = Game::new();
//! let opening = Move::new(PieceKind::I, Transform::default(), 0, 0);
//! assert_eq!(game.try_move(opening), Ok(Outcome::Ongoing));
//!
//! // Let the AI answer.
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! let reply = deadblock::select_move(
//!     game.board(),
//!     game.used_pieces(),
//!     Difficulty::Hard,
//!     game.to_move(),
//!     &mut rng,
//! )
//! .unwrap();
//! game.try_move(reply).unwrap();
//! ```

pub mod ai;
pub mod board;
pub mod game;
pub mod moves;
pub mod pieces;
pub mod rules;

pub use ai::{select_move, Difficulty, NoLegalMove};
pub use board::{Board, Player, SnapshotError, BOARD_SIZE};
pub use game::{Game, HistoryEntry, PlaceError};
pub use moves::{Move, ParseMoveError};
pub use pieces::{InvalidShapeName, PieceKind, PieceSet, Transform, CELLS_PER_PIECE};
pub use rules::{
    can_place, count_legal_moves, has_any_legal_move, is_legal, legal_moves, resolve_outcome,
    Outcome,
};
