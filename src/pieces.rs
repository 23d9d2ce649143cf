//! # Pentomino Shape Library and Transform Engine
//!
//! This module holds the fixed catalog of the twelve free pentominoes, the
//! dihedral transform group applied to them, and the piece-usage bitset that
//! tracks which pieces have already been played in a game.
//!
//! ## Coordinate convention
//! Offsets are `(row, col)` with row growing downward and col growing to the
//! right. One rotation step maps `(r, c) -> (c, -r)`; reflection maps
//! `(r, c) -> (r, -c)`. A transform is always applied as: rotate `k` steps,
//! then optionally reflect, then re-normalize so the minimum row and column
//! are both zero, then sort. Rotate-then-reflect and reflect-then-rotate are
//! different transforms for asymmetric pentominoes, so every caller goes
//! through this one canonical order; `(rotation, reflected)` therefore
//! reproducibly names one of the 8 orientations.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every pentomino covers exactly five cells.
pub const CELLS_PER_PIECE: usize = 5;

/// The twelve free pentominoes, under their conventional letter names.
///
/// A closed enum rather than a string-keyed table: the compiler enforces that
/// the catalog covers exactly the canonical twelve and that matches over
/// piece kinds are exhaustive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    F,
    I,
    L,
    N,
    P,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl PieceKind {
    /// Number of distinct pieces in the game set.
    pub const COUNT: usize = 12;

    /// All twelve kinds, in a fixed order usable for indexing.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::F,
        PieceKind::I,
        PieceKind::L,
        PieceKind::N,
        PieceKind::P,
        PieceKind::T,
        PieceKind::U,
        PieceKind::V,
        PieceKind::W,
        PieceKind::X,
        PieceKind::Y,
        PieceKind::Z,
    ];

    /// Base `(row, col)` offsets of this pentomino at rotation 0, unreflected.
    ///
    /// Each set is normalized (minimum row and column are 0) and sorted. The
    /// `I` piece is horizontal at rotation 0, spanning columns 0..=4; this
    /// pins the axis convention for the whole crate.
    pub fn offsets(self) -> [(i32, i32); CELLS_PER_PIECE] {
        match self {
            PieceKind::F => [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
            PieceKind::I => [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
            PieceKind::L => [(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)],
            PieceKind::N => [(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)],
            PieceKind::P => [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)],
            PieceKind::T => [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
            PieceKind::U => [(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)],
            PieceKind::V => [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
            PieceKind::W => [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
            PieceKind::X => [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)],
            PieceKind::Y => [(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)],
            PieceKind::Z => [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Transforms producing distinct oriented cell sets for this piece.
    ///
    /// Symmetric pentominoes collapse under parts of the dihedral group (the
    /// `X` piece has a single orientation, the `I` piece two), so enumerating
    /// all 8 transforms would count some placements several times. One
    /// representative transform is kept per distinct normalized cell set;
    /// uniform random selection over the resulting moves is then uniform
    /// over distinct placements.
    pub fn distinct_transforms(self) -> Vec<Transform> {
        let mut seen = HashSet::new();
        let mut transforms = Vec::new();
        for t in Transform::ALL {
            if seen.insert(t.apply(self.offsets())) {
                transforms.push(t);
            }
        }
        transforms
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::F => "F",
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::N => "N",
            PieceKind::P => "P",
            PieceKind::T => "T",
            PieceKind::U => "U",
            PieceKind::V => "V",
            PieceKind::W => "W",
            PieceKind::X => "X",
            PieceKind::Y => "Y",
            PieceKind::Z => "Z",
        };
        write!(f, "{}", name)
    }
}

/// Lookup of a piece identity outside the canonical twelve.
///
/// Unreachable from the engine itself (piece kinds are a closed enum); it can
/// only arise when parsing external input, and there it indicates a
/// data-integrity bug in the producing layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece name: {0:?}")]
pub struct InvalidShapeName(pub String);

impl FromStr for PieceKind {
    type Err = InvalidShapeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "F" | "f" => Ok(PieceKind::F),
            "I" | "i" => Ok(PieceKind::I),
            "L" | "l" => Ok(PieceKind::L),
            "N" | "n" => Ok(PieceKind::N),
            "P" | "p" => Ok(PieceKind::P),
            "T" | "t" => Ok(PieceKind::T),
            "U" | "u" => Ok(PieceKind::U),
            "V" | "v" => Ok(PieceKind::V),
            "W" | "w" => Ok(PieceKind::W),
            "X" | "x" => Ok(PieceKind::X),
            "Y" | "y" => Ok(PieceKind::Y),
            "Z" | "z" => Ok(PieceKind::Z),
            other => Err(InvalidShapeName(other.to_string())),
        }
    }
}

/// One member of the dihedral group: `rotation` quarter-turns followed by an
/// optional reflection. See the module docs for the canonical application
/// order and axis convention.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Transform {
    /// Quarter-turn count, interpreted modulo 4.
    pub rotation: u8,
    /// Whether to reflect after rotating.
    pub reflected: bool,
}

impl Transform {
    /// The 8 members of the group, rotations first, then the reflected set.
    pub const ALL: [Transform; 8] = [
        Transform { rotation: 0, reflected: false },
        Transform { rotation: 1, reflected: false },
        Transform { rotation: 2, reflected: false },
        Transform { rotation: 3, reflected: false },
        Transform { rotation: 0, reflected: true },
        Transform { rotation: 1, reflected: true },
        Transform { rotation: 2, reflected: true },
        Transform { rotation: 3, reflected: true },
    ];

    /// Applies this transform to an offset set and re-normalizes the result.
    ///
    /// Rotation count is taken modulo 4. The returned set is normalized so
    /// the minimum row and column are both 0, and sorted, so equal oriented
    /// shapes compare equal regardless of which transform produced them.
    pub fn apply(self, offsets: [(i32, i32); CELLS_PER_PIECE]) -> [(i32, i32); CELLS_PER_PIECE] {
        let mut cells = offsets;
        for cell in &mut cells {
            let (mut r, mut c) = *cell;
            for _ in 0..(self.rotation % 4) {
                let prev_r = r;
                r = c;
                c = -prev_r;
            }
            if self.reflected {
                c = -c;
            }
            *cell = (r, c);
        }
        let min_r = cells.iter().map(|p| p.0).min().unwrap_or(0);
        let min_c = cells.iter().map(|p| p.1).min().unwrap_or(0);
        for cell in &mut cells {
            cell.0 -= min_r;
            cell.1 -= min_c;
        }
        cells.sort_unstable();
        cells
    }
}

/// Set of piece identities, as a bitset over [`PieceKind::ALL`].
///
/// Tracks which pieces have been played this game. Each of the twelve pieces
/// may be played by either player, but only once per game, so a single shared
/// set suffices; it grows monotonically until reset at game start.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PieceSet(u16);

impl PieceSet {
    const FULL_MASK: u16 = (1 << PieceKind::COUNT as u16) - 1;

    /// The empty set.
    pub const EMPTY: PieceSet = PieceSet(0);
    /// All twelve pieces.
    pub const FULL: PieceSet = PieceSet(Self::FULL_MASK);

    /// Returns true if `kind` is in the set.
    pub fn contains(self, kind: PieceKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    /// Inserts `kind`; returns false if it was already present.
    pub fn insert(&mut self, kind: PieceKind) -> bool {
        let bit = 1 << kind.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Removes `kind`; returns false if it was not present.
    pub fn remove(&mut self, kind: PieceKind) -> bool {
        let bit = 1 << kind.index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    /// Number of pieces in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set holds no pieces.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The pieces not in this set.
    pub fn complement(self) -> PieceSet {
        PieceSet(!self.0 & Self::FULL_MASK)
    }

    /// Iterates the members in [`PieceKind::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = PieceKind> {
        PieceKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}
