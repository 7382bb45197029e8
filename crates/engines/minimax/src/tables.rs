//! Piece-square tables.
//!
//! Each grid below is written the way a board is printed: row 0 is rank 8,
//! row 7 is rank 1, columns run a..h. The grids are White's. Black's table for
//! the same piece is the grid with its rows reversed, so a Black piece on e7
//! scores what a White piece on e2 does.
//!
//! Both colours are laid out into square-indexed arrays at compile time by
//! [`PieceSquareTables::new`], the same way the Zobrist keys are generated.

use crate::types::{Color, PieceKind, Square};

/// Score units: centipawns, pawn = 100.
pub type Score = i32;

type Grid = [[Score; 8]; 8];

const PAWN: Grid = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT: Grid = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP: Grid = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK: Grid = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

// Not horizontally symmetric (a4 vs h4); only the vertical mirror is used.
const QUEEN: Grid = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING: Grid = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

/// Grids in `PieceKind` order.
const GRIDS: [Grid; 6] = [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING];

/// Square-indexed positional bonuses for both colours.
pub struct PieceSquareTables {
    /// Indexed by [color][piece_kind][square]
    values: [[[Score; 64]; 6]; 2],
}

/// The tables every evaluator in the process reads from.
pub static PIECE_SQUARE_TABLES: PieceSquareTables = PieceSquareTables::new();

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSquareTables {
    pub const fn new() -> Self {
        let mut values = [[[0; 64]; 6]; 2];

        let mut kind = 0;
        while kind < 6 {
            let mut sq = 0;
            while sq < 64 {
                let Some(square) = Square::from_index(sq) else {
                    unreachable!()
                };
                let (file, row) = square.table_coords();
                values[0][kind][sq] = GRIDS[kind][row][file];
                values[1][kind][sq] = GRIDS[kind][7 - row][file];
                sq += 1;
            }
            kind += 1;
        }

        Self { values }
    }

    /// Positional bonus for a `kind` piece of `color` standing on `square`.
    #[inline]
    pub fn value(&self, kind: PieceKind, color: Color, square: Square) -> Score {
        self.values[color.idx()][kind.idx()][square.index()]
    }
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tables_tests;
