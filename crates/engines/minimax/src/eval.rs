//! Material plus piece-square position evaluation.

use crate::rules::Rules;
use crate::tables::{PieceSquareTables, Score, PIECE_SQUARE_TABLES};
use crate::types::{Color, Piece, PieceKind, Square};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [Score; 6] = [100, 320, 330, 500, 900, 20_000];

/// Added on top of the material sum when the side to move is checkmated.
pub const MATE_BONUS: Score = 100_000;

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.idx()]
}

/// Static scoring of a position, as seen by the search at its leaves.
pub trait Evaluate<P: ?Sized> {
    fn evaluate(&self, pos: &P) -> Score;
}

/// Scores positions from White's point of view: positive favours White.
#[derive(Clone, Copy)]
pub struct Evaluator<'t> {
    tables: &'t PieceSquareTables,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(&PIECE_SQUARE_TABLES)
    }
}

impl<'t> Evaluator<'t> {
    pub fn new(tables: &'t PieceSquareTables) -> Self {
        Self { tables }
    }

    /// Signed contribution of one piece: material plus square bonus,
    /// negated for Black.
    #[inline]
    pub fn piece_score(&self, piece: Piece, square: Square) -> Score {
        let v = piece_value(piece.kind) + self.tables.value(piece.kind, piece.color, square);
        match piece.color {
            Color::White => v,
            Color::Black => -v,
        }
    }

    /// Material and positional sum over the board, plus the checkmate bonus.
    ///
    /// The bonus depends only on whose turn it is in the mated position:
    /// Black to move and mated gives +[`MATE_BONUS`], White gives the
    /// negative. Stalemate and other draws get nothing.
    pub fn evaluate<R: Rules + ?Sized>(&self, pos: &R) -> Score {
        let mut score: Score = Square::all()
            .filter_map(|sq| pos.piece_at(sq).map(|pc| self.piece_score(pc, sq)))
            .sum();

        if pos.is_checkmate() {
            score += match pos.side_to_move() {
                Color::Black => MATE_BONUS,
                Color::White => -MATE_BONUS,
            };
        }
        score
    }
}

impl<R: Rules> Evaluate<R> for Evaluator<'_> {
    fn evaluate(&self, pos: &R) -> Score {
        Evaluator::evaluate(self, pos)
    }
}

/// Evaluates with the process-wide tables.
pub fn evaluate<R: Rules + ?Sized>(pos: &R) -> Score {
    Evaluator::default().evaluate(pos)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
