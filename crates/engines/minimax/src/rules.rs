//! The narrow interface the search needs from a chess rules implementation.

use std::fmt::Debug;

use crate::types::{Color, Piece, Square};

/// A mutable game position backed by an external rules engine.
///
/// The searcher only ever calls `apply_move` and `undo_last_move` in strict
/// pairs on a single call stack, so an implementation needs nothing more than
/// a history of prior states.
pub trait Rules {
    /// Opaque move token. The search applies, undoes and returns it, never
    /// looks inside.
    type Move: Copy + Eq + Debug;

    /// Appends the legal moves of the current position to `out`.
    ///
    /// The order must be deterministic: the search examines moves in exactly
    /// this order and breaks ties by it.
    fn legal_moves_into(&self, out: &mut Vec<Self::Move>);

    fn legal_moves(&self) -> Vec<Self::Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Plays `mv`, which must be one of the current legal moves.
    fn apply_move(&mut self, mv: Self::Move);

    /// Restores the position as it was before the most recent `apply_move`.
    fn undo_last_move(&mut self);

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn is_checkmate(&self) -> bool;

    fn side_to_move(&self) -> Color;
}
