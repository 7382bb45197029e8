//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Two conventions carry the whole game-theoretic meaning of the search and
//! live in their own functions:
//! - [`leaf_score`]: a leaf is worth the *negated* White-relative evaluation.
//! - [`improves_on`]: the root keeps a move whose value is `>=` the best so
//!   far, so among equal moves the one enumerated last wins.

use tracing::{debug, info};

use crate::eval::{Evaluate, Evaluator};
use crate::rules::Rules;
use crate::tables::Score;

/// Search window bound. Symmetric so that it can be negated safely.
pub const INFINITY: Score = Score::MAX;

/// Value of a leaf given the evaluator's White-relative score.
#[inline]
pub fn leaf_score(static_eval: Score) -> Score {
    -static_eval
}

/// Root tie-break: a later move with an equal value replaces the current best.
#[inline]
pub fn improves_on(candidate: Score, best: Score) -> bool {
    candidate >= best
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// Best move found (None if the root has no legal moves)
    pub best_move: Option<M>,
    /// Value of the best move; -INFINITY when there is none
    pub score: Score,
    /// Moves applied during the search
    pub nodes: u64,
}

/// Depth-first minimax over any [`Rules`] position.
#[derive(Clone, Copy, Default)]
pub struct Searcher<E> {
    evaluator: E,
}

impl<E> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Picks the best move at the root.
    ///
    /// Every root move is searched with a fresh `(-INFINITY, INFINITY)`
    /// window and the opposite perspective of `maximizing_at_root`. Depth 0
    /// is treated as depth 1.
    pub fn search<R>(&self, pos: &mut R, depth: u8, maximizing_at_root: bool) -> SearchOutcome<R::Move>
    where
        R: Rules,
        E: Evaluate<R>,
    {
        let moves = pos.legal_moves();
        let mut nodes = 0u64;
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in moves {
            pos.apply_move(mv);
            nodes += 1;
            let value = self.minimax(
                pos,
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                !maximizing_at_root,
                &mut nodes,
            );
            pos.undo_last_move();

            debug!(?mv, value, "root move");

            if improves_on(value, best_score) {
                best_score = value;
                best_move = Some(mv);
            }
        }

        info!(best_move = ?best_move, score = best_score, depth, nodes, "search finished");

        SearchOutcome {
            best_move,
            score: best_score,
            nodes,
        }
    }

    pub fn choose_best_move<R>(&self, pos: &mut R, depth: u8, maximizing_at_root: bool) -> Option<R::Move>
    where
        R: Rules,
        E: Evaluate<R>,
    {
        self.search(pos, depth, maximizing_at_root).best_move
    }

    /// Alpha-beta minimax below the root.
    ///
    /// A node without legal moves (mate or stalemate) returns its initial
    /// value untouched: `-INFINITY` when maximizing, `INFINITY` when
    /// minimizing.
    pub fn minimax<R>(
        &self,
        pos: &mut R,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Score
    where
        R: Rules,
        E: Evaluate<R>,
    {
        if depth == 0 {
            return leaf_score(self.evaluator.evaluate(pos));
        }

        let moves = pos.legal_moves();

        if maximizing {
            let mut value = -INFINITY;
            for mv in moves {
                pos.apply_move(mv);
                *nodes += 1;
                let child = self.minimax(pos, depth - 1, alpha, beta, false, nodes);
                pos.undo_last_move();

                value = value.max(child);
                alpha = alpha.max(value);
                if alpha >= beta {
                    return value;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for mv in moves {
                pos.apply_move(mv);
                *nodes += 1;
                let child = self.minimax(pos, depth - 1, alpha, beta, true, nodes);
                pos.undo_last_move();

                value = value.min(child);
                beta = beta.min(value);
                if alpha >= beta {
                    return value;
                }
            }
            value
        }
    }
}

/// Best reply for the side to move, searched with the maximizing
/// perspective at the root and the process-wide tables.
pub fn choose_best_move<R: Rules>(pos: &mut R, depth: u8) -> Option<R::Move> {
    Searcher::new(Evaluator::default()).choose_best_move(pos, depth, true)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
