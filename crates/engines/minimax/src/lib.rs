//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material plus
//! piece-square evaluation. Move generation and game rules come from
//! `cozy-chess` through the [`Rules`] trait.

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod tables;
pub mod types;

pub use config::{EngineConfig, MAX_DEPTH};
pub use error::EngineError;
pub use eval::{evaluate, piece_value, Evaluate, Evaluator, MATE_BONUS};
pub use game::{Game, Outcome};
pub use rules::Rules;
pub use search::{choose_best_move, improves_on, leaf_score, SearchOutcome, Searcher, INFINITY};
pub use tables::{PieceSquareTables, Score, PIECE_SQUARE_TABLES};
pub use types::{Color, Piece, PieceKind, Square};

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<cozy_chess::Move>,
    /// Value of the best move as the search sees it
    pub score: Score,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning at a fixed depth
/// - Material plus piece-square evaluation
/// - Moves examined in generation order, ties going to the later move
pub struct MinimaxEngine {
    config: EngineConfig,
    searcher: Searcher<Evaluator<'static>>,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            searcher: Searcher::new(Evaluator::new(&PIECE_SQUARE_TABLES)),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    pub fn search(&mut self, game: &mut Game) -> SearchResult {
        let outcome = self
            .searcher
            .search(game, self.config.depth, self.config.maximizing_at_root);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: self.config.depth,
            nodes: outcome.nodes,
        }
    }

    /// Static evaluation of the current position (White's point of view).
    pub fn evaluate(&self, game: &Game) -> Score {
        self.searcher.evaluator().evaluate(game)
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn name(&self) -> &str {
        "Minimax v1.0"
    }

    pub fn author(&self) -> &str {
        "ML-chess"
    }

    pub fn new_game(&mut self) {
        self.nodes = 0;
    }
}
