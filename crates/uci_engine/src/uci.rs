//! UCI command handling.
//!
//! Only fixed-depth search is offered: `go` ignores clock arguments and
//! searches at the configured depth.

use std::io::{self, Write};

use minimax_engine::{EngineConfig, EngineError, Game, MinimaxEngine, Outcome, Rules, MAX_DEPTH};
use tracing::{debug, warn};

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession {
    engine: MinimaxEngine,
    game: Game,
}

impl UciSession {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: MinimaxEngine::new(config),
            game: Game::startpos(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn depth(&self) -> u8 {
        self.engine.config().depth
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(Flow::Continue);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
                    self.depth()
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(&parts[1..]),
            "ucinewgame" => {
                self.game = Game::startpos();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = self.set_position(&parts[1..]) {
                    warn!(error = %e, "rejected position command");
                }
            }
            "go" => self.go(out)?,
            "eval" => {
                writeln!(out, "eval {}", self.engine.evaluate(&self.game))?;
                writeln!(out, "status {}", status_text(&self.game))?;
            }
            "quit" => return Ok(Flow::Quit),
            other => debug!(command = other, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// `setoption name Depth value N`
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&x| x == "name");
        let value_at = args.iter().position(|&x| x == "value");
        let (Some(n), Some(v)) = (name_at, value_at) else {
            return;
        };
        if v <= n {
            return;
        }
        let name = args[n + 1..v].join(" ");
        if !name.eq_ignore_ascii_case("depth") {
            debug!(%name, "ignoring unknown option");
            return;
        }
        match args.get(v + 1).map(|s| s.parse::<u8>()) {
            Some(Ok(depth)) => self.engine.config_mut().set_depth(depth),
            _ => warn!("invalid Depth value"),
        }
    }

    /// `position startpos [moves ...]` or `position fen <fen> [moves ...]`.
    ///
    /// The position is only replaced once every move has been played.
    fn set_position(&mut self, args: &[&str]) -> Result<(), EngineError> {
        let moves_at = args.iter().position(|&x| x == "moves").unwrap_or(args.len());
        let mut game = match args.first() {
            Some(&"fen") => Game::from_fen(&args[1..moves_at].join(" "))?,
            _ => Game::startpos(),
        };
        for txt in args.iter().skip(moves_at + 1) {
            game.play_uci(txt)?;
        }
        self.game = game;
        Ok(())
    }

    fn go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let result = self.engine.search(&mut self.game);
        match result.best_move {
            Some(mv) => {
                writeln!(out, "info depth {} nodes {}", result.depth, result.nodes)?;
                writeln!(out, "bestmove {}", self.game.move_to_uci(mv))
            }
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

/// One-line description of the game state for the side to move.
pub fn status_text(game: &Game) -> String {
    let mover = game.side_to_move();
    match game.outcome() {
        Outcome::Checkmate { .. } => format!("Game over, {mover} is in checkmate."),
        Outcome::Stalemate
        | Outcome::FiftyMoveRule
        | Outcome::InsufficientMaterial
        | Outcome::Repetition => "Game over, drawn position".to_string(),
        Outcome::Ongoing if game.is_check() => format!("{mover} to move, {mover} is in check"),
        Outcome::Ongoing => format!("{mover} to move"),
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
