//! [`Rules`] adapter over `cozy-chess`.
//!
//! `cozy_chess::Board` is a value type without undo, so the adapter keeps a
//! stack of prior boards. UCI move text is translated at this boundary
//! because cozy-chess encodes castling as "king takes own rook" (e1h1) while
//! UCI uses the king's destination (e1g1).

use cozy_chess::{Board, File, Move};

use crate::error::EngineError;
use crate::rules::Rules;
use crate::types::{Color, Piece, PieceKind, Square};

/// How the game stands in the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    /// The current position has occurred three times.
    Repetition,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<Board>,
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Game {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let board = Board::from_fen(fen, false).map_err(|e| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::with_capacity(16),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of moves that can still be undone.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn has_legal_move(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| {
            any = true;
            true
        });
        any
    }

    pub fn outcome(&self) -> Outcome {
        if !self.has_legal_move() {
            if self.is_check() {
                return Outcome::Checkmate {
                    winner: self.side_to_move().other(),
                };
            }
            return Outcome::Stalemate;
        }
        if self.board.halfmove_clock() >= 100 {
            return Outcome::FiftyMoveRule;
        }
        if self.is_insufficient_material() {
            return Outcome::InsufficientMaterial;
        }
        if self.repetitions() >= 3 {
            return Outcome::Repetition;
        }
        Outcome::Ongoing
    }

    /// Neither side can mate: bare kings, a single minor piece, or only
    /// bishops that all stand on squares of one colour.
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishops = 0;
        let mut bishop_shades = [false; 2];
        for sq in Square::all() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => {
                    bishops += 1;
                    bishop_shades[((sq.file() + sq.rank()) % 2) as usize] = true;
                }
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }
        if knights + bishops <= 1 {
            return true;
        }
        knights == 0 && !(bishop_shades[0] && bishop_shades[1])
    }

    /// How many times the current position has occurred, itself included.
    pub fn repetitions(&self) -> usize {
        1 + self
            .history
            .iter()
            .filter(|prev| prev.same_position(&self.board))
            .count()
    }

    /// Parses a UCI move (`e2e4`, `e7e8q`, `e1g1`) and checks it against the
    /// legal moves of the current position.
    pub fn parse_uci_move(&self, txt: &str) -> Result<Move, EngineError> {
        let txt = txt.trim();
        if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
            return Err(EngineError::InvalidMove(txt.to_string()));
        }
        let from: Square = txt[0..2]
            .parse()
            .map_err(|_| EngineError::InvalidMove(txt.to_string()))?;
        let mut to: Square = txt[2..4]
            .parse()
            .map_err(|_| EngineError::InvalidMove(txt.to_string()))?;
        let promotion = match txt.as_bytes().get(4) {
            None => None,
            Some(b'q') | Some(b'Q') => Some(cozy_chess::Piece::Queen),
            Some(b'r') | Some(b'R') => Some(cozy_chess::Piece::Rook),
            Some(b'b') | Some(b'B') => Some(cozy_chess::Piece::Bishop),
            Some(b'n') | Some(b'N') => Some(cozy_chess::Piece::Knight),
            Some(_) => return Err(EngineError::InvalidMove(txt.to_string())),
        };

        // Standard castling notation -> king onto its own rook.
        let is_king = self.board.piece_on(to_cozy(from)) == Some(cozy_chess::Piece::King);
        if is_king && from.rank() == to.rank() && from.file().abs_diff(to.file()) == 2 {
            let rook_file = if to.file() > from.file() { 7 } else { 0 };
            to = Square::new(rook_file, from.rank()).ok_or_else(|| EngineError::InvalidMove(txt.to_string()))?;
        }

        let mv = Move {
            from: to_cozy(from),
            to: to_cozy(to),
            promotion,
        };
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(EngineError::IllegalMove(txt.to_string()))
        }
    }

    /// Formats a move legal in the current position as UCI text.
    pub fn move_to_uci(&self, mv: Move) -> String {
        let mut to = mv.to;
        let is_king = self.board.piece_on(mv.from) == Some(cozy_chess::Piece::King);
        if is_king && self.board.color_on(mv.to) == Some(self.board.side_to_move()) {
            let file = if mv.to.file() as usize > mv.from.file() as usize { File::G } else { File::C };
            to = cozy_chess::Square::new(file, mv.from.rank());
        }
        let mut s = format!("{}{}", mv.from, to);
        if let Some(p) = mv.promotion {
            s.push(match p {
                cozy_chess::Piece::Queen => 'q',
                cozy_chess::Piece::Rook => 'r',
                cozy_chess::Piece::Bishop => 'b',
                _ => 'n',
            });
        }
        s
    }

    /// Parses and plays a UCI move, keeping it undoable.
    pub fn play_uci(&mut self, txt: &str) -> Result<Move, EngineError> {
        let mv = self.parse_uci_move(txt)?;
        self.apply_move(mv);
        Ok(mv)
    }
}

impl Rules for Game {
    type Move = Move;

    fn legal_moves_into(&self, out: &mut Vec<Move>) {
        self.board.generate_moves(|moves| {
            out.extend(moves);
            false
        });
    }

    fn apply_move(&mut self, mv: Move) {
        self.history.push(self.board.clone());
        self.board.play(mv);
    }

    fn undo_last_move(&mut self) {
        match self.history.pop() {
            Some(prev) => self.board = prev,
            None => panic!("undo_last_move called with no move to undo"),
        }
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let sq = to_cozy(square);
        let kind = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece::new(from_cozy_color(color), from_cozy_piece(kind)))
    }

    fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_move()
    }

    fn side_to_move(&self) -> Color {
        from_cozy_color(self.board.side_to_move())
    }
}

#[inline]
fn to_cozy(square: Square) -> cozy_chess::Square {
    cozy_chess::Square::index(square.index())
}

#[inline]
fn from_cozy_color(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

#[inline]
fn from_cozy_piece(piece: cozy_chess::Piece) -> PieceKind {
    match piece {
        cozy_chess::Piece::Pawn => PieceKind::Pawn,
        cozy_chess::Piece::Knight => PieceKind::Knight,
        cozy_chess::Piece::Bishop => PieceKind::Bishop,
        cozy_chess::Piece::Rook => PieceKind::Rook,
        cozy_chess::Piece::Queen => PieceKind::Queen,
        cozy_chess::Piece::King => PieceKind::King,
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
