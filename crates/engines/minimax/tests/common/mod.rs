//! Shared helpers for the integration tests.

#![allow(dead_code)]

use minimax_engine::{leaf_score, Evaluate, Game, Rules, Score, INFINITY};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Reference minimax without pruning.
pub fn full_minimax<R, E>(eval: &E, pos: &mut R, depth: u8, maximizing: bool) -> Score
where
    R: Rules,
    E: Evaluate<R>,
{
    if depth == 0 {
        return leaf_score(eval.evaluate(pos));
    }
    let mut value = if maximizing { -INFINITY } else { INFINITY };
    for mv in pos.legal_moves() {
        pos.apply_move(mv);
        let child = full_minimax(eval, pos, depth - 1, !maximizing);
        pos.undo_last_move();
        value = if maximizing {
            value.max(child)
        } else {
            value.min(child)
        };
    }
    value
}

/// Root move selection on top of [`full_minimax`], same `>=` policy.
pub fn full_minimax_root<R, E>(
    eval: &E,
    pos: &mut R,
    depth: u8,
    maximizing_at_root: bool,
) -> (Option<R::Move>, Score)
where
    R: Rules,
    E: Evaluate<R>,
{
    let mut best = None;
    let mut best_score = -INFINITY;
    for mv in pos.legal_moves() {
        pos.apply_move(mv);
        let value = full_minimax(eval, pos, depth.saturating_sub(1), !maximizing_at_root);
        pos.undo_last_move();
        if value >= best_score {
            best_score = value;
            best = Some(mv);
        }
    }
    (best, best_score)
}

/// Positions reached by short random playouts from the start position.
pub fn random_positions(seed: u64, count: usize, max_plies: usize) -> Vec<Game> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        let mut game = Game::startpos();
        let plies = i % (max_plies + 1);
        for _ in 0..plies {
            let moves = game.legal_moves();
            match moves.choose(&mut rng) {
                Some(&mv) => game.apply_move(mv),
                None => break,
            }
        }
        positions.push(Game::from_board(game.board().clone()));
    }
    positions
}

/// Colour-mirrored FEN: ranks flipped, piece colours and side to move swapped.
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let board = fields[0]
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/");
    let side = if fields[1] == "w" { "b" } else { "w" };

    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let swapped = swap_case(fields[2]);
        "KQkq".chars().filter(|c| swapped.contains(*c)).collect()
    };

    let ep = if fields[3] == "-" {
        "-".to_string()
    } else {
        let mut chars = fields[3].chars();
        let file = chars.next().unwrap_or('a');
        let rank = match chars.next() {
            Some('3') => '6',
            _ => '3',
        };
        format!("{file}{rank}")
    };

    let halfmove = fields.get(4).copied().unwrap_or("0");
    let fullmove = fields.get(5).copied().unwrap_or("1");
    format!("{board} {side} {castling} {ep} {halfmove} {fullmove}")
}

fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
