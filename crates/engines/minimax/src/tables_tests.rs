use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_white_values_follow_printed_grid() {
    let t = &PIECE_SQUARE_TABLES;
    // Rank 7 is the "about to promote" row for White pawns.
    assert_eq!(t.value(PieceKind::Pawn, Color::White, sq("a7")), 50);
    assert_eq!(t.value(PieceKind::Pawn, Color::White, sq("d2")), -20);
    assert_eq!(t.value(PieceKind::Knight, Color::White, sq("e4")), 20);
    assert_eq!(t.value(PieceKind::King, Color::White, sq("g1")), 30);
    assert_eq!(t.value(PieceKind::Rook, Color::White, sq("d1")), 5);
}

#[test]
fn test_black_values_are_rows_reversed() {
    let t = &PIECE_SQUARE_TABLES;
    for kind in PieceKind::ALL {
        for square in Square::all() {
            assert_eq!(
                t.value(kind, Color::Black, square),
                t.value(kind, Color::White, square.flip_rank()),
                "{kind:?} on {square}"
            );
        }
    }
}

#[test]
fn test_black_pawn_prefers_second_rank() {
    let t = &PIECE_SQUARE_TABLES;
    assert_eq!(t.value(PieceKind::Pawn, Color::Black, sq("h2")), 50);
    assert_eq!(t.value(PieceKind::Pawn, Color::Black, sq("e7")), -20);
}

#[test]
fn test_queen_table_is_not_file_symmetric() {
    let t = &PIECE_SQUARE_TABLES;
    assert_eq!(t.value(PieceKind::Queen, Color::White, sq("a4")), 0);
    assert_eq!(t.value(PieceKind::Queen, Color::White, sq("h4")), -5);
}

#[test]
fn test_runtime_construction_matches_static() {
    let built = PieceSquareTables::new();
    for kind in PieceKind::ALL {
        for square in Square::all() {
            for color in [Color::White, Color::Black] {
                assert_eq!(
                    built.value(kind, color, square),
                    PIECE_SQUARE_TABLES.value(kind, color, square)
                );
            }
        }
    }
}

#[test]
fn test_white_values_read_grid_at_table_coords() {
    let t = &PIECE_SQUARE_TABLES;
    for kind in PieceKind::ALL {
        for square in Square::all() {
            let (file, row) = square.table_coords();
            assert_eq!(
                t.value(kind, Color::White, square),
                GRIDS[kind.idx()][row][file],
                "{kind:?} on {square}"
            );
        }
    }
}
