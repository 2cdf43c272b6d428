//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view with file and rank labels for
//! debugging, tests, and diagnostics in text environments. The plain
//! one-letter layout lives in `Display for Board`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIRST_COLUMN, FIRST_ROW, LAST_COLUMN, LAST_ROW};
use crate::game_state::chess_types::{Piece, PieceType, Team};
use crate::game_state::position::Position;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (FIRST_ROW..=LAST_ROW).rev() {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for column in FIRST_COLUMN..=LAST_COLUMN {
            let occupant = Position::new(row, column)
                .ok()
                .and_then(|position| board.piece_at(position));
            out.push(occupant.map_or('·', piece_to_unicode));

            if column < LAST_COLUMN {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.team, piece.piece_type) {
        (Team::White, PieceType::Pawn) => '♙',
        (Team::White, PieceType::Knight) => '♘',
        (Team::White, PieceType::Bishop) => '♗',
        (Team::White, PieceType::Rook) => '♖',
        (Team::White, PieceType::Queen) => '♕',
        (Team::White, PieceType::King) => '♔',
        (Team::Black, PieceType::Pawn) => '♟',
        (Team::Black, PieceType::Knight) => '♞',
        (Team::Black, PieceType::Bishop) => '♝',
        (Team::Black, PieceType::Rook) => '♜',
        (Team::Black, PieceType::Queen) => '♛',
        (Team::Black, PieceType::King) => '♚',
    }
}
