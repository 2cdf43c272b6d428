//! Long algebraic move notation (`e2e4`, `e7e8q`).
//!
//! Pure coordinate notation: parsing never consults a board, so it cannot tell
//! whether the move is legal. That is `Game::make_move`'s job.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceType;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

pub fn move_to_long_algebraic(chess_move: &ChessMove) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&position_to_algebraic(&chess_move.start));
    out.push_str(&position_to_algebraic(&chess_move.end));
    if let Some(promotion) = chess_move.promotion {
        out.push(promotion_to_char(promotion));
    }
    out
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<ChessMove> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let start = algebraic_to_position(&text[0..2])?;
    let end = algebraic_to_position(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(ChessMove::new(start, end, promotion))
}

fn promotion_to_char(piece_type: PieceType) -> char {
    match piece_type {
        PieceType::Queen => 'q',
        PieceType::Rook => 'r',
        PieceType::Bishop => 'b',
        PieceType::Knight => 'n',
        PieceType::King => 'k',
        PieceType::Pawn => 'p',
    }
}

fn char_to_promotion(ch: char) -> ChessResult<PieceType> {
    match ch.to_ascii_lowercase() {
        'q' => Ok(PieceType::Queen),
        'r' => Ok(PieceType::Rook),
        'b' => Ok(PieceType::Bishop),
        'n' => Ok(PieceType::Knight),
        _ => Err(ChessErrors::InvalidAlgebraicChar(ch)),
    }
}
