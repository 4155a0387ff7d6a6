// Ficheiro: src/moves/mod.rs
// Descrição: Regras de movimento pseudo-legais (sem considerar o xeque).
// Todas as peças passam por `is_pseudo_legal`; o despacho por tipo é um `match` fechado.

pub mod pawn;

use crate::board::Board;
use crate::types::{Move, Piece, PieceKind, Square};

/// O lance `from -> to` respeita o padrão de movimento da peça, dada a ocupação atual?
///
/// Não verifica se o próprio rei fica em xeque; isso é trabalho do `engine`.
pub fn is_pseudo_legal(board: &Board, mover: &Piece, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() || from == to {
        return false;
    }

    // Nunca capturar uma peça da mesma cor.
    if let Some(dest) = board.piece_at(to) {
        if dest.color == mover.color {
            return false;
        }
    }

    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;

    match mover.kind {
        PieceKind::King => dr.abs().max(dc.abs()) == 1,
        PieceKind::Rook => (dr == 0 || dc == 0) && path_clear(board, from, to),
        PieceKind::Pawn => pawn::is_pawn_move(board, mover.color, from, to),
    }
}

/// As casas estritamente entre `from` e `to` estão vazias?
/// Só faz sentido para linhas, colunas e diagonais.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).signum();
    let dc = (to.col as i8 - from.col as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(dr, dc) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

/// Gera todos os lances pseudo-legais de uma peça, varrendo as 64 casas de destino.
pub fn generate_piece_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let from = piece.position;
    Square::all()
        .filter(|&to| is_pseudo_legal(board, piece, from, to))
        .map(|to| Move::new(from, to))
        .collect()
}
