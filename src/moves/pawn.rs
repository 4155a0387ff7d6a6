// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica de movimento dos peões.

use crate::{board::Board, types::{Color, Square}};

/// O peão de `color` pode ir de `from` para `to`?
///
/// - avanço simples: uma casa em frente, destino vazio;
/// - avanço duplo: só da linha inicial, casa intermédia e destino vazios;
/// - captura: uma coluna ao lado, uma linha em frente, destino com peça inimiga.
///
/// Sem en passant e sem promoção.
pub fn is_pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.forward();
    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;
    let dest = board.piece_at(to);

    // Avanço simples
    if dc == 0 && dr == dir {
        return dest.is_none();
    }

    // Avanço duplo
    if dc == 0 && dr == 2 * dir {
        if from.row != color.pawn_start_row() || dest.is_some() {
            return false;
        }
        return match from.offset(dir, 0) {
            Some(between) => board.is_empty(between),
            None => false,
        };
    }

    // Captura na diagonal
    if dc.abs() == 1 && dr == dir {
        return matches!(dest, Some(p) if p.color != color);
    }

    false
}
