// Ficheiro: src/engine.rs
// Descrição: Motor de regras. Decide se um lance é legal e se um lado está em xeque
// ou em xeque-mate. Não tem estado próprio: recebe o tabuleiro emprestado durante
// uma consulta e devolve-o exatamente como o recebeu.

use log::{error, trace};

use crate::board::Board;
use crate::error::EngineError;
use crate::moves::{generate_piece_moves, is_pseudo_legal};
use crate::types::{Color, Move, Piece, Square};

/// Casa do rei de `side`. A ausência do rei é um tabuleiro corrompido.
pub fn king_square(board: &Board, side: Color) -> Result<Square, EngineError> {
    board.find_king(side).ok_or(EngineError::MissingKing(side))
}

/// Exatamente um rei por cor.
pub fn validate_kings(board: &Board) -> Result<(), EngineError> {
    for side in [Color::White, Color::Black] {
        king_square(board, side)?;
        if board.king_count(side) > 1 {
            return Err(EngineError::DuplicateKing(side));
        }
    }
    Ok(())
}

/// Alguma peça inimiga ataca o rei de `side`?
///
/// Sem rei não há xeque: o erro é registado e a resposta é `false`.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    let king = match king_square(board, side) {
        Ok(sq) => sq,
        Err(e) => {
            error!("check evaluation on a corrupted board: {}", e);
            return false;
        }
    };

    board
        .pieces(!side)
        .any(|attacker| is_pseudo_legal(board, &attacker, attacker.position, king))
}

/// Valida o lance `from -> to` para `side`, incluindo "não deixar o próprio rei em xeque".
///
/// Nunca falha: qualquer entrada mal formada devolve `false`.
pub fn is_legal(board: &Board, from: Square, to: Square, side: Color) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }

    let mover = match board.piece_at(from) {
        Some(piece) if piece.color == side => piece,
        _ => return false,
    };

    if let Some(dest) = board.piece_at(to) {
        if dest.color == side {
            return false;
        }
    }

    if !is_pseudo_legal(board, &mover, from, to) {
        return false;
    }

    let mut scratch = *board;
    !leaves_own_king_in_check(&mut scratch, &mover, to)
}

/// Xeque-mate = em xeque e nenhum lance pseudo-legal escapa ao xeque.
pub fn is_checkmated(board: &Board, side: Color) -> bool {
    if !is_in_check(board, side) {
        return false;
    }

    // Uma única cópia de trabalho; cada simulação repõe-na antes da seguinte.
    let mut scratch = *board;
    let candidates: Vec<Piece> = board.pieces(side).collect();

    for piece in &candidates {
        for to in Square::all() {
            if to == piece.position || !is_pseudo_legal(&scratch, piece, piece.position, to) {
                continue;
            }
            if !leaves_own_king_in_check(&mut scratch, piece, to) {
                trace!("{} escapes check with {}-{}", side, piece.position, to);
                debug_assert_eq!(scratch, *board);
                return false;
            }
        }
    }

    debug_assert_eq!(scratch, *board);
    true
}

/// Todos os lances legais de `side`.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|piece| generate_piece_moves(board, &piece))
        .filter(|mv| is_legal(board, mv.from, mv.to, side))
        .collect()
}

/// Simula o lance e verifica se o rei de quem joga fica em xeque.
fn leaves_own_king_in_check(board: &mut Board, mover: &Piece, to: Square) -> bool {
    match Simulation::apply(board, mover.position, to) {
        Some(sim) => is_in_check(sim.board(), mover.color),
        None => true,
    }
}

/// Lance aplicado temporariamente. Ao sair de âmbito (em qualquer caminho)
/// repõe a peça capturada, a peça movida e a sua posição guardada.
struct Simulation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    captured: Option<Piece>,
}

impl<'a> Simulation<'a> {
    fn apply(board: &'a mut Board, from: Square, to: Square) -> Option<Self> {
        if from == to || !to.is_on_board() {
            return None;
        }
        let mut mover = board.take(from)?;
        let captured = board.take(to);
        mover.position = to;
        board.put(mover);
        trace!("simulating {}-{}", from, to);

        Some(Simulation { board, from, to, captured })
    }

    fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if let Some(mut mover) = self.board.take(self.to) {
            mover.position = self.from;
            self.board.put(mover);
        }
        self.board.restore(self.to, self.captured);
    }
}
