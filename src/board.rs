// Ficheiro: src/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use std::fmt;

use lazy_static::lazy_static;

use crate::error::ParseError;
use crate::notation::{self, EMPTY_SYMBOL};
use crate::types::*;

lazy_static! {
    // Posição inicial reduzida: reis, torres e peões.
    static ref STARTING_BOARD: Board = Board::starting_layout();
}

// A struct principal do tabuleiro: uma grelha 8x8 de casas opcionais.
// Indexada por [linha][coluna], com a convenção de orientação de `types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Cria um novo tabuleiro na posição inicial reduzida.
    pub fn new() -> Self {
        *STARTING_BOARD
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    fn starting_layout() -> Self {
        let mut board = Board::empty();

        for col in 0..BOARD_SIZE {
            board.place(PieceKind::Pawn, Color::White, Square::new(6, col));
            board.place(PieceKind::Pawn, Color::Black, Square::new(1, col));
        }

        board.place(PieceKind::Rook, Color::White, Square::new(7, 0));
        board.place(PieceKind::Rook, Color::White, Square::new(7, 7));
        board.place(PieceKind::Rook, Color::Black, Square::new(0, 0));
        board.place(PieceKind::Rook, Color::Black, Square::new(0, 7));

        board.place(PieceKind::King, Color::White, Square::new(7, 4));
        board.place(PieceKind::King, Color::Black, Square::new(0, 4));

        board
    }

    /// Lê o primeiro campo de uma FEN (apenas K, R, P e as suas minúsculas).
    ///
    /// A primeira fila da FEN é a oitava, que corresponde à linha 0.
    pub fn from_fen(placement: &str) -> Result<Self, ParseError> {
        let invalid = |reason: &str| ParseError::InvalidFen {
            placement: placement.to_string(),
            reason: reason.to_string(),
        };

        let field = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(invalid("expected 8 ranks"));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for symbol in rank.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    if skip == 0 {
                        return Err(invalid("empty-square count must be 1-8"));
                    }
                    col += skip as u8;
                } else {
                    let (kind, color) = notation::kind_and_color_from_symbol(symbol)
                        .ok_or_else(|| invalid("only K, R and P pieces are supported"))?;
                    if col >= BOARD_SIZE {
                        return Err(invalid("rank too long"));
                    }
                    board.place(kind, color, Square::new(row as u8, col));
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(invalid("rank too long"));
                }
            }
            if col != BOARD_SIZE {
                return Err(invalid("rank too short"));
            }
        }

        if board.king_count(Color::White) != 1 || board.king_count(Color::Black) != 1 {
            return Err(invalid("expected exactly one king per color"));
        }

        Ok(board)
    }

    /// Peça na casa, ou `None` se vazia ou fora do tabuleiro.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.row as usize][sq.col as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Coloca uma nova peça, substituindo o que lá estiver.
    pub fn place(&mut self, kind: PieceKind, color: Color, sq: Square) {
        self.put(Piece::new(kind, color, sq));
    }

    /// Guarda a peça na casa indicada por `piece.position`.
    pub(crate) fn put(&mut self, piece: Piece) {
        debug_assert!(piece.position.is_on_board());
        self.squares[piece.position.row as usize][piece.position.col as usize] = Some(piece);
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.row as usize][sq.col as usize].take()
    }

    pub(crate) fn restore(&mut self, sq: Square, piece: Option<Piece>) {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize] = piece;
        }
    }

    /// Executa um lance sem validação, atualizando a posição guardada na peça.
    /// Devolve a peça capturada, se houver. Sem peça na origem, nada muda.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        if !mv.to.is_on_board() {
            return None;
        }
        let mut mover = self.take(mv.from)?;
        let captured = self.take(mv.to);
        mover.position = mv.to;
        self.put(mover);
        captured
    }

    /// Todas as peças de uma cor, em ordem de linha/coluna.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .copied()
            .filter(move |p| p.color == color)
    }

    /// Casa do rei de uma cor, se existir.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.pieces(color).filter(|p| p.kind == PieceKind::King).count()
    }

    /// Verifica que cada peça guarda a posição da casa onde está.
    pub fn positions_consistent(&self) -> bool {
        Square::all().all(|sq| match self.piece_at(sq) {
            Some(piece) => piece.position == sq,
            None => true,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let symbol = self
                    .piece_at(Square::new(row, col))
                    .map_or(EMPTY_SYMBOL, |p| p.symbol());
                write!(f, "{} ", symbol)?;
            }
            writeln!(f, "{}", BOARD_SIZE - row)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
