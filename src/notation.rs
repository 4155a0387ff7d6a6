// Ficheiro: src/notation.rs
// Descrição: Conversão entre notação algébrica simples ("e2") e coordenadas internas,
// e símbolos das peças para o desenho do tabuleiro.

use std::fmt;

use crate::error::ParseError;
use crate::types::{Color, Piece, PieceKind, Square};

/// Símbolo usado para casas vazias.
pub const EMPTY_SYMBOL: char = '.';

/// "e2" -> Square { row: 6, col: 4 }.
///
/// Coluna: a=0 ... h=7. Linha: `row = 7 - (rank - 1)`, ou seja, rank 1 -> linha 7
/// e rank 8 -> linha 0.
pub fn parse_square(text: &str) -> Result<Square, ParseError> {
    let lower = text.trim().to_ascii_lowercase();
    let bytes = lower.as_bytes();
    if bytes.len() != 2 {
        return Err(ParseError::InvalidSquare(text.to_string()));
    }

    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ParseError::InvalidSquare(text.to_string()));
    }

    let col = file - b'a';
    let row = 7 - (rank - b'1');
    Ok(Square::new(row, col))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{}{}", file, rank)
    }
}

impl PieceKind {
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Pawn => 'P',
        }
    }
}

impl Piece {
    /// Maiúscula para as brancas, minúscula para as pretas.
    pub fn symbol(&self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol,
            Color::Black => symbol.to_ascii_lowercase(),
        }
    }
}

/// Inverso de `Piece::symbol`, apenas para o conjunto reduzido.
pub fn kind_and_color_from_symbol(symbol: char) -> Option<(PieceKind, Color)> {
    let color = if symbol.is_ascii_uppercase() { Color::White } else { Color::Black };
    let kind = match symbol.to_ascii_uppercase() {
        'K' => PieceKind::King,
        'R' => PieceKind::Rook,
        'P' => PieceKind::Pawn,
        _ => return None,
    };
    Some((kind, color))
}
