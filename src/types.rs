// Ficheiro: src/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;

// Convenção de orientação do tabuleiro:
// linha 0 = oitava fila (lado das pretas), linha 7 = primeira fila (lado das brancas).
// coluna 0 = coluna 'a', coluna 7 = coluna 'h'.
pub const BOARD_SIZE: u8 = 8;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Direção de avanço dos peões em índice de linha.
    /// As brancas sobem (linha diminui), as pretas descem (linha aumenta).
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Linha de partida dos peões desta cor.
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

// "Inimigo de X": total e simétrico.
impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

// Conjunto reduzido de peças que o motor de regras entende.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Rook,
    Pawn,
}

/// Casa do tabuleiro em coordenadas (linha, coluna).
///
/// Os campos são públicos, por isso uma `Square` pode estar fora do tabuleiro;
/// o motor verifica sempre `is_on_board` antes de a usar como índice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Casa deslocada por (dr, dc), ou `None` se sair do tabuleiro.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Itera as 64 casas, linha a linha.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

// Struct para representar uma peça no tabuleiro.
// `position` tem de coincidir sempre com a casa onde a peça está guardada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Piece { kind, color, position }
    }
}

// Struct para representar um lance no jogo.
// Guarda a casa de origem e a de destino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}
