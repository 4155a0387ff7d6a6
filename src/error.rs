// Ficheiro: src/error.rs
// Descrição: Tipos de erro do motor, do controlador e da linha de comandos.

use thiserror::Error;

use crate::game::GamePhase;
use crate::types::{Color, Square};

/// Entrada mal formada: notação de casa, comando ou posição inválidos.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    EmptyCommand,

    #[error("unknown command '{0}', type 'help'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected} argument(s), got {found}")]
    WrongArity {
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid square '{0}', use a file a-h and a rank 1-8 (e.g. e2)")]
    InvalidSquare(String),

    #[error("invalid depth '{0}'")]
    InvalidDepth(String),

    #[error("invalid placement '{placement}': {reason}")]
    InvalidFen { placement: String, reason: String },
}

/// Comando rejeitado pelo controlador. O estado do jogo não muda.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move {from}-{to} for {side}")]
    IllegalMove { from: Square, to: Square, side: Color },

    #[error("'{command}' is not allowed while {phase}")]
    NotAllowed { command: &'static str, phase: GamePhase },
}

/// Violação de invariante do tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no {0} king on the board")]
    MissingKing(Color),

    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("'{0}' expects a value")]
    MissingValue(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
