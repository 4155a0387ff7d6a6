// Xadrez Reduzido - Rule engine and turn controller for kings, rooks and pawns

pub mod types;
pub mod error;
pub mod notation;
pub mod board;
pub mod moves;
pub mod engine;
pub mod game;
pub mod command;
pub mod config;
pub mod perft;

pub use types::*;
pub use board::Board;
pub use error::{ConfigError, EngineError, GameError, ParseError};
pub use game::{Event, Game, GameCommand, GameOverReason, GamePhase, Verdict};
