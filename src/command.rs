// Ficheiro: src/command.rs
// Descrição: Leitura dos comandos de texto escritos no terminal.

use crate::error::ParseError;
use crate::game::GameCommand;
use crate::notation::parse_square;

pub const HELP: &str = "\
Commands:
  move <from> <to>  play a move, e.g. 'move e2 e4'
  check             ask whether the side to move is in check
  resign            resign the game
  reset             start a new game (after the game is over)
  show              print the board
  perft <depth>     count legal move sequences from the current position
  help              show this text
  quit | exit       leave";

/// Comando lido do terminal. Só `Game` chega ao controlador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(GameCommand),
    Show,
    Help,
    Perft(u8),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (head, args) = match tokens.split_first() {
        Some((head, args)) => (head.to_ascii_lowercase(), args),
        None => return Err(ParseError::EmptyCommand),
    };

    let arity = |expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ParseError::WrongArity {
                command: head.clone(),
                expected,
                found: args.len(),
            })
        }
    };

    let command = match head.as_str() {
        "move" => {
            arity(2)?;
            Command::Game(GameCommand::Move {
                from: parse_square(args[0])?,
                to: parse_square(args[1])?,
            })
        }
        "resign" => {
            arity(0)?;
            Command::Game(GameCommand::Resign)
        }
        "reset" => {
            arity(0)?;
            Command::Game(GameCommand::Reset)
        }
        "check" => {
            arity(0)?;
            Command::Game(GameCommand::CheckStatus)
        }
        "show" => {
            arity(0)?;
            Command::Show
        }
        "help" => Command::Help,
        "perft" => {
            arity(1)?;
            Command::Perft(parse_depth(args[0])?)
        }
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(head.clone())),
    };

    Ok(command)
}

/// Profundidade de perft: 1 a 10.
pub fn parse_depth(text: &str) -> Result<u8, ParseError> {
    match text.parse::<u8>() {
        Ok(depth) if (1..=10).contains(&depth) => Ok(depth),
        _ => Err(ParseError::InvalidDepth(text.to_string())),
    }
}
