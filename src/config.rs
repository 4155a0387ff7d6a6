// Ficheiro: src/config.rs
// Descrição: Configuração da sessão interativa, lida dos argumentos da linha de comandos.

use crate::command::parse_depth;
use crate::error::ConfigError;

/// Configuração da sessão
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Desenha o tabuleiro depois de cada lance aceite.
    pub show_board_after_move: bool,
    /// Se definido, corre perft até esta profundidade e termina.
    pub perft_depth: Option<u8>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            show_board_after_move: true,
            perft_depth: None,
        }
    }
}

impl SessionConfig {
    /// Lê `--no-board` e `--perft <profundidade>`. O primeiro argumento
    /// (nome do programa) já deve ter sido retirado.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = SessionConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--no-board" => config.show_board_after_move = false,
                "--perft" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue("--perft".to_string()))?;
                    config.perft_depth = Some(parse_depth(value.as_ref())?);
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert!(config.show_board_after_move);
    }

    #[test]
    fn test_flags() {
        let config = SessionConfig::from_args(["--no-board", "--perft", "4"]).unwrap();
        assert!(!config.show_board_after_move);
        assert_eq!(config.perft_depth, Some(4));
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(
            SessionConfig::from_args(["--fast"]),
            Err(ConfigError::UnknownArgument("--fast".to_string()))
        );
        assert_eq!(
            SessionConfig::from_args(["--perft"]),
            Err(ConfigError::MissingValue("--perft".to_string()))
        );
        assert_eq!(
            SessionConfig::from_args(["--perft", "deep"]),
            Err(ConfigError::Parse(ParseError::InvalidDepth("deep".to_string())))
        );
    }
}
