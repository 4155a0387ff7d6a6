// Ficheiro: src/game.rs
// Descrição: Controlador de turnos. Máquina de estados explícita sobre as fases do jogo,
// que consulta o motor de regras para classificar cada posição nova.

use std::fmt;

use log::{debug, info};

use crate::board::Board;
use crate::engine;
use crate::error::{EngineError, GameError};
use crate::types::{Color, Move, Piece, Square};

/// Motivo do fim do jogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    Resigned(Color),
    Checkmate { winner: Color },
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::Resigned(side) => write!(f, "resigned by {}", side),
            GameOverReason::Checkmate { winner } => write!(f, "checkmate by {}", winner),
        }
    }
}

/// Fase ativa. Fase + tabuleiro + lado a jogar formam o estado completo do jogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    NormalPlay(Color),
    Check(Color),
    Checkmate { winner: Color },
    GameOver(GameOverReason),
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Setup => write!(f, "setting up"),
            GamePhase::NormalPlay(side) => write!(f, "{} to move", side),
            GamePhase::Check(side) => write!(f, "{} in check", side),
            GamePhase::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GamePhase::GameOver(reason) => write!(f, "game over ({})", reason),
        }
    }
}

/// Classificação da posição para o lado que vai jogar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Normal,
    Check,
    Checkmate,
}

/// Pergunta ao motor em que situação fica `side`.
pub fn classify(board: &Board, side: Color) -> Verdict {
    if engine::is_checkmated(board, side) {
        Verdict::Checkmate
    } else if engine::is_in_check(board, side) {
        Verdict::Check
    } else {
        Verdict::Normal
    }
}

/// Entradas da tabela de transições.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Transição automática, depois da ação de entrada.
    Advance,
    /// Um lance legal foi aplicado; o veredicto é para o adversário de quem jogou.
    MoveApplied(Verdict),
    Resign,
    Reset,
}

/// Tabela de transições pura. `None` = entrada não aceite nesta fase.
pub fn transition(phase: GamePhase, input: Input) -> Option<GamePhase> {
    use GamePhase::*;

    match (phase, input) {
        (Setup, Input::Advance) => Some(NormalPlay(Color::White)),
        (Checkmate { winner }, Input::Advance) => {
            Some(GameOver(GameOverReason::Checkmate { winner }))
        }
        (NormalPlay(mover) | Check(mover), Input::MoveApplied(verdict)) => Some(match verdict {
            Verdict::Normal => NormalPlay(!mover),
            Verdict::Check => Check(!mover),
            Verdict::Checkmate => Checkmate { winner: mover },
        }),
        (NormalPlay(side) | Check(side), Input::Resign) => {
            Some(GameOver(GameOverReason::Resigned(side)))
        }
        (GameOver(_), Input::Reset) => Some(Setup),
        _ => None,
    }
}

/// Intenções que chegam ao controlador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Move { from: Square, to: Square },
    Resign,
    Reset,
    /// Pergunta se o lado a jogar está em xeque. Não muda o estado.
    CheckStatus,
}

impl GameCommand {
    pub fn name(&self) -> &'static str {
        match self {
            GameCommand::Move { .. } => "move",
            GameCommand::Resign => "resign",
            GameCommand::Reset => "reset",
            GameCommand::CheckStatus => "check",
        }
    }
}

/// O que aconteceu durante um comando, por ordem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    GameStarted,
    MoveApplied { mv: Move, captured: Option<Piece> },
    Check(Color),
    Checkmate { winner: Color },
    GameOver(GameOverReason),
    CheckStatus { side: Color, in_check: bool },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::GameStarted => write!(f, "New game initialized. White moves first."),
            Event::MoveApplied { mv, captured: Some(piece) } => {
                write!(f, "{}-{} captures {}", mv.from, mv.to, piece.symbol())
            }
            Event::MoveApplied { mv, captured: None } => write!(f, "{}-{}", mv.from, mv.to),
            Event::Check(side) => write!(f, "[CHECK] {} must respond.", side),
            Event::Checkmate { winner } => {
                write!(f, "[CHECKMATE] {} wins. {} loses.", winner, !*winner)
            }
            Event::GameOver(reason) => write!(f, "[END] Game over: {}", reason),
            Event::CheckStatus { side, in_check: true } => write!(f, "{} is in check.", side),
            Event::CheckStatus { side, in_check: false } => write!(f, "{} is not in check.", side),
        }
    }
}

/// Dono exclusivo do tabuleiro, da fase e do lado a jogar.
///
/// Cada comando é processado por inteiro antes do seguinte; um comando rejeitado
/// não altera nada.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    phase: GamePhase,
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game::start().0
    }

    /// Novo jogo, com os eventos da preparação.
    pub fn start() -> (Self, Vec<Event>) {
        let mut game = Game {
            board: Board::empty(),
            phase: GamePhase::Setup,
            side_to_move: Color::White,
        };
        let mut events = Vec::new();
        game.enter(GamePhase::Setup, &mut events);
        (game, events)
    }

    /// Retoma o jogo a partir de uma posição dada, com `side` a jogar.
    /// Recusa tabuleiros sem exatamente um rei por cor.
    pub fn from_position(board: Board, side: Color) -> Result<Self, EngineError> {
        engine::validate_kings(&board)?;

        let mut game = Game {
            board,
            phase: GamePhase::NormalPlay(side),
            side_to_move: side,
        };
        let mut events = Vec::new();
        match classify(&game.board, side) {
            Verdict::Normal => {}
            Verdict::Check => game.enter(GamePhase::Check(side), &mut events),
            Verdict::Checkmate => game.enter(GamePhase::Checkmate { winner: !side }, &mut events),
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Processa um comando. Em caso de erro o estado fica exatamente igual.
    pub fn handle(&mut self, command: GameCommand) -> Result<Vec<Event>, GameError> {
        let mut events = Vec::new();

        match (self.phase, command) {
            (GamePhase::NormalPlay(side) | GamePhase::Check(side), GameCommand::Move { from, to }) => {
                self.play(side, Move::new(from, to), &mut events)?;
            }
            (GamePhase::NormalPlay(side), GameCommand::CheckStatus) => {
                let in_check = engine::is_in_check(&self.board, side);
                events.push(Event::CheckStatus { side, in_check });
            }
            (phase, GameCommand::Resign) | (phase, GameCommand::Reset) => {
                let input = if command == GameCommand::Resign { Input::Resign } else { Input::Reset };
                let next = transition(phase, input).ok_or_else(|| self.not_allowed(command))?;
                self.enter(next, &mut events);
            }
            _ => return Err(self.not_allowed(command)),
        }

        Ok(events)
    }

    fn play(&mut self, side: Color, mv: Move, events: &mut Vec<Event>) -> Result<(), GameError> {
        if !engine::is_legal(&self.board, mv.from, mv.to, side) {
            debug!("rejected {}-{} for {}", mv.from, mv.to, side);
            return Err(GameError::IllegalMove { from: mv.from, to: mv.to, side });
        }

        // Calcula tudo sobre uma cópia e só depois atualiza o estado.
        let mut next_board = self.board;
        let captured = next_board.make_move(mv);
        let verdict = classify(&next_board, !side);
        let next = transition(self.phase, Input::MoveApplied(verdict))
            .ok_or_else(|| self.not_allowed(GameCommand::Move { from: mv.from, to: mv.to }))?;

        debug!("{} plays {}-{} ({:?})", side, mv.from, mv.to, verdict);
        self.board = next_board;
        self.side_to_move = !side;
        events.push(Event::MoveApplied { mv, captured });
        self.enter(next, events);
        Ok(())
    }

    fn not_allowed(&self, command: GameCommand) -> GameError {
        debug!("'{}' rejected while {}", command.name(), self.phase);
        GameError::NotAllowed { command: command.name(), phase: self.phase }
    }

    /// Entra numa fase: corre a ação de entrada uma única vez e segue as
    /// transições automáticas que houver.
    fn enter(&mut self, phase: GamePhase, events: &mut Vec<Event>) {
        let mut phase = phase;
        loop {
            info!("phase: {} -> {}", self.phase, phase);
            self.phase = phase;
            self.on_enter(events);
            match transition(phase, Input::Advance) {
                Some(next) => phase = next,
                None => break,
            }
        }
    }

    fn on_enter(&mut self, events: &mut Vec<Event>) {
        match self.phase {
            GamePhase::Setup => {
                self.board = Board::new();
                self.side_to_move = Color::White;
                events.push(Event::GameStarted);
            }
            GamePhase::NormalPlay(_) => {}
            GamePhase::Check(side) => events.push(Event::Check(side)),
            GamePhase::Checkmate { winner } => events.push(Event::Checkmate { winner }),
            GamePhase::GameOver(reason) => events.push(Event::GameOver(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_square;

    fn mv(from: &str, to: &str) -> GameCommand {
        GameCommand::Move {
            from: parse_square(from).unwrap(),
            to: parse_square(to).unwrap(),
        }
    }

    #[test]
    fn test_transition_table() {
        use GamePhase::*;
        let white = Color::White;
        let black = Color::Black;

        assert_eq!(transition(Setup, Input::Advance), Some(NormalPlay(white)));
        assert_eq!(transition(NormalPlay(white), Input::MoveApplied(Verdict::Normal)), Some(NormalPlay(black)));
        assert_eq!(transition(NormalPlay(white), Input::MoveApplied(Verdict::Check)), Some(Check(black)));
        assert_eq!(
            transition(NormalPlay(white), Input::MoveApplied(Verdict::Checkmate)),
            Some(Checkmate { winner: white })
        );
        assert_eq!(transition(Check(black), Input::MoveApplied(Verdict::Normal)), Some(NormalPlay(white)));
        assert_eq!(
            transition(Check(black), Input::Resign),
            Some(GameOver(GameOverReason::Resigned(black)))
        );
        assert_eq!(
            transition(Checkmate { winner: black }, Input::Advance),
            Some(GameOver(GameOverReason::Checkmate { winner: black }))
        );
        assert_eq!(transition(GameOver(GameOverReason::Resigned(white)), Input::Reset), Some(Setup));
    }

    #[test]
    fn test_transition_rejects_unlisted_inputs() {
        use GamePhase::*;
        let over = GameOver(GameOverReason::Resigned(Color::White));

        assert_eq!(transition(NormalPlay(Color::White), Input::Reset), None);
        assert_eq!(transition(NormalPlay(Color::White), Input::Advance), None);
        assert_eq!(transition(Setup, Input::Resign), None);
        assert_eq!(transition(over, Input::Resign), None);
        assert_eq!(transition(over, Input::MoveApplied(Verdict::Normal)), None);
        assert_eq!(transition(over, Input::Advance), None);
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(GameOverReason::Resigned(Color::White).to_string(), "resigned by White");
        assert_eq!(
            GameOverReason::Checkmate { winner: Color::Black }.to_string(),
            "checkmate by Black"
        );
    }

    #[test]
    fn test_start_leaves_setup() {
        let (game, events) = Game::start();
        assert_eq!(game.phase(), GamePhase::NormalPlay(Color::White));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(*game.board(), Board::new());
        assert_eq!(events, vec![Event::GameStarted]);
    }

    #[test]
    fn test_legal_move_passes_turn() {
        let mut game = Game::new();
        let events = game.handle(mv("e2", "e4")).unwrap();

        assert_eq!(game.phase(), GamePhase::NormalPlay(Color::Black));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(events.len(), 1);
        assert!(game.board().piece_at(parse_square("e4").unwrap()).is_some());
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut game = Game::new();
        let before = *game.board();

        let err = game.handle(mv("e2", "e5")).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { side: Color::White, .. }));
        // Peça da cor errada
        assert!(game.handle(mv("e7", "e5")).is_err());

        assert_eq!(game.phase(), GamePhase::NormalPlay(Color::White));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_resign_then_reset() {
        let mut game = Game::new();
        game.handle(mv("e2", "e4")).unwrap();

        assert!(game.handle(GameCommand::Reset).is_err());

        let events = game.handle(GameCommand::Resign).unwrap();
        let over = GamePhase::GameOver(GameOverReason::Resigned(Color::Black));
        assert_eq!(game.phase(), over);
        assert_eq!(events, vec![Event::GameOver(GameOverReason::Resigned(Color::Black))]);

        assert!(game.handle(mv("e7", "e5")).is_err());
        assert!(game.handle(GameCommand::Resign).is_err());
        assert_eq!(game.phase(), over);

        let events = game.handle(GameCommand::Reset).unwrap();
        assert_eq!(events, vec![Event::GameStarted]);
        assert_eq!(game.phase(), GamePhase::NormalPlay(Color::White));
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_check_then_escape() {
        let board = Board::from_fen("k7/8/8/8/8/8/8/1R5K").unwrap();
        let mut game = Game::from_position(board, Color::White).unwrap();

        let events = game.handle(mv("b1", "a1")).unwrap();
        assert_eq!(game.phase(), GamePhase::Check(Color::Black));
        assert_eq!(events.last(), Some(&Event::Check(Color::Black)));

        // Ficar na coluna a não resolve o xeque.
        assert!(game.handle(mv("a8", "a7")).is_err());
        assert!(game.handle(GameCommand::CheckStatus).is_err());
        assert_eq!(game.phase(), GamePhase::Check(Color::Black));

        game.handle(mv("a8", "b8")).unwrap();
        assert_eq!(game.phase(), GamePhase::NormalPlay(Color::White));
    }

    #[test]
    fn test_checkmate_ends_game() {
        let board = Board::from_fen("k7/2K5/8/8/8/8/8/7R").unwrap();
        let mut game = Game::from_position(board, Color::White).unwrap();

        let events = game.handle(mv("h1", "a1")).unwrap();
        let reason = GameOverReason::Checkmate { winner: Color::White };

        assert_eq!(game.phase(), GamePhase::GameOver(reason));
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], Event::Checkmate { winner: Color::White });
        assert_eq!(events[2], Event::GameOver(reason));
    }

    #[test]
    fn test_check_status_query() {
        let mut game = Game::new();
        let events = game.handle(GameCommand::CheckStatus).unwrap();
        assert_eq!(events, vec![Event::CheckStatus { side: Color::White, in_check: false }]);
        assert_eq!(game.phase(), GamePhase::NormalPlay(Color::White));
    }

    #[test]
    fn test_capture_is_reported() {
        let board = Board::from_fen("k7/8/8/8/8/8/r7/R6K").unwrap();
        let mut game = Game::from_position(board, Color::White).unwrap();

        let events = game.handle(mv("a1", "a2")).unwrap();
        match events[0] {
            Event::MoveApplied { captured: Some(piece), .. } => assert_eq!(piece.symbol(), 'r'),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(game.board().pieces(Color::Black).count(), 1);
    }

    #[test]
    fn test_from_position_classifies() {
        let mated = Board::from_fen("k7/2K5/8/8/8/8/8/R7").unwrap();
        let game = Game::from_position(mated, Color::Black).unwrap();
        assert_eq!(
            game.phase(),
            GamePhase::GameOver(GameOverReason::Checkmate { winner: Color::White })
        );

        let checked = Board::from_fen("k7/8/8/8/8/8/8/R6K").unwrap();
        let game = Game::from_position(checked, Color::Black).unwrap();
        assert_eq!(game.phase(), GamePhase::Check(Color::Black));
    }

    #[test]
    fn test_from_position_rejects_bad_kings() {
        let mut kingless = Board::empty();
        kingless.place(crate::types::PieceKind::Rook, Color::White, parse_square("a1").unwrap());
        assert_eq!(
            Game::from_position(kingless, Color::Black).unwrap_err(),
            EngineError::MissingKing(Color::White)
        );

        let mut doubled = Board::new();
        doubled.place(crate::types::PieceKind::King, Color::Black, parse_square("d5").unwrap());
        assert_eq!(
            Game::from_position(doubled, Color::White).unwrap_err(),
            EngineError::DuplicateKing(Color::Black)
        );
    }
}
