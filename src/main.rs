// Ficheiro: src/main.rs
// Descrição: Ponto de entrada principal da aplicação. Lê comandos do terminal
// e entrega-os ao controlador de turnos.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::{debug, info};

use xadrez_reduzido::command::{parse_command, Command, HELP};
use xadrez_reduzido::config::SessionConfig;
use xadrez_reduzido::game::{Event, Game, GamePhase};
use xadrez_reduzido::perft;
use xadrez_reduzido::{Board, Color};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = SessionConfig::from_args(std::env::args().skip(1))
        .context("invalid command-line arguments")?;
    debug!("{:?}", config);

    if let Some(depth) = config.perft_depth {
        let board = Board::new();
        println!("--- Running perft ---");
        for d in 1..=depth {
            perft::run_perft(&board, Color::White, d);
        }
        return Ok(());
    }

    run_session(&config)
}

fn run_session(config: &SessionConfig) -> anyhow::Result<()> {
    println!("--- Reduced chess: kings, rooks and pawns ---");
    println!("Type 'help' for commands, 'quit' or 'exit' to leave.");

    let (mut game, events) = Game::start();
    print_events(&events);
    println!("{}", game.board());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", prompt(game.phase()));
        io::stdout().flush().context("failed to flush stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read from stdin")?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Show => println!("{}", game.board()),
            Command::Perft(depth) => {
                perft::run_perft(game.board(), game.side_to_move(), depth);
            }
            Command::Game(game_command) => match game.handle(game_command) {
                Ok(events) => {
                    print_events(&events);
                    let board_changed = events
                        .iter()
                        .any(|e| matches!(e, Event::MoveApplied { .. } | Event::GameStarted));
                    if config.show_board_after_move && board_changed {
                        println!("{}", game.board());
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
    }

    info!("session ended in phase: {}", game.phase());
    println!("\n--- Session ended ---");
    Ok(())
}

fn print_events(events: &[Event]) {
    for event in events {
        println!("{}", event);
    }
}

fn prompt(phase: GamePhase) -> String {
    match phase {
        GamePhase::NormalPlay(side) => format!("[Play] {} to move > ", side),
        GamePhase::Check(side) => format!("[CHECK] {} must respond > ", side),
        GamePhase::GameOver(_) => "[END] reset | show | quit > ".to_string(),
        // Fases transitórias: nunca ficam ativas entre comandos.
        GamePhase::Setup | GamePhase::Checkmate { .. } => "> ".to_string(),
    }
}
