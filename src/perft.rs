// Ficheiro: src/perft.rs
// Descrição: Contém a lógica para o teste de performance (Perft),
// uma ferramenta para verificar a corretude da geração de lances.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::board::Board;
use crate::engine;
use crate::types::Color;

/// Resultado de uma execução de perft.
#[derive(Debug, Clone, Copy)]
pub struct PerftReport {
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Função principal do Perft que inicia o teste.
pub fn run_perft(board: &Board, side: Color, depth: u8) -> PerftReport {
    println!("Running perft to depth {}", depth);
    let start_time = Instant::now();
    let nodes = perft(board, side, depth);
    let elapsed = start_time.elapsed();
    println!("Total nodes: {}", nodes);
    println!("Elapsed: {:?}", elapsed);
    PerftReport { depth, nodes, elapsed }
}

/// Conta as sequências de lances legais com `depth` meios-lances, começando por `side`.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1; // Chegamos a uma folha da árvore de busca.
    }

    let moves = engine::legal_moves(board, side);

    // Para profundidade 1, conta os lances diretamente
    if depth == 1 {
        return moves.len() as u64;
    }

    let child = |mv| {
        let mut new_board = *board;
        new_board.make_move(mv);
        perft(&new_board, !side, depth - 1)
    };

    // Para profundidades maiores que 3, usa paralelização
    if depth > 3 {
        moves.into_par_iter().map(child).sum()
    } else {
        moves.into_iter().map(child).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_start_position() {
        let board = Board::new();
        assert_eq!(perft(&board, Color::White, 0), 1);
        assert_eq!(perft(&board, Color::White, 1), 23);
        assert_eq!(perft(&board, Color::White, 2), 529);
    }

    #[test]
    fn test_perft_checkmated_position() {
        let board = Board::from_fen("k7/2K5/8/8/8/8/8/R7").unwrap();
        assert_eq!(perft(&board, Color::Black, 1), 0);
        assert_eq!(perft(&board, Color::Black, 3), 0);
    }

    #[test]
    fn test_perft_parallel_matches_sequential_shape() {
        // Dois reis e uma torre: profundidade 4 passa pelo ramo paralelo.
        let board = Board::from_fen("k7/8/8/8/8/8/8/R6K").unwrap();
        let total: u64 = engine::legal_moves(&board, Color::Black)
            .into_iter()
            .map(|mv| {
                let mut next = board;
                next.make_move(mv);
                perft(&next, Color::White, 3)
            })
            .sum();
        assert_eq!(perft(&board, Color::Black, 4), total);
    }
}
