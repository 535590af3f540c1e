use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MoveStrategy;
use crate::board::{Board, Pos};

/// A strategy that selects uniformly at random from empty cells.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn select_move(&mut self, board: &Board) -> Option<Pos> {
        let candidates: Vec<Pos> = board.empty_cells().collect();
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..candidates.len());
        Some(candidates[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_random_strategy_selects_empty_cell() {
        let mut strategy = RandomStrategy::new();
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);
        board.place(Pos::new(0, 0), Player::White);

        for _ in 0..200 {
            let pos = strategy.select_move(&board).unwrap();
            assert!(board.in_bounds(pos));
            assert!(board.is_empty(pos), "{pos} is occupied");
        }
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let mut board = Board::new(5);
        let last = Pos::new(3, 2);
        let cells: Vec<Pos> = board.empty_cells().filter(|&p| p != last).collect();
        for pos in cells {
            board.place(pos, Player::Black);
        }

        let mut strategy = RandomStrategy::new();
        for _ in 0..20 {
            assert_eq!(strategy.select_move(&board), Some(last));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new(5);
        let cells: Vec<Pos> = board.empty_cells().collect();
        for pos in cells {
            board.place(pos, Player::White);
        }
        assert_eq!(RandomStrategy::seeded(1).select_move(&board), None);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let board = Board::new(15);
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn test_covers_many_cells() {
        // Uniform choice should hit most of a tiny board quickly
        let board = Board::new(5);
        let mut strategy = RandomStrategy::seeded(3);
        let seen: std::collections::HashSet<Pos> =
            (0..2000).filter_map(|_| strategy.select_move(&board)).collect();
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn test_random_strategy_name() {
        assert_eq!(RandomStrategy::new().name(), "Random");
    }
}
