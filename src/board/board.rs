//! Board structure and turn tracking

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos};

/// Game board: one bitboard per player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    size: usize,
}

impl Board {
    /// Allocate an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            black: Bitboard::new(size),
            white: Bitboard::new(size),
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the cell at an in-bounds position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!(self.in_bounds(pos), "{pos} outside {0}x{0} board", self.size);
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Get the cell at any position, `None` when off the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.get(pos))
    }

    /// Check if position is empty. Caller guarantees `pos` is in bounds.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone. Caller guarantees `pos` is in bounds and empty.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.in_bounds(pos) && self.is_empty(pos));
        match player {
            Player::Black => self.black.set(pos),
            Player::White => self.white.set(pos),
        }
    }

    /// Occupancy bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        (self.black.count() + self.white.count()) as usize
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.size * self.size
    }

    /// Check if no stone has been placed yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Empty intersections in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size * size)
            .map(move |idx| Pos::from_index(idx, size))
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Row-major snapshot of the grid for renderers
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.get(Pos::new(row, col))).collect())
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Board plus the pointer to whose turn it is
#[derive(Debug, Clone)]
pub struct BoardState {
    board: Board,
    current: Player,
}

impl BoardState {
    /// Fresh empty board with `first` to move
    pub fn initialize(size: usize, first: Player) -> Self {
        Self {
            board: Board::new(size),
            current: first,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.board.is_empty(pos)
    }

    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        self.board.place(pos, player);
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn toggle_player(&mut self) {
        self.current = self.current.opponent();
    }
}
