//! Win condition checking
//!
//! Only the stone just played can complete a line, so detection probes
//! outward from that position instead of scanning the board: at most
//! `WIN_LENGTH - 1` steps each way along each of the four axes.

use crate::board::{Board, Cell, Player, Pos};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Walk from `pos` (exclusive) by `(dr, dc)` while cells belong to `color`.
/// Stops at the board edge, a foreign or empty cell, or after `WIN_LENGTH - 1` steps.
fn run(board: &Board, pos: Pos, dr: isize, dc: isize, color: Cell) -> impl Iterator<Item = Pos> + '_ {
    (1..WIN_LENGTH as isize)
        .map(move |i| pos.offset(dr * i, dc * i))
        .take_while(move |next| next.and_then(|p| board.cell(p)) == Some(color))
        .flatten()
}

/// Fast five-in-a-row check at a specific position.
///
/// Assumes `player` owns `pos`. Each direction is counted independently,
/// starting at 1 for the placed stone.
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    let color = Cell::from(player);
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1 + run(board, pos, dr, dc, color).count() + run(board, pos, -dr, -dc, color).count();
        count >= WIN_LENGTH
    })
}

/// Find the winning run through `pos`, if any.
///
/// Returns the contiguous stones in board order (at least five, at most nine
/// since probing is bounded), for highlighting.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    let color = Cell::from(player);
    for &(dr, dc) in &DIRECTIONS {
        let mut line: Vec<Pos> = run(board, pos, -dr, -dc, color).collect();
        line.reverse();
        line.push(pos);
        line.extend(run(board, pos, dr, dc, color));

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}

/// A full board is a draw once the last move has been checked for a win.
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, stones: &[(usize, usize)]) -> Board {
        let mut board = Board::new(15);
        for &(r, c) in stones {
            board.place(Pos::new(r, c), player);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(Player::Black, &[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]);
        // Any stone of the line can be the one just played
        for col in 3..8 {
            assert!(has_five_at_pos(&board, Pos::new(7, col), Player::Black));
        }
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(Player::White, &[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)]);
        assert!(has_five_at_pos(&board, Pos::new(4, 9), Player::White));
        assert!(has_five_at_pos(&board, Pos::new(0, 9), Player::White));
    }

    #[test]
    fn test_five_in_row_diagonal_down() {
        let board = board_with(Player::Black, &[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);
        assert!(has_five_at_pos(&board, Pos::new(4, 4), Player::Black));
    }

    #[test]
    fn test_five_in_row_diagonal_up() {
        // From (8, 4) up to (4, 8)
        let board = board_with(Player::White, &[(8, 4), (7, 5), (6, 6), (5, 7), (4, 8)]);
        assert!(has_five_at_pos(&board, Pos::new(8, 4), Player::White));
        assert!(has_five_at_pos(&board, Pos::new(6, 6), Player::White));
    }

    #[test]
    fn test_overline_also_wins() {
        let board = board_with(Player::Black, &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4), (9, 5)]);
        assert!(has_five_at_pos(&board, Pos::new(9, 5), Player::Black));
        assert!(has_five_at_pos(&board, Pos::new(9, 2), Player::Black));
    }

    #[test]
    fn test_four_blocked_both_ends_not_win() {
        let mut board = board_with(Player::Black, &[(5, 4), (5, 5), (5, 6), (5, 7)]);
        board.place(Pos::new(5, 3), Player::White);
        board.place(Pos::new(5, 8), Player::White);
        for col in 4..8 {
            assert!(!has_five_at_pos(&board, Pos::new(5, col), Player::Black));
        }
    }

    #[test]
    fn test_four_against_edges_not_win() {
        // Horizontal four touching the left edge, diagonal four in the corner
        let board = board_with(Player::Black, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert!(!has_five_at_pos(&board, Pos::new(0, 0), Player::Black));

        let board = board_with(Player::White, &[(11, 11), (12, 12), (13, 13), (14, 14)]);
        assert!(!has_five_at_pos(&board, Pos::new(14, 14), Player::White));
    }

    #[test]
    fn test_gap_breaks_line() {
        let board = board_with(Player::Black, &[(3, 0), (3, 1), (3, 3), (3, 4), (3, 5)]);
        assert!(!has_five_at_pos(&board, Pos::new(3, 3), Player::Black));
    }

    #[test]
    fn test_opponent_stones_do_not_count() {
        let mut board = board_with(Player::Black, &[(6, 6), (6, 7), (6, 8), (6, 9)]);
        board.place(Pos::new(6, 10), Player::White);
        assert!(!has_five_at_pos(&board, Pos::new(6, 9), Player::Black));
        assert!(!has_five_at_pos(&board, Pos::new(6, 10), Player::White));
    }

    #[test]
    fn test_five_at_corner() {
        let board = board_with(Player::White, &[(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)]);
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Player::White));
    }

    #[test]
    fn test_find_line_is_ordered() {
        let board = board_with(Player::Black, &[(2, 6), (3, 5), (4, 4), (5, 3), (6, 2)]);
        let line = find_five_line_at_pos(&board, Pos::new(4, 4), Player::Black).unwrap();
        assert_eq!(
            line,
            vec![Pos::new(2, 6), Pos::new(3, 5), Pos::new(4, 4), Pos::new(5, 3), Pos::new(6, 2)]
        );
    }

    #[test]
    fn test_find_line_none_for_four() {
        let board = board_with(Player::Black, &[(1, 1), (1, 2), (1, 3), (1, 4)]);
        assert!(find_five_line_at_pos(&board, Pos::new(1, 4), Player::Black).is_none());
    }

    #[test]
    fn test_draw_only_when_full() {
        let mut board = Board::new(5);
        assert!(!is_draw(&board));
        let cells: Vec<Pos> = board.empty_cells().collect();
        for pos in cells {
            board.place(pos, Player::Black);
        }
        assert!(is_draw(&board));
    }
}
