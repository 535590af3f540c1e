//! Board rendering for the Gomoku GUI

use crate::{Board, Cell, Player, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Lines per side of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::DEFAULT_BOARD_SIZE,
        }
    }
}

/// What the view needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Input accepted; when false hovering and clicks are ignored
    pub accepting_input: bool,
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: BoardFrame<'_>) -> Option<Pos> {
        let board = frame.board;
        self.size = board.size();

        let available_size = ui.available_size();
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = frame.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !frame.accepting_input {
            return None;
        }

        let pointer_pos = response.hover_pos()?;
        let pos = self.screen_to_board(pointer_pos)?;
        if !board.is_empty(pos) {
            return None;
        }

        self.draw_hover_preview(&painter, pos);
        response.clicked().then_some(pos)
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        let points = star_points(self.size);
        for &row in &points {
            for &col in &points {
                let center = self.board_to_screen(Pos::new(row, col));
                painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
            }
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for player in [Player::Black, Player::White] {
            for pos in board.stones(player).iter_ones() {
                self.draw_stone(painter, pos, Cell::from(player));
            }
        }
    }

    /// Draw a single stone with an off-centre highlight and a rim
    fn draw_stone(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let highlight = center + Vec2::new(-radius * 0.3, -radius * 0.3);

        match cell {
            Cell::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(highlight, radius * 0.25, BLACK_STONE_HIGHLIGHT);
                painter.circle_stroke(center, radius, Stroke::new(1.0, BLACK_STONE_RIM));
            }
            Cell::White => {
                painter.circle_filled(center, radius, WHITE_STONE_SHADOW);
                painter.circle_filled(highlight, radius * 0.6, WHITE_STONE);
                painter.circle_stroke(center, radius, Stroke::new(1.0, WHITE_STONE_RIM));
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for &pos in line {
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(self.board_to_screen(pos), radius, hover_valid());
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        nearest_intersection(screen_pos - self.board_rect.min, self.cell_size, self.size)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Round a pixel offset (relative to the board's top-left corner) to the
/// nearest grid intersection. `None` outside the grid.
pub fn nearest_intersection(relative: Vec2, cell_size: f32, size: usize) -> Option<Pos> {
    let col = ((relative.x - BOARD_MARGIN) / cell_size).round();
    let row = ((relative.y - BOARD_MARGIN) / cell_size).round();

    let limit = size as f32;
    if col >= 0.0 && col < limit && row >= 0.0 && row < limit {
        Some(Pos::new(row as usize, col as usize))
    } else {
        None
    }
}

/// Marker colour for the turn indicator
pub fn stone_color(cell: Cell) -> Color32 {
    match cell {
        Cell::Black => BLACK_STONE,
        Cell::White => WHITE_STONE,
        Cell::Empty => Color32::TRANSPARENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_intersection_rounds() {
        let cell = 30.0;
        // Exactly on (0, 0)
        assert_eq!(nearest_intersection(Vec2::new(BOARD_MARGIN, BOARD_MARGIN), cell, 15), Some(Pos::new(0, 0)));
        // Slightly past half a cell rounds up
        let p = Vec2::new(BOARD_MARGIN + 2.0 * cell + 16.0, BOARD_MARGIN + 5.0 * cell - 14.0);
        assert_eq!(nearest_intersection(p, cell, 15), Some(Pos::new(5, 3)));
    }

    #[test]
    fn test_nearest_intersection_outside_grid() {
        let cell = 30.0;
        assert_eq!(nearest_intersection(Vec2::new(0.0, 0.0), cell, 15), None);
        let past_edge = BOARD_MARGIN + 14.6 * cell;
        assert_eq!(nearest_intersection(Vec2::new(past_edge, BOARD_MARGIN), cell, 15), None);
        // Just inside the last line still maps to it
        let near_edge = BOARD_MARGIN + 14.4 * cell;
        assert_eq!(nearest_intersection(Vec2::new(near_edge, near_edge), cell, 15), Some(Pos::new(14, 14)));
    }
}
