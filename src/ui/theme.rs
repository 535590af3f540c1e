//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(139, 69, 19);
pub const STAR_POINT: Color32 = Color32::from_rgb(139, 69, 19);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(102, 102, 102);
pub const BLACK_STONE_RIM: Color32 = Color32::from_rgb(51, 51, 51);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(204, 204, 204);
pub const WHITE_STONE_RIM: Color32 = Color32::from_rgb(153, 153, 153);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(231, 76, 60);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(39, 174, 96);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const STONE_RADIUS_RATIO: f32 = 0.4;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Star point rows/cols: the 4th line from each edge plus the centre.
/// Gives {3, 7, 11} on the standard 15x15 board.
pub fn star_points(size: usize) -> Vec<usize> {
    if size < 9 {
        return vec![size / 2];
    }
    vec![3, size / 2, size - 4]
}
