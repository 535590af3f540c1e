//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::{stone_color, BoardFrame, BoardView};
use super::theme::*;
use crate::game::{GameController, GameMode, GameStatus, MoveOutcome};
use crate::{Cell, GameConfig, Player};

/// Main Gomoku application
pub struct GomokuApp {
    controller: GameController,
    board_view: BoardView,
    /// Reason the last click was ignored, shown until the next accepted move
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            controller: GameController::new(config),
            board_view: BoardView::default(),
            message: None,
        }
    }

    /// Start a fresh game in another mode, keeping the rest of the configuration
    fn new_game(&mut self, mode: GameMode) {
        let config = GameConfig {
            mode,
            ..self.controller.config().clone()
        };
        self.controller = GameController::new(config);
        self.message = None;
    }

    fn restart(&mut self) {
        self.controller.restart();
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.controller.mode() {
                        GameMode::PvE { human } => format!("PvE - You: {}", human.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with turn and status
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_MUTED));
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.controller.current_player();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(36.0, 36.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 16.0, stone_color(Cell::from(player)));
                ui.painter().circle_stroke(
                    rect.center(),
                    16.0,
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(120, 120, 120)),
                );

                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let to_move = if self.controller.is_strategy_pending() {
                        "Computer thinking..."
                    } else {
                        "to move"
                    };
                    ui.label(RichText::new(to_move).size(12.0).color(TEXT_SECONDARY));
                });
            });
        });
    }

    /// Render game status card
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let status = self.controller.status();
            let color = match status {
                GameStatus::InProgress if self.controller.is_strategy_pending() => STATUS_THINKING,
                GameStatus::InProgress => STATUS_PLAYING,
                GameStatus::Won(_) | GameStatus::Draw => WIN_HIGHLIGHT,
            };
            ui.label(RichText::new(status.to_string()).size(18.0).strong().color(color));

            if let Some(elapsed) = self.controller.strategy_elapsed() {
                ui.label(
                    RichText::new(format!("{} {:.1}s", self.controller.strategy_name(), elapsed.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            if ui.button("Restart").clicked() {
                self.restart();
            }
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.controller.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let accepting_input =
                !self.controller.status().is_terminal() && !self.controller.is_strategy_turn();
            let clicked = self.board_view.show(
                ui,
                BoardFrame {
                    board: self.controller.board(),
                    last_move: self.controller.last_move(),
                    winning_line: self.controller.winning_line(),
                    accepting_input,
                },
            );

            if let Some(pos) = clicked {
                match self.controller.submit_move(pos) {
                    MoveOutcome::Accepted { .. } => self.message = None,
                    MoveOutcome::Rejected(err) => {
                        debug!(%err, "click ignored");
                        self.message = Some(err.to_string());
                    }
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Apply the computer move once its timer fires
        self.controller.poll_strategy();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.controller.is_strategy_pending() {
            ctx.request_repaint();
        }
    }
}
