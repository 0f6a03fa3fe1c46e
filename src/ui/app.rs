//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use crate::engine::Strategy;
use crate::{Difficulty, GameConfig, GameOutcome, GameSession, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
    /// Last rejected action, shown until the next successful move
    message: Option<String>,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_session(GameSession::default())
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self::with_session(GameSession::from_config(config))
    }

    fn with_session(session: GameSession) -> Self {
        Self {
            session,
            board_view: BoardView::default(),
            show_debug: false,
            message: None,
        }
    }

    fn undo(&mut self) {
        if !self.session.undo() {
            self.message = Some("Nothing to undo".to_string());
        } else {
            self.message = None;
        }
    }

    fn restart(&mut self) {
        self.session.restart();
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: Black  |  Computer: {}", self.session.difficulty()));
                });
            });
        });
    }

    /// Render the side panel with game info and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_difficulty_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row, 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.session.current_turn() == Stone::Black;
            let (fill, color_name) = if is_black {
                (BLACK_STONE, "BLACK")
            } else {
                (WHITE_STONE, "WHITE")
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);
                if !is_black {
                    ui.painter()
                        .circle_stroke(rect.center(), 18.0, egui::Stroke::new(1.0, WHITE_STONE_OUTLINE));
                }

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(2.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.session.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Computer to move", STATUS_WARNING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Difficulty radio buttons; a change applies to the computer's next move
    fn render_difficulty_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let mut selected = self.session.difficulty();
            ui.horizontal(|ui| {
                for difficulty in Difficulty::ALL {
                    ui.radio_value(&mut selected, difficulty, difficulty.label());
                }
            });
            self.session.set_difficulty(selected);
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Restart").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.restart();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last opponent move selection
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = self.session.last_ai_result() else {
                ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let strategy = match result.strategy {
                Strategy::Random => "Random",
                Strategy::Heuristic => "Heuristic",
            };
            ui.label(RichText::new(strategy).size(11.0).strong().color(STATUS_OK));
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{} cells, {}us", result.cells_evaluated, result.time_us))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );

            if let Some(pos) = result.best_move {
                let col = (b'A' + pos.col) as char;
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> {}{}", col, pos.row))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let (headline, detail) = match outcome {
            GameOutcome::Winner(Stone::Black) => ("YOU WIN!", "five in a row"),
            GameOutcome::Winner(_) => ("COMPUTER WINS", "five in a row"),
            GameOutcome::Draw => ("DRAW", "the board is full"),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.restart();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                self.session.board(),
                self.session.last_move(),
                self.session.winning_line(),
                self.session.is_human_turn(),
            );

            if let Some(pos) = clicked {
                match self.session.apply_human_move(pos) {
                    Ok(_) => self.message = None,
                    Err(err) => {
                        tracing::warn!(%err, "move rejected");
                        self.message = Some(err.to_string());
                    }
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, undo, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.undo();
        }
        if restart {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
