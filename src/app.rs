// App state and UI loop. The entry point stays minimal; everything the board
// does per frame lives here and in the submodules.

use eframe::egui::RichText;
use eframe::{egui, App};
use std::collections::{HashMap, HashSet};
use std::sync::mpsc;
use strum::IntoEnumIterator;

use crate::catalog::{self, EventItem};
use crate::types::BoardOrder;

pub mod config;
mod fetch;
mod grid;
mod logs_ui;
mod runtime;

pub use fetch::CoverMsg;
pub use runtime::rt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Connect,
    Board,
}

pub struct EventDeckApp {
    events: Vec<EventItem>,
    order: BoardOrder,
    screen: Screen,
    connect_name: String,
    // Cover loading and cache
    covers: HashMap<u64, egui::TextureHandle>,
    covers_loading: HashSet<u64>,
    cover_tx: mpsc::Sender<CoverMsg>,
    cover_rx: mpsc::Receiver<CoverMsg>,
    covers_scheduled: bool,
}

impl Default for EventDeckApp {
    fn default() -> Self {
        let (cover_tx, cover_rx) = mpsc::channel();
        Self {
            events: catalog::load_or_default(),
            order: BoardOrder::default(),
            screen: Screen::Board,
            connect_name: String::new(),
            covers: HashMap::new(),
            covers_loading: HashSet::new(),
            cover_tx,
            cover_rx,
            covers_scheduled: false,
        }
    }
}

impl App for EventDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the logs window fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        self.poll_covers(ctx);
        if !self.covers_scheduled {
            self.covers_scheduled = true;
            self.schedule_cover_downloads(ctx);
        }

        if self.screen == Screen::Connect {
            self.draw_connect_screen(ctx);
            logs_ui::draw_logs_window(ctx);
            return;
        }

        egui::TopBottomPanel::top("board_top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Event Deck");
                ui.separator();
                for order in BoardOrder::iter() {
                    if ui
                        .selectable_label(self.order == order, order.to_string())
                        .clicked()
                    {
                        self.order = order;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logs").clicked() {
                        logs_ui::toggle_logs();
                    }
                    ui.separator();
                    match config::attendee_name() {
                        Some(name) => {
                            ui.label(RichText::new(format!("👤 {name}")).small());
                        }
                        None => {
                            if ui.button("Connect").clicked() {
                                self.screen = Screen::Connect;
                            }
                        }
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(crate::ui_constants::spacing::MEDIUM);
                    self.draw_board_grid(ui);
                });
        });

        logs_ui::draw_logs_window(ctx);
    }
}

impl EventDeckApp {
    /// Events in the order the board should lay them out.
    fn ordered_events(&self) -> Vec<EventItem> {
        let mut data = self.events.clone();
        if self.order == BoardOrder::Title {
            data.sort_by(|a, b| a.title.cmp(&b.title));
        }
        data
    }

    fn draw_connect_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(crate::ui_constants::spacing::XLARGE);
            ui.vertical_centered(|ui| {
                ui.heading("Connect");
            });
            ui.add_space(crate::ui_constants::spacing::MEDIUM);
            ui.horizontal(|ui| {
                ui.label("Display name:");
                ui.text_edit_singleline(&mut self.connect_name);
            });
            ui.add_space(crate::ui_constants::spacing::MEDIUM);
            ui.horizontal(|ui| {
                let can_connect = !self.connect_name.trim().is_empty();
                if ui
                    .add_enabled(can_connect, egui::Button::new("Connect"))
                    .clicked()
                {
                    config::connect_attendee(self.connect_name.trim());
                    self.screen = Screen::Board;
                }
                if ui.button("Back").clicked() {
                    self.screen = Screen::Board;
                }
            });
            ui.add_space(crate::ui_constants::spacing::MEDIUM);
            ui.label(
                RichText::new("Your name is stored locally so gated events can be registered.")
                    .small(),
            );
        });
    }
}
