use eframe::egui;

use crate::catalog::EventItem;
use crate::ui_constants::{CARD_GAP, CARD_WIDTH};
use crate::views::cards::button::{resolve, RegisterAction, RegisterContext};
use crate::views::cards::event_card;

use super::config;
use super::Screen;

/// Board grid rendering and per-card response handling, split from app.rs.
impl super::EventDeckApp {
    fn register_context(&self, item: &EventItem) -> RegisterContext {
        RegisterContext {
            registered: item.registered || config::is_event_registered(item.id),
            has_meeting_link: item.meeting_link.is_some(),
            has_external_link: item.external_link.is_some(),
            auth_required: item.requires_auth && !config::is_authenticated(),
        }
    }

    fn on_card_ui(&mut self, ui: &mut egui::Ui, item: &EventItem, card_w: f32) {
        ui.vertical(|ui| {
            ui.set_min_width(card_w);
            ui.set_max_width(card_w);

            let cx = self.register_context(item);
            let cover = self.covers.get(&item.id);
            let resp = event_card(ui, item, card_w, cover, &cx);
            if resp.register_clicked {
                self.on_register(item, &cx);
            }
        });
    }

    /// Dispatch a registration activation on the resolved configuration.
    /// The card never reports activation for the disabled state, so
    /// `AlreadyRegistered` is unreachable in practice.
    fn on_register(&mut self, item: &EventItem, cx: &RegisterContext) {
        match resolve(cx).action {
            RegisterAction::JoinMeeting => {
                if let Some(link) = &item.meeting_link {
                    config::open_in_browser(link);
                }
            }
            RegisterAction::OpenExternal => {
                if let Some(link) = &item.external_link {
                    config::open_in_browser(link);
                }
            }
            RegisterAction::Connect => {
                self.screen = Screen::Connect;
            }
            RegisterAction::Register => {
                config::record_registration(item.id);
            }
            RegisterAction::AlreadyRegistered => {}
        }
    }

    pub(super) fn draw_board_grid(&mut self, ui: &mut egui::Ui) {
        let avail_w = ui.available_width().floor();
        let card_w = CARD_WIDTH;
        let gap = CARD_GAP;

        let mut cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
        if cols == 0 {
            cols = 1;
        }
        let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
        let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

        // Clone so card handlers can take &mut self while iterating.
        let data = self.ordered_events();
        if data.is_empty() {
            ui.add_space(crate::ui_constants::spacing::XLARGE);
            ui.vertical_centered(|ui| {
                ui.label("No events in the catalog.");
            });
            return;
        }

        for row in data.chunks(cols) {
            ui.horizontal(|ui| {
                ui.add_space(left_pad);
                for (c, item) in row.iter().enumerate() {
                    self.on_card_ui(ui, item, card_w);
                    if c + 1 < row.len() {
                        ui.add_space(gap);
                    }
                }
            });
            ui.add_space(gap);
        }
    }
}
