use eframe::egui::{self, Color32, Order, RichText, Rounding, Sense, Stroke};

use crate::ui_constants::card::{DETAILS_GAP, ROUNDING};
use crate::views::ui_helpers::pressed_outside;

/// Renders the expanded detail panel anchored below the card, plus the dimmed
/// backdrop over everything around the card. Floats over the grid without
/// pushing layout. Returns true when the user asked for dismissal: a press on
/// the backdrop or a press anywhere outside the card and its panel.
pub fn draw_details(
    ui: &mut egui::Ui,
    event_id: u64,
    card_rect: egui::Rect,
    description: &str,
) -> bool {
    let mut dismiss = false;

    // Detail panel under the card, matching the card width.
    let panel = egui::Area::new(egui::Id::new(("event_card_details", event_id)))
        .order(Order::Foreground)
        .fixed_pos(egui::pos2(card_rect.left(), card_rect.bottom() + DETAILS_GAP))
        .show(ui.ctx(), |ui| {
            ui.set_min_width(card_rect.width());
            ui.set_max_width(card_rect.width());
            egui::Frame::none()
                .fill(Color32::from_rgb(36, 36, 36))
                .stroke(Stroke::new(1.0, Color32::from_rgb(88, 82, 140)))
                .rounding(Rounding::same(ROUNDING))
                .inner_margin(egui::Margin::symmetric(12.0, 10.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(description).color(Color32::from_rgb(205, 205, 205)));
                });
        });
    let panel_rect = panel.response.rect;

    // Backdrop: dim the viewport around the card and its panel, consuming
    // pointer activation there. The card area itself is left uncovered so the
    // "Show less" toggle and the registration button keep working.
    let hole = card_rect.union(panel_rect);
    let screen = ui.ctx().screen_rect();
    egui::Area::new(egui::Id::new(("event_card_backdrop", event_id)))
        .order(Order::Middle)
        .fixed_pos(screen.min)
        .show(ui.ctx(), |ui| {
            let dim = Color32::from_black_alpha(90);
            let strips = [
                egui::Rect::from_min_max(screen.min, egui::pos2(screen.max.x, hole.min.y)),
                egui::Rect::from_min_max(egui::pos2(screen.min.x, hole.max.y), screen.max),
                egui::Rect::from_min_max(
                    egui::pos2(screen.min.x, hole.min.y),
                    egui::pos2(hole.min.x, hole.max.y),
                ),
                egui::Rect::from_min_max(
                    egui::pos2(hole.max.x, hole.min.y),
                    egui::pos2(screen.max.x, hole.max.y),
                ),
            ];
            for (idx, strip) in strips.iter().enumerate() {
                if strip.width() <= 0.0 || strip.height() <= 0.0 {
                    continue;
                }
                ui.expand_to_include_rect(*strip);
                let resp = ui.interact(
                    *strip,
                    ui.id().with(("backdrop_strip", event_id, idx)),
                    Sense::click(),
                );
                ui.painter().rect_filled(*strip, Rounding::ZERO, dim);
                if resp.clicked() {
                    dismiss = true;
                }
            }
        });

    // Pointer-down anywhere outside the card and its panel also dismisses,
    // checked only while expanded so nothing global outlives this state.
    if pressed_outside(ui, &[card_rect, panel_rect]) {
        dismiss = true;
    }

    dismiss
}
