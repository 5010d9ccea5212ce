use eframe::egui::{self, Align2, Color32, FontId, Rounding, Stroke, Vec2};

use crate::ui_constants::card::{CHIP_HEIGHT, CHIP_ROUNDING};

/// Renders the event's tags as a wrapped row of pills, in catalog order,
/// one chip per tag. No tags, no row.
pub fn draw_tag_chips(ui: &mut egui::Ui, tags: &[String]) {
    if tags.is_empty() {
        return;
    }

    let gap = 5.0;
    let pad_x = 6.0;
    let max_chip_w = ui.available_width().max(28.0);

    ui.spacing_mut().item_spacing = egui::vec2(gap, gap);
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            let font = FontId::proportional(12.0);
            let text_color = Color32::from_rgb(235, 235, 235);
            let text = format!("🏷 {tag}");

            // Measure text and size the chip to it, with padding.
            let galley = ui
                .painter()
                .layout_no_wrap(text.clone(), font.clone(), text_color);
            let chip_w = (galley.size().x + 2.0 * pad_x).clamp(28.0, max_chip_w);

            let (_id, rect) = ui.allocate_space(Vec2::new(chip_w, CHIP_HEIGHT));
            let p = ui.painter_at(rect);
            p.rect_filled(rect, Rounding::same(CHIP_ROUNDING), Color32::from_rgb(63, 57, 110));
            p.rect_stroke(
                rect,
                Rounding::same(CHIP_ROUNDING),
                Stroke::new(1.0, Color32::from_rgb(88, 82, 140)),
            );
            p.text(rect.center(), Align2::CENTER_CENTER, text, font, text_color);
        }
    });
}
