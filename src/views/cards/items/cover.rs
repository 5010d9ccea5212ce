use eframe::egui::{self, Color32, Rounding, Sense, Vec2};

/// Draws the cover image with a 16:9 ratio across `inner_w`. Until the
/// texture arrives (or when the event has no image) a flat fill stands in.
pub fn draw_cover(
    ui: &mut egui::Ui,
    inner_w: f32,
    cover: Option<&egui::TextureHandle>,
) -> egui::Rect {
    let cover_h = inner_w * 9.0 / 16.0;
    let (cover_rect, _resp) = ui.allocate_exact_size(Vec2::new(inner_w, cover_h), Sense::hover());

    let p = ui.painter_at(cover_rect);
    if let Some(tex) = cover {
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        p.image(tex.id(), cover_rect, uv, Color32::WHITE);
    } else {
        p.rect_filled(
            cover_rect,
            Rounding::same(crate::ui_constants::card::ROUNDING),
            Color32::from_rgb(58, 58, 58),
        );
    }

    cover_rect
}
