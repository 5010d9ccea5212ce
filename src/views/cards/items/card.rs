use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use crate::catalog::EventItem;
use crate::ui_constants::card::{BUTTON_MIN_WIDTH, INNER_MARGIN, ROUNDING};
use crate::views::cards::button::{self, ButtonStyle, RegisterContext};
use crate::views::cards::state;

use super::cover::draw_cover;
use super::details::draw_details;
use super::meta_row::draw_meta_row;
use super::tag_chips::draw_tag_chips;

/// What a single card reports back to the caller for this frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardResponse {
    /// The registration button was activated. Never set while the resolved
    /// configuration is disabled.
    pub register_clicked: bool,
    pub expanded: bool,
}

/// Fixed-width event card: cover, tag chips, title, date/time/price, and a
/// bottom row with the expand toggle and the registration button.
/// Strictly constrained to `width` so rows form a proper grid.
///
/// The card owns its expand state (keyed by `item.id` in egui memory); the
/// caller owns everything else and reacts to the returned `CardResponse`.
pub fn event_card(
    ui: &mut egui::Ui,
    item: &EventItem,
    width: f32,
    cover: Option<&egui::TextureHandle>,
    register: &RegisterContext,
) -> CardResponse {
    let rounding = Rounding::same(ROUNDING);
    let fill = Color32::from_rgb(36, 36, 36);
    let accent = Color32::from_rgb(88, 82, 140);

    ui.set_min_width(width);
    ui.set_max_width(width);

    let mut expand = state::load(ui.ctx(), item.id);
    // Accent ring while expanded, plain border otherwise.
    let stroke = if expand.is_expanded() {
        Stroke::new(1.0, accent)
    } else {
        Stroke::new(1.0, Color32::from_rgb(64, 64, 64))
    };

    let mut register_clicked = false;

    let frame_out = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(rounding)
        .inner_margin(egui::Margin::symmetric(INNER_MARGIN, INNER_MARGIN))
        .show(ui, |ui| {
            let inner_w = width - 2.0 * INNER_MARGIN;
            ui.set_width(inner_w);

            draw_cover(ui, inner_w, cover);
            ui.add_space(10.0);

            draw_tag_chips(ui, &item.tags);
            if !item.tags.is_empty() {
                ui.add_space(6.0);
            }

            ui.label(
                RichText::new(&item.title)
                    .heading()
                    .color(Color32::from_rgb(230, 230, 230)),
            );
            ui.add_space(4.0);

            draw_meta_row(ui, item);
            ui.add_space(8.0);
            ui.separator();

            // Bottom row: expand toggle on the left, registration on the right.
            ui.horizontal(|ui| {
                let (label, caret) = if expand.is_expanded() {
                    ("Show less", "▲")
                } else {
                    ("Learn more", "▼")
                };
                let toggle = ui.add(
                    egui::Button::new(
                        RichText::new(format!("{label} {caret}"))
                            .color(Color32::from_rgb(167, 160, 235)),
                    )
                    .frame(false),
                );
                if toggle.clicked() {
                    expand = expand.toggled();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    register_clicked = draw_register_button(ui, register);
                });
            });
        });

    let card_rect = frame_out.response.rect;
    if expand.is_expanded() && draw_details(ui, item.id, card_rect, &item.description) {
        expand = expand.dismissed();
    }
    state::store(ui.ctx(), item.id, expand);

    CardResponse {
        register_clicked,
        expanded: expand.is_expanded(),
    }
}

fn draw_register_button(ui: &mut egui::Ui, cx: &RegisterContext) -> bool {
    let cfg = button::resolve(cx);
    let (bg, fg) = style_colors(cfg.style);

    let btn = egui::Button::new(RichText::new(format!("{} {}", cfg.icon, cfg.label)).color(fg))
        .fill(bg)
        .rounding(Rounding::same(6.0))
        .min_size(egui::vec2(BUTTON_MIN_WIDTH, 28.0));

    // A disabled button cannot report a click, so the disabled "Registered"
    // configuration suppresses activation entirely.
    ui.add_enabled(cfg.enabled, btn).clicked()
}

fn style_colors(style: ButtonStyle) -> (Color32, Color32) {
    match style {
        ButtonStyle::Success => (Color32::from_rgb(22, 130, 60), Color32::WHITE),
        ButtonStyle::Neutral => (
            Color32::from_rgb(60, 52, 92),
            Color32::from_rgb(196, 181, 253),
        ),
        ButtonStyle::Primary => (Color32::from_rgb(79, 70, 229), Color32::WHITE),
    }
}
