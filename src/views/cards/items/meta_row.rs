use eframe::egui::{self, Color32, RichText};

use crate::catalog::EventItem;

// TODO: replace with a live EX3 rate once the pricing endpoint exists.
const USD_HINT: &str = "≈ $10.00";

/// Draws the date/time line and, when the event carries a price, the price
/// line below it.
pub fn draw_meta_row(ui: &mut egui::Ui, item: &EventItem) {
    let col = Color32::from_rgb(170, 170, 170);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.label(RichText::new(format!("🗓 {}", item.date)).small().color(col));
        ui.label(RichText::new(format!("🕓 {}", item.time)).small().color(col));
    });

    if let Some(price) = visible_price(item.price) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.label(
                RichText::new(format!("🪙 {}", price_label(price)))
                    .small()
                    .strong()
                    .color(Color32::from_rgb(210, 210, 210)),
            );
            ui.label(RichText::new(USD_HINT).small().color(Color32::from_rgb(130, 130, 130)));
        });
    }
}

/// A missing or zero price hides the price line entirely.
fn visible_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p != 0.0)
}

fn price_label(price: f64) -> String {
    format!("{} EX3", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_zero_prices_are_hidden() {
        assert_eq!(visible_price(None), None);
        assert_eq!(visible_price(Some(0.0)), None);
        assert_eq!(visible_price(Some(5.0)), Some(5.0));
    }

    #[test]
    fn price_labels() {
        assert_eq!(price_label(5.0), "5 EX3");
        assert_eq!(price_label(2.5), "2.5 EX3");
        assert_eq!(price_label(12.0), "12 EX3");
    }
}
