// Logs window with colored levels, toggled from the top bar.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::RwLock;

lazy_static! {
    static ref LOGS_OPEN: RwLock<bool> = RwLock::new(false);
}

pub fn toggle_logs() {
    if let Ok(mut v) = LOGS_OPEN.write() {
        *v = !*v;
    }
}

pub fn draw_logs_window(ctx: &egui::Context) {
    let mut open = LOGS_OPEN.read().map(|g| *g).unwrap_or(false);
    if !open {
        return;
    }

    egui::Window::new("Logs")
        .default_size([640.0, 360.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    crate::logger::clear();
                }
                ui.separator();
                ui.label(format!("{} lines", crate::logger::len()));
            });
            ui.separator();

            let total = crate::logger::len();
            let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show_rows(ui, row_height, total, |ui, row_range| {
                    // Batch visible lines into one layout job.
                    let mut job = egui::text::LayoutJob::default();
                    crate::logger::for_each_range(row_range.start, row_range.end, |e| {
                        let mut fmt = egui::TextFormat {
                            color: color_for_level(e.level),
                            ..Default::default()
                        };
                        fmt.font_id = egui::FontId::monospace(12.0);
                        job.append(&format!("[{:>5}] {}: {}\n", e.level, e.target, e.msg), 0.0, fmt);
                    });
                    ui.label(job);
                });
        });

    if let Ok(mut v) = LOGS_OPEN.write() {
        *v = open;
    }
}

fn color_for_level(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(220, 80, 80),
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => egui::Color32::from_rgb(200, 200, 200),
        Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        Level::Trace => egui::Color32::from_rgb(160, 160, 160),
    }
}
