// Logs window: buffered log lines with level colours, Clear/Copy and autoscroll.

use eframe::egui;
use log::Level;

#[derive(Debug)]
pub struct LogsWindow {
    pub open: bool,
    autoscroll: bool,
}

impl Default for LogsWindow {
    fn default() -> Self {
        Self {
            open: false,
            autoscroll: true,
        }
    }
}

impl LogsWindow {
    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }
        let mut open = self.open;
        egui::Window::new("Logs")
            .open(&mut open)
            .default_size([720.0, 400.0])
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        crate::logger::clear();
                    }
                    if ui.button("Copy").clicked() {
                        let text = crate::logger::all_lines().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    ui.checkbox(&mut self.autoscroll, "Autoscroll");
                    ui.separator();
                    ui.label(format!("{} lines", crate::logger::len()));
                });
                ui.separator();

                let total = crate::logger::len();
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(self.autoscroll)
                    .show_rows(ui, row_height, total, |ui, rows| {
                        let mut job = egui::text::LayoutJob::default();
                        crate::logger::for_each_range(rows.start, rows.end, |e| {
                            let fmt = egui::TextFormat {
                                color: color_for_level(e.level),
                                font_id: egui::FontId::monospace(12.0),
                                ..Default::default()
                            };
                            job.append(&format!("{}\n", e.line()), 0.0, fmt);
                        });
                        ui.label(job);
                    });
            });
        self.open = open;
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
