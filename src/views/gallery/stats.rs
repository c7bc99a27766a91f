use eframe::egui::{self, Color32, RichText};

use crate::gallery::Stats;

/// Single-line summary: total, liked, not liked.
pub fn draw_stats(ui: &mut egui::Ui, stats: Stats) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;
        let col = Color32::from_rgb(170, 170, 170);
        ui.label(RichText::new(format!("Total: {}", stats.total)).color(col));
        ui.label(RichText::new(format!("♥ Liked: {}", stats.liked)).color(Color32::from_rgb(235, 90, 110)));
        ui.label(RichText::new(format!("Not liked: {}", stats.not_liked)).color(col));
    });
}
