// Delete confirmation dialog. Stays up until the user picks an answer.

use eframe::egui;

use crate::gallery::{Decision, DeleteConfirmation};

pub fn draw_confirm_dialog(ctx: &egui::Context, request: &DeleteConfirmation) -> Option<Decision> {
    let mut decision = None;
    egui::Window::new("Delete card")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(request.prompt());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    decision = Some(Decision::Confirmed);
                }
                if ui.button("Keep").clicked() {
                    decision = Some(Decision::Declined);
                }
            });
        });
    if decision.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        decision = Some(Decision::Declined);
    }
    decision
}
