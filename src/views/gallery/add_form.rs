// Add-card affordance: an idle button that turns into an inline form.

use eframe::egui;

use crate::gallery::{AddMode, Gallery};
use crate::ui_constants::MAX_TITLE_CHARS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFormAction {
    None,
    Begin,
    Submit,
    Cancel,
}

pub fn draw_add_form(ui: &mut egui::Ui, gallery: &mut Gallery, focus_input: bool) -> AddFormAction {
    if *gallery.add_mode() == AddMode::Idle {
        return if ui.button("+ Add card").clicked() {
            AddFormAction::Begin
        } else {
            AddFormAction::None
        };
    }

    let Some(input) = gallery.input_mut() else {
        return AddFormAction::None;
    };

    let mut action = AddFormAction::None;
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut *input)
                .hint_text("Card title")
                .char_limit(MAX_TITLE_CHARS)
                .desired_width(240.0),
        );
        if focus_input {
            edit.request_focus();
        }
        let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        // Escape belongs to the confirm dialog while the form is disabled
        let escape = ui.is_enabled() && ui.input(|i| i.key_pressed(egui::Key::Escape));

        ui.label(format!("{}/{}", input.chars().count(), MAX_TITLE_CHARS));
        // Submit stays disabled while the title is blank
        let can_submit = !input.trim().is_empty();
        let create = ui.add_enabled(can_submit, egui::Button::new("Create")).clicked();
        let cancel = ui.button("Cancel").clicked();

        action = if escape || cancel {
            AddFormAction::Cancel
        } else if (create || enter) && can_submit {
            AddFormAction::Submit
        } else {
            AddFormAction::None
        };
    });
    action
}
