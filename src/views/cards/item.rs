use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use crate::gallery::{Card, RenderError};
use crate::ui_constants::card::{INNER_MARGIN, ROUNDING, TITLE_GAP};
use crate::views::ui_helpers::activated;

/// What the user did with a card this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardIntent {
    pub toggle_like: bool,
    pub delete: bool,
    pub arm_fault: bool,
}

impl CardIntent {
    pub fn any(&self) -> bool {
        self.toggle_like || self.delete || self.arm_fault
    }
}

/// Fixed-width card: title plus like/delete controls.
pub fn draw_card(ui: &mut egui::Ui, card: &mut Card, width: f32) -> Result<CardIntent, RenderError> {
    if card.take_fault() {
        return Err(RenderError::Fault {
            title: card.title().to_string(),
        });
    }

    let liked = card.is_liked();
    let fill = if liked {
        Color32::from_rgb(48, 36, 40)
    } else {
        Color32::from_rgb(36, 36, 36)
    };
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));

    ui.set_min_width(width);
    ui.set_max_width(width);

    let mut intent = CardIntent::default();
    let frame_out = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(ROUNDING))
        .inner_margin(egui::Margin::same(INNER_MARGIN))
        .show(ui, |ui| {
            ui.set_width(width - 2.0 * INNER_MARGIN);
            ui.label(
                RichText::new(card.title())
                    .heading()
                    .color(Color32::from_rgb(230, 230, 230)),
            );
            ui.add_space(TITLE_GAP);

            ui.horizontal(|ui| {
                let (text, color) = if liked {
                    ("♥ Liked", Color32::from_rgb(235, 90, 110))
                } else {
                    ("♡ Like", Color32::from_rgb(180, 180, 180))
                };
                let like = ui
                    .add(egui::Button::new(RichText::new(text).color(color)))
                    .on_hover_text(format!("Currently {}", card.state()));
                intent.toggle_like = activated(&like);

                if card.can_delete() {
                    let delete = ui
                        .add(egui::Button::new("🗑 Delete"))
                        .on_hover_text(format!("Delete \"{}\"", card.title()));
                    intent.delete = activated(&delete);
                }
            });
        });

    frame_out.response.context_menu(|ui| {
        if ui.button("Simulate render fault").clicked() {
            intent.arm_fault = true;
            ui.close_menu();
        }
    });

    Ok(intent)
}
