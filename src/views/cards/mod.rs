// Card grid: lays mounted cards out in wrapped rows and collects per-card intents.

use eframe::egui::{self, RichText};

use crate::gallery::{CardId, Gallery, RenderError};
use crate::ui_constants::{spacing, CARD_GAP, CARD_WIDTH};

mod item;
pub use item::{draw_card, CardIntent};

/// Draws every card in display order. The first card that fails aborts the grid.
pub fn draw_card_grid(
    ui: &mut egui::Ui,
    gallery: &mut Gallery,
) -> Result<Vec<(CardId, CardIntent)>, RenderError> {
    if gallery.is_empty() {
        ui.add_space(spacing::XLARGE);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No cards yet. Add one to get started.").weak());
        });
        return Ok(Vec::new());
    }

    let mut intents = Vec::new();
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(CARD_GAP, CARD_GAP);
        gallery.try_for_each_card(|card| {
            let intent = ui.vertical(|ui| draw_card(ui, card, CARD_WIDTH)).inner?;
            if intent.any() {
                intents.push((card.id().clone(), intent));
            }
            Ok(())
        })
    })
    .inner?;
    Ok(intents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{CardRecord, LikeStore};
    use crate::views::ui_helpers::run_frame;

    #[test]
    fn empty_gallery_draws_placeholder() {
        let store = LikeStore::in_memory();
        let mut gallery = Gallery::new(Vec::new(), &store);
        let ctx = egui::Context::default();
        let res = run_frame(&ctx, Vec::new(), |ui| draw_card_grid(ui, &mut gallery));
        assert_eq!(res.map(|v| v.len()), Ok(0));
    }

    #[test]
    fn armed_card_fails_the_grid_once() {
        let store = LikeStore::in_memory();
        let mut gallery = Gallery::new(
            vec![
                CardRecord::new("1", "Rust", false),
                CardRecord::new("2", "Graphs", true),
            ],
            &store,
        );
        gallery.mount_cards(&store);
        gallery.card_mut(&CardId::new("2")).unwrap().arm_fault();

        let ctx = egui::Context::default();
        let first = run_frame(&ctx, Vec::new(), |ui| draw_card_grid(ui, &mut gallery));
        assert_eq!(
            first.map(|v| v.len()),
            Err(RenderError::Fault {
                title: "Graphs".into()
            })
        );
        let second = run_frame(&ctx, Vec::new(), |ui| draw_card_grid(ui, &mut gallery));
        assert_eq!(second.map(|v| v.len()), Ok(0));
    }
}
