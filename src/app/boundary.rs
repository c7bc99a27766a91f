// Error containment for the card list region. A failed render latches a fault and the
// region shows a static panel until the user resets it.

use eframe::egui;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::gallery::RenderError;
use crate::ui_constants::spacing;

#[derive(Debug, Default)]
pub struct RenderBoundary {
    fault: Option<RenderError>,
}

impl RenderBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fault(&self) -> Option<&RenderError> {
        self.fault.as_ref()
    }

    /// Runs `f` unless a fault is latched. Errors and panics both latch.
    pub fn run<R, F>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce() -> Result<R, RenderError>,
    {
        if self.fault.is_some() {
            return None;
        }
        let outcome = match catch_unwind(AssertUnwindSafe(f)) {
            Ok(res) => res,
            Err(payload) => Err(RenderError::Panic(panic_message(payload.as_ref()))),
        };
        match outcome {
            Ok(v) => Some(v),
            Err(e) => {
                log::error!("Card list render failed: {e}");
                self.fault = Some(e);
                None
            }
        }
    }

    /// Clears the latched fault. Lost state is not restored.
    pub fn reset(&mut self) {
        if self.fault.take().is_some() {
            log::info!("Card list rendering re-enabled");
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Static fallback panel. Returns true when "Try again" was pressed.
pub fn draw_fallback(ui: &mut egui::Ui, fault: &RenderError) -> bool {
    let mut reset = false;
    ui.add_space(spacing::XLARGE);
    ui.vertical_centered(|ui| {
        ui.heading("Something went wrong");
        ui.add_space(spacing::SMALL);
        ui.colored_label(egui::Color32::from_rgb(230, 140, 140), fault.to_string());
        ui.add_space(spacing::MEDIUM);
        reset = ui.button("Try again").clicked();
    });
    reset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_render_passes_through() {
        let mut b = RenderBoundary::new();
        assert_eq!(b.run(|| Ok(5)), Some(5));
        assert!(b.fault().is_none());
    }

    #[test]
    fn error_latches_until_reset() {
        let mut b = RenderBoundary::new();
        let fault = RenderError::Fault {
            title: "Rust".into(),
        };
        assert_eq!(b.run(|| Err::<(), _>(fault.clone())), None);
        assert_eq!(b.fault(), Some(&fault));

        let mut ran = false;
        b.run(|| {
            ran = true;
            Ok(())
        });
        assert!(!ran, "latched boundary must not render");

        b.reset();
        assert!(b.fault().is_none());
        assert_eq!(b.run(|| Ok("back")), Some("back"));
    }

    #[test]
    fn panics_are_contained() {
        let mut b = RenderBoundary::new();
        let res: Option<()> = b.run(|| panic!("boom"));
        assert!(res.is_none());
        assert_eq!(b.fault(), Some(&RenderError::Panic("boom".into())));
    }

    #[test]
    fn one_shot_card_fault_does_not_return_after_reset() {
        use crate::gallery::{CardRecord, Gallery, LikeStore};
        use crate::views::cards::draw_card_grid;
        use crate::views::ui_helpers::run_frame;

        let store = LikeStore::in_memory();
        let mut gallery = Gallery::new(vec![CardRecord::new("1", "A", false)], &store);
        gallery.mount_cards(&store);
        let id = gallery.cards()[0].id.clone();
        gallery.card_mut(&id).unwrap().arm_fault();

        let ctx = egui::Context::default();
        let mut b = RenderBoundary::new();
        let frame = |b: &mut RenderBoundary, gallery: &mut Gallery| {
            run_frame(&ctx, Vec::new(), |ui| {
                b.run(|| draw_card_grid(ui, gallery).map(|intents| intents.len()))
            })
        };

        assert_eq!(frame(&mut b, &mut gallery), None);
        assert_eq!(b.fault(), Some(&RenderError::Fault { title: "A".into() }));
        assert_eq!(frame(&mut b, &mut gallery), None, "latched until reset");

        b.reset();
        assert_eq!(frame(&mut b, &mut gallery), Some(0));
        assert_eq!(frame(&mut b, &mut gallery), Some(0));
        assert!(b.fault().is_none());
    }
}
