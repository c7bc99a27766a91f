// Gallery window: wires the gallery model, the like store and the views together.
// Views report intents; everything that changes state happens here after drawing.

use eframe::egui::{self, RichText};

use crate::gallery::{CardId, DeleteConfirmation, FileStore, Gallery, LikeStore};
use crate::views::cards::{draw_card_grid, CardIntent};
use crate::views::gallery::{draw_add_form, draw_stats, AddFormAction};

mod boundary;
mod confirm_ui;
mod logs_ui;
pub mod settings;

use boundary::{draw_fallback, RenderBoundary};
use logs_ui::LogsWindow;

pub struct GalleryApp {
    gallery: Gallery,
    store: LikeStore,
    boundary: RenderBoundary,
    pending_delete: Option<DeleteConfirmation>,
    focus_input: bool,
    logs: LogsWindow,
}

/// Opens the configured likes file, falling back to memory if it cannot be read.
pub fn open_like_store() -> LikeStore {
    let (path, namespace) =
        settings::with_settings(|st| (st.likes_file.clone(), st.namespace.clone()));
    match FileStore::open(&path) {
        Ok(file) => {
            log::info!("Persisting likes to {}", file.path().to_string_lossy());
            LikeStore::new(Box::new(file), namespace)
        }
        Err(e) => {
            log::error!("Cannot open like store, likes will not survive restart: {e}");
            LikeStore::in_memory()
        }
    }
}

impl GalleryApp {
    pub fn new(store: LikeStore) -> Self {
        let (seed, allow_delete) =
            settings::with_settings(|st| (st.seed_cards.clone(), st.allow_delete));
        let mut gallery = Gallery::new(seed, &store).with_delete(allow_delete);
        gallery.mount_cards(&store);
        Self {
            gallery,
            store,
            boundary: RenderBoundary::new(),
            pending_delete: None,
            focus_input: false,
            logs: LogsWindow::default(),
        }
    }

    fn apply_card_intent(&mut self, id: &CardId, intent: CardIntent) {
        if intent.toggle_like {
            self.gallery.toggle_like(id, &mut self.store);
        }
        if intent.delete && self.pending_delete.is_none() {
            self.pending_delete = self.gallery.request_delete(id);
        }
        if intent.arm_fault {
            if let Some(card) = self.gallery.card_mut(id) {
                card.arm_fault();
            }
        }
    }

    fn apply_add_action(&mut self, action: AddFormAction) {
        match action {
            AddFormAction::None => {}
            AddFormAction::Begin => {
                self.gallery.begin_add();
                self.focus_input = true;
            }
            AddFormAction::Submit => {
                if self.gallery.can_submit() {
                    self.gallery.submit_add(&self.store);
                }
            }
            AddFormAction::Cancel => self.gallery.cancel_add(),
        }
    }

    fn draw_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("gallery_header").show(ctx, |ui| {
            ui.add_space(crate::ui_constants::spacing::MEDIUM);
            ui.horizontal(|ui| {
                ui.heading("Card Gallery");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logs").clicked() {
                        self.logs.open = true;
                    }
                });
            });
            draw_stats(ui, self.gallery.stats());
            ui.add_space(crate::ui_constants::spacing::SMALL);

            let focus = std::mem::take(&mut self.focus_input);
            let action = ui
                .add_enabled_ui(self.pending_delete.is_none(), |ui| {
                    draw_add_form(ui, &mut self.gallery, focus)
                })
                .inner;
            self.apply_add_action(action);
            ui.add_space(crate::ui_constants::spacing::MEDIUM);
        });
    }

    fn draw_cards(&mut self, ctx: &egui::Context) {
        let interactive = self.pending_delete.is_none();
        let mut intents = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(fault) = self.boundary.fault().cloned() {
                        if draw_fallback(ui, &fault) {
                            self.boundary.reset();
                            ctx.request_repaint();
                        }
                        return;
                    }
                    let gallery = &mut self.gallery;
                    let drawn = self.boundary.run(|| {
                        ui.add_enabled_ui(interactive, |ui| draw_card_grid(ui, gallery))
                            .inner
                    });
                    match drawn {
                        Some(v) => intents = v,
                        None => ctx.request_repaint(),
                    }
                });
        });
        for (id, intent) in intents {
            self.apply_card_intent(&id, intent);
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if crate::logger::take_new_flag() && self.logs.open {
            ctx.request_repaint();
        }

        self.draw_header(ctx);
        self.draw_cards(ctx);

        if let Some(request) = self.pending_delete.clone() {
            if let Some(decision) = confirm_ui::draw_confirm_dialog(ctx, &request) {
                self.gallery
                    .resolve_delete(&request, decision, &mut self.store);
                self.pending_delete = None;
            }
        }

        // Cards that arrived through events this frame
        self.gallery.mount_cards(&self.store);
        if self.gallery.poll_events(&self.store) > 0 {
            ctx.request_repaint();
        }

        self.logs.show(ctx);

        egui::TopBottomPanel::bottom("gallery_footer")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Right-click a card for debug actions")
                        .small()
                        .weak(),
                );
            });
    }
}
