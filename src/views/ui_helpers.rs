use eframe::egui;

/// Click or keyboard activation of `resp`. egui already reports Enter or Space on a
/// focused clickable widget as a primary click.
pub fn activated(resp: &egui::Response) -> bool {
    resp.clicked()
}

#[cfg(test)]
pub fn key_press(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

/// Runs one headless frame with `events`, handing `f` the central panel's ui.
#[cfg(test)]
pub fn run_frame<R>(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    mut f: impl FnMut(&mut egui::Ui) -> R,
) -> R {
    let input = egui::RawInput {
        events,
        ..Default::default()
    };
    let mut out = None;
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            out = Some(f(ui));
        });
    });
    out.expect("central panel ran")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn like_button(ctx: &egui::Context, events: Vec<egui::Event>, focus: bool) -> bool {
        run_frame(ctx, events, |ui| {
            let resp = ui.button("Like");
            if focus {
                resp.request_focus();
            }
            activated(&resp)
        })
    }

    #[test]
    fn enter_and_space_activate_focused_button() {
        let ctx = egui::Context::default();
        assert!(!like_button(&ctx, Vec::new(), true));
        assert!(like_button(&ctx, vec![key_press(egui::Key::Enter)], false));
        assert!(like_button(&ctx, vec![key_press(egui::Key::Space)], false));
        assert!(!like_button(&ctx, vec![key_press(egui::Key::Escape)], false));
    }

    #[test]
    fn keys_do_not_activate_unfocused_button() {
        let ctx = egui::Context::default();
        assert!(!like_button(&ctx, Vec::new(), false));
        assert!(!like_button(&ctx, vec![key_press(egui::Key::Enter)], false));
    }
}
