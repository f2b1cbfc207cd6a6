use egui::Align2;

use crate::command::Command;
use crate::FormationApp;

/// Confirmation gate in front of clear-all.
pub fn clear_dialog(app: &mut FormationApp, ctx: &egui::Context) {
    if !app.board().is_clear_pending() {
        return;
    }

    let count = app.board().elements().len();
    let mut choice = None;

    egui::Window::new("Clear board?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Remove all {count} element(s)? This cannot be undone."));
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    choice = Some(Command::ConfirmClear);
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(Command::CancelClear);
                }
            });
        });

    if let Some(command) = choice {
        app.execute(command);
    }
}
