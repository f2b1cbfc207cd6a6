use egui::{Button, Stroke, Vec2};

use crate::command::Command;
use crate::element::PALETTE;
use crate::renderer::ViewMode;
use crate::state::Tool;
use crate::FormationApp;

const SWATCH_SIZE: Vec2 = Vec2::splat(20.0);

pub fn tools_panel(app: &mut FormationApp, ctx: &egui::Context) {
    let mut commands = Vec::new();
    let mut export_clicked = false;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        let board = app.board();

        ui.horizontal_wrapped(|ui| {
            for tool in Tool::ALL {
                let label = format!("{} {}", tool.icon(), tool.name());
                if ui.selectable_label(board.tool() == tool, label).clicked() {
                    commands.push(Command::SetTool(tool));
                }
            }

            ui.separator();

            for (name, color) in PALETTE {
                let selected = board.color() == color;
                let stroke = if selected {
                    Stroke::new(2.0, ui.visuals().strong_text_color())
                } else {
                    Stroke::NONE
                };
                let swatch = Button::new("").fill(color).stroke(stroke).min_size(SWATCH_SIZE);
                if ui.add(swatch).on_hover_text(name).clicked() {
                    commands.push(Command::SetColor(color));
                }
            }

            ui.separator();

            for mode in ViewMode::ALL {
                if ui.selectable_label(board.view_mode() == mode, mode.name()).clicked() {
                    commands.push(Command::SetViewMode(mode));
                }
            }

            ui.separator();

            let has_elements = !board.elements().is_empty();
            if ui.add_enabled(has_elements, Button::new("Undo")).clicked() {
                commands.push(Command::Undo);
            }
            if ui.add_enabled(has_elements, Button::new("Clear")).clicked() {
                commands.push(Command::RequestClear);
            }
            if ui
                .add_enabled(!app.is_export_pending(), Button::new("Export PNG"))
                .clicked()
            {
                export_clicked = true;
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });

    for command in commands {
        app.execute(command);
    }
    if export_clicked {
        app.request_export(ctx);
    }
}
