use egui::{CursorIcon, Sense};

use crate::renderer;
use crate::state::Tool;
use crate::FormationApp;

pub fn central_panel(app: &mut FormationApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.set_canvas_rect(canvas_rect);
            app.handle_canvas_input(ctx, canvas_rect, response.hovered());

            if response.hovered() {
                ctx.set_cursor_icon(cursor_for(app.board().tool()));
            }

            let frame = renderer::render(app.board(), canvas_rect.size());
            painter.extend(frame.into_shapes_at(canvas_rect.min.to_vec2()));
        });
}

fn cursor_for(tool: Tool) -> CursorIcon {
    match tool {
        Tool::Interact => CursorIcon::Grab,
        Tool::Erase => CursorIcon::NotAllowed,
        Tool::Marker | Tool::Line | Tool::Zone | Tool::Freehand => CursorIcon::Crosshair,
    }
}
