use egui::{ColorImage, Rect};

use crate::command::Command;
use crate::error::ExportResult;
use crate::export;
use crate::input::InputHandler;
use crate::panels;
use crate::settings::Settings;
use crate::state::BoardState;

pub struct FormationApp {
    board: BoardState,
    settings: Settings,
    input: InputHandler,
    /// Screen rect of the canvas as laid out last frame.
    canvas_rect: Option<Rect>,
    /// Canvas rect to crop to once the requested screenshot arrives.
    pending_export: Option<Rect>,
    /// Outcome of the last export, shown in the toolbar.
    status: Option<String>,
}

impl Default for FormationApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl FormationApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load(cc.storage);
        log::info!(
            "Starting with {} tool, {}",
            settings.tool.name(),
            settings.view_mode.name()
        );
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            board: settings.new_board(),
            settings,
            input: InputHandler::new(),
            canvas_rect: None,
            pending_export: None,
            status: None,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_export_pending(&self) -> bool {
        self.pending_export.is_some()
    }

    pub fn execute(&mut self, command: Command) {
        log::debug!("Command: {}", command.label());
        command.execute(&mut self.board);
    }

    /// Record where the canvas ended up this frame.
    ///
    /// Element coordinates stay in canvas pixels; a resize moves the field
    /// under them without rescaling anything.
    pub(crate) fn set_canvas_rect(&mut self, rect: Rect) {
        if self.canvas_rect.map(|old| old.size()) != Some(rect.size()) {
            log::debug!("Canvas resized to {:.0}x{:.0}", rect.width(), rect.height());
        }
        self.canvas_rect = Some(rect);
    }

    /// Feed this frame's pointer input into the board.
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, rect: Rect, hovered: bool) {
        // The confirmation window is modal for the canvas.
        if self.board.is_clear_pending() {
            return;
        }
        for event in self.input.process_input(ctx, rect, hovered) {
            self.board.handle_pointer(event);
        }
    }

    /// Ask the backend for a screenshot; the canvas is cut out of it when it
    /// arrives on a later frame.
    pub fn request_export(&mut self, ctx: &egui::Context) {
        let Some(rect) = self.canvas_rect else {
            log::warn!("Export requested before the canvas was laid out");
            return;
        };
        self.pending_export = Some(rect);
        self.status = None;
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let screenshot = ctx.input(|input| {
            input.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let (Some(screenshot), Some(rect)) = (screenshot, self.pending_export) else {
            return;
        };
        self.pending_export = None;

        let exported = export::crop_to_canvas(&screenshot, rect, ctx.pixels_per_point())
            .and_then(|canvas| self.write_export(&canvas));
        self.status = Some(match exported {
            Ok(message) => message,
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    fn write_export(&self, canvas: &ColorImage) -> ExportResult<String> {
        let bytes = export::canvas_to_png(canvas)?;

        #[cfg(not(target_arch = "wasm32"))]
        {
            let dir = self
                .settings
                .export_dir
                .clone()
                .unwrap_or_else(export::default_export_dir);
            let path = export::save_png(&bytes, &dir)?;
            Ok(format!("Saved {}", path.display()))
        }

        #[cfg(target_arch = "wasm32")]
        {
            let name = export::export_file_name();
            export::download_png(&bytes, &name)?;
            Ok(format!("Downloaded {name}"))
        }
    }
}

impl eframe::App for FormationApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.update_from(&self.board);
        self.settings.save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in InputHandler::shortcuts(ctx, &self.board) {
            self.execute(command);
        }
        self.handle_screenshot(ctx);

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::clear_dialog(self, ctx);
    }
}
