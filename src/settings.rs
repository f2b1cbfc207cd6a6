use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::DEFAULT_COLOR;
use crate::renderer::ViewMode;
use crate::state::{BoardState, Tool};

/// User preferences restored between runs.
///
/// Only the toolbar choices are kept. The diagram itself is never
/// persisted; the image export is the only way to keep a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub tool: Tool,
    pub color: Color32,
    pub view_mode: ViewMode,
    /// Directory exports are written to; `None` means the pictures folder.
    pub export_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: DEFAULT_COLOR,
            view_mode: ViewMode::default(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Storage key inside eframe's persisted app state.
    pub const STORAGE_KEY: &'static str = eframe::APP_KEY;

    /// Load from eframe storage, falling back to defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, Self::STORAGE_KEY))
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, Self::STORAGE_KEY, self);
    }

    /// Fresh board configured with these preferences.
    pub fn new_board(&self) -> BoardState {
        let mut board = BoardState::new();
        board.set_tool(self.tool);
        board.set_color(self.color);
        board.set_view_mode(self.view_mode);
        board
    }

    /// Pick up the board's current toolbar choices.
    pub fn update_from(&mut self, board: &BoardState) {
        self.tool = board.tool();
        self.color = board.color();
        self.view_mode = board.view_mode();
    }
}
