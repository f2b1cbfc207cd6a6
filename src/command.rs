use egui::Color32;
use log::info;

use crate::renderer::ViewMode;
use crate::state::{BoardState, Tool};

/// Board actions that don't come from the pointer: toolbar buttons and
/// keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetTool(Tool),
    SetColor(Color32),
    SetViewMode(ViewMode),
    /// Remove the last committed element.
    Undo,
    ClearSelection,
    /// Open the clear-all confirmation gate.
    RequestClear,
    /// Clear everything; only acts while the gate is open.
    ConfirmClear,
    CancelClear,
}

impl Command {
    pub fn execute(&self, board: &mut BoardState) {
        match self {
            Command::SetTool(tool) => {
                if board.tool() != *tool {
                    info!("Tool selected: {}", tool.name());
                }
                board.set_tool(*tool);
            }
            Command::SetColor(color) => {
                board.set_color(*color);
            }
            Command::SetViewMode(mode) => {
                if board.view_mode() != *mode {
                    info!("View mode: {}", mode.name());
                }
                board.set_view_mode(*mode);
            }
            Command::Undo => {
                if board.undo().is_none() {
                    log::debug!("Nothing to undo");
                }
            }
            Command::ClearSelection => board.clear_selection(),
            Command::RequestClear => board.request_clear(),
            Command::ConfirmClear => {
                if board.is_clear_pending() {
                    info!("Clearing {} element(s)", board.elements().len());
                    board.clear_all();
                }
            }
            Command::CancelClear => board.cancel_clear(),
        }
    }

    /// Short label for logs and the status line.
    pub fn label(&self) -> &'static str {
        match self {
            Command::SetTool(_) => "Set tool",
            Command::SetColor(_) => "Set color",
            Command::SetViewMode(_) => "Set view mode",
            Command::Undo => "Undo",
            Command::ClearSelection => "Clear selection",
            Command::RequestClear => "Clear all",
            Command::ConfirmClear => "Confirm clear",
            Command::CancelClear => "Cancel clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, BLUE};
    use egui::Pos2;

    #[test]
    fn confirm_without_request_does_nothing() {
        let mut board = BoardState::new();
        board.add_element(factory::create_marker(Pos2::new(1.0, 1.0), BLUE));

        Command::ConfirmClear.execute(&mut board);
        assert_eq!(board.elements().len(), 1);

        Command::RequestClear.execute(&mut board);
        Command::ConfirmClear.execute(&mut board);
        assert!(board.elements().is_empty());
    }

    #[test]
    fn cancel_closes_the_gate() {
        let mut board = BoardState::new();
        board.add_element(factory::create_marker(Pos2::new(1.0, 1.0), BLUE));

        Command::RequestClear.execute(&mut board);
        assert!(board.is_clear_pending());
        Command::CancelClear.execute(&mut board);

        assert!(!board.is_clear_pending());
        assert_eq!(board.elements().len(), 1);
    }
}
