use serde::{Deserialize, Serialize};

/// The active tool decides how pointer events are interpreted.
///
/// Tools are mutually exclusive; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Marker,
    Line,
    Zone,
    Freehand,
    Interact,
    Erase,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 6] = [
        Tool::Marker,
        Tool::Line,
        Tool::Zone,
        Tool::Freehand,
        Tool::Interact,
        Tool::Erase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Marker => "Marker",
            Tool::Line => "Line",
            Tool::Zone => "Zone",
            Tool::Freehand => "Freehand",
            Tool::Interact => "Select",
            Tool::Erase => "Erase",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Marker => "●",
            Tool::Line => "➡",
            Tool::Zone => "◯",
            Tool::Freehand => "✏",
            Tool::Interact => "✋",
            Tool::Erase => "⌫",
        }
    }

    /// Tools that hold an in-progress element between pointer-down and pointer-up.
    pub fn draws_shape(&self) -> bool {
        matches!(self, Tool::Line | Tool::Zone | Tool::Freehand)
    }
}
