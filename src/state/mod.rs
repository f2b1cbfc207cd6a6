mod board_state;
mod tool;

pub use board_state::{BoardState, PointerEvent};
pub use tool::Tool;
