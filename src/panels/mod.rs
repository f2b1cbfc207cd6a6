mod central_panel;
mod clear_dialog;
mod tools_panel;

pub use central_panel::central_panel;
pub use clear_dialog::clear_dialog;
pub use tools_panel::tools_panel;
