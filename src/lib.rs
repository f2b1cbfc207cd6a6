#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod element;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod state;

pub use app::FormationApp;
pub use command::Command;
pub use element::{Element, ElementId};
pub use error::ExportError;
pub use input::InputHandler;
pub use renderer::{render, FieldLayout, Frame, ViewMode};
pub use settings::Settings;
pub use state::{BoardState, PointerEvent, Tool};
