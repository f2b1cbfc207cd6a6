use egui::{Context, Key, Modifiers, Pos2, Rect};

use crate::command::Command;
use crate::state::{BoardState, PointerEvent, Tool};

/// Primary-pointer state egui reported for one frame.
///
/// egui folds touch input into the pointer, using the first touch only, so
/// mouse and touch arrive here the same way and extra fingers are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub released: bool,
    pub position: Option<Pos2>,
    /// Whether the canvas is the topmost widget under the pointer.
    pub hovered: bool,
}

impl PointerSample {
    pub fn read(ctx: &Context, hovered: bool) -> Self {
        ctx.input(|input| Self {
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            position: input.pointer.interact_pos(),
            hovered,
        })
    }
}

/// Turns raw egui pointer input into canvas-local [`PointerEvent`]s.
///
/// A gesture only starts on a press inside the canvas; once started it
/// follows the pointer anywhere until release.
#[derive(Debug, Default)]
pub struct InputHandler {
    pointer_down: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Read this frame's pointer input for the canvas at `canvas_rect`.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        hovered: bool,
    ) -> Vec<PointerEvent> {
        self.process_sample(PointerSample::read(ctx, hovered), canvas_rect)
    }

    pub fn process_sample(
        &mut self,
        sample: PointerSample,
        canvas_rect: Rect,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if let Some(pos) = sample.position {
            if sample.pressed && !self.pointer_down {
                if sample.hovered && canvas_rect.contains(pos) {
                    self.pointer_down = true;
                    self.last_pos = Some(pos);
                    events.push(PointerEvent::Down(to_local(pos)));
                }
            } else if self.pointer_down && self.last_pos != Some(pos) {
                self.last_pos = Some(pos);
                events.push(PointerEvent::Move(to_local(pos)));
            }
        }

        if sample.released && self.pointer_down {
            // Touch releases can arrive without a position; fall back to the last one.
            if let Some(pos) = sample.position.or(self.last_pos) {
                events.push(PointerEvent::Up(to_local(pos)));
            }
            self.pointer_down = false;
            self.last_pos = None;
        }

        events
    }

    /// Keyboard shortcuts for the board.
    ///
    /// | Keys              | Action                                   |
    /// |-------------------|------------------------------------------|
    /// | Cmd/Ctrl+Z        | Undo                                     |
    /// | Escape            | Cancel a pending clear, else deselect    |
    /// | 1 … 6             | Marker, Line, Zone, Freehand, Select, Erase |
    pub fn shortcuts(ctx: &Context, board: &BoardState) -> Vec<Command> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }

        const TOOL_KEYS: [Key; 6] = [
            Key::Num1,
            Key::Num2,
            Key::Num3,
            Key::Num4,
            Key::Num5,
            Key::Num6,
        ];

        ctx.input_mut(|input| {
            let mut commands = Vec::new();

            if input.consume_key(Modifiers::COMMAND, Key::Z) {
                commands.push(Command::Undo);
            }
            if input.consume_key(Modifiers::NONE, Key::Escape) {
                commands.push(if board.is_clear_pending() {
                    Command::CancelClear
                } else {
                    Command::ClearSelection
                });
            }
            for (key, tool) in TOOL_KEYS.into_iter().zip(Tool::ALL) {
                if input.consume_key(Modifiers::NONE, key) {
                    commands.push(Command::SetTool(tool));
                }
            }

            commands
        })
    }
}
