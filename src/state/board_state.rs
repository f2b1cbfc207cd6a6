//! The board's state machine.
//!
//! `BoardState` owns everything the canvas shows: the committed element
//! sequence, the selection set, and the transient gesture state (the element
//! being drawn, the selection rectangle being dragged out, the drag anchor).
//! Pointer events are applied through [`BoardState::handle_pointer`]; every
//! other mutation goes through a [`crate::command::Command`].
//!
//! # Gestures
//!
//! ```text
//!   Down ──► Move* ──► Up
//! ```
//!
//! A gesture starts on pointer-down and ends on pointer-up. Moves outside
//! a gesture are ignored. What each step does depends on the active
//! [`Tool`]:
//!
//! | Tool      | Down                          | Move                    | Up                   |
//! |-----------|-------------------------------|-------------------------|----------------------|
//! | Marker    | commit marker                 | -                       | -                    |
//! | Line/Zone | begin, start == end           | move end point          | commit               |
//! | Freehand  | begin single-point path       | append point            | commit               |
//! | Erase     | remove topmost hit            | remove topmost hit      | -                    |
//! | Interact  | select / start drag / marquee | drag or resize marquee  | finish marquee       |
use std::collections::HashSet;

use egui::{Color32, Pos2, Rect};
use log::debug;

use super::Tool;
use crate::element::{factory, Element, ElementId, DEFAULT_COLOR};
use crate::geometry::hit_testing::{element_at_position, elements_in_rect};
use crate::renderer::ViewMode;

/// Pointer input in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Move(Pos2),
    Up(Pos2),
}

/// Marquee being dragged out; corners are kept raw and normalized on read.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SelectionRect {
    anchor: Pos2,
    current: Pos2,
}

impl SelectionRect {
    fn normalized(&self) -> Rect {
        Rect::from_two_pos(self.anchor, self.current)
    }
}

#[derive(Debug, Clone)]
pub struct BoardState {
    elements: Vec<Element>,
    selection: HashSet<ElementId>,
    in_progress: Option<Element>,
    selection_rect: Option<SelectionRect>,
    drag_anchor: Option<Pos2>,
    gesture_active: bool,
    clear_pending: bool,
    tool: Tool,
    color: Color32,
    view_mode: ViewMode,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            selection: HashSet::new(),
            in_progress: None,
            selection_rect: None,
            drag_anchor: None,
            gesture_active: false,
            clear_pending: false,
            tool: Tool::default(),
            color: DEFAULT_COLOR,
            view_mode: ViewMode::default(),
        }
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed elements in z-order (last is topmost).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn find_element_by_id(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn selection(&self) -> &HashSet<ElementId> {
        &self.selection
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selection.contains(&id)
    }

    pub fn in_progress(&self) -> Option<&Element> {
        self.in_progress.as_ref()
    }

    /// The marquee with non-negative width and height, if one is being dragged.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect.map(|rect| rect.normalized())
    }

    pub fn drag_anchor(&self) -> Option<Pos2> {
        self.drag_anchor
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_clear_pending(&self) -> bool {
        self.clear_pending
    }

    /// Switch tools, dropping whatever gesture the old tool had in flight.
    /// The selection survives so it can be picked up again later.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        self.tool = tool;
        self.in_progress = None;
        self.selection_rect = None;
        self.drag_anchor = None;
        self.gesture_active = false;
    }

    /// Color used for elements created from now on.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Append an already-built element on top of the stack.
    pub fn add_element(&mut self, element: Element) {
        debug!("Committed {} {}", element.element_type(), element.id());
        self.elements.push(element);
    }

    /// Remove the most recently appended element, regardless of selection.
    pub fn undo(&mut self) -> Option<Element> {
        let removed = self.elements.pop()?;
        debug!("Undo removed {} {}", removed.element_type(), removed.id());
        self.prune_selection();
        Some(removed)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn request_clear(&mut self) {
        self.clear_pending = true;
    }

    pub fn cancel_clear(&mut self) {
        self.clear_pending = false;
    }

    /// Empty the board: elements, selection and all gesture state.
    pub fn clear_all(&mut self) {
        self.elements.clear();
        self.selection.clear();
        self.in_progress = None;
        self.selection_rect = None;
        self.drag_anchor = None;
        self.gesture_active = false;
        self.clear_pending = false;
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.on_pointer_down(pos),
            PointerEvent::Move(pos) => {
                if self.gesture_active {
                    self.on_pointer_move(pos);
                }
            }
            PointerEvent::Up(_) => {
                if self.gesture_active {
                    self.on_pointer_up();
                }
            }
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2) {
        self.gesture_active = true;

        match self.tool {
            Tool::Marker => {
                self.add_element(factory::create_marker(pos, self.color));
            }
            Tool::Line => {
                self.in_progress = Some(factory::create_line(pos, pos, self.color));
            }
            Tool::Zone => {
                self.in_progress = Some(factory::create_zone(pos, pos, self.color));
            }
            Tool::Freehand => {
                self.in_progress = Some(factory::create_freehand(vec![pos], self.color));
            }
            Tool::Erase => self.erase_at(pos),
            Tool::Interact => {
                let hit = element_at_position(&self.elements, pos).map(Element::id);
                match hit {
                    Some(id) => {
                        // Grabbing part of an existing multi-selection drags all of it.
                        if !self.selection.contains(&id) {
                            self.selection.clear();
                            self.selection.insert(id);
                            debug!("Selected {id}");
                        }
                        self.drag_anchor = Some(pos);
                    }
                    None => {
                        self.selection.clear();
                        self.selection_rect = Some(SelectionRect {
                            anchor: pos,
                            current: pos,
                        });
                    }
                }
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        match self.tool {
            Tool::Line | Tool::Zone | Tool::Freehand => {
                if let Some(element) = &mut self.in_progress {
                    element.extend_to(pos);
                }
            }
            Tool::Erase => self.erase_at(pos),
            Tool::Interact => {
                if let Some(rect) = &mut self.selection_rect {
                    rect.current = pos;
                } else if let Some(anchor) = self.drag_anchor {
                    if self.selection.is_empty() {
                        return;
                    }
                    let delta = pos - anchor;
                    for element in &mut self.elements {
                        if self.selection.contains(&element.id()) {
                            element.translate(delta);
                        }
                    }
                    self.drag_anchor = Some(pos);
                }
            }
            Tool::Marker => {}
        }
    }

    fn on_pointer_up(&mut self) {
        self.gesture_active = false;

        match self.tool {
            Tool::Line | Tool::Zone | Tool::Freehand => {
                if let Some(element) = self.in_progress.take() {
                    self.add_element(element);
                }
            }
            Tool::Interact => {
                if let Some(rect) = self.selection_rect.take() {
                    self.selection = elements_in_rect(&self.elements, rect.normalized());
                    debug!("Marquee selected {} element(s)", self.selection.len());
                }
                self.drag_anchor = None;
            }
            Tool::Marker | Tool::Erase => {}
        }
    }

    fn erase_at(&mut self, pos: Pos2) {
        let Some(id) = element_at_position(&self.elements, pos).map(Element::id) else {
            return;
        };
        self.elements.retain(|element| element.id() != id);
        debug!("Erased {id}");
        self.prune_selection();
    }

    /// Drop selection entries whose element is gone.
    fn prune_selection(&mut self) {
        let elements = &self.elements;
        self.selection
            .retain(|id| elements.iter().any(|element| element.id() == *id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{BLUE, RED};
    use egui::Vec2;

    fn board_with_tool(tool: Tool) -> BoardState {
        let mut board = BoardState::new();
        board.set_tool(tool);
        board
    }

    #[test]
    fn moves_outside_a_gesture_are_ignored() {
        let mut board = board_with_tool(Tool::Erase);
        board.add_element(factory::create_marker(Pos2::new(10.0, 10.0), RED));

        board.handle_pointer(PointerEvent::Move(Pos2::new(10.0, 10.0)));
        assert_eq!(board.elements().len(), 1);
    }

    #[test]
    fn marker_tool_has_no_in_progress_element() {
        let mut board = board_with_tool(Tool::Marker);
        board.handle_pointer(PointerEvent::Down(Pos2::new(5.0, 5.0)));
        assert!(board.in_progress().is_none());
        assert_eq!(board.elements().len(), 1);

        board.handle_pointer(PointerEvent::Up(Pos2::new(5.0, 5.0)));
        assert_eq!(board.elements().len(), 1);
    }

    #[test]
    fn zone_is_held_until_pointer_up() {
        let mut board = board_with_tool(Tool::Zone);
        board.handle_pointer(PointerEvent::Down(Pos2::new(0.0, 0.0)));
        board.handle_pointer(PointerEvent::Move(Pos2::new(0.0, 20.0)));
        assert!(board.elements().is_empty());
        assert!(board.in_progress().is_some());

        board.handle_pointer(PointerEvent::Up(Pos2::new(0.0, 20.0)));
        assert!(board.in_progress().is_none());
        assert_eq!(board.elements().len(), 1);
    }

    #[test]
    fn switching_tool_discards_in_progress_but_keeps_selection() {
        let mut board = board_with_tool(Tool::Interact);
        board.add_element(factory::create_marker(Pos2::new(10.0, 10.0), BLUE));
        board.handle_pointer(PointerEvent::Down(Pos2::new(10.0, 10.0)));
        board.handle_pointer(PointerEvent::Up(Pos2::new(10.0, 10.0)));
        assert_eq!(board.selection().len(), 1);

        board.set_tool(Tool::Line);
        board.handle_pointer(PointerEvent::Down(Pos2::new(50.0, 50.0)));
        board.set_tool(Tool::Zone);

        assert!(board.in_progress().is_none());
        assert_eq!(board.selection().len(), 1);
    }

    #[test]
    fn drag_is_incremental() {
        let mut board = board_with_tool(Tool::Interact);
        board.add_element(factory::create_marker(Pos2::new(10.0, 10.0), RED));

        board.handle_pointer(PointerEvent::Down(Pos2::new(10.0, 10.0)));
        board.handle_pointer(PointerEvent::Move(Pos2::new(15.0, 10.0)));
        board.handle_pointer(PointerEvent::Move(Pos2::new(15.0, 18.0)));
        assert_eq!(board.drag_anchor(), Some(Pos2::new(15.0, 18.0)));
        board.handle_pointer(PointerEvent::Up(Pos2::new(15.0, 18.0)));

        match &board.elements()[0] {
            Element::Marker { center, .. } => {
                assert_eq!(*center - Pos2::new(10.0, 10.0), Vec2::new(5.0, 8.0));
            }
            other => panic!("expected marker, got {}", other.element_type()),
        }
        assert!(board.drag_anchor().is_none());
    }

    #[test]
    fn marquee_is_normalized_while_dragging() {
        let mut board = board_with_tool(Tool::Interact);
        board.handle_pointer(PointerEvent::Down(Pos2::new(100.0, 100.0)));
        board.handle_pointer(PointerEvent::Move(Pos2::new(40.0, 60.0)));

        let rect = board.selection_rect().unwrap();
        assert_eq!(rect.min, Pos2::new(40.0, 60.0));
        assert_eq!(rect.max, Pos2::new(100.0, 100.0));

        board.handle_pointer(PointerEvent::Up(Pos2::new(40.0, 60.0)));
        assert!(board.selection_rect().is_none());
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut board = board_with_tool(Tool::Line);
        board.add_element(factory::create_marker(Pos2::new(1.0, 1.0), RED));
        board.handle_pointer(PointerEvent::Down(Pos2::new(5.0, 5.0)));
        board.request_clear();

        board.clear_all();

        assert!(board.elements().is_empty());
        assert!(board.in_progress().is_none());
        assert!(board.selection().is_empty());
        assert!(!board.is_clear_pending());
    }
}
