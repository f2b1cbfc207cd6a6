//! Full-frame rendering of the board.
//!
//! [`render`] is a pure function of the board state and the canvas size. It
//! produces every shape for one frame in canvas-local coordinates; the app
//! shell offsets them onto the screen and hands them to egui's painter.

use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};

mod field;

pub use field::{FieldLayout, Marking, ViewMode, CREASE_FILL, FIELD_LINE_COLOR, FIELD_PADDING};

use crate::element::{
    zone_radius, Element, ARROW_HEAD_HALF_WIDTH, ARROW_HEAD_LENGTH, FREEHAND_WIDTH, LINE_WIDTH,
    ZONE_OUTLINE_WIDTH,
};
use crate::state::BoardState;

pub const BACKGROUND: Color32 = Color32::WHITE;
pub const SELECTION_COLOR: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);
const SELECTION_HIGHLIGHT_GAP: f32 = 4.0;
const ZONE_FILL_ALPHA: f32 = 0.2;

/// Everything painted in one frame, back to front.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub shapes: Vec<Shape>,
    /// Field placement used for this frame; `None` when the canvas is too small.
    pub field: Option<FieldLayout>,
}

impl Frame {
    /// Shift every shape by `offset`, e.g. from canvas-local to screen space.
    pub fn into_shapes_at(self, offset: Vec2) -> Vec<Shape> {
        self.shapes
            .into_iter()
            .map(|mut shape| {
                shape.translate(offset);
                shape
            })
            .collect()
    }
}

/// Draw the whole board: background, field, elements, then transient overlays.
pub fn render(state: &BoardState, canvas_size: Vec2) -> Frame {
    let mut shapes = vec![Shape::rect_filled(
        Rect::from_min_size(Pos2::ZERO, canvas_size),
        0.0,
        BACKGROUND,
    )];

    let field = FieldLayout::compute(canvas_size, state.view_mode());
    if let Some(layout) = &field {
        layout.paint(&mut shapes);
    }

    for element in state.elements() {
        paint_element(element, &mut shapes);
        if state.is_selected(element.id()) {
            paint_selection_highlight(element, &mut shapes);
        }
    }

    if let Some(element) = state.in_progress() {
        paint_element(element, &mut shapes);
    }

    if let Some(rect) = state.selection_rect() {
        paint_selection_rect(rect, &mut shapes);
    }

    Frame { shapes, field }
}

/// Append the shapes for a single element.
pub fn paint_element(element: &Element, shapes: &mut Vec<Shape>) {
    match element {
        Element::Marker {
            center,
            radius,
            color,
            ..
        } => {
            shapes.push(Shape::circle_filled(*center, *radius, *color));
            shapes.push(Shape::circle_stroke(
                *center,
                *radius,
                Stroke::new(2.0, Color32::WHITE),
            ));
        }
        Element::Zone {
            start, end, color, ..
        } => {
            let radius = zone_radius(*start, *end);
            shapes.push(Shape::circle_filled(
                *start,
                radius,
                color.gamma_multiply(ZONE_FILL_ALPHA),
            ));
            shapes.push(Shape::circle_stroke(
                *start,
                radius,
                Stroke::new(ZONE_OUTLINE_WIDTH, *color),
            ));
        }
        Element::Line {
            start, end, color, ..
        } => {
            shapes.push(Shape::line_segment(
                [*start, *end],
                Stroke::new(LINE_WIDTH, *color),
            ));
            if let Some(head) = arrow_head(*start, *end) {
                shapes.push(Shape::convex_polygon(head.to_vec(), *color, Stroke::NONE));
            }
        }
        Element::Freehand { points, color, .. } => {
            if points.len() >= 2 {
                shapes.push(Shape::line(
                    points.clone(),
                    Stroke::new(FREEHAND_WIDTH, *color),
                ));
            }
        }
    }
}

/// Triangle for the head of an arrow pointing at `tip`, or `None` for a
/// zero-length line.
pub fn arrow_head(tail: Pos2, tip: Pos2) -> Option<[Pos2; 3]> {
    let direction = tip - tail;
    let length = direction.length();
    if length == 0.0 {
        return None;
    }

    let unit = direction / length;
    let normal = Vec2::new(-unit.y, unit.x);
    let base = tip - unit * ARROW_HEAD_LENGTH;
    Some([
        tip,
        base + normal * ARROW_HEAD_HALF_WIDTH,
        base - normal * ARROW_HEAD_HALF_WIDTH,
    ])
}

fn paint_selection_highlight(element: &Element, shapes: &mut Vec<Shape>) {
    let stroke = Stroke::new(2.0, SELECTION_COLOR);
    match element {
        Element::Marker { center, radius, .. } => {
            shapes.push(Shape::circle_stroke(
                *center,
                radius + SELECTION_HIGHLIGHT_GAP,
                stroke,
            ));
        }
        Element::Zone { start, end, .. } => {
            shapes.push(Shape::circle_stroke(
                *start,
                zone_radius(*start, *end) + SELECTION_HIGHLIGHT_GAP,
                stroke,
            ));
        }
        Element::Line { start, end, .. } => {
            for point in [start, end] {
                shapes.push(Shape::circle_stroke(*point, SELECTION_HIGHLIGHT_GAP, stroke));
            }
        }
        Element::Freehand { points, .. } => {
            if let Some(bounds) = bounding_rect(points) {
                shapes.extend(Shape::dashed_line(
                    &closed_outline(bounds.expand(SELECTION_HIGHLIGHT_GAP)),
                    stroke,
                    4.0,
                    3.0,
                ));
            }
        }
    }
}

fn paint_selection_rect(rect: Rect, shapes: &mut Vec<Shape>) {
    shapes.push(Shape::rect_filled(
        rect,
        0.0,
        SELECTION_COLOR.gamma_multiply(0.1),
    ));
    shapes.extend(Shape::dashed_line(
        &closed_outline(rect),
        Stroke::new(1.0, SELECTION_COLOR),
        6.0,
        4.0,
    ));
}

fn bounding_rect(points: &[Pos2]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_min_max(*first, *first), |rect, point| {
                rect.union(Rect::from_min_max(*point, *point))
            }),
    )
}

fn closed_outline(rect: Rect) -> [Pos2; 5] {
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ]
}
