//! Field geometry for the two view modes.
//!
//! Each mode is a fixed grid of yards. [`FieldLayout`] maps that grid onto
//! the canvas with a single pixels-per-yard scale, inscribed in the canvas
//! minus [`FIELD_PADDING`] and centered on whichever axis has slack.
//! Markings are described in yards ([`Marking`]) and only converted to
//! screen shapes at the end, which keeps the layout testable without a
//! painter.

use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};
use serde::{Deserialize, Serialize};

/// Margin kept free around the field on every side, in pixels.
pub const FIELD_PADDING: f32 = 30.0;

pub const FIELD_LINE_COLOR: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
pub const CREASE_FILL: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
const FIELD_LINE_WIDTH: f32 = 2.0;
const DASH_LENGTH: f32 = 8.0;
const DASH_GAP: f32 = 6.0;

// Shared distances, in yards.
const CENTER_CIRCLE_RADIUS: f32 = 5.0;
const CROSSHAIR_HALF: f32 = 1.0;
const CREASE_RADIUS: f32 = 3.0;
const GOAL_DEPTH: f32 = 1.0;
const GOAL_WIDTH: f32 = 2.0;
const GOAL_FROM_END: f32 = 15.0;
const RESTRAINING_FROM_END: f32 = 35.0;
const ALLEY_FROM_SIDELINE: f32 = 10.0;
const WING_LENGTH: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Whole field, drawn horizontally.
    #[default]
    FullField,
    /// One half plus overrun past the midline, endline at the bottom.
    HalfField,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::FullField, ViewMode::HalfField];

    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::FullField => "Full field",
            ViewMode::HalfField => "Half field",
        }
    }

    /// Logical field size in yards (width, height) as drawn on screen.
    pub fn yards(&self) -> Vec2 {
        match self {
            ViewMode::FullField => Vec2::new(110.0, 60.0),
            ViewMode::HalfField => Vec2::new(60.0, 65.0),
        }
    }
}

/// One field marking in yard coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marking {
    Boundary,
    Line { from: Pos2, to: Pos2 },
    DashedLine { from: Pos2, to: Pos2 },
    Circle { center: Pos2, radius: f32, filled: bool },
    /// Goal marker, given by two opposite corners.
    Goal { a: Pos2, b: Pos2 },
}

/// Placement of the field on a canvas of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    pub mode: ViewMode,
    /// Screen position of the field's top-left corner.
    pub origin: Pos2,
    /// Pixels per yard.
    pub scale: f32,
}

impl FieldLayout {
    /// Fit `mode`'s field into a canvas of `canvas_size`.
    ///
    /// Returns `None` when the padded drawing area is empty in either
    /// dimension; callers then paint the background only.
    pub fn compute(canvas_size: Vec2, mode: ViewMode) -> Option<Self> {
        let available = canvas_size - Vec2::splat(2.0 * FIELD_PADDING);
        if !(available.x > 0.0 && available.y > 0.0) {
            return None;
        }

        let yards = mode.yards();
        let scale = (available.x / yards.x).min(available.y / yards.y);
        let slack = available - yards * scale;
        let origin = Pos2::new(
            FIELD_PADDING + slack.x / 2.0,
            FIELD_PADDING + slack.y / 2.0,
        );

        Some(Self { mode, origin, scale })
    }

    /// Outer boundary of the field in screen space.
    pub fn field_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.mode.yards() * self.scale)
    }

    /// Map a yard coordinate to the screen.
    ///
    /// Full field: x along the length, y down from the top sideline.
    /// Half field: x across, y counted up from the endline at the bottom.
    pub fn to_screen(&self, yard: Pos2) -> Pos2 {
        match self.mode {
            ViewMode::FullField => self.origin + yard.to_vec2() * self.scale,
            ViewMode::HalfField => {
                let height = self.mode.yards().y;
                self.origin + Vec2::new(yard.x, height - yard.y) * self.scale
            }
        }
    }

    pub fn markings(&self) -> Vec<Marking> {
        match self.mode {
            ViewMode::FullField => full_field_markings(),
            ViewMode::HalfField => half_field_markings(),
        }
    }

    /// Append the field's shapes to `shapes`.
    pub fn paint(&self, shapes: &mut Vec<Shape>) {
        let stroke = Stroke::new(FIELD_LINE_WIDTH, FIELD_LINE_COLOR);

        for marking in self.markings() {
            match marking {
                Marking::Boundary => {
                    shapes.push(Shape::rect_stroke(self.field_rect(), 0.0, stroke));
                }
                Marking::Line { from, to } => {
                    shapes.push(Shape::line_segment(
                        [self.to_screen(from), self.to_screen(to)],
                        stroke,
                    ));
                }
                Marking::DashedLine { from, to } => {
                    shapes.extend(Shape::dashed_line(
                        &[self.to_screen(from), self.to_screen(to)],
                        stroke,
                        DASH_LENGTH,
                        DASH_GAP,
                    ));
                }
                Marking::Circle {
                    center,
                    radius,
                    filled,
                } => {
                    let center = self.to_screen(center);
                    let radius = radius * self.scale;
                    if filled {
                        shapes.push(Shape::circle_filled(center, radius, CREASE_FILL));
                    }
                    shapes.push(Shape::circle_stroke(center, radius, stroke));
                }
                Marking::Goal { a, b } => {
                    let rect = Rect::from_two_pos(self.to_screen(a), self.to_screen(b));
                    shapes.push(Shape::rect_stroke(rect, 0.0, stroke));
                }
            }
        }
    }
}

fn crosshair(center: Pos2) -> [Marking; 2] {
    [
        Marking::Line {
            from: Pos2::new(center.x - CROSSHAIR_HALF, center.y),
            to: Pos2::new(center.x + CROSSHAIR_HALF, center.y),
        },
        Marking::Line {
            from: Pos2::new(center.x, center.y - CROSSHAIR_HALF),
            to: Pos2::new(center.x, center.y + CROSSHAIR_HALF),
        },
    ]
}

fn full_field_markings() -> Vec<Marking> {
    let Vec2 {
        x: length,
        y: width,
    } = ViewMode::FullField.yards();
    let mid_x = length / 2.0;
    let mid_y = width / 2.0;
    let center = Pos2::new(mid_x, mid_y);

    let mut markings = vec![
        Marking::Boundary,
        Marking::Line {
            from: Pos2::new(mid_x, 0.0),
            to: Pos2::new(mid_x, width),
        },
        Marking::Circle {
            center,
            radius: CENTER_CIRCLE_RADIUS,
            filled: false,
        },
    ];
    markings.extend(crosshair(center));

    for restraining_x in [RESTRAINING_FROM_END, length - RESTRAINING_FROM_END] {
        markings.push(Marking::Line {
            from: Pos2::new(restraining_x, 0.0),
            to: Pos2::new(restraining_x, width),
        });
    }

    for goal_x in [GOAL_FROM_END, length - GOAL_FROM_END] {
        markings.push(Marking::Circle {
            center: Pos2::new(goal_x, mid_y),
            radius: CREASE_RADIUS,
            filled: true,
        });
        markings.push(Marking::Goal {
            a: Pos2::new(goal_x - GOAL_DEPTH / 2.0, mid_y - GOAL_WIDTH / 2.0),
            b: Pos2::new(goal_x + GOAL_DEPTH / 2.0, mid_y + GOAL_WIDTH / 2.0),
        });
    }

    for lane_y in [ALLEY_FROM_SIDELINE, width - ALLEY_FROM_SIDELINE] {
        markings.push(Marking::Line {
            from: Pos2::new(mid_x - WING_LENGTH / 2.0, lane_y),
            to: Pos2::new(mid_x + WING_LENGTH / 2.0, lane_y),
        });
        markings.push(Marking::DashedLine {
            from: Pos2::new(0.0, lane_y),
            to: Pos2::new(RESTRAINING_FROM_END, lane_y),
        });
        markings.push(Marking::DashedLine {
            from: Pos2::new(length - RESTRAINING_FROM_END, lane_y),
            to: Pos2::new(length, lane_y),
        });
    }

    markings
}

fn half_field_markings() -> Vec<Marking> {
    let Vec2 {
        x: width,
        y: height,
    } = ViewMode::HalfField.yards();
    let midline = 55.0;
    let mid_x = width / 2.0;
    let center = Pos2::new(mid_x, midline);
    let goal = Pos2::new(mid_x, GOAL_FROM_END);

    let mut markings = vec![
        Marking::Boundary,
        Marking::Line {
            from: Pos2::new(0.0, midline),
            to: Pos2::new(width, midline),
        },
        Marking::Line {
            from: Pos2::new(0.0, RESTRAINING_FROM_END),
            to: Pos2::new(width, RESTRAINING_FROM_END),
        },
        Marking::Circle {
            center: goal,
            radius: CREASE_RADIUS,
            filled: true,
        },
        Marking::Goal {
            a: Pos2::new(goal.x - GOAL_WIDTH / 2.0, goal.y - GOAL_DEPTH / 2.0),
            b: Pos2::new(goal.x + GOAL_WIDTH / 2.0, goal.y + GOAL_DEPTH / 2.0),
        },
        Marking::Circle {
            center,
            radius: CENTER_CIRCLE_RADIUS,
            filled: false,
        },
    ];
    markings.extend(crosshair(center));

    for lane_x in [ALLEY_FROM_SIDELINE, width - ALLEY_FROM_SIDELINE] {
        markings.push(Marking::DashedLine {
            from: Pos2::new(lane_x, 0.0),
            to: Pos2::new(lane_x, RESTRAINING_FROM_END),
        });
        markings.push(Marking::Line {
            from: Pos2::new(lane_x, midline - WING_LENGTH / 2.0),
            to: Pos2::new(lane_x, height),
        });
    }

    markings
}
