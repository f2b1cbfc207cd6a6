use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod common;

pub use common::{
    zone_radius, ARROW_HEAD_HALF_WIDTH, ARROW_HEAD_LENGTH, BLACK, BLUE, DEFAULT_COLOR,
    FREEHAND_HIT_TOLERANCE, FREEHAND_WIDTH, GREEN, LINE_HIT_TOLERANCE, LINE_WIDTH,
    MARKER_HIT_SLACK, MARKER_RADIUS, MIN_ZONE_RADIUS, PALETTE, RED, YELLOW, ZONE_OUTLINE_WIDTH,
};

/// Stable identifier of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One drawing primitive on the board.
///
/// The kind is fixed at creation; only the geometry changes afterwards,
/// and only through [`Element::translate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Filled token for a player or position.
    Marker {
        id: ElementId,
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    /// Circular area centered on `start`; `end` sets the radius.
    Zone {
        id: ElementId,
        start: Pos2,
        end: Pos2,
        color: Color32,
    },
    /// Arrowed segment, head at `end`.
    Line {
        id: ElementId,
        start: Pos2,
        end: Pos2,
        color: Color32,
    },
    Freehand {
        id: ElementId,
        points: Vec<Pos2>,
        color: Color32,
    },
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Marker { id, .. }
            | Element::Zone { id, .. }
            | Element::Line { id, .. }
            | Element::Freehand { id, .. } => *id,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Element::Marker { color, .. }
            | Element::Zone { color, .. }
            | Element::Line { color, .. }
            | Element::Freehand { color, .. } => *color,
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            Element::Marker { .. } => "marker",
            Element::Zone { .. } => "zone",
            Element::Line { .. } => "line",
            Element::Freehand { .. } => "freehand",
        }
    }

    /// Move every point of the element by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Element::Marker { center, .. } => *center += delta,
            Element::Zone { start, end, .. } | Element::Line { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
            Element::Freehand { points, .. } => {
                for point in points.iter_mut() {
                    *point += delta;
                }
            }
        }
    }

    /// Follow the pointer while the element is being drawn.
    ///
    /// Lines and zones move their end point, freehand strokes grow by one
    /// sample. Markers are never in progress and ignore this.
    pub(crate) fn extend_to(&mut self, pos: Pos2) {
        match self {
            Element::Zone { end, .. } | Element::Line { end, .. } => *end = pos,
            Element::Freehand { points, .. } => points.push(pos),
            Element::Marker { .. } => {}
        }
    }
}

/// Factory functions for creating elements with fresh ids
pub mod factory {
    use super::*;

    pub fn create_marker(center: Pos2, color: Color32) -> Element {
        Element::Marker {
            id: ElementId::new(),
            center,
            radius: MARKER_RADIUS,
            color,
        }
    }

    pub fn create_zone(start: Pos2, end: Pos2, color: Color32) -> Element {
        Element::Zone {
            id: ElementId::new(),
            start,
            end,
            color,
        }
    }

    pub fn create_line(start: Pos2, end: Pos2, color: Color32) -> Element {
        Element::Line {
            id: ElementId::new(),
            start,
            end,
            color,
        }
    }

    pub fn create_freehand(points: Vec<Pos2>, color: Color32) -> Element {
        Element::Freehand {
            id: ElementId::new(),
            points,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_is_serde() {
        fn assert_serde<T: Serialize + for<'de> Deserialize<'de>>() {}
        assert_serde::<ElementId>();
    }

    #[test]
    fn factory_assigns_distinct_ids() {
        let a = factory::create_marker(Pos2::new(1.0, 1.0), RED);
        let b = factory::create_marker(Pos2::new(1.0, 1.0), RED);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn translate_moves_every_point() {
        let mut stroke = factory::create_freehand(
            vec![Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0), Pos2::new(10.0, 0.0)],
            BLUE,
        );
        stroke.translate(Vec2::new(2.0, -3.0));

        match stroke {
            Element::Freehand { points, .. } => {
                assert_eq!(
                    points,
                    vec![Pos2::new(2.0, -3.0), Pos2::new(7.0, 2.0), Pos2::new(12.0, -3.0)]
                );
            }
            other => panic!("expected freehand, got {}", other.element_type()),
        }
    }

    #[test]
    fn extend_to_updates_end_point_only() {
        let mut line = factory::create_line(Pos2::new(3.0, 4.0), Pos2::new(3.0, 4.0), BLACK);
        line.extend_to(Pos2::new(30.0, 40.0));

        match line {
            Element::Line { start, end, .. } => {
                assert_eq!(start, Pos2::new(3.0, 4.0));
                assert_eq!(end, Pos2::new(30.0, 40.0));
            }
            other => panic!("expected line, got {}", other.element_type()),
        }
    }

    #[test]
    fn zone_radius_is_floored() {
        assert_eq!(zone_radius(Pos2::ZERO, Pos2::new(0.0, 3.0)), MIN_ZONE_RADIUS);
        assert_eq!(zone_radius(Pos2::ZERO, Pos2::new(0.0, 20.0)), 20.0);
    }
}
