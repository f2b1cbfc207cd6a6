//! Point and rectangle hit testing over the element sequence.
//!
//! Tolerances match what the renderer draws: a zone is hit inside the same
//! floored radius it is painted with.

use std::collections::HashSet;

use egui::{Pos2, Rect};

use super::{distance, point_to_segment_distance};
use crate::element::{
    zone_radius, Element, ElementId, FREEHAND_HIT_TOLERANCE, LINE_HIT_TOLERANCE,
    MARKER_HIT_SLACK,
};

/// Whether `pos` strikes `element`.
pub fn is_hit(element: &Element, pos: Pos2) -> bool {
    match element {
        Element::Marker { center, radius, .. } => {
            distance(pos, *center) <= radius + MARKER_HIT_SLACK
        }
        Element::Zone { start, end, .. } => distance(pos, *start) <= zone_radius(*start, *end),
        Element::Line { start, end, .. } => {
            point_to_segment_distance(pos, *start, *end) < LINE_HIT_TOLERANCE
        }
        // Only sampled points count; gaps in a fast stroke are not covered.
        Element::Freehand { points, .. } => points
            .iter()
            .any(|point| distance(pos, *point) < FREEHAND_HIT_TOLERANCE),
    }
}

/// Topmost element under `pos`, scanning from the last inserted.
pub fn element_at_position(elements: &[Element], pos: Pos2) -> Option<&Element> {
    elements.iter().rev().find(|element| is_hit(element, pos))
}

/// Whether `element` falls inside `rect` (inclusive bounds).
///
/// Lines and zones only count when an endpoint is inside; a segment that
/// crosses the rectangle without an endpoint in it is not selected.
pub fn element_intersects_rect(element: &Element, rect: Rect) -> bool {
    match element {
        Element::Marker { center, .. } => rect.contains(*center),
        Element::Zone { start, end, .. } | Element::Line { start, end, .. } => {
            rect.contains(*start) || rect.contains(*end)
        }
        Element::Freehand { points, .. } => points.iter().any(|point| rect.contains(*point)),
    }
}

/// Ids of every element intersecting `rect`.
pub fn elements_in_rect(elements: &[Element], rect: Rect) -> HashSet<ElementId> {
    elements
        .iter()
        .filter(|element| element_intersects_rect(element, rect))
        .map(Element::id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, BLUE, RED};

    #[test]
    fn marker_hit_includes_slack() {
        let marker = factory::create_marker(Pos2::new(50.0, 50.0), RED);
        assert!(is_hit(&marker, Pos2::new(50.0, 50.0)));
        assert!(is_hit(&marker, Pos2::new(63.0, 50.0)));
        assert!(!is_hit(&marker, Pos2::new(63.5, 50.0)));
    }

    #[test]
    fn small_zone_uses_floored_radius() {
        let zone = factory::create_zone(Pos2::new(0.0, 0.0), Pos2::new(2.0, 0.0), BLUE);
        assert!(is_hit(&zone, Pos2::new(0.0, 9.5)));
        assert!(!is_hit(&zone, Pos2::new(0.0, 10.5)));
    }

    #[test]
    fn freehand_hits_only_near_samples() {
        let stroke = factory::create_freehand(
            vec![Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0)],
            RED,
        );
        assert!(is_hit(&stroke, Pos2::new(5.0, 0.0)));
        // Midway between two far-apart samples is a gap.
        assert!(!is_hit(&stroke, Pos2::new(50.0, 0.0)));
    }

    #[test]
    fn topmost_element_wins() {
        let bottom = factory::create_marker(Pos2::new(10.0, 10.0), RED);
        let top = factory::create_marker(Pos2::new(12.0, 10.0), BLUE);
        let top_id = top.id();
        let elements = vec![bottom, top];

        let hit = element_at_position(&elements, Pos2::new(11.0, 10.0));
        assert_eq!(hit.map(Element::id), Some(top_id));
        assert!(element_at_position(&elements, Pos2::new(200.0, 200.0)).is_none());
    }

    #[test]
    fn line_selected_by_either_endpoint() {
        let line = factory::create_line(Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0), RED);
        let around_end = Rect::from_min_max(Pos2::new(90.0, -5.0), Pos2::new(110.0, 5.0));
        let across_middle = Rect::from_min_max(Pos2::new(40.0, -5.0), Pos2::new(60.0, 5.0));

        assert!(element_intersects_rect(&line, around_end));
        assert!(!element_intersects_rect(&line, across_middle));
    }
}
