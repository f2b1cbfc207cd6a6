use egui::Pos2;

pub mod hit_testing;

/// Euclidean distance between two points.
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    (b - a).length()
}

/// Distance from `point` to the segment `start`–`end`.
///
/// The projection of `point` onto the line is clamped to the segment's
/// extent, so points beyond either end measure to that endpoint. A
/// zero-length segment degrades to point-to-point distance.
pub fn point_to_segment_distance(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_sq();
    if length_sq == 0.0 {
        return distance(point, start);
    }

    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    let projection = start + segment * t;
    distance(point, projection)
}
