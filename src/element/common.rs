use egui::Color32;

// Element sizing
pub const MARKER_RADIUS: f32 = 8.0;
pub const MIN_ZONE_RADIUS: f32 = 10.0;
pub const LINE_WIDTH: f32 = 3.0;
pub const FREEHAND_WIDTH: f32 = 3.0;
pub const ZONE_OUTLINE_WIDTH: f32 = 2.0;
pub const ARROW_HEAD_LENGTH: f32 = 14.0;
pub const ARROW_HEAD_HALF_WIDTH: f32 = 7.0;

// Hit tolerances
pub const MARKER_HIT_SLACK: f32 = 5.0;
pub const LINE_HIT_TOLERANCE: f32 = 10.0;
pub const FREEHAND_HIT_TOLERANCE: f32 = 10.0;

pub const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const BLUE: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub const YELLOW: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);
pub const BLACK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Colors offered in the toolbar, in display order.
pub const PALETTE: [(&str, Color32); 5] = [
    ("Red", RED),
    ("Blue", BLUE),
    ("Green", GREEN),
    ("Yellow", YELLOW),
    ("Black", BLACK),
];

pub const DEFAULT_COLOR: Color32 = RED;

/// Radius a zone is drawn and hit-tested with.
///
/// The drag distance is floored so that a click without a drag still
/// leaves a visible, grabbable zone.
pub fn zone_radius(start: egui::Pos2, end: egui::Pos2) -> f32 {
    crate::geometry::distance(start, end).max(MIN_ZONE_RADIUS)
}
