use egui::{Pos2, Vec2};
use formation_board::renderer::{FieldLayout, FIELD_PADDING};
use formation_board::{render, BoardState, Command, ViewMode};

const EPSILON: f32 = 1e-3;

fn assert_centered(canvas: Vec2, mode: ViewMode) {
    let layout = FieldLayout::compute(canvas, mode).expect("canvas is large enough");
    let field = layout.field_rect();

    let left = field.min.x;
    let right = canvas.x - field.max.x;
    let top = field.min.y;
    let bottom = canvas.y - field.max.y;

    assert!(left >= FIELD_PADDING - EPSILON, "left padding {left}");
    assert!(top >= FIELD_PADDING - EPSILON, "top padding {top}");
    assert!((left - right).abs() < EPSILON, "left {left} vs right {right}");
    assert!((top - bottom).abs() < EPSILON, "top {top} vs bottom {bottom}");

    let yards = mode.yards();
    let aspect = field.width() / field.height();
    assert!((aspect - yards.x / yards.y).abs() < EPSILON, "aspect {aspect}");
}

#[test]
fn test_full_field_on_wide_canvas() {
    let canvas = Vec2::new(1000.0, 600.0);
    assert_centered(canvas, ViewMode::FullField);

    let layout = FieldLayout::compute(canvas, ViewMode::FullField).expect("layout");
    let field = layout.field_rect();
    // Width-bound: 940 / 110 px per yard.
    assert!((field.min.x - 30.0).abs() < EPSILON);
    assert!((field.width() - 940.0).abs() < EPSILON);
}

#[test]
fn test_layouts_stay_centered_across_sizes() {
    let sizes = [
        Vec2::new(1000.0, 600.0),
        Vec2::new(400.0, 900.0),
        Vec2::new(61.0, 61.0),
        Vec2::new(1920.0, 1080.0),
    ];
    for canvas in sizes {
        for mode in ViewMode::ALL {
            assert_centered(canvas, mode);
        }
    }
}

#[test]
fn test_half_field_endline_is_at_bottom() {
    let layout =
        FieldLayout::compute(Vec2::new(800.0, 800.0), ViewMode::HalfField).expect("layout");
    let field = layout.field_rect();

    let endline = layout.to_screen(Pos2::new(0.0, 0.0));
    let far = layout.to_screen(Pos2::new(0.0, ViewMode::HalfField.yards().y));

    assert!((endline.y - field.max.y).abs() < EPSILON);
    assert!((far.y - field.min.y).abs() < EPSILON);
}

#[test]
fn test_degenerate_canvas_renders_background_only() {
    let board = BoardState::new();

    for canvas in [Vec2::new(60.0, 400.0), Vec2::new(400.0, 10.0), Vec2::ZERO] {
        let frame = render(&board, canvas);
        assert!(frame.field.is_none());
        assert_eq!(frame.shapes.len(), 1);
    }
}

#[test]
fn test_switching_view_mode_changes_field() {
    let mut board = BoardState::new();
    let canvas = Vec2::new(1000.0, 600.0);

    let full = render(&board, canvas).field.expect("full field");
    Command::SetViewMode(ViewMode::HalfField).execute(&mut board);
    let half = render(&board, canvas).field.expect("half field");

    assert_ne!(full.field_rect(), half.field_rect());
    assert_eq!(half.mode, ViewMode::HalfField);
}
