use linechart_rs::core::{AxisRange, ChartFrame, GridLineKind, GridSpec, Point, grid_lines};

fn frame() -> ChartFrame {
    ChartFrame::from_outer(101.0, 51.0, 0.5).expect("valid frame")
}

fn grid() -> GridSpec {
    GridSpec::new(3, 4).expect("valid grid")
}

#[test]
fn grid_contains_axis_inner_lines_and_ticks() {
    let range = AxisRange { min: 0.0, max: 10.0 };
    let lines = grid_lines(9, range, grid(), frame());

    // One axis segment, one inner vertical + one tick per horizontal step,
    // one horizontal line per vertical step inclusive.
    assert_eq!(lines.len(), 1 + 2 * 4 + (3 + 1));
}

#[test]
fn axis_segment_overshoots_the_baseline() {
    let range = AxisRange { min: 0.0, max: 10.0 };
    let lines = grid_lines(9, range, grid(), frame());

    let axis = lines[0];
    assert_eq!(axis.kind, GridLineKind::Axis);
    assert_eq!(axis.from, Point::new(0.5, 0.5));
    assert_eq!(axis.to, Point::new(0.5, 50.0 + 0.5 + 3.0));
}

#[test]
fn baseline_ticks_pair_with_inner_vertical_lines() {
    let range = AxisRange { min: 0.0, max: 10.0 };
    let lines = grid_lines(9, range, grid(), frame());

    // Vertical pairs directly follow the axis segment: inner line, then its
    // half-pixel-shifted baseline tick.
    for pair in lines[1..1 + 8].chunks(2) {
        let inner = pair[0];
        let tick = pair[1];
        assert_eq!(inner.kind, GridLineKind::Inner);
        assert_eq!(tick.kind, GridLineKind::Axis);
        assert_eq!(tick.from.x, inner.from.x - 0.5);
        assert_eq!(tick.from.y, 50.5);
        assert_eq!(tick.to.y, 53.5);
    }
}

#[test]
fn zero_value_line_is_promoted_to_axis_weight() {
    // Range [-3, 1.5] over 3 steps puts zero on the second line from the top.
    let range = AxisRange { min: -3.0, max: 1.5 };
    let spec = GridSpec::new(3, 4).expect("valid grid");
    let lines = grid_lines(9, range, spec, frame());

    let horizontal: Vec<_> = lines[1 + 8..].to_vec();
    assert_eq!(horizontal.len(), 4);
    assert_eq!(horizontal[0].kind, GridLineKind::Inner);
    assert_eq!(horizontal[1].kind, GridLineKind::Axis);
    assert_eq!(horizontal[2].kind, GridLineKind::Inner);
    assert_eq!(horizontal[3].kind, GridLineKind::Inner);
}

#[test]
fn horizontal_lines_span_the_axis_width() {
    let range = AxisRange { min: 0.0, max: 10.0 };
    let lines = grid_lines(9, range, grid(), frame());

    for line in &lines[1 + 8..] {
        assert_eq!(line.from.x, 0.5);
        assert_eq!(line.to.x, 100.0 + 0.5);
        assert_eq!(line.from.y, line.to.y);
    }
}
