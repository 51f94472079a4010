use approx::assert_relative_eq;
use linechart_rs::core::{ChartFrame, PathCommand, Point, build_path, point_for_index, point_markers};

fn frame() -> ChartFrame {
    ChartFrame::from_outer(320.0, 176.0, 0.5).expect("valid frame")
}

#[test]
fn out_of_range_index_yields_origin() {
    let data = [1.0, 2.0, 3.0];
    assert_eq!(point_for_index(3, &data, 1.0, frame()), Point::ZERO);
    assert_eq!(point_for_index(100, &data, 1.0, frame()), Point::ZERO);
}

#[test]
fn single_sample_is_pinned_to_margin() {
    let data = [5.0];
    let point = point_for_index(0, &data, 2.0, frame());
    assert_eq!(point.x, 0.5);
    assert_eq!(point.y, 175.0 + 0.5 - 10.0);
}

#[test]
fn samples_spread_evenly_across_axis_width() {
    let data = [0.0, 10.0];
    let first = point_for_index(0, &data, 1.0, frame());
    let last = point_for_index(1, &data, 1.0, frame());
    assert_eq!(first, Point::new(0.5, 175.5));
    assert_eq!(last, Point::new(319.5, 165.5));
}

#[test]
fn larger_values_move_upward() {
    let data = [1.0, 8.0];
    let low = point_for_index(0, &data, 10.0, frame());
    let high = point_for_index(1, &data, 10.0, frame());
    assert!(high.y < low.y);
}

#[test]
fn empty_series_builds_empty_geometry() {
    assert!(build_path(&[], 1.0, frame(), false, 0.2, false).is_empty());
    assert!(build_path(&[], 1.0, frame(), true, 0.2, true).is_empty());
}

#[test]
fn straight_path_emits_one_command_per_sample() {
    let data = [1.0, 2.0, 0.5, 3.0];
    let path = build_path(&data, 1.0, frame(), false, 0.2, false);

    assert_eq!(path.commands.len(), data.len());
    assert!(matches!(path.commands[0], PathCommand::MoveTo(_)));
    assert!(
        path.commands[1..]
            .iter()
            .all(|command| matches!(command, PathCommand::LineTo(_)))
    );
}

#[test]
fn smoothed_path_emits_one_curve_per_segment() {
    let data = [1.0, 2.0, 0.5, 3.0];
    let path = build_path(&data, 1.0, frame(), true, 0.2, false);

    assert_eq!(path.commands.len(), data.len());
    assert!(matches!(path.commands[0], PathCommand::MoveTo(_)));
    assert!(
        path.commands[1..]
            .iter()
            .all(|command| matches!(command, PathCommand::CurveTo { .. }))
    );
}

#[test]
fn two_sample_smoothing_degenerates_to_chord_aligned_controls() {
    let data = [0.0, 10.0];
    let path = build_path(&data, 1.0, frame(), true, 0.2, false);
    assert_eq!(path.commands.len(), 2);

    let start = path.commands[0].end_point();
    let PathCommand::CurveTo { to, ctrl1, ctrl2 } = path.commands[1] else {
        panic!("expected a cubic segment");
    };

    // Both control points must sit on the straight chord: no curvature
    // beyond the tension-scaled tangent for a two-sample series.
    let chord = Point::new(to.x - start.x, to.y - start.y);
    for ctrl in [ctrl1, ctrl2] {
        let offset = Point::new(ctrl.x - start.x, ctrl.y - start.y);
        let cross = chord.x * offset.y - chord.y * offset.x;
        assert_relative_eq!(cross, 0.0, epsilon = 1e-9);
    }

    assert_relative_eq!(ctrl1.x, start.x + chord.x / 2.0 * 0.2, epsilon = 1e-9);
    assert_relative_eq!(ctrl2.x, to.x - chord.x / 2.0 * 0.2, epsilon = 1e-9);
}

#[test]
fn closed_path_returns_to_its_first_point() {
    let data = [2.0, -1.0, 4.0, 0.5];

    for smoothed in [false, true] {
        let path = build_path(&data, 3.0, frame(), smoothed, 0.2, true);
        assert!(path.closed);
        assert_eq!(
            path.first_point().expect("non-empty path"),
            path.last_point().expect("non-empty path")
        );
    }
}

#[test]
fn closed_path_touches_the_baseline() {
    let data = [2.0, 3.0];
    let path = build_path(&data, 5.0, frame(), false, 0.2, true);

    let baseline_y = 175.0 + 0.5;
    let touches = path
        .commands
        .iter()
        .filter(|command| command.end_point().y == baseline_y)
        .count();
    // Last and first sample projected at scale zero.
    assert_eq!(touches, 2);
}

#[test]
fn entry_path_lies_flat_on_the_baseline() {
    let data = [2.0, -1.0, 4.0];
    let path = build_path(&data, 0.0, frame(), false, 0.2, false);

    let baseline_y = 175.0 + 0.5;
    assert!(
        path.commands
            .iter()
            .all(|command| command.end_point().y == baseline_y)
    );
}

#[test]
fn point_markers_carry_the_layer_offset() {
    let data = [1.0, 2.0];
    let scale = 10.0;
    let min_bound = -3.0;

    let markers = point_markers(&data, scale, frame(), min_bound);
    assert_eq!(markers.len(), 2);
    for (index, marker) in markers.iter().enumerate() {
        let base = point_for_index(index, &data, scale, frame());
        assert_eq!(marker.x, base.x);
        assert_eq!(marker.y, base.y + min_bound * scale);
    }
}
