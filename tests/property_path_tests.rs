use linechart_rs::core::{ChartFrame, build_path, point_for_index};
use proptest::prelude::*;

fn frame() -> ChartFrame {
    ChartFrame::from_outer(320.0, 176.0, 0.5).expect("valid frame")
}

proptest! {
    #[test]
    fn closed_paths_always_return_to_their_start(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 1..50),
        scale in 0.0f64..100.0,
        smoothed in any::<bool>()
    ) {
        let path = build_path(&data, scale, frame(), smoothed, 0.2, true);
        prop_assert!(!path.is_empty());
        prop_assert_eq!(path.first_point(), path.last_point());
    }

    #[test]
    fn straight_paths_emit_one_command_per_sample(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 1..50)
    ) {
        let path = build_path(&data, 1.0, frame(), false, 0.2, false);
        prop_assert_eq!(path.commands.len(), data.len());
    }

    #[test]
    fn path_points_stay_finite(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 1..50),
        scale in 0.0f64..100.0,
        tension in 0.0f64..1.0,
        smoothed in any::<bool>(),
        closed in any::<bool>()
    ) {
        let path = build_path(&data, scale, frame(), smoothed, tension, closed);
        for command in &path.commands {
            let point = command.end_point();
            prop_assert!(point.x.is_finite());
            prop_assert!(point.y.is_finite());
        }
    }

    #[test]
    fn sample_positions_increase_monotonically_in_x(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 2..50)
    ) {
        for index in 1..data.len() {
            let previous = point_for_index(index - 1, &data, 1.0, frame());
            let current = point_for_index(index, &data, 1.0, frame());
            prop_assert!(current.x > previous.x);
        }
    }
}
