//! Property-based tests for move/resize change detection.
//!
//! A geometry event is reported as "moved" exactly when the position
//! differs from the last observed one, and as "resized" exactly when the
//! size differs. Repeated identical events report nothing.

use proptest::prelude::*;
use webframe::bridge::geometry::{visit_monitors, GeometryTracker};
use webframe::types::geometry::{Bounds, MonitorInfo, Position, Rect, Size};

fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (-4000i32..4000, -4000i32..4000, 1u32..8000, 1u32..8000)
        .prop_map(|(x, y, w, h)| Bounds::new(x, y, w, h))
}

fn arb_monitor() -> impl Strategy<Value = MonitorInfo> {
    (0i32..4000, 0i32..4000, 640i32..4000, 480i32..3000).prop_map(|(x, y, w, h)| MonitorInfo {
        monitor: Rect {
            x,
            y,
            width: w,
            height: h,
        },
        work: Rect {
            x,
            y: y + 30,
            width: w,
            height: h - 30,
        },
    })
}

proptest! {
    #[test]
    fn identical_bounds_report_nothing(bounds in arb_bounds()) {
        let mut tracker = GeometryTracker::new(bounds);
        prop_assert!(tracker.observe(bounds).is_empty());
        prop_assert!(tracker.observe(bounds).is_empty());
    }

    #[test]
    fn change_flags_follow_components(start in arb_bounds(), next in arb_bounds()) {
        let mut tracker = GeometryTracker::new(start);
        let change = tracker.observe(next);

        if start.position == next.position {
            prop_assert_eq!(change.moved, None);
        } else {
            prop_assert_eq!(change.moved, Some(next.position));
        }
        if start.size == next.size {
            prop_assert_eq!(change.resized, None);
        } else {
            prop_assert_eq!(change.resized, Some(next.size));
        }
        prop_assert_eq!(tracker.last(), next);
    }

    #[test]
    fn position_only_event_reports_move_only(
        start in arb_bounds(),
        dx in 1i32..500,
        dy in -500i32..500
    ) {
        let mut tracker = GeometryTracker::new(start);
        let moved_to = Position::new(start.position.x + dx, start.position.y + dy);
        let change = tracker.observe_position(moved_to);
        prop_assert_eq!(change.moved, Some(moved_to));
        prop_assert_eq!(change.resized, None);
        prop_assert_eq!(tracker.last().size, start.size);
    }

    #[test]
    fn size_only_event_reports_resize_only(start in arb_bounds(), dw in 1u32..500) {
        let mut tracker = GeometryTracker::new(start);
        let grown = Size::new(start.size.width + dw, start.size.height);
        let change = tracker.observe_size(grown);
        prop_assert_eq!(change.moved, None);
        prop_assert_eq!(change.resized, Some(grown));
    }

    #[test]
    fn monitor_visit_stops_when_callback_declines(
        monitors in prop::collection::vec(arb_monitor(), 0..6),
        stop_after in 1usize..8
    ) {
        let mut seen = Vec::new();
        let visited = visit_monitors(monitors.clone(), |m| {
            seen.push(*m);
            seen.len() < stop_after
        });
        let expected = monitors.len().min(stop_after);
        prop_assert_eq!(visited, expected);
        prop_assert_eq!(&seen[..], &monitors[..expected]);
    }
}
