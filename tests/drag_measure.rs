use quickcheck_macros::quickcheck;
use quote_chart_wasm::domain::chart::{
    ChartHandle, ChartPoint, Delta, DragEnd, DragState, PointerInput, SNAP_TOLERANCE, find_end, find_start,
};

const DAY: f64 = 86_400_000.0;
const JAN_1: f64 = 1_672_531_200_000.0;

fn series() -> Vec<ChartPoint> {
    [100.0, 101.5, 99.0, 105.456, 104.0]
        .iter()
        .enumerate()
        .map(|(i, y)| ChartPoint::new(JAN_1 + i as f64 * DAY, *y))
        .collect()
}

fn handle() -> ChartHandle {
    let mut handle = ChartHandle::new(800, 400);
    handle.set_points(series());
    handle
}

fn press_on(state: &mut DragState, handle: &ChartHandle, index: usize) -> bool {
    let (x, y) = handle.pixel_of(&handle.series_data()[index]);
    state.press(handle, PointerInput::primary(x, y))
}

#[test]
fn start_snaps_within_relative_tolerance() {
    let points = series();
    let target = points[2];
    let near = target.x * (1.0 + SNAP_TOLERANCE / 2.0);
    assert_eq!(find_start(&points, near), Some(target));

    let far = target.x * (1.0 + SNAP_TOLERANCE * 2.0);
    assert_eq!(find_start(&points, far), None);
}

#[quickcheck]
fn snapped_start_is_always_within_tolerance(offset: i32) -> bool {
    let points = series();
    let x_value = JAN_1 + offset as f64 * 1000.0;
    match find_start(&points, x_value) {
        Some(point) => ((x_value - point.x) / point.x).abs() < SNAP_TOLERANCE,
        None => true,
    }
}

#[test]
fn delta_is_end_minus_start_in_cents() {
    let mut handle = handle();
    let mut state = DragState::default();
    assert!(press_on(&mut state, &handle, 0));

    let end_px = handle.to_pixel_x(series()[3].x);
    let delta = state.track(&mut handle, end_px);

    assert_eq!(delta, Some(Delta::between(100.0, 105.456)));
    assert_eq!(delta.map(|d| d.to_string()).as_deref(), Some("5.46"));
    assert_eq!(state.end.and_then(|end| end.point()), Some(series()[3]));
    assert!(handle.highlight().is_some());
}

#[test]
fn backward_drag_snaps_to_nearer_side() {
    let points = series();
    let start_x = points[4].x;
    let just_below_mid = points[1].x + DAY * 0.4;
    assert_eq!(find_end(&points, just_below_mid, start_x), DragEnd::Snapped(points[1]));
    let past_mid = points[1].x + DAY * 0.6;
    assert_eq!(find_end(&points, past_mid, start_x), DragEnd::Snapped(points[2]));
}

#[test]
fn dragging_off_the_series_leaves_end_unsnapped() {
    let mut handle = handle();
    let mut state = DragState::default();
    assert!(press_on(&mut state, &handle, 1));

    let beyond = handle.plot_area().right() + 20.0;
    assert_eq!(state.track(&mut handle, beyond), None);
    assert!(matches!(state.end, Some(DragEnd::Unsnapped { .. })));
    assert!(state.delta.is_none());
}

#[test]
fn press_away_from_markers_stays_idle() {
    let handle = handle();
    let mut state = DragState::default();
    let plot = *handle.plot_area();
    assert!(!state.press(&handle, PointerInput::primary(plot.left + plot.width / 2.0 + 3.0, plot.top + 1.0)));
    assert!(state.is_idle());
}

#[quickcheck]
fn release_always_resets(start: u8, pixel_x: i16) -> bool {
    let mut handle = handle();
    let mut state = DragState::default();
    let index = start as usize % series().len();
    press_on(&mut state, &handle, index);
    state.track(&mut handle, pixel_x as f64);
    state.release(&mut handle);
    state == DragState::default() && handle.highlight().is_none()
}
