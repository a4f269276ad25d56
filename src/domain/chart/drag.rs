//! Drag-to-measure: press on a marker, drag, read the price delta.
//!
//! `Idle --press on marker--> Dragging --release--> Idle`. While dragging,
//! every move snaps the end to a data point and redraws the highlight.

use super::handle::ChartHandle;
use super::value_objects::{ChartPoint, Delta, HighlightRect};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Relative x tolerance for matching the press to a data point: `|x - p.x| / p.x`
pub const SNAP_TOLERANCE: f64 = 0.00001;
pub const PRIMARY_BUTTON: i16 = 0;

/// Raw pointer input in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    pub button: i16,
    pub shift: bool,
}

impl PointerInput {
    pub fn primary(x: f64, y: f64) -> Self {
        Self { x, y, button: PRIMARY_BUTTON, shift: false }
    }

    pub fn with_shift(self) -> Self {
        Self { shift: true, ..self }
    }

    /// Whether the modifier named by the chart's pan key is held
    pub fn modifier_held(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case("shift") && self.shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEnd {
    Snapped(ChartPoint),
    /// No data pair brackets the pointer (outside the series, or fewer than two points)
    Unsnapped { x: f64 },
}

impl DragEnd {
    pub fn x(&self) -> f64 {
        match self {
            Self::Snapped(point) => point.x,
            Self::Unsnapped { x } => *x,
        }
    }

    pub fn point(&self) -> Option<ChartPoint> {
        match self {
            Self::Snapped(point) => Some(*point),
            Self::Unsnapped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub start: Option<ChartPoint>,
    pub end: Option<DragEnd>,
    pub delta: Option<Delta>,
}

/// Point whose x lies within [`SNAP_TOLERANCE`] (relative) of `x_value`.
/// A point at x = 0 never matches.
pub fn find_start(series: &[ChartPoint], x_value: f64) -> Option<ChartPoint> {
    series
        .iter()
        .find(|point| ((x_value - point.x) / point.x).abs() < SNAP_TOLERANCE)
        .copied()
}

/// Snap a drag position to the bracketing pair's point on the side the
/// pointer has crossed the midpoint towards.
pub fn find_end(series: &[ChartPoint], x_value: f64, start_x: f64) -> DragEnd {
    let forward = x_value >= start_x;
    for pair in series.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if x_value < current.x || x_value > next.x {
            continue;
        }
        let midpoint = (current.x + next.x) / 2.0;
        let end = if forward {
            if x_value >= midpoint { next } else { current }
        } else if x_value <= midpoint {
            current
        } else {
            next
        };
        return DragEnd::Snapped(end);
    }
    DragEnd::Unsnapped { x: x_value }
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        !self.is_dragging
    }

    /// Start a drag if the primary button went down on a marker. The press is
    /// taken at the marker's centre column. Returns whether dragging began.
    pub fn press(&mut self, handle: &ChartHandle, input: PointerInput) -> bool {
        if input.button != PRIMARY_BUTTON {
            return false;
        }
        let Some(marker) = handle.marker_at(input.x, input.y) else {
            return false;
        };
        let x_value = handle.to_axis_value(handle.to_pixel_x(marker.x));
        let Some(start) = find_start(handle.series_data(), x_value) else {
            log_debug!(LogComponent::Domain("Drag"), "no point within tolerance of {}", x_value);
            return false;
        };

        *self = DragState { is_dragging: true, start: Some(start), end: None, delta: None };
        log_debug!(LogComponent::Domain("Drag"), "drag start at x={} y={}", start.x, start.y);
        true
    }

    /// Update the end point, delta and highlight for a pointer move.
    /// Returns the new delta; no-op while idle.
    pub fn track(&mut self, handle: &mut ChartHandle, pixel_x: f64) -> Option<Delta> {
        let start = match (self.is_dragging, self.start) {
            (true, Some(start)) => start,
            _ => return None,
        };

        handle.destroy_highlight();
        let x_value = handle.to_axis_value(pixel_x);
        let end = find_end(handle.series_data(), x_value, start.x);

        self.end = Some(end);
        self.delta = end.point().map(|point| Delta::between(start.y, point.y));

        let rect = HighlightRect::spanning(
            handle.to_pixel_x(start.x),
            handle.to_pixel_x(end.x()),
            handle.plot_area(),
        );
        handle.draw_highlight(rect);
        self.delta
    }

    /// End the gesture: overlay gone, everything back to empty
    pub fn release(&mut self, handle: &mut ChartHandle) {
        handle.destroy_highlight();
        *self = DragState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: f64 = 86_400_000.0;
    const T0: f64 = 1_672_531_200_000.0;

    fn series(values: &[f64]) -> Vec<ChartPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| ChartPoint::new(T0 + i as f64 * DAY, y))
            .collect()
    }

    #[test]
    fn start_uses_relative_tolerance() {
        let data = series(&[1.0, 2.0, 3.0]);
        let target = data[1].x;
        assert_eq!(find_start(&data, target + target * 0.9e-5), Some(data[1]));
        assert_eq!(find_start(&data, target + target * 1.1e-5), None);
    }

    #[test]
    fn zero_x_never_matches() {
        let data = vec![ChartPoint::new(0.0, 1.0)];
        assert_eq!(find_start(&data, 0.0), None);
    }

    #[test]
    fn end_snaps_past_midpoint_forward() {
        let data = series(&[1.0, 2.0, 3.0]);
        let start = data[0].x;
        assert_eq!(find_end(&data, T0 + 0.4 * DAY, start), DragEnd::Snapped(data[0]));
        assert_eq!(find_end(&data, T0 + 0.5 * DAY, start), DragEnd::Snapped(data[1]));
        assert_eq!(find_end(&data, T0 + 1.7 * DAY, start), DragEnd::Snapped(data[2]));
    }

    #[test]
    fn end_snaps_past_midpoint_backward() {
        let data = series(&[1.0, 2.0, 3.0]);
        let start = data[2].x;
        assert_eq!(find_end(&data, T0 + 1.6 * DAY, start), DragEnd::Snapped(data[2]));
        assert_eq!(find_end(&data, T0 + 1.5 * DAY, start), DragEnd::Snapped(data[1]));
        assert_eq!(find_end(&data, T0 + 0.2 * DAY, start), DragEnd::Snapped(data[0]));
    }

    #[test]
    fn end_outside_series_is_unsnapped() {
        let data = series(&[1.0, 2.0]);
        let x = T0 + 5.0 * DAY;
        assert_eq!(find_end(&data, x, data[0].x), DragEnd::Unsnapped { x });
        assert_eq!(find_end(&data[..1], data[0].x, data[0].x), DragEnd::Unsnapped { x: data[0].x });
    }

    #[test]
    fn secondary_button_does_not_start() {
        let mut handle = ChartHandle::new(800, 400);
        handle.set_points(series(&[1.0, 2.0]));
        let (px, py) = handle.pixel_of(&handle.series_data()[0]);
        let mut drag = DragState::default();
        assert!(!drag.press(&handle, PointerInput { x: px, y: py, button: 2, shift: false }));
        assert!(drag.is_idle());
    }
}
