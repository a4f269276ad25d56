use super::options::MEASURE_BAND_ID;
use super::value_objects::{ChartPoint, Delta, PlotBand};

pub const MEASURE_BAND_COLOR: &str = "#b4d3b2";
/// Pointer travel below this (px) is a click, not a range selection
pub const CLICK_SLOP_PX: f64 = 3.0;

/// Band over the points inside `[x_min, x_max]` labelled with the change
/// from the first to the last of them. Needs at least two points.
pub fn measure_selection(points: &[ChartPoint], x_min: f64, x_max: f64) -> Option<PlotBand> {
    let (lo, hi) = if x_min <= x_max { (x_min, x_max) } else { (x_max, x_min) };
    let selected: Vec<&ChartPoint> = points.iter().filter(|p| p.x >= lo && p.x <= hi).collect();
    let (first, last) = match selected.as_slice() {
        [first, .., last] => (*first, *last),
        _ => return None,
    };
    let delta = Delta::between(first.y, last.y);
    Some(PlotBand {
        id: MEASURE_BAND_ID.to_string(),
        color: MEASURE_BAND_COLOR.to_string(),
        from: first.x,
        to: last.x,
        label: vec![
            format!("Δ: ${delta}"),
            format!("y1: ${}", first.y),
            format!("y2: ${}", last.y),
        ],
    })
}

/// In-progress range selection, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSelection {
    pub origin_x: f64,
    pub current_x: f64,
}

impl RangeSelection {
    pub fn new(origin_x: f64) -> Self {
        Self { origin_x, current_x: origin_x }
    }

    pub fn is_click(&self) -> bool {
        (self.current_x - self.origin_x).abs() < CLICK_SLOP_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_spans_selected_points() {
        let points = [
            ChartPoint::new(1.0, 10.0),
            ChartPoint::new(2.0, 11.0),
            ChartPoint::new(3.0, 12.5),
            ChartPoint::new(4.0, 9.0),
        ];
        let band = measure_selection(&points, 3.5, 1.5).unwrap();
        assert_eq!((band.from, band.to), (2.0, 3.0));
        assert_eq!(band.label, ["Δ: $1.50", "y1: $11", "y2: $12.5"]);
        assert_eq!(band.id, MEASURE_BAND_ID);
    }

    #[test]
    fn fewer_than_two_points_measures_nothing() {
        let points = [ChartPoint::new(1.0, 10.0), ChartPoint::new(2.0, 11.0)];
        assert!(measure_selection(&points, 0.5, 1.5).is_none());
        assert!(measure_selection(&points, 5.0, 6.0).is_none());
    }

    #[test]
    fn small_moves_are_clicks() {
        let mut selection = RangeSelection::new(100.0);
        selection.current_x = 102.0;
        assert!(selection.is_click());
        selection.current_x = 90.0;
        assert!(!selection.is_click());
    }
}
