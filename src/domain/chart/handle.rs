use super::options::ChartOptions;
use super::value_objects::{AxisScale, ChartPoint, HighlightRect, PlotArea, PlotBand};
use crate::domain::logging::LogComponent;
use crate::domain::quotes::SeriesPair;
use crate::time_utils::{parse_quote_date, single_point_padding};
use crate::{log_debug, log_warn};

/// Pointer distance (px) that still counts as hitting a marker
pub const MARKER_HIT_RADIUS: f64 = 6.0;
/// Headroom above and below the value range
const Y_PADDING_RATIO: f64 = 0.05;

/// Hovered point plus the raw cursor position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    pub point: ChartPoint,
    pub cursor_x: f64,
    pub cursor_y: f64,
}

/// Exclusively owned view of the rendered chart.
///
/// Everything the pointer logic needs from the chart goes through here:
/// pixel/value conversion, the plotted series, the single highlight overlay
/// and the plot bands. The renderer only reads it.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    width: u32,
    height: u32,
    plot: PlotArea,
    x_axis: AxisScale,
    y_axis: AxisScale,
    points: Vec<ChartPoint>,
    plot_bands: Vec<PlotBand>,
    highlight: Option<HighlightRect>,
    hover: Option<HoverState>,
}

impl ChartHandle {
    pub fn new(width: u32, height: u32) -> Self {
        let plot = PlotArea::for_canvas(width, height);
        Self {
            width,
            height,
            plot,
            x_axis: AxisScale::horizontal(0.0, 1.0, &plot),
            y_axis: AxisScale::vertical(0.0, 1.0, &plot),
            points: Vec::new(),
            plot_bands: Vec::new(),
            highlight: None,
            hover: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn plot_area(&self) -> &PlotArea {
        &self.plot
    }

    pub fn x_axis(&self) -> &AxisScale {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &AxisScale {
        &self.y_axis
    }

    /// Pull the plotted series and plot bands out of freshly composed options
    pub fn apply_options(&mut self, options: &ChartOptions) {
        let points = options.series.data.as_deref().map(points_from_pairs).unwrap_or_default();
        self.set_points(points);
        self.plot_bands = options.x_axis.plot_bands.clone();
    }

    /// Replace the series and refit both axes
    pub fn set_points(&mut self, points: Vec<ChartPoint>) {
        self.points = points;
        self.hover = None;
        self.fit_axes();
        log_debug!(
            LogComponent::Domain("ChartHandle"),
            "series set: {} points, x=[{}, {}]",
            self.points.len(),
            self.x_axis.min,
            self.x_axis.max
        );
    }

    fn fit_axes(&mut self) {
        let (mut x_min, mut x_max) = min_max(self.points.iter().map(|p| p.x)).unwrap_or((0.0, 1.0));
        let (mut y_min, mut y_max) = min_max(self.points.iter().map(|p| p.y)).unwrap_or((0.0, 1.0));

        if x_min == x_max {
            x_min -= single_point_padding();
            x_max += single_point_padding();
        }
        let y_pad = if y_min == y_max { 1.0 } else { (y_max - y_min) * Y_PADDING_RATIO };
        y_min -= y_pad;
        y_max += y_pad;

        self.x_axis = AxisScale::horizontal(x_min, x_max, &self.plot);
        self.y_axis = AxisScale::vertical(y_min, y_max, &self.plot);
    }

    /// Rendered series, ascending by x
    pub fn series_data(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Pixel column -> axis value (timestamp)
    pub fn to_axis_value(&self, pixel_x: f64) -> f64 {
        self.x_axis.to_value(pixel_x)
    }

    pub fn to_pixel_x(&self, value: f64) -> f64 {
        self.x_axis.to_pixel(value)
    }

    pub fn to_pixel_y(&self, value: f64) -> f64 {
        self.y_axis.to_pixel(value)
    }

    pub fn pixel_of(&self, point: &ChartPoint) -> (f64, f64) {
        (self.to_pixel_x(point.x), self.to_pixel_y(point.y))
    }

    /// Nearest marker within [`MARKER_HIT_RADIUS`] of the pointer
    pub fn marker_at(&self, pixel_x: f64, pixel_y: f64) -> Option<ChartPoint> {
        let radius_sq = MARKER_HIT_RADIUS * MARKER_HIT_RADIUS;
        self.points
            .iter()
            .map(|point| {
                let (px, py) = self.pixel_of(point);
                (*point, (px - pixel_x).powi(2) + (py - pixel_y).powi(2))
            })
            .filter(|(_, dist_sq)| *dist_sq <= radius_sq)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(point, _)| point)
    }

    /// Point closest to a pixel column, for hover
    pub fn nearest_point(&self, pixel_x: f64) -> Option<ChartPoint> {
        let value = self.to_axis_value(pixel_x);
        let idx = self.points.partition_point(|p| p.x < value);
        let before = idx.checked_sub(1).and_then(|i| self.points.get(i));
        let after = self.points.get(idx);
        match (before, after) {
            (Some(b), Some(a)) => Some(if value - b.x <= a.x - value { *b } else { *a }),
            (Some(p), None) | (None, Some(p)) => Some(*p),
            (None, None) => None,
        }
    }

    /// Shift the x axis by a pointer movement; the next selection refits it
    pub fn pan_x(&mut self, delta_px: f64) {
        self.x_axis.pan(delta_px);
        self.hover = None;
    }

    pub fn set_hover(&mut self, cursor_x: f64, cursor_y: f64) {
        self.hover = if self.plot.contains(cursor_x, cursor_y) {
            self.nearest_point(cursor_x).map(|point| HoverState { point, cursor_x, cursor_y })
        } else {
            None
        };
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    /// Draw the overlay. A previous overlay is destroyed first; there is never more than one.
    pub fn draw_highlight(&mut self, rect: HighlightRect) {
        if self.highlight.replace(rect).is_some() {
            log_debug!(LogComponent::Domain("ChartHandle"), "highlight replaced without destroy");
        }
    }

    pub fn destroy_highlight(&mut self) -> Option<HighlightRect> {
        self.highlight.take()
    }

    pub fn highlight(&self) -> Option<&HighlightRect> {
        self.highlight.as_ref()
    }

    pub fn plot_bands(&self) -> &[PlotBand] {
        &self.plot_bands
    }

    pub fn set_plot_bands(&mut self, bands: Vec<PlotBand>) {
        self.plot_bands = bands;
    }

    pub fn remove_plot_band(&mut self, id: &str) -> bool {
        let before = self.plot_bands.len();
        self.plot_bands.retain(|band| band.id != id);
        before != self.plot_bands.len()
    }
}

/// Dates that do not parse are dropped with a warning
pub fn points_from_pairs(pairs: &[SeriesPair]) -> Vec<ChartPoint> {
    let mut skipped = 0usize;
    let points: Vec<ChartPoint> = pairs
        .iter()
        .filter_map(|pair| match parse_quote_date(pair.date()) {
            Some(x) => Some(ChartPoint::new(x, pair.value())),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        log_warn!(LogComponent::Domain("ChartHandle"), "skipped {} points with unparseable dates", skipped);
    }
    points
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: f64 = 86_400_000.0;

    fn handle_with(points: &[(f64, f64)]) -> ChartHandle {
        let mut handle = ChartHandle::new(800, 400);
        handle.set_points(points.iter().map(|&(x, y)| ChartPoint::new(x, y)).collect());
        handle
    }

    #[test]
    fn axes_fit_the_series() {
        let handle = handle_with(&[(0.0, 10.0), (DAY, 20.0), (2.0 * DAY, 15.0)]);
        assert_eq!(handle.to_pixel_x(0.0), handle.plot_area().left);
        assert_eq!(handle.to_pixel_x(2.0 * DAY), handle.plot_area().right());
        assert!(handle.to_pixel_y(20.0) > handle.plot_area().top);
        assert!(handle.to_pixel_y(10.0) < handle.plot_area().bottom());
    }

    #[test]
    fn single_point_is_centred() {
        let handle = handle_with(&[(5.0 * DAY, 3.0)]);
        let plot = *handle.plot_area();
        let (px, py) = handle.pixel_of(&ChartPoint::new(5.0 * DAY, 3.0));
        assert!((px - (plot.left + plot.width / 2.0)).abs() < 1e-9);
        assert!((py - (plot.top + plot.height / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn marker_hit_requires_proximity() {
        let handle = handle_with(&[(0.0, 10.0), (DAY, 20.0)]);
        let (px, py) = handle.pixel_of(&ChartPoint::new(DAY, 20.0));
        assert_eq!(handle.marker_at(px + 2.0, py - 2.0), Some(ChartPoint::new(DAY, 20.0)));
        assert_eq!(handle.marker_at(px - 40.0, py), None);
    }

    #[test]
    fn nearest_point_picks_closest_column() {
        let handle = handle_with(&[(0.0, 1.0), (DAY, 2.0), (2.0 * DAY, 3.0)]);
        let px = handle.to_pixel_x(0.4 * DAY);
        assert_eq!(handle.nearest_point(px).map(|p| p.y), Some(1.0));
        let px = handle.to_pixel_x(1.6 * DAY);
        assert_eq!(handle.nearest_point(px).map(|p| p.y), Some(3.0));
        assert_eq!(ChartHandle::new(100, 100).nearest_point(50.0), None);
    }

    #[test]
    fn only_one_highlight_exists() {
        let mut handle = handle_with(&[(0.0, 1.0), (DAY, 2.0)]);
        let plot = *handle.plot_area();
        handle.draw_highlight(HighlightRect::spanning(100.0, 200.0, &plot));
        handle.draw_highlight(HighlightRect::spanning(100.0, 300.0, &plot));
        assert_eq!(handle.highlight().map(|r| r.width), Some(200.0));
        assert!(handle.destroy_highlight().is_some());
        assert!(handle.destroy_highlight().is_none());
    }

    #[test]
    fn bad_dates_are_dropped() {
        let pairs = vec![
            SeriesPair("2023-01-01".to_string(), 1.0),
            SeriesPair("garbage".to_string(), 2.0),
        ];
        let points = points_from_pairs(&pairs);
        assert_eq!(points, vec![ChartPoint::new(1_672_531_200_000.0, 1.0)]);
    }
}
