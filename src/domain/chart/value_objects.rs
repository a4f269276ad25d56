use derive_more::Display;
use serde::Serialize;

/// A plotted point: `x` in ms since the epoch, `y` the field value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Price difference between two points, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize)]
#[display(fmt = "{:.2}", _0)]
pub struct Delta(f64);

impl Delta {
    pub fn between(start: f64, end: f64) -> Self {
        Self(round_cents(end - start))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Canvas rectangle inside the axis margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const MARGIN_TOP: f64 = 64.0;
    pub const MARGIN_RIGHT: f64 = 24.0;
    pub const MARGIN_BOTTOM: f64 = 40.0;
    pub const MARGIN_LEFT: f64 = 72.0;

    pub fn for_canvas(width: u32, height: u32) -> Self {
        let width = (width as f64 - Self::MARGIN_LEFT - Self::MARGIN_RIGHT).max(1.0);
        let height = (height as f64 - Self::MARGIN_TOP - Self::MARGIN_BOTTOM).max(1.0);
        Self { left: Self::MARGIN_LEFT, top: Self::MARGIN_TOP, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Linear value <-> pixel mapping for one axis.
/// A reversed scale grows upwards (the y axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    start_px: f64,
    len_px: f64,
    reversed: bool,
}

impl AxisScale {
    pub fn horizontal(min: f64, max: f64, plot: &PlotArea) -> Self {
        Self { min, max, start_px: plot.left, len_px: plot.width, reversed: false }
    }

    pub fn vertical(min: f64, max: f64, plot: &PlotArea) -> Self {
        Self { min, max, start_px: plot.top, len_px: plot.height, reversed: true }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn to_pixel(&self, value: f64) -> f64 {
        if self.range() == 0.0 {
            return self.start_px + self.len_px / 2.0;
        }
        let ratio = (value - self.min) / self.range();
        if self.reversed {
            self.start_px + self.len_px * (1.0 - ratio)
        } else {
            self.start_px + self.len_px * ratio
        }
    }

    pub fn to_value(&self, pixel: f64) -> f64 {
        let mut ratio = (pixel - self.start_px) / self.len_px;
        if self.reversed {
            ratio = 1.0 - ratio;
        }
        self.min + ratio * self.range()
    }

    /// Slide the visible window so content follows a pointer that moved
    /// `delta_px`; the range keeps its width.
    pub fn pan(&mut self, delta_px: f64) {
        let mut shift = delta_px / self.len_px * self.range();
        if self.reversed {
            shift = -shift;
        }
        self.min -= shift;
        self.max -= shift;
    }

    /// Evenly spaced values for `count` labels, ends included
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => (0..count)
                .map(|i| self.min + self.range() * i as f64 / (count - 1) as f64)
                .collect(),
        }
    }
}

/// Translucent band drawn while measuring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HighlightRect {
    /// Full plot height between two pixel columns, in either order
    pub fn spanning(x1: f64, x2: f64, plot: &PlotArea) -> Self {
        Self { x: x1.min(x2), y: plot.top, width: (x2 - x1).abs(), height: plot.height }
    }
}

/// Labelled x-range band
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotBand {
    pub id: String,
    pub color: String,
    pub from: f64,
    pub to: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label: Vec<String>,
}
