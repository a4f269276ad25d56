//! Chart configuration. Options are rebuilt, never edited in place: every
//! trigger produces a new [`ChartOptions`] from the previous one through
//! [`compose`], overriding only the keys that trigger owns.

use serde::Serialize;

use super::value_objects::{ChartPoint, Delta, PlotBand};
use crate::domain::quotes::{QuoteField, SeriesPair, Ticker};
use crate::time_utils::format_tooltip_date;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TitleOptions {
    pub text: String,
}

impl TitleOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Datetime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub enabled: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisOptions {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub labels: AxisLabels,
    pub crosshair: bool,
    pub plot_bands: Vec<PlotBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxisOptions {
    pub crosshair: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub line_width: f64,
    pub allow_point_select: bool,
    /// `None` until a field with data is selected
    pub data: Option<Vec<SeriesPair>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub value_decimals: usize,
    /// Live drag delta, shown under the hovered value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<Delta>,
}

impl TooltipOptions {
    /// Tooltip lines for a hovered point
    pub fn format(&self, point: &ChartPoint, series_name: &str) -> Vec<String> {
        let mut lines = vec![
            format_tooltip_date(point.x),
            format!("{}: {:.*}", series_name, self.value_decimals, point.y),
        ];
        if let Some(delta) = self.delta {
            lines.push(format!("Δ: {delta}"));
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstructorType {
    StockChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBehaviour {
    pub constructor: ConstructorType,
    pub panning: bool,
    /// Modifier that turns a primary-button drag into x panning
    pub pan_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotSeriesOptions {
    pub allow_point_select: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOptions {
    pub series: PlotSeriesOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: TitleOptions,
    pub subtitle: TitleOptions,
    pub x_axis: XAxisOptions,
    pub y_axis: YAxisOptions,
    pub series: SeriesOptions,
    pub tooltip: TooltipOptions,
    pub chart: ChartBehaviour,
    pub plot_options: PlotOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: TitleOptions::default(),
            subtitle: TitleOptions::default(),
            x_axis: XAxisOptions {
                kind: AxisKind::Datetime,
                labels: AxisLabels { enabled: true, format: "{value:%y-%b-%e}".to_string() },
                crosshair: true,
                plot_bands: Vec::new(),
            },
            y_axis: YAxisOptions { crosshair: true },
            series: SeriesOptions { name: None, line_width: 0.5, allow_point_select: true, data: None },
            tooltip: TooltipOptions { value_decimals: 2, delta: None },
            chart: ChartBehaviour {
                constructor: ConstructorType::StockChart,
                panning: true,
                pan_key: "shift".to_string(),
            },
            plot_options: PlotOptions { series: PlotSeriesOptions { allow_point_select: true } },
        }
    }
}

impl ChartOptions {
    pub fn for_ticker(ticker: &Ticker) -> Self {
        compose(&Self::default(), OptionsUpdate::Ticker(ticker.clone()))
    }

    pub fn series_name(&self) -> &str {
        self.series.name.as_deref().unwrap_or("")
    }

    pub fn measure_band(&self) -> Option<&PlotBand> {
        self.x_axis.plot_bands.iter().find(|band| band.id == MEASURE_BAND_ID)
    }

    /// JSON form, logged at trace level on every rebuild
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub const MEASURE_BAND_ID: &str = "measure-band";

/// What changed, and therefore which keys may be overridden
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsUpdate {
    Ticker(Ticker),
    Selection { field: QuoteField, data: Option<Vec<SeriesPair>> },
    Delta(Option<Delta>),
    PlotBand(Option<PlotBand>),
}

pub fn compose(base: &ChartOptions, update: OptionsUpdate) -> ChartOptions {
    match update {
        OptionsUpdate::Ticker(ticker) => ChartOptions {
            title: TitleOptions::new(ticker.value()),
            ..base.clone()
        },
        OptionsUpdate::Selection { field, data } => ChartOptions {
            subtitle: TitleOptions::new(field.subtitle()),
            series: SeriesOptions { name: Some(field.to_string()), data, ..base.series.clone() },
            ..base.clone()
        },
        OptionsUpdate::Delta(delta) => ChartOptions {
            tooltip: TooltipOptions { delta, ..base.tooltip.clone() },
            ..base.clone()
        },
        OptionsUpdate::PlotBand(band) => {
            let mut plot_bands: Vec<PlotBand> = base
                .x_axis
                .plot_bands
                .iter()
                .filter(|existing| existing.id != MEASURE_BAND_ID)
                .cloned()
                .collect();
            plot_bands.extend(band);
            ChartOptions {
                x_axis: XAxisOptions { plot_bands, ..base.x_axis.clone() },
                ..base.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_stock_chart_setup() {
        let options = ChartOptions::default();
        assert_eq!(options.x_axis.kind, AxisKind::Datetime);
        assert!(options.x_axis.crosshair && options.y_axis.crosshair);
        assert_eq!(options.series.line_width, 0.5);
        assert!(options.series.allow_point_select);
        assert_eq!(options.tooltip.value_decimals, 2);
        assert_eq!(options.chart.constructor, ConstructorType::StockChart);
    }

    #[test]
    fn tooltip_lines_include_delta_when_present() {
        let point = ChartPoint::new(1_672_531_200_000.0, 12.0);
        let mut tooltip = ChartOptions::default().tooltip;
        assert_eq!(tooltip.format(&point, "close"), ["2023-01-01", "close: 12.00"]);
        tooltip.delta = Some(Delta::between(12.0, 13.256));
        assert_eq!(tooltip.format(&point, "close")[2], "Δ: 1.26");
    }

    #[test]
    fn json_uses_chart_option_keys() {
        let json = ChartOptions::default().to_json();
        assert!(json.contains(r#""xAxis":{"type":"datetime""#), "{json}");
        assert!(json.contains(r#""lineWidth":0.5"#), "{json}");
        assert!(json.contains(r#""constructor":"stockChart""#), "{json}");
    }
}
