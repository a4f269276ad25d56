use quote_chart_wasm::domain::chart::{
    ChartOptions, Delta, MEASURE_BAND_COLOR, MEASURE_BAND_ID, OptionsUpdate, PlotBand, compose,
};
use quote_chart_wasm::domain::quotes::{QuoteField, SeriesPair, Ticker};

fn band(from: f64, to: f64) -> PlotBand {
    PlotBand {
        id: MEASURE_BAND_ID.to_string(),
        color: MEASURE_BAND_COLOR.to_string(),
        from,
        to,
        label: vec!["Δ: $1.00".to_string()],
    }
}

fn base() -> ChartOptions {
    ChartOptions::for_ticker(&Ticker::new("AAPL").unwrap())
}

#[test]
fn selection_sets_subtitle_and_series() {
    let options = compose(
        &base(),
        OptionsUpdate::Selection { field: QuoteField::Close, data: Some(vec![SeriesPair("2023-01-01".into(), 12.0)]) },
    );
    insta::assert_snapshot!(options.subtitle.text, @"close Prices");
    assert_eq!(options.series_name(), "close");
    assert_eq!(options.title.text, "AAPL");
}

#[test]
fn every_field_gets_its_own_subtitle() {
    let options = compose(&base(), OptionsUpdate::Selection { field: QuoteField::AdjClose, data: None });
    insta::assert_snapshot!(options.subtitle.text, @"adjClose Prices");
    assert!(options.series.data.is_none());
}

#[test]
fn delta_update_keeps_every_other_key() {
    let selected = compose(
        &base(),
        OptionsUpdate::Selection { field: QuoteField::High, data: Some(vec![SeriesPair("2023-01-01".into(), 3.0)]) },
    );
    let with_delta = compose(&selected, OptionsUpdate::Delta(Some(Delta::between(100.0, 105.456))));

    assert_eq!(with_delta.tooltip.delta.map(|d| d.to_string()).as_deref(), Some("5.46"));
    assert_eq!(with_delta.subtitle, selected.subtitle);
    assert_eq!(with_delta.series, selected.series);
    assert_eq!(with_delta.x_axis, selected.x_axis);
    assert_eq!(with_delta.chart, selected.chart);

    let cleared = compose(&with_delta, OptionsUpdate::Delta(None));
    assert_eq!(cleared, selected);
}

#[test]
fn measure_band_is_replaced_not_stacked() {
    let first = compose(&base(), OptionsUpdate::PlotBand(Some(band(1.0, 2.0))));
    let second = compose(&first, OptionsUpdate::PlotBand(Some(band(3.0, 4.0))));
    assert_eq!(second.x_axis.plot_bands.len(), 1);
    assert_eq!(second.measure_band().map(|b| (b.from, b.to)), Some((3.0, 4.0)));

    let removed = compose(&second, OptionsUpdate::PlotBand(None));
    assert!(removed.x_axis.plot_bands.is_empty());
    assert_eq!(removed.title, second.title);
}

#[test]
fn selection_keeps_series_styling() {
    let options = compose(&base(), OptionsUpdate::Selection { field: QuoteField::Volume, data: None });
    assert_eq!(options.series.line_width, 0.5);
    assert!(options.series.allow_point_select);
    assert_eq!(options.tooltip.value_decimals, 2);
}
