use leptos::*;
use once_cell::sync::OnceCell;

use crate::domain::chart::ChartOptions;
use crate::domain::quotes::{QuoteField, SeriesCollection};
use crate::global_signals;

/// Page-level reactive state. The chart handle is not in here: it lives in
/// the chart component's session and is passed to the gesture code directly.
pub struct Globals {
    pub selected_field: RwSignal<Option<QuoteField>>,
    pub price_series: RwSignal<SeriesCollection>,
    pub chart_options: RwSignal<ChartOptions>,
    pub status_text: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        selected_field: create_rw_signal(None),
        price_series: create_rw_signal(SeriesCollection::empty()),
        chart_options: create_rw_signal(ChartOptions::default()),
        status_text: create_rw_signal(String::new()),
        is_loading: create_rw_signal(false),
    })
}

global_signals! {
    pub selected_field => selected_field: Option<QuoteField>,
    pub price_series => price_series: SeriesCollection,
    pub chart_options => chart_options: ChartOptions,
    pub status_text => status_text: String,
    pub is_loading => is_loading: bool,
}
