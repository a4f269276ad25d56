use std::sync::Mutex;

use quote_chart_wasm::application::chart_service::ChartSession;
use quote_chart_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use quote_chart_wasm::domain::quotes::{PricePoint, QuoteField, SeriesCollection, Ticker};

static LINES: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut lines) = LINES.lock() {
            lines.push((entry.level, entry.message));
        }
    }
}

#[test]
fn rebuild_traces_options_as_json() {
    init_logger(Box::new(CapturingLogger));

    let record = PricePoint {
        date: "2023-01-01".to_string(),
        open: 10.0,
        close: 12.0,
        high: 13.0,
        low: 9.0,
        adj_close: 11.8,
        volume: 1000.0,
        unadjusted_volume: 1000.0,
        change: 2.0,
    };
    let mut session = ChartSession::new(Ticker::new("AAPL").unwrap(), 960, 520);
    session.select(QuoteField::Close, &SeriesCollection::from_historical(&[record]));

    let lines = LINES.lock().unwrap();
    assert!(lines.iter().any(|(level, msg)| *level == LogLevel::Info && msg.contains("plotting AAPL close")));
    if cfg!(debug_assertions) {
        let traced = lines
            .iter()
            .filter(|(level, _)| *level == LogLevel::Trace)
            .map(|(_, msg)| msg.as_str())
            .find(|msg| msg.starts_with("options: "))
            .expect("options traced");
        assert!(traced.contains(r#""subtitle":{"text":"close Prices"}"#), "{traced}");
        assert!(traced.contains(r#""panKey":"shift""#), "{traced}");
    }
}
