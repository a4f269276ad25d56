use gloo_net::http::Request;

use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::LogComponent,
    quotes::{HistoricalPrices, QuoteSource, Ticker},
};
use crate::{log_debug, log_info};

pub const HISTORICAL_PRICES_PATH: &str = "/api/v1/historical-prices";

/// `{base}/api/v1/historical-prices/{TICKER}`; a trailing `/` on `base` is dropped
pub fn historical_prices_url(base_url: &str, ticker: &Ticker) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), HISTORICAL_PRICES_PATH, ticker.value())
}

/// gloo-net client for the historical-prices endpoint. One GET per call,
/// no auth, no query parameters, no retries.
#[derive(Debug, Clone)]
pub struct HistoricalPriceClient {
    base_url: String,
}

impl HistoricalPriceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url_for(&self, ticker: &Ticker) -> String {
        historical_prices_url(&self.base_url, ticker)
    }
}

impl QuoteSource for HistoricalPriceClient {
    async fn fetch_historical(&self, ticker: &Ticker) -> NetworkResult<HistoricalPrices> {
        let url = self.url_for(ticker);
        log_info!(LogComponent::Infrastructure("HistoricalPrices"), "📈 Fetching history from: {url}");

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("request to {url} failed: {e}")))?;

        if !response.ok() {
            return Err(AppError::Http { status: response.status(), status_text: response.status_text() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("failed to read body: {e}")))?;
        log_debug!(LogComponent::Infrastructure("HistoricalPrices"), "received {} bytes", body.len());

        let prices = HistoricalPrices::from_json(&body).map_err(|e| AppError::Parse(e.to_string()))?;
        log_info!(
            LogComponent::Infrastructure("HistoricalPrices"),
            "✅ Loaded {} historical records for {}",
            prices.len(),
            ticker
        );
        Ok(prices)
    }
}
