use serde::{Deserialize, Serialize};

/// One trading day as returned by the historical-prices endpoint.
/// Keys the chart does not use (`label`, `vwap`, `changePercent`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub adj_close: f64,
    pub volume: f64,
    pub unadjusted_volume: f64,
    pub change: f64,
}

/// Response body of `GET /api/v1/historical-prices/{ticker}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub historical: Vec<PricePoint>,
}

impl HistoricalPrices {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn len(&self) -> usize {
        self.historical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.historical.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_body_and_ignores_extra_keys() {
        let body = r#"{
            "symbol": "AAPL",
            "historical": [{
                "date": "2023-01-03", "open": 130.28, "high": 130.9, "low": 124.17,
                "close": 125.07, "adjClose": 124.22, "volume": 112117500,
                "unadjustedVolume": 112117500, "change": -5.21,
                "changePercent": -3.99, "vwap": 126.71, "label": "January 03, 23"
            }]
        }"#;
        let prices = HistoricalPrices::from_json(body).unwrap();
        assert_eq!(prices.symbol.as_deref(), Some("AAPL"));
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.historical[0].adj_close, 124.22);
        assert_eq!(prices.historical[0].unadjusted_volume, 112117500.0);
    }

    #[test]
    fn missing_historical_key_is_an_error() {
        assert!(HistoricalPrices::from_json("{}").is_err());
        assert!(HistoricalPrices::from_json(r#"{"historical": 5}"#).is_err());
    }
}
