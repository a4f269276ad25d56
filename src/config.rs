use serde::Deserialize;
use std::str::FromStr;

use crate::domain::{errors::AppError, logging::{LogComponent, LogLevel}, quotes::Ticker};
use crate::log_warn;

pub const DEFAULT_API_BASE_URL: &str = "https://jain-global.onrender.com";
pub const DEFAULT_TICKER: &str = "AAPL";
/// Id of the optional `<script type="application/json">` block holding overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Page configuration. Every key is optional; missing keys keep their default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfig {
    pub api_base_url: String,
    pub ticker: String,
    pub chart_width: u32,
    pub chart_height: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ticker: DEFAULT_TICKER.to_string(),
            chart_width: 960,
            chart_height: 520,
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        self.ticker()?;
        self.log_level()?;
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(AppError::Config("chart size must be non-zero".to_string()));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!("apiBaseUrl must be http(s): '{}'", self.api_base_url)));
        }
        Ok(())
    }

    pub fn ticker(&self) -> Result<Ticker, AppError> {
        Ticker::new(&self.ticker)
    }

    pub fn log_level(&self) -> Result<LogLevel, AppError> {
        LogLevel::from_str(&self.log_level)
            .map_err(|_| AppError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    /// Read `#app-config` from the document. Absent block means defaults;
    /// an invalid one is reported and ignored.
    pub fn load() -> Self {
        let raw = gloo::utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        match raw {
            None => Self::default(),
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log_warn!(LogComponent::Presentation("Config"), "ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn overrides_are_camel_case() {
        let config = AppConfig::from_json(r#"{"ticker": "msft", "apiBaseUrl": "http://localhost:5001"}"#).unwrap();
        assert_eq!(config.ticker().unwrap().value(), "MSFT");
        assert_eq!(config.api_base_url, "http://localhost:5001");
        assert_eq!(config.chart_width, 960);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(AppConfig::from_json(r#"{"ticker": ""}"#).is_err());
        assert!(AppConfig::from_json(r#"{"logLevel": "chatty"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"chartWidth": 0}"#).is_err());
        assert!(AppConfig::from_json(r#"{"apiBaseUrl": "ftp://x"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"tikcer": "AAPL"}"#).is_err());
    }
}
