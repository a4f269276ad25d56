use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumCount, EnumIter, EnumString};

use super::entities::PricePoint;
use crate::domain::errors::AppError;

/// Value Object - ticker symbol, always upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: &str) -> Result<Self, AppError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("ticker cannot be empty".to_string()));
        }
        if let Some(ch) = trimmed.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '-')) {
            return Err(AppError::Validation(format!("ticker contains invalid character '{ch}'")));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Value Object - one of the eight plottable quote fields.
///
/// The string form is the API's JSON key and doubles as the dropdown label
/// and the subtitle prefix. Iteration order is the dropdown order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    strum::Display, EnumIter, EnumString, EnumCount, AsRefStr, Serialize, Deserialize,
)]
pub enum QuoteField {
    #[strum(serialize = "open")]
    #[serde(rename = "open")]
    Open,
    #[strum(serialize = "close")]
    #[serde(rename = "close")]
    Close,
    #[strum(serialize = "high")]
    #[serde(rename = "high")]
    High,
    #[strum(serialize = "low")]
    #[serde(rename = "low")]
    Low,
    #[strum(serialize = "adjClose")]
    #[serde(rename = "adjClose")]
    AdjClose,
    #[strum(serialize = "volume")]
    #[serde(rename = "volume")]
    Volume,
    #[strum(serialize = "unadjustedVolume")]
    #[serde(rename = "unadjustedVolume")]
    UnadjustedVolume,
    #[strum(serialize = "change")]
    #[serde(rename = "change")]
    Change,
}

impl QuoteField {
    pub fn key(&self) -> &str {
        self.as_ref()
    }

    /// Reads this field out of one historical record
    pub fn value_of(&self, point: &PricePoint) -> f64 {
        match self {
            Self::Open => point.open,
            Self::Close => point.close,
            Self::High => point.high,
            Self::Low => point.low,
            Self::AdjClose => point.adj_close,
            Self::Volume => point.volume,
            Self::UnadjustedVolume => point.unadjusted_volume,
            Self::Change => point.change,
        }
    }

    /// Subtitle shown above the plot once this field is selected
    pub fn subtitle(&self) -> String {
        format!("{} Prices", self.key())
    }
}
