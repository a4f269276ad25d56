use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::{PricePoint, QuoteField};

/// `[date, value]` pair, serialized as a two-element JSON array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPair(pub String, pub f64);

impl SeriesPair {
    pub fn date(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

/// Pairs for one field in input order
pub fn collect_pairs(historical: &[PricePoint], field: QuoteField) -> Vec<SeriesPair> {
    historical
        .iter()
        .map(|point| SeriesPair(point.date.clone(), field.value_of(point)))
        .collect()
}

/// Ascending by date string, then by value. ISO dates sort chronologically.
pub fn sort_pairs(pairs: &mut [SeriesPair]) {
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal)));
}

/// Per-field time series built from one historical response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesCollection {
    series: HashMap<QuoteField, Vec<SeriesPair>>,
}

impl SeriesCollection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Transposes the records into eight independently sorted series.
    pub fn from_historical(historical: &[PricePoint]) -> Self {
        let series = QuoteField::iter()
            .map(|field| {
                let mut pairs = collect_pairs(historical, field);
                sort_pairs(&mut pairs);
                (field, pairs)
            })
            .collect();
        Self { series }
    }

    pub fn get(&self, field: QuoteField) -> Option<&[SeriesPair]> {
        self.series.get(&field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of records behind each series (all series share it)
    pub fn record_count(&self) -> usize {
        self.series.values().next().map_or(0, Vec::len)
    }
}
