use super::{HistoricalPrices, Ticker};
use crate::domain::errors::NetworkResult;

/// Where historical quotes come from
#[allow(async_fn_in_trait)]
pub trait QuoteSource {
    async fn fetch_historical(&self, ticker: &Ticker) -> NetworkResult<HistoricalPrices>;
}
