use crate::domain::errors::NetworkResult;
use crate::domain::logging::LogComponent;
use crate::domain::quotes::{QuoteSource, SeriesCollection, Ticker};
use crate::{log_error, log_info};

/// Use Case: fetch a ticker's history and transpose it into per-field series.
///
/// Failures never reach the caller: they are logged and the result is an
/// empty collection, so the view simply has nothing to plot.
pub struct LoadHistoricalSeriesUseCase<S: QuoteSource> {
    source: S,
}

impl<S: QuoteSource> LoadHistoricalSeriesUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn execute(&self, ticker: &Ticker) -> SeriesCollection {
        match self.try_execute(ticker).await {
            Ok(series) => series,
            Err(e) => {
                log_error!(LogComponent::Application("LoadSeries"), "❌ {} history unavailable: {}", ticker, e);
                SeriesCollection::empty()
            }
        }
    }

    /// Same as [`execute`](Self::execute) but surfaces the error
    pub async fn try_execute(&self, ticker: &Ticker) -> NetworkResult<SeriesCollection> {
        let prices = self.source.fetch_historical(ticker).await?;
        log_info!(
            LogComponent::Application("LoadSeries"),
            "reformatting {} {} records after fetching",
            prices.len(),
            ticker
        );
        Ok(SeriesCollection::from_historical(&prices.historical))
    }
}

pub async fn load_series<S: QuoteSource>(source: S, ticker: &Ticker) -> SeriesCollection {
    LoadHistoricalSeriesUseCase::new(source).execute(ticker).await
}
