//! Browser-facing adapters: HTTP, canvas rendering, console logging.

pub mod http;
pub mod rendering;
pub mod services;

pub use http::HistoricalPriceClient;
