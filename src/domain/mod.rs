//! Domain layer: quotes, chart geometry and gestures, logging and errors.
//! Nothing in here touches the DOM, so all of it runs under native tests.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod quotes;
