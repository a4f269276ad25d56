use thiserror::Error;

/// One error type for the whole app. Fetch failures are logged and swallowed
/// by the use cases, so most variants only ever reach the console.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {status} {status_text}")]
    Http { status: u16, status_text: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("rendering error: {0}")]
    Rendering(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
