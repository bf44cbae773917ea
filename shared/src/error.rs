use lambda_http::http::StatusCode;
use thiserror::Error;

/// Every way a shorten request can fail.
#[derive(Debug, Error)]
pub enum ShortenerError {
    #[error("Error decoding request body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Error looking up long URL: {0}")]
    Lookup(String),
    #[error("Found more than one entry ({count}) for long URL '{long_url}'")]
    MultipleMatches { long_url: String, count: usize },
    #[error("Error adding item: {0}")]
    Write(String),
}

impl ShortenerError {
    pub fn kind(&self) -> &'static str {
        match self {
            ShortenerError::Decode(_) => "decode",
            ShortenerError::Lookup(_) => "lookup",
            ShortenerError::MultipleMatches { .. } => "integrity",
            ShortenerError::Write(_) => "write",
        }
    }

    /// Status code for this kind of failure when errors are not collapsed
    /// into a single status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShortenerError::Decode(_) => StatusCode::BAD_REQUEST,
            ShortenerError::MultipleMatches { .. } => StatusCode::CONFLICT,
            ShortenerError::Lookup(_) | ShortenerError::Write(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
