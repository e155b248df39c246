use polars::error::PolarsError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("request URL rejected as not found (HTTP 404): {url}")]
    WrongUrl { url: String },

    #[error("rate limited by the weather API (HTTP 429): {url}")]
    TooManyRequests { url: String },

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("network transport failure for {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode provider response body")]
    Decode(#[source] serde_json::Error),

    #[error("provider returned an empty forecast")]
    EmptyForecast,

    #[error("forecast frame is missing required column '{column}'")]
    MissingTimeColumn { column: String },

    #[error("forecast time column has non-temporal dtype {dtype}")]
    InvalidTimeColumn { dtype: String },

    #[error("forecast timestamp at row {index} is null")]
    NullTimestamp { index: usize },

    #[error("forecast timestamps are not strictly ascending at row {index}")]
    UnsortedForecast { index: usize },

    #[error("forecast column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("failed to build forecast frame")]
    Frame(#[from] PolarsError),
}
