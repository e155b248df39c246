use crate::location::Location;
use crate::weather_api::error::WeatherApiError;
use polars::frame::DataFrame;

/// Provider-specific glue the core delegates to on every network round-trip.
///
/// Implementations cover exactly two concerns: building the forecast request
/// URL for a [`Location`] and parsing the raw response body into a normalized
/// frame. Both hooks must be pure functions without I/O of their own; the
/// core performs the HTTP request and classifies its status code.
///
/// The parsed frame must contain a [`DATETIME_COL`](crate::DATETIME_COL)
/// column (epoch integers or a Polars datetime) sorted strictly ascending,
/// and implementations must fail with a [`WeatherApiError`] instead of
/// returning a malformed frame.
pub trait WeatherProvider {
    /// Builds the full request URL for the given location.
    fn forecast_url(&self, location: &Location) -> Result<String, WeatherApiError>;

    /// Parses a raw 2xx response body into a time-indexed forecast frame.
    fn parse_forecast(&self, body: &str) -> Result<DataFrame, WeatherApiError>;
}
