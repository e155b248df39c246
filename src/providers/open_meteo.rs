use crate::location::Location;
use crate::provider::WeatherProvider;
use crate::weather_api::error::WeatherApiError;
use crate::weather_api::forecast::DATETIME_COL;
use polars::prelude::*;
use serde::Deserialize;

/// Public Open-Meteo forecast endpoint. No API key required.
pub const OPEN_METEO_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Hourly variables requested from the API, in frame column order.
const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,cloud_cover,\
wind_speed_10m,shortwave_radiation,direct_normal_irradiance,diffuse_radiation";

/// [`WeatherProvider`] adapter for the Open-Meteo forecast API.
///
/// Requests the hourly weather and irradiance variables needed for PV
/// forecasting. Timestamps are requested as UTC unix time and end up in the
/// frame as a millisecond `Datetime` column named
/// [`DATETIME_COL`](crate::DATETIME_COL).
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    endpoint: String,
}

impl OpenMeteo {
    /// Creates an adapter pointing at the public Open-Meteo endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(OPEN_METEO_ENDPOINT)
    }

    /// Creates an adapter with a custom endpoint, e.g. a self-hosted
    /// Open-Meteo instance or a test server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    /// Unix timestamps in seconds, UTC.
    time: Vec<i64>,
    temperature_2m: Vec<Option<f64>>,
    relative_humidity_2m: Vec<Option<f64>>,
    cloud_cover: Vec<Option<f64>>,
    wind_speed_10m: Vec<Option<f64>>,
    shortwave_radiation: Vec<Option<f64>>,
    direct_normal_irradiance: Vec<Option<f64>>,
    diffuse_radiation: Vec<Option<f64>>,
}

fn check_len(column: &str, expected: usize, found: usize) -> Result<(), WeatherApiError> {
    if expected != found {
        return Err(WeatherApiError::LengthMismatch {
            column: column.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}

impl WeatherProvider for OpenMeteo {
    fn forecast_url(&self, location: &Location) -> Result<String, WeatherApiError> {
        Ok(format!(
            "{}?latitude={:.4}&longitude={:.4}&elevation={}&hourly={}&timeformat=unixtime&timezone=UTC",
            self.endpoint,
            location.latitude(),
            location.longitude(),
            location.altitude(),
            HOURLY_FIELDS,
        ))
    }

    fn parse_forecast(&self, body: &str) -> Result<DataFrame, WeatherApiError> {
        let response: ForecastResponse =
            serde_json::from_str(body).map_err(WeatherApiError::Decode)?;
        let hourly = response.hourly;

        let rows = hourly.time.len();
        check_len("temperature_2m", rows, hourly.temperature_2m.len())?;
        check_len("relative_humidity_2m", rows, hourly.relative_humidity_2m.len())?;
        check_len("cloud_cover", rows, hourly.cloud_cover.len())?;
        check_len("wind_speed_10m", rows, hourly.wind_speed_10m.len())?;
        check_len("shortwave_radiation", rows, hourly.shortwave_radiation.len())?;
        check_len(
            "direct_normal_irradiance",
            rows,
            hourly.direct_normal_irradiance.len(),
        )?;
        check_len("diffuse_radiation", rows, hourly.diffuse_radiation.len())?;

        let timestamps_ms: Vec<i64> = hourly.time.iter().map(|s| s * 1000).collect();

        let frame = df!(
            DATETIME_COL => timestamps_ms,
            "temperature_2m" => hourly.temperature_2m,
            "relative_humidity_2m" => hourly.relative_humidity_2m,
            "cloud_cover" => hourly.cloud_cover,
            "wind_speed_10m" => hourly.wind_speed_10m,
            "shortwave_radiation" => hourly.shortwave_radiation,
            "direct_normal_irradiance" => hourly.direct_normal_irradiance,
            "diffuse_radiation" => hourly.diffuse_radiation,
        )?;

        let frame = frame
            .lazy()
            .with_column(col(DATETIME_COL).cast(DataType::Datetime(TimeUnit::Milliseconds, None)))
            .collect()?;

        Ok(frame)
    }
}
