use crate::location::LocationError;
use crate::weather_api::error::WeatherApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeathercastError {
    #[error(transparent)]
    WeatherApi(#[from] WeatherApiError),

    #[error(transparent)]
    Location(#[from] LocationError),
}
