//! This crate fetches hourly weather/irradiance forecasts for a fixed
//! geographic point from a remote HTTP weather API, normalizes the response
//! into a time-indexed Polars `DataFrame`, and shields callers from redundant
//! network calls and transient upstream failures.
//!
//! The entry point is [`WeatherApi`], which owns a [`Location`], an in-memory
//! cache of the last successful forecast, and a configurable freshness
//! window. URL construction and response parsing are delegated to a
//! [`WeatherProvider`] adapter; [`OpenMeteo`] is the bundled keyless
//! implementation.
//!
//! ```no_run
//! use weathercast::{Location, OpenMeteo, WeatherApi, WeathercastError};
//!
//! # async fn run() -> Result<(), WeathercastError> {
//! let location = Location::new(52.0, 13.0, "Europe/Berlin", 34.0)?;
//! let mut api = WeatherApi::builder()
//!     .location(location)
//!     .provider(OpenMeteo::new())
//!     .build();
//!
//! let forecast = api.get_weather().await?;
//! println!("{}", forecast);
//!
//! // A second call within the freshness window is served from the cache.
//! let again = api.get_weather().await?;
//! assert!(forecast.equals(&again));
//! # Ok(())
//! # }
//! ```

mod error;
mod location;
mod provider;
mod providers;
mod weather_api;

pub use error::WeathercastError;
pub use location::{Location, LocationError};
pub use provider::WeatherProvider;
pub use providers::open_meteo::OpenMeteo;
pub use weather_api::error::WeatherApiError;
pub use weather_api::forecast::DATETIME_COL;
pub use weather_api::{WeatherApi, DEFAULT_MAX_AGE_MINUTES};
