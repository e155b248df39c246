//! The request/caching/error-classification core. [`WeatherApi`] decides when
//! a network round-trip is actually necessary, performs the single HTTP GET,
//! maps upstream failure modes onto [`WeatherApiError`](error::WeatherApiError),
//! and keeps the last successfully parsed forecast in memory.

pub mod error;
pub mod forecast;

use crate::location::Location;
use crate::provider::WeatherProvider;
use crate::weather_api::error::WeatherApiError;
use crate::weather_api::forecast::validate_forecast;
use bon::bon;
use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};
use polars::frame::DataFrame;
use reqwest::{Client, StatusCode};

/// Default freshness window in minutes for cached forecasts.
pub const DEFAULT_MAX_AGE_MINUTES: i64 = 30;

/// The last successfully retrieved forecast together with its retrieval
/// timestamp. Replaced wholesale on every successful fetch, never partially
/// mutated, and never touched by a failed fetch.
#[derive(Debug, Clone)]
struct CachedResult {
    frame: DataFrame,
    retrieved_at: DateTime<Utc>,
}

/// A caching forecast client for a fixed [`Location`].
///
/// The client owns the location, an in-memory cache of the most recent
/// forecast and a freshness window. [`get_weather`](WeatherApi::get_weather)
/// serves from the cache while it is fresh, bounding the request rate to at
/// most one upstream call per window regardless of call frequency. URL
/// construction and response parsing are delegated to the
/// [`WeatherProvider`] adapter.
///
/// The client performs no internal retries and imposes no timeout of its
/// own; backoff policy belongs to the caller and transport timeouts to the
/// injected `reqwest` client. Methods take `&mut self`, so sharing an
/// instance across tasks requires external serialization, which is what
/// keeps the single-cache invariant without locks.
///
/// # Examples
///
/// ```no_run
/// use chrono::TimeDelta;
/// use weathercast::{Location, OpenMeteo, WeatherApi, WeathercastError};
///
/// # async fn run() -> Result<(), WeathercastError> {
/// let location = Location::new(52.0, 13.0, "Europe/Berlin", 34.0)?;
/// let mut api = WeatherApi::builder()
///     .location(location)
///     .provider(OpenMeteo::new())
///     .max_age(TimeDelta::minutes(15))
///     .build();
///
/// let forecast = api.get_weather().await?;
/// println!("{}", forecast.head(Some(5)));
/// # Ok(())
/// # }
/// ```
pub struct WeatherApi<P: WeatherProvider> {
    location: Location,
    provider: P,
    client: Client,
    max_age: TimeDelta,
    cache: Option<CachedResult>,
}

#[bon]
impl<P: WeatherProvider> WeatherApi<P> {
    /// Creates a new client via the builder.
    ///
    /// # Arguments
    ///
    /// * `.location(Location)`: **Required.** The point forecasts are fetched for.
    /// * `.provider(P)`: **Required.** The provider adapter.
    /// * `.max_age(TimeDelta)`: Optional. Freshness window for cached data.
    ///   Defaults to [`DEFAULT_MAX_AGE_MINUTES`].
    /// * `.client(Client)`: Optional. A preconfigured `reqwest` client, e.g.
    ///   with a transport timeout. Defaults to `Client::new()`.
    #[builder]
    pub fn new(
        location: Location,
        provider: P,
        max_age: Option<TimeDelta>,
        client: Option<Client>,
    ) -> Self {
        Self {
            location,
            provider,
            client: client.unwrap_or_default(),
            max_age: max_age.unwrap_or_else(|| TimeDelta::minutes(DEFAULT_MAX_AGE_MINUTES)),
            cache: None,
        }
    }

    /// Returns the forecast, fetching from the upstream API only when the
    /// cached one is absent or older than the freshness window.
    ///
    /// # Errors
    ///
    /// On a cache miss this propagates every failure of the round-trip as a
    /// typed [`WeatherApiError`]; see [`refresh`](WeatherApi::refresh). A
    /// cache hit cannot fail and performs no network activity.
    pub async fn get_weather(&mut self) -> Result<DataFrame, WeatherApiError> {
        let now = Utc::now();
        if let Some(cached) = &self.cache {
            let age = now - cached.retrieved_at;
            if age < self.max_age {
                debug!(
                    "cache hit: forecast is {}s old (max age {}s)",
                    age.num_seconds(),
                    self.max_age.num_seconds()
                );
                return Ok(cached.frame.clone());
            }
            debug!("cache expired: forecast is {}s old", age.num_seconds());
        }
        self.refresh().await
    }

    /// Fetches a fresh forecast unconditionally, bypassing the freshness
    /// check.
    ///
    /// Performs a single GET against the adapter-built URL, classifies the
    /// status code, parses the body through the adapter and validates the
    /// resulting frame before it replaces the cache. A failure at any step
    /// leaves the previous cache entry untouched.
    ///
    /// # Errors
    ///
    /// * [`WeatherApiError::WrongUrl`] - the upstream answered 404.
    /// * [`WeatherApiError::TooManyRequests`] - the upstream answered 429.
    /// * [`WeatherApiError::HttpStatus`] - any other non-2xx status.
    /// * [`WeatherApiError::Transport`] - connection-level failure (DNS,
    ///   refused connection, transport timeout).
    /// * Decode/validation variants when a 2xx body is unparseable, empty,
    ///   or not strictly time-sorted.
    pub async fn refresh(&mut self) -> Result<DataFrame, WeatherApiError> {
        let url = self.provider.forecast_url(&self.location)?;
        info!("requesting forecast from {}", url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| WeatherApiError::Transport {
                    url: url.clone(),
                    source: e,
                })?;

        let status = response.status();
        if !status.is_success() {
            warn!("forecast request to {} failed with status {}", url, status);
            return Err(match status {
                StatusCode::NOT_FOUND => WeatherApiError::WrongUrl { url },
                StatusCode::TOO_MANY_REQUESTS => WeatherApiError::TooManyRequests { url },
                _ => WeatherApiError::HttpStatus { url, status },
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let frame = self.provider.parse_forecast(&body)?;
        validate_forecast(&frame)?;

        info!("received forecast with {} rows", frame.height());
        self.cache = Some(CachedResult {
            frame: frame.clone(),
            retrieved_at: Utc::now(),
        });
        Ok(frame)
    }

    /// The location this client was constructed with.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The configured freshness window.
    pub fn max_age(&self) -> TimeDelta {
        self.max_age
    }

    /// The most recent successfully fetched forecast, if any.
    ///
    /// Remains available after a failed [`refresh`](WeatherApi::refresh),
    /// so callers can fall back to stale data when the upstream is down.
    pub fn cached(&self) -> Option<&DataFrame> {
        self.cache.as_ref().map(|c| &c.frame)
    }

    /// When the cached forecast was retrieved, if any.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.cache.as_ref().map(|c| c.retrieved_at)
    }
}
