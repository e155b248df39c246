use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("latitude {0} is outside the range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside the range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("'{0}' is not a valid IANA timezone")]
    InvalidTimezone(String),
}

/// An immutable geographic point a forecast is requested for.
///
/// # Examples
///
/// ```
/// use weathercast::Location;
///
/// let berlin = Location::new(52.0, 13.0, "Europe/Berlin", 34.0).unwrap();
/// assert_eq!(berlin.latitude(), 52.0);
/// assert_eq!(berlin.timezone().name(), "Europe/Berlin");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    timezone: Tz,
    altitude: f64,
}

impl Location {
    /// Creates a validated `Location`.
    ///
    /// # Arguments
    ///
    /// * `latitude` - degrees north, must be within [-90, 90]
    /// * `longitude` - degrees east, must be within [-180, 180]
    /// * `timezone` - IANA timezone name, e.g. "Europe/Berlin" or "UTC"
    /// * `altitude` - meters above sea level
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] when a coordinate is out of range or the
    /// timezone name is unknown.
    pub fn new(
        latitude: f64,
        longitude: f64,
        timezone: &str,
        altitude: f64,
    ) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange(longitude));
        }
        let timezone = timezone
            .parse::<Tz>()
            .map_err(|_| LocationError::InvalidTimezone(timezone.to_string()))?;

        Ok(Self {
            latitude,
            longitude,
            timezone,
            altitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let location = Location::new(52.0, 13.0, "Europe/Berlin", 34.0).unwrap();
        assert_eq!(location.latitude(), 52.0);
        assert_eq!(location.longitude(), 13.0);
        assert_eq!(location.altitude(), 34.0);
        assert_eq!(location.timezone(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn accepts_boundary_coordinates() {
        assert!(Location::new(90.0, 180.0, "UTC", 0.0).is_ok());
        assert!(Location::new(-90.0, -180.0, "UTC", -430.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = Location::new(90.5, 0.0, "UTC", 0.0).unwrap_err();
        assert_eq!(err, LocationError::LatitudeOutOfRange(90.5));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = Location::new(0.0, -180.1, "UTC", 0.0).unwrap_err();
        assert_eq!(err, LocationError::LongitudeOutOfRange(-180.1));
    }

    #[test]
    fn rejects_unknown_timezone() {
        let err = Location::new(0.0, 0.0, "Mars/Olympus_Mons", 0.0).unwrap_err();
        assert_eq!(
            err,
            LocationError::InvalidTimezone("Mars/Olympus_Mons".to_string())
        );
    }
}
