use crate::weather_api::error::WeatherApiError;
use polars::prelude::*;

/// Name of the time-index column every forecast frame must carry.
pub const DATETIME_COL: &str = "datetime";

/// Checks the invariants the core relies on before a frame enters the cache:
/// the frame is non-empty and its time column holds non-null, strictly
/// ascending timestamps.
///
/// The time column is accepted as any dtype with an integer physical
/// representation, so providers may hand over epoch integers or a proper
/// Polars datetime column.
pub(crate) fn validate_forecast(frame: &DataFrame) -> Result<(), WeatherApiError> {
    if frame.height() == 0 {
        return Err(WeatherApiError::EmptyForecast);
    }

    let column = frame
        .column(DATETIME_COL)
        .map_err(|_| WeatherApiError::MissingTimeColumn {
            column: DATETIME_COL.to_string(),
        })?;

    // Gate on the dtype before casting: the default cast is non-strict and
    // would turn unparseable values into nulls instead of failing.
    let dtype = column.dtype();
    if !(dtype.is_integer() || dtype.is_temporal()) {
        return Err(WeatherApiError::InvalidTimeColumn {
            dtype: dtype.to_string(),
        });
    }
    let physical = column
        .cast(&DataType::Int64)
        .map_err(|_| WeatherApiError::InvalidTimeColumn {
            dtype: column.dtype().to_string(),
        })?;
    let timestamps = physical
        .i64()
        .map_err(|_| WeatherApiError::InvalidTimeColumn {
            dtype: column.dtype().to_string(),
        })?;

    let mut previous: Option<i64> = None;
    for (index, value) in timestamps.into_iter().enumerate() {
        let Some(timestamp) = value else {
            return Err(WeatherApiError::NullTimestamp { index });
        };
        if let Some(prev) = previous {
            if timestamp <= prev {
                return Err(WeatherApiError::UnsortedForecast { index });
            }
        }
        previous = Some(timestamp);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sorted_epoch_timestamps() {
        let frame = df!(
            DATETIME_COL => [1_700_000_000i64, 1_700_003_600, 1_700_007_200],
            "temperature_2m" => [10.5, 11.0, 11.2],
        )
        .unwrap();

        assert!(validate_forecast(&frame).is_ok());
    }

    #[test]
    fn accepts_datetime_dtype() {
        let frame = df!(
            DATETIME_COL => [1_700_000_000_000i64, 1_700_003_600_000],
            "ghi" => [0.0, 120.0],
        )
        .unwrap()
        .lazy()
        .with_column(col(DATETIME_COL).cast(DataType::Datetime(TimeUnit::Milliseconds, None)))
        .collect()
        .unwrap();

        assert!(validate_forecast(&frame).is_ok());
    }

    #[test]
    fn rejects_empty_frame() {
        let frame = df!(
            DATETIME_COL => Vec::<i64>::new(),
            "temperature_2m" => Vec::<f64>::new(),
        )
        .unwrap();

        assert!(matches!(
            validate_forecast(&frame),
            Err(WeatherApiError::EmptyForecast)
        ));
    }

    #[test]
    fn rejects_missing_time_column() {
        let frame = df!("temperature_2m" => [10.5, 11.0]).unwrap();

        assert!(matches!(
            validate_forecast(&frame),
            Err(WeatherApiError::MissingTimeColumn { .. })
        ));
    }

    #[test]
    fn rejects_non_temporal_time_column() {
        let frame = df!(
            DATETIME_COL => ["monday", "tuesday"],
            "temperature_2m" => [10.5, 11.0],
        )
        .unwrap();

        assert!(matches!(
            validate_forecast(&frame),
            Err(WeatherApiError::InvalidTimeColumn { .. })
        ));
    }

    #[test]
    fn rejects_float_time_column() {
        let frame = df!(
            DATETIME_COL => [1_700_000_000.5f64, 1_700_003_600.5],
            "temperature_2m" => [10.5, 11.0],
        )
        .unwrap();

        assert!(matches!(
            validate_forecast(&frame),
            Err(WeatherApiError::InvalidTimeColumn { .. })
        ));
    }

    #[test]
    fn rejects_null_timestamp() {
        let frame = df!(
            DATETIME_COL => [Some(1_700_000_000i64), None, Some(1_700_007_200)],
            "temperature_2m" => [10.5, 11.0, 11.2],
        )
        .unwrap();

        assert!(matches!(
            validate_forecast(&frame),
            Err(WeatherApiError::NullTimestamp { index: 1 })
        ));
    }

    #[test]
    fn rejects_unsorted_timestamps() {
        let frame = df!(
            DATETIME_COL => [1_700_003_600i64, 1_700_000_000, 1_700_007_200],
            "temperature_2m" => [10.5, 11.0, 11.2],
        )
        .unwrap();

        assert!(matches!(
            validate_forecast(&frame),
            Err(WeatherApiError::UnsortedForecast { index: 1 })
        ));
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let frame = df!(
            DATETIME_COL => [1_700_000_000i64, 1_700_000_000],
            "temperature_2m" => [10.5, 11.0],
        )
        .unwrap();

        assert!(matches!(
            validate_forecast(&frame),
            Err(WeatherApiError::UnsortedForecast { index: 1 })
        ));
    }
}
