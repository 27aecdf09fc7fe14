use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{PipelineError, Result};

/// One day of weather observations.
///
/// Only the day number and the three temperatures are range-constrained;
/// the remaining measurements are carried through as parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WeatherRecord {
    #[validate(range(min = 1, max = 31))]
    pub day: i32,

    #[validate(range(min = -50, max = 150))]
    pub max_temp: i32,

    #[validate(range(min = -50, max = 150))]
    pub min_temp: i32,

    #[validate(range(min = -50, max = 150))]
    pub avg_temp: i32,

    pub avg_dew_point: f64,
    pub precipitation: i32,
    pub prevailing_wind_dir: i32,
    pub avg_wind_speed: f64,
    pub wind_dir: i32,
    pub max_wind_speed: i32,
    pub sky_cover: f64,
    pub max_humidity: i32,
    pub min_humidity: i32,
    pub sea_level_pressure: f64,
}

impl WeatherRecord {
    /// Temperature spread for the day (non-negative for any validated record).
    pub fn spread(&self) -> i32 {
        self.max_temp - self.min_temp
    }

    pub fn validate_relationships(&self) -> Result<()> {
        if self.max_temp < self.min_temp {
            return Err(PipelineError::MalformedRow(format!(
                "Max temperature {} < min temperature {} on day {}",
                self.max_temp, self.min_temp, self.day
            )));
        }

        self.validate()?;
        Ok(())
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day {}: min={} max={} avg={} (spread={})",
            self.day,
            self.min_temp,
            self.max_temp,
            self.avg_temp,
            self.spread()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: i32, max_temp: i32, min_temp: i32) -> WeatherRecord {
        WeatherRecord {
            day,
            max_temp,
            min_temp,
            avg_temp: (max_temp + min_temp) / 2,
            avg_dew_point: 55.0,
            precipitation: 0,
            prevailing_wind_dir: 270,
            avg_wind_speed: 9.6,
            wind_dir: 270,
            max_wind_speed: 17,
            sky_cover: 1.6,
            max_humidity: 93,
            min_humidity: 23,
            sea_level_pressure: 1004.5,
        }
    }

    #[test]
    fn test_spread() {
        assert_eq!(record(1, 88, 59).spread(), 29);
        assert_eq!(record(2, 70, 70).spread(), 0);
    }

    #[test]
    fn test_valid_record() {
        assert!(record(15, 88, 59).validate_relationships().is_ok());
    }

    #[test]
    fn test_day_out_of_range() {
        assert!(record(0, 88, 59).validate_relationships().is_err());
        assert!(record(32, 88, 59).validate_relationships().is_err());
    }

    #[test]
    fn test_inverted_temperatures() {
        assert!(record(1, 59, 88).validate_relationships().is_err());
    }

    #[test]
    fn test_temperature_out_of_range() {
        assert!(record(1, 151, 59).validate_relationships().is_err());
        assert!(record(1, 88, -51).validate_relationships().is_err());
    }
}
