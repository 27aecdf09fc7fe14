use tracing::warn;

use crate::error::{PipelineError, Result};
use crate::mappers::{field, parse_field, parse_opt, RawRow, RowMapper};
use crate::models::WeatherRecord;
use crate::readers::CsvFormat;

pub const WEATHER_COLUMNS: [&str; 14] = [
    "Day", "MxT", "MnT", "AvT", "AvDP", "1HrP TPcpn", "PDir", "AvSp", "Dir", "MxS", "SkyC", "MxR",
    "Mn", "R AvSLP",
];

/// Comma-delimited with a header line, columns per `WEATHER_COLUMNS`.
pub fn csv_format() -> CsvFormat {
    CsvFormat::new(b',', &WEATHER_COLUMNS, true)
}

pub struct WeatherRowMapper {
    pub skip_invalid_rows: bool,
}

impl WeatherRowMapper {
    pub fn new(skip_invalid_rows: bool) -> Self {
        Self { skip_invalid_rows }
    }
}

impl RowMapper for WeatherRowMapper {
    type Record = WeatherRecord;

    fn validate(&self, row: &RawRow) -> bool {
        if row.is_empty() {
            return false;
        }

        for column in WEATHER_COLUMNS {
            if field(row, column).is_none() {
                warn!("Missing or empty required column: {column}");
                return false;
            }
        }

        let Some(day) = parse_opt::<i32>(row, "Day") else {
            return false;
        };
        if !(1..=31).contains(&day) {
            return false;
        }

        let (Some(max_temp), Some(min_temp), Some(avg_temp)) = (
            parse_opt::<i32>(row, "MxT"),
            parse_opt::<i32>(row, "MnT"),
            parse_opt::<i32>(row, "AvT"),
        ) else {
            return false;
        };
        for temp in [max_temp, min_temp, avg_temp] {
            if !(-50..=150).contains(&temp) {
                return false;
            }
        }
        if max_temp < min_temp {
            return false;
        }

        // The remaining measurements are parse-checked only. Range limits for
        // wind speed, sky cover and pressure are deliberately not enforced;
        // enforcing them would change which historical rows are accepted.
        for column in ["AvDP", "AvSp", "SkyC", "R AvSLP"] {
            if parse_opt::<f64>(row, column).is_none() {
                return false;
            }
        }
        for column in ["1HrP TPcpn", "PDir", "Dir", "MxS", "MxR", "Mn"] {
            if parse_opt::<i32>(row, column).is_none() {
                return false;
            }
        }

        true
    }

    fn map(&self, row: &RawRow) -> Result<Option<WeatherRecord>> {
        if !self.validate(row) {
            if self.skip_invalid_rows {
                warn!("Invalid weather row: {row:?}");
                return Ok(None);
            }
            return Err(PipelineError::MalformedRow(format!(
                "Invalid weather row: {row:?}"
            )));
        }

        Ok(Some(WeatherRecord {
            day: parse_field(row, "Day")?,
            max_temp: parse_field(row, "MxT")?,
            min_temp: parse_field(row, "MnT")?,
            avg_temp: parse_field(row, "AvT")?,
            avg_dew_point: parse_field(row, "AvDP")?,
            precipitation: parse_field(row, "1HrP TPcpn")?,
            prevailing_wind_dir: parse_field(row, "PDir")?,
            avg_wind_speed: parse_field(row, "AvSp")?,
            wind_dir: parse_field(row, "Dir")?,
            max_wind_speed: parse_field(row, "MxS")?,
            sky_cover: parse_field(row, "SkyC")?,
            max_humidity: parse_field(row, "MxR")?,
            min_humidity: parse_field(row, "Mn")?,
            sea_level_pressure: parse_field(row, "R AvSLP")?,
        }))
    }
}
