use tracing::warn;

use crate::error::{PipelineError, Result};
use crate::mappers::{field, parse_field, parse_opt, string_field, RawRow, RowMapper};
use crate::models::CountryRecord;
use crate::readers::CsvFormat;

pub const COUNTRY_COLUMNS: [&str; 8] = [
    "Name",
    "Capital",
    "Accession",
    "Population",
    "Area (km²)",
    "GDP (US$ M)",
    "HDI",
    "MEPs",
];

/// Semicolon-delimited with a header line, columns per `COUNTRY_COLUMNS`.
pub fn csv_format() -> CsvFormat {
    CsvFormat::new(b';', &COUNTRY_COLUMNS, true)
}

pub struct CountryRowMapper {
    pub skip_invalid_rows: bool,
}

impl CountryRowMapper {
    pub fn new(skip_invalid_rows: bool) -> Self {
        Self { skip_invalid_rows }
    }
}

/// Plain digits with at most one decimal point: rejects grouping separators
/// ("83,240,525") and multi-dot strings ("83.240.525") that a permissive
/// parser might accept.
fn has_plain_number_format(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.contains(',') {
        warn!("Number contains grouping separator: {trimmed}");
        return false;
    }

    if trimmed.chars().filter(|c| *c == '.').count() > 1 {
        warn!("Number contains multiple decimal points: {trimmed}");
        return false;
    }

    true
}

impl RowMapper for CountryRowMapper {
    type Record = CountryRecord;

    fn validate(&self, row: &RawRow) -> bool {
        if row.is_empty() {
            return false;
        }

        for column in COUNTRY_COLUMNS {
            if field(row, column).is_none() {
                warn!("Missing or empty required column: {column}");
                return false;
            }
        }

        let Some(name) = field(row, "Name") else {
            return false;
        };

        let Some(population_str) = field(row, "Population") else {
            return false;
        };
        if !has_plain_number_format(population_str) {
            warn!("Invalid population format for {name}: {population_str}");
            return false;
        }
        match population_str.parse::<i64>() {
            Ok(population) if population > 0 => {}
            _ => {
                warn!("Invalid population value for {name}: {population_str}");
                return false;
            }
        }

        match parse_opt::<f64>(row, "Area (km²)") {
            Some(area) if area > 0.0 => {}
            _ => {
                warn!("Invalid area for {name}");
                return false;
            }
        }

        match parse_opt::<i64>(row, "GDP (US$ M)") {
            Some(gdp) if gdp >= 0 => {}
            _ => {
                warn!("Invalid GDP for {name}");
                return false;
            }
        }

        match parse_opt::<f64>(row, "HDI") {
            Some(hdi) if (0.0..=1.0).contains(&hdi) => {}
            _ => {
                warn!("Invalid HDI for {name}");
                return false;
            }
        }

        match parse_opt::<i32>(row, "MEPs") {
            Some(meps) if meps > 0 => {}
            _ => {
                warn!("Invalid MEPs for {name}");
                return false;
            }
        }

        true
    }

    fn map(&self, row: &RawRow) -> Result<Option<CountryRecord>> {
        if !self.validate(row) {
            if self.skip_invalid_rows {
                warn!("Invalid country row: {row:?}");
                return Ok(None);
            }
            return Err(PipelineError::MalformedRow(format!(
                "Invalid country row: {row:?}"
            )));
        }

        Ok(Some(CountryRecord {
            name: string_field(row, "Name")?,
            capital: string_field(row, "Capital")?,
            accession: string_field(row, "Accession")?,
            population: parse_field(row, "Population")?,
            area: parse_field(row, "Area (km²)")?,
            gdp: parse_field(row, "GDP (US$ M)")?,
            hdi: parse_field(row, "HDI")?,
            meps: parse_field(row, "MEPs")?,
        }))
    }
}
