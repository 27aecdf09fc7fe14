pub mod country;
pub mod weather;

pub use country::CountryRowMapper;
pub use weather::WeatherRowMapper;

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{PipelineError, Result};

/// A raw parsed row: column name to cell value, consumed by a mapper.
pub type RawRow = HashMap<String, String>;

/// Validates a raw row and converts it into a typed record.
///
/// `map` returns `Ok(None)` for an invalid row when `skip_invalid_rows` is
/// configured, and `Err(MalformedRow)` otherwise. A field that passes
/// validation but still fails conversion propagates `Err(Conversion)`
/// regardless of the lenience setting.
pub trait RowMapper {
    type Record;

    fn validate(&self, row: &RawRow) -> bool;

    fn map(&self, row: &RawRow) -> Result<Option<Self::Record>>;
}

/// Look up a column and trim it, treating blank cells as absent.
pub(crate) fn field<'a>(row: &'a RawRow, name: &str) -> Option<&'a str> {
    row.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Validation-side parse check.
pub(crate) fn parse_opt<T: FromStr>(row: &RawRow, name: &str) -> Option<T> {
    field(row, name)?.parse().ok()
}

/// Mapping-side parse, surfacing the offending field on failure.
pub(crate) fn parse_field<T: FromStr>(row: &RawRow, name: &str) -> Result<T> {
    let raw = field(row, name).ok_or_else(|| PipelineError::Conversion {
        field: name.to_string(),
        value: row.get(name).cloned().unwrap_or_default(),
    })?;

    raw.parse().map_err(|_| PipelineError::Conversion {
        field: name.to_string(),
        value: raw.to_string(),
    })
}

/// Mapping-side string field, trimmed.
pub(crate) fn string_field(row: &RawRow, name: &str) -> Result<String> {
    field(row, name)
        .map(|v| v.to_string())
        .ok_or_else(|| PipelineError::Conversion {
            field: name.to_string(),
            value: row.get(name).cloned().unwrap_or_default(),
        })
}
