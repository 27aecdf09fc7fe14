use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use crate::error::{PipelineError, Result};
use crate::mappers::{RawRow, RowMapper};
use crate::readers::CsvFormat;

/// Reads a delimited-text source into typed records by driving each parsed
/// row through a `RowMapper`. The reader is source-format-agnostic: the
/// format supplies the delimiter and the column names used as row keys.
pub struct CsvRecordReader;

impl CsvRecordReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every row of `path`, in source order.
    ///
    /// Rows the mapper drops (lenient mode) are logged and omitted; a
    /// mapping error aborts the read immediately. The file handle is scoped
    /// to this call and released on every exit path.
    pub fn read_all<M: RowMapper>(
        &self,
        path: &Path,
        format: &CsvFormat,
        mapper: &M,
    ) -> Result<Vec<M::Record>> {
        let file = File::open(path).map_err(|e| PipelineError::SourceUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Reading {}", path.display());

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(format.delimiter)
            .has_headers(format.skip_header_line)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let raw = result?;
            let row: RawRow = format
                .header_names
                .iter()
                .zip(raw.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();

            match mapper.map(&row)? {
                Some(record) => records.push(record),
                None => warn!("Skipping row: {raw:?}"),
            }
        }

        debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

impl Default for CsvRecordReader {
    fn default() -> Self {
        Self::new()
    }
}
