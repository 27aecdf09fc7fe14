/// Wire format of one delimited-text source: the delimiter, the column
/// names used to key raw rows, and whether the first line is a header to
/// skip. Passed explicitly into the reader at call time.
#[derive(Debug, Clone)]
pub struct CsvFormat {
    pub delimiter: u8,
    pub header_names: &'static [&'static str],
    pub skip_header_line: bool,
}

impl CsvFormat {
    pub const fn new(
        delimiter: u8,
        header_names: &'static [&'static str],
        skip_header_line: bool,
    ) -> Self {
        Self {
            delimiter,
            header_names,
            skip_header_line,
        }
    }
}
