pub mod csv_reader;
pub mod format;

pub use csv_reader::CsvRecordReader;
pub use format::CsvFormat;
