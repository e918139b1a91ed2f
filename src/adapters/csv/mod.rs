//! CSV adapter - TableReader implementation backed by the `csv` crate.

mod csv_table_reader;

pub use csv_table_reader::CsvTableReader;
