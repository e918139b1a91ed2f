//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `csv` - CSV decoding into raw tables
//! - `http` - Axum endpoint for uploads
//! - `storage` - Transient upload storage (filesystem, in-memory)

pub mod csv;
pub mod http;
pub mod storage;

pub use csv::CsvTableReader;
pub use storage::{FileUploadStorage, InMemoryUploadStorage};
