//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableReader` - Decodes uploaded bytes into a raw table
//! - `UploadStorage` - Transient storage for an upload during one request

mod table_reader;
mod upload_storage;

pub use table_reader::{TableReadError, TableReader};
pub use upload_storage::{StorageError, StoredUpload, UploadStorage};
