//! Storage Adapters
//!
//! Implementations of the UploadStorage port for holding an upload while a
//! request is processed.
//!
//! ## Available Adapters
//!
//! - **FileUploadStorage** - Writes uploads to files under a base directory
//! - **InMemoryUploadStorage** - Keeps uploads in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileUploadStorage, InMemoryUploadStorage};
//!
//! // Production: file-based storage
//! let storage = FileUploadStorage::new("/tmp/prioritizer-uploads");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryUploadStorage::new();
//! ```

mod file_upload_storage;
mod in_memory_upload_storage;

pub use file_upload_storage::FileUploadStorage;
pub use in_memory_upload_storage::InMemoryUploadStorage;
