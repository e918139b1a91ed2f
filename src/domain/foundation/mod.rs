//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! prioritization domain.

mod errors;
mod score_value;

pub use errors::{ErrorCode, ValidationError};
pub use score_value::ScoreValue;
