//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (score values, errors, codes)
//! - `prioritization` - Pure domain services for validating, scoring, and ranking projects

pub mod foundation;
pub mod prioritization;
