//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod analysis;

// Re-export key types for convenience
pub use analysis::analysis_router;
pub use analysis::AnalysisAppState;
