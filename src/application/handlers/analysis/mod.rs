//! Analysis handlers.

mod analyze_projects;

pub use analyze_projects::{
    AnalyzeProjectsCommand, AnalyzeProjectsError, AnalyzeProjectsHandler, AnalyzeProjectsResult,
};
