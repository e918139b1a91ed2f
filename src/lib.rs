//! Project Prioritizer - CSV-driven project ranking service
//!
//! This crate validates an uploaded project list, scores each project with a
//! fixed weighted formula, classifies it into a priority tier, and returns the
//! list ranked from highest to lowest priority.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
