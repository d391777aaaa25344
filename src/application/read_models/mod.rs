//! Read models
//!
//! The loaded report is a read-only view populated once at startup.

pub mod dependency_report;

pub use dependency_report::DependencyReport;
