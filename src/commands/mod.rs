//! CLI command implementations.

pub mod analyze;

pub use analyze::{build_report, handle_analyze, AnalyzeConfig};
