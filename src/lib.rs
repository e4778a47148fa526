// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod filters;
pub mod io;
pub mod kpi;
pub mod normalize;
pub mod reconcile;
pub mod validate;
pub mod views;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, EmployeeRecord, RawTable, ReconciledViolation, ViolationRecord,
};

pub use crate::commands::{build_report, AnalyzeConfig};
pub use crate::filters::{facet_values, filter_roster, filter_violations, FacetFilter, FacetValues};
pub use crate::io::output::{
    create_writer, JsonWriter, MarkdownWriter, OutputFormat, ReportWriter, TerminalWriter,
};
pub use crate::kpi::{summarize, KpiSummary};
pub use crate::normalize::{normalize_identifier, roster_from_table, violations_from_table};
pub use crate::reconcile::{dedup_roster, drop_self_violations, forward_fill, reconcile};
pub use crate::validate::{require_columns, validate_columns, Validation};
pub use crate::views::flow::{build_flow, FlowEdge, FlowView};
pub use crate::views::hierarchy::{build_hierarchy, HierarchyGroup, HierarchyLeaf, HierarchyView};
pub use crate::views::summary::{blank_shared_fields, build_summary, SummaryRow, SummaryTable};
pub use crate::views::SummaryView;
