//! Derived projections of the filtered reconciled dataset.
//!
//! Each builder is a pure function: it reads the filtered records and
//! returns a fresh view, or the no-data state (`None` at the call
//! sites) when nothing qualifies. One view being empty never affects
//! the others.

pub mod flow;
pub mod hierarchy;
pub mod summary;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which tabular projection the summary section shows. Session state,
/// not data state: toggling it never touches the reconciled dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SummaryView {
    /// The filtered roster.
    Employees,
    /// The deduplicated violation summary table.
    #[default]
    Violations,
}
