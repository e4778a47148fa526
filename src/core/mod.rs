pub mod errors;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::filters::FacetFilter;
use crate::kpi::KpiSummary;
use crate::views::flow::FlowView;
use crate::views::hierarchy::HierarchyView;
use crate::views::summary::SummaryTable;
use crate::views::SummaryView;

pub use table::RawTable;

/// One row of the HR master sheet after identifier normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Canonical identifier: integer rendered as a string, or empty when
    /// the source cell was blank or unparseable.
    pub identifier: String,
    pub name: Option<String>,
    pub job_code: Option<String>,
    pub job_description: Option<String>,
    pub cluster: Option<String>,
    pub spg: Option<String>,
    pub bu: Option<String>,
}

/// One row of the access data sheet after identifier normalization and
/// forward-fill of the shared header block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub identifier: String,
    pub name: Option<String>,
    pub job_code: Option<String>,
    pub job_description: Option<String>,
    pub violated_job_code: Option<String>,
    pub violated_job_description: Option<String>,
}

impl ViolationRecord {
    /// A row where the violated code equals the held code is not a real
    /// violation. Blank codes never compare equal to anything, so rows
    /// with a missing code on either side are kept.
    pub fn is_self_violation(&self) -> bool {
        match (&self.violated_job_code, &self.job_code) {
            (Some(violated), Some(held)) => violated == held,
            _ => false,
        }
    }
}

/// A violation row enriched with the organizational facets of its
/// employee, looked up from the deduplicated roster. Facets stay `None`
/// when the identifier has no roster match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconciledViolation {
    pub identifier: String,
    pub name: Option<String>,
    pub job_code: Option<String>,
    pub job_description: Option<String>,
    pub violated_job_code: Option<String>,
    pub violated_job_description: Option<String>,
    pub cluster: Option<String>,
    pub spg: Option<String>,
    pub bu: Option<String>,
}

impl ReconciledViolation {
    pub fn from_violation(violation: ViolationRecord, facets: Option<&EmployeeRecord>) -> Self {
        Self {
            identifier: violation.identifier,
            name: violation.name,
            job_code: violation.job_code,
            job_description: violation.job_description,
            violated_job_code: violation.violated_job_code,
            violated_job_description: violation.violated_job_description,
            cluster: facets.and_then(|e| e.cluster.clone()),
            spg: facets.and_then(|e| e.spg.clone()),
            bu: facets.and_then(|e| e.bu.clone()),
        }
    }
}

/// The full structured result of one analysis run: everything the
/// writers need to render, and nothing that varies between identical
/// runs, so repeated runs serialize byte-identically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub filter: FacetFilter,
    pub view: SummaryView,
    pub kpis: KpiSummary,
    /// `None` is the no-data state: nothing qualified for the flow view.
    pub flow: Option<FlowView>,
    /// `None` is the no-data state for the hierarchy view.
    pub hierarchy: Option<HierarchyView>,
    /// Violations projection, shared fields blanked after the first row
    /// per employee.
    pub summary: SummaryTable,
    /// Employees projection: the filtered roster.
    pub roster: Vec<EmployeeRecord>,
}
