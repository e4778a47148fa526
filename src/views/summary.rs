//! Deduplicated summary table: one header block per employee, repeated
//! violations listed beneath it with the shared fields blanked.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::ReconciledViolation;

/// One summary row, blank-filled. Column order matches
/// [`crate::config::SUMMARY_COLUMNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub identifier: String,
    pub name: String,
    pub job_code: String,
    pub job_description: String,
    pub spg: String,
    pub bu: String,
    pub cluster: String,
    pub violation_job_code: String,
    pub violated_job_description: String,
}

impl SummaryRow {
    /// Cell values in display column order.
    pub fn cells(&self) -> [&str; 9] {
        [
            &self.identifier,
            &self.name,
            &self.job_code,
            &self.job_description,
            &self.spg,
            &self.bu,
            &self.cluster,
            &self.violation_job_code,
            &self.violated_job_description,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Project the filtered dataset onto the nine summary columns: rows
/// with a missing identifier are dropped, every other missing cell
/// becomes an empty string. Row order is preserved; nothing is blanked
/// here, so this table also backs the KPI counts.
pub fn build_summary(records: &[ReconciledViolation]) -> SummaryTable {
    let rows = records
        .iter()
        .filter(|r| !r.identifier.is_empty())
        .map(|r| SummaryRow {
            identifier: r.identifier.clone(),
            name: blank_fill(&r.name),
            job_code: blank_fill(&r.job_code),
            job_description: blank_fill(&r.job_description),
            spg: blank_fill(&r.spg),
            bu: blank_fill(&r.bu),
            cluster: blank_fill(&r.cluster),
            violation_job_code: blank_fill(&r.violated_job_code),
            violated_job_description: blank_fill(&r.violated_job_description),
        })
        .collect();
    SummaryTable { rows }
}

fn blank_fill(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Display variant: within each identifier group, in original row
/// order, every row after the first has the seven shared fields
/// blanked, leaving only the two violation columns.
pub fn blank_shared_fields(table: &SummaryTable) -> SummaryTable {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let seen = occurrences.entry(row.identifier.as_str()).or_insert(0);
            *seen += 1;
            if *seen == 1 {
                row.clone()
            } else {
                SummaryRow {
                    violation_job_code: row.violation_job_code.clone(),
                    violated_job_description: row.violated_job_description.clone(),
                    ..SummaryRow::default()
                }
            }
        })
        .collect();
    SummaryTable { rows }
}
