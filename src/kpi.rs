//! Scalar metrics over the roster and the filtered summary table.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::EmployeeRecord;
use crate::views::summary::SummaryTable;

/// Sentinel for the most-violated role when no violations survive
/// filtering.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Distinct identifiers in the full roster, regardless of filters.
    pub total_employees: usize,
    /// Distinct identifiers in the filtered summary table.
    pub employees_with_violations: usize,
    /// Row count of the filtered summary table.
    pub total_violations: usize,
    /// "<description> (<count>)" for the most frequent violated role,
    /// or the `N/A` sentinel when the summary is empty.
    pub most_violated_role: String,
}

/// Compute the four KPIs. The roster is the full normalized roster; the
/// summary is the filtered, unblanked summary table.
pub fn summarize(roster: &[EmployeeRecord], summary: &SummaryTable) -> KpiSummary {
    let total_employees = distinct_identifiers(roster.iter().map(|r| r.identifier.as_str()));
    let employees_with_violations =
        distinct_identifiers(summary.rows.iter().map(|r| r.identifier.as_str()));

    KpiSummary {
        total_employees,
        employees_with_violations,
        total_violations: summary.len(),
        most_violated_role: most_violated_role(summary),
    }
}

fn distinct_identifiers<'a>(identifiers: impl Iterator<Item = &'a str>) -> usize {
    identifiers
        .filter(|id| !id.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Single pass over the summary rows; ties resolve to the description
/// whose maximum count was reached first in encounter order. Blank
/// descriptions are not counted.
fn most_violated_role(summary: &SummaryTable) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for row in &summary.rows {
        let description = row.violated_job_description.as_str();
        if description.is_empty() {
            continue;
        }
        match counts.get_mut(description) {
            Some(count) => *count += 1,
            None => {
                order.push(description);
                counts.insert(description, 1);
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &description in &order {
        let count = counts[description];
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((description, count));
        }
    }
    match best {
        Some((description, count)) => format!("{description} ({count})"),
        None => NOT_APPLICABLE.to_string(),
    }
}
