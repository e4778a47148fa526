//! Flow aggregation: role → violated-role edges weighted by distinct
//! employees, the data behind a sankey rendering.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::ReconciledViolation;

/// A directed edge between two label indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    /// Distinct employees holding this (role, violated role) pair.
    pub employees: usize,
}

/// Node labels plus weighted edges. Source labels carry the employee
/// count ("Clerk (2)"); target labels are the bare violated role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowView {
    pub labels: Vec<String>,
    pub edges: Vec<FlowEdge>,
}

/// Build the flow view, or `None` when no row qualifies.
///
/// Rows missing identifier, job description, or violated description are
/// dropped, the remaining (identifier, role, violated role) triples are
/// deduplicated, and edges count distinct identifiers per pair. All
/// ordering is first-seen, so identical input yields identical output.
pub fn build_flow(records: &[ReconciledViolation]) -> Option<FlowView> {
    let mut seen_triples: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut pair_order: Vec<(&str, &str)> = Vec::new();
    let mut pair_counts: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let (Some(role), Some(violated)) = (
            record.job_description.as_deref(),
            record.violated_job_description.as_deref(),
        ) else {
            continue;
        };
        if record.identifier.is_empty() {
            continue;
        }
        if !seen_triples.insert((record.identifier.as_str(), role, violated)) {
            continue;
        }
        let pair = (role, violated);
        match pair_counts.get_mut(&pair) {
            Some(count) => *count += 1,
            None => {
                pair_order.push(pair);
                pair_counts.insert(pair, 1);
            }
        }
    }

    if pair_order.is_empty() {
        return None;
    }

    // One shared index space: all source labels first, then all target
    // labels, first-seen order, deduplicated.
    let source_labels: Vec<String> = pair_order
        .iter()
        .map(|pair| format!("{} ({})", pair.0, pair_counts[pair]))
        .collect();
    let target_labels: Vec<&str> = pair_order.iter().map(|&(_, violated)| violated).collect();

    let mut labels: Vec<String> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();
    for label in source_labels.iter().cloned().chain(target_labels.iter().map(|l| l.to_string())) {
        if !index_of.contains_key(&label) {
            index_of.insert(label.clone(), labels.len());
            labels.push(label);
        }
    }

    let edges = pair_order
        .iter()
        .enumerate()
        .map(|(i, pair)| FlowEdge {
            source: index_of[&source_labels[i]],
            target: index_of[target_labels[i]],
            employees: pair_counts[pair],
        })
        .collect();

    Some(FlowView { labels, edges })
}
