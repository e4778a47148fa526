//! Hierarchical aggregation: role → violated-role containment counts,
//! the data behind a treemap rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::ReconciledViolation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyLeaf {
    pub label: String,
    /// Row occurrences, not distinct employees; every qualifying row
    /// contributes a uniform unit weight.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyGroup {
    pub label: String,
    pub total: usize,
    pub children: Vec<HierarchyLeaf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyView {
    pub groups: Vec<HierarchyGroup>,
}

/// Build the two-level containment hierarchy, or `None` when no row has
/// both descriptions. Groups and leaves keep first-seen order.
pub fn build_hierarchy(records: &[ReconciledViolation]) -> Option<HierarchyView> {
    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, (Vec<&str>, HashMap<&str, usize>)> = HashMap::new();

    for record in records {
        let (Some(role), Some(violated)) = (
            record.job_description.as_deref(),
            record.violated_job_description.as_deref(),
        ) else {
            continue;
        };
        let entry = groups.entry(role).or_insert_with(|| {
            group_order.push(role);
            (Vec::new(), HashMap::new())
        });
        match entry.1.get_mut(violated) {
            Some(count) => *count += 1,
            None => {
                entry.0.push(violated);
                entry.1.insert(violated, 1);
            }
        }
    }

    if group_order.is_empty() {
        return None;
    }

    let groups = group_order
        .iter()
        .map(|role| {
            let (leaf_order, counts) = &groups[role];
            let children: Vec<HierarchyLeaf> = leaf_order
                .iter()
                .map(|violated| HierarchyLeaf {
                    label: violated.to_string(),
                    count: counts[violated],
                })
                .collect();
            HierarchyGroup {
                label: role.to_string(),
                total: children.iter().map(|c| c.count).sum(),
                children,
            }
        })
        .collect();

    Some(HierarchyView { groups })
}
