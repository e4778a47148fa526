//! Facet filtering over the reconciled dataset and the raw roster.
//!
//! One filter state drives every derived view: AND across the three
//! facets, OR within a facet's selected values. A facet with no
//! selection imposes no constraint.

use serde::{Deserialize, Serialize};

use crate::core::{EmployeeRecord, ReconciledViolation};

/// Selected values per organizational facet. Empty vectors select
/// everything for that facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetFilter {
    pub clusters: Vec<String>,
    pub spgs: Vec<String>,
    pub bus: Vec<String>,
}

impl FacetFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.clusters.is_empty() && self.spgs.is_empty() && self.bus.is_empty()
    }

    pub fn matches_violation(&self, record: &ReconciledViolation) -> bool {
        facet_matches(&self.clusters, record.cluster.as_deref())
            && facet_matches(&self.spgs, record.spg.as_deref())
            && facet_matches(&self.bus, record.bu.as_deref())
    }

    pub fn matches_employee(&self, record: &EmployeeRecord) -> bool {
        facet_matches(&self.clusters, record.cluster.as_deref())
            && facet_matches(&self.spgs, record.spg.as_deref())
            && facet_matches(&self.bus, record.bu.as_deref())
    }
}

/// A record with a blank facet value is excluded once that facet has a
/// selection, same as a non-matching value.
fn facet_matches(selected: &[String], value: Option<&str>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.iter().any(|s| s == v))
}

pub fn filter_violations(
    records: &[ReconciledViolation],
    filter: &FacetFilter,
) -> Vec<ReconciledViolation> {
    records
        .iter()
        .filter(|r| filter.matches_violation(r))
        .cloned()
        .collect()
}

pub fn filter_roster(records: &[EmployeeRecord], filter: &FacetFilter) -> Vec<EmployeeRecord> {
    records
        .iter()
        .filter(|r| filter.matches_employee(r))
        .cloned()
        .collect()
}

/// Distinct non-blank values per facet, sorted; what a filter control
/// would offer as options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetValues {
    pub clusters: Vec<String>,
    pub spgs: Vec<String>,
    pub bus: Vec<String>,
}

pub fn facet_values(roster: &[EmployeeRecord]) -> FacetValues {
    FacetValues {
        clusters: sorted_unique(roster.iter().filter_map(|r| r.cluster.as_deref())),
        spgs: sorted_unique(roster.iter().filter_map(|r| r.spg.as_deref())),
        bus: sorted_unique(roster.iter().filter_map(|r| r.bu.as_deref())),
    }
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut values: Vec<String> = values.map(String::from).collect();
    values.sort();
    values.dedup();
    values
}
