//! Reconciliation of the access sheet against the HR roster.
//!
//! The step order is load-bearing: forward-fill must see the sheet in
//! upload order before anything is discarded, self-violations must go
//! before the join, and the roster must be deduplicated before it is
//! used as a join target.

use std::collections::HashMap;

use crate::core::{EmployeeRecord, ReconciledViolation, ViolationRecord};

/// Forward-fill the shared header block (identifier, name, job code,
/// job description) down through consecutive blank rows. One employee's
/// violations share a single header block in the export; continuation
/// rows carry only the violation columns.
///
/// Sequential scan over rows in upload order; a later reordering would
/// change which header block a continuation row inherits.
pub fn forward_fill(records: &mut [ViolationRecord]) {
    let mut last_identifier = String::new();
    let mut last_name: Option<String> = None;
    let mut last_job_code: Option<String> = None;
    let mut last_job_description: Option<String> = None;

    for record in records.iter_mut() {
        if record.identifier.is_empty() {
            record.identifier = last_identifier.clone();
        } else {
            last_identifier = record.identifier.clone();
        }
        fill_field(&mut record.name, &mut last_name);
        fill_field(&mut record.job_code, &mut last_job_code);
        fill_field(&mut record.job_description, &mut last_job_description);
    }
}

fn fill_field(field: &mut Option<String>, carry: &mut Option<String>) {
    match field {
        Some(value) => *carry = Some(value.clone()),
        None => *field = carry.clone(),
    }
}

/// Drop rows whose violated code equals the held code. The comparison is
/// a literal inequality test: rows with a blank code on either side are
/// retained.
pub fn drop_self_violations(records: Vec<ViolationRecord>) -> Vec<ViolationRecord> {
    let before = records.len();
    let records: Vec<ViolationRecord> = records
        .into_iter()
        .filter(|r| !r.is_self_violation())
        .collect();
    log::debug!(
        "dropped {} self-violation rows, {} remain",
        before - records.len(),
        records.len()
    );
    records
}

/// Deduplicate the roster by identifier, first occurrence wins, order
/// preserved.
pub fn dedup_roster(roster: &[EmployeeRecord]) -> Vec<EmployeeRecord> {
    let mut seen: HashMap<&str, ()> = HashMap::with_capacity(roster.len());
    roster
        .iter()
        .filter(|employee| seen.insert(&employee.identifier, ()).is_none())
        .cloned()
        .collect()
}

/// Left-join violation rows to the deduplicated roster on identifier,
/// attaching the three organizational facets. Rows with an empty
/// identifier never match; their facets stay `None`.
pub fn join_roster(
    violations: Vec<ViolationRecord>,
    roster_unique: &[EmployeeRecord],
) -> Vec<ReconciledViolation> {
    let by_identifier: HashMap<&str, &EmployeeRecord> = roster_unique
        .iter()
        .map(|employee| (employee.identifier.as_str(), employee))
        .collect();

    violations
        .into_iter()
        .map(|violation| {
            let facets = if violation.identifier.is_empty() {
                None
            } else {
                by_identifier.get(violation.identifier.as_str()).copied()
            };
            ReconciledViolation::from_violation(violation, facets)
        })
        .collect()
}

/// Run the full reconciliation: forward-fill, self-violation drop,
/// roster dedup, left join. Pure function of its inputs.
pub fn reconcile(
    roster: &[EmployeeRecord],
    mut violations: Vec<ViolationRecord>,
) -> Vec<ReconciledViolation> {
    forward_fill(&mut violations);
    let violations = drop_self_violations(violations);
    let roster_unique = dedup_roster(roster);
    let reconciled = join_roster(violations, &roster_unique);
    log::debug!(
        "reconciled {} violation rows against {} unique roster rows",
        reconciled.len(),
        roster_unique.len()
    );
    reconciled
}
