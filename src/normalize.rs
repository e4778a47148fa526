//! Identifier canonicalization and record extraction.
//!
//! Spreadsheet exports store the employee identifier inconsistently:
//! sometimes as text, sometimes as a number that round-trips through a
//! float and picks up a ".0" suffix. Both sheets get the same canonical
//! form so the join key compares directly.

use crate::config::{
    COL_BU, COL_CLUSTER, COL_IDENTIFIER, COL_JOB_CODE, COL_JOB_DESCRIPTION, COL_NAME,
    COL_SPG, COL_VIOLATED_JOB_DESCRIPTION, COL_VIOLATION_JOB_CODE,
};
use crate::core::{EmployeeRecord, RawTable, ViolationRecord};

/// Canonical identifier: the integer value rendered as a string.
/// Blank or unparseable input normalizes to the empty string; such rows
/// stay in the dataset but never match a roster identifier.
pub fn normalize_identifier(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return value.to_string();
    }
    // "1001.0" from a float-typed spreadsheet cell
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => (value.trunc() as i64).to_string(),
        _ => String::new(),
    }
}

fn cell(table: &RawTable, row: usize, column: &str) -> Option<String> {
    table.get(row, column).map(|v| v.to_string())
}

/// Extract roster records with normalized identifiers, in sheet order.
pub fn roster_from_table(table: &RawTable) -> Vec<EmployeeRecord> {
    (0..table.row_count())
        .map(|row| EmployeeRecord {
            identifier: normalize_identifier(table.get(row, COL_IDENTIFIER)),
            name: cell(table, row, COL_NAME),
            job_code: cell(table, row, COL_JOB_CODE),
            job_description: cell(table, row, COL_JOB_DESCRIPTION),
            cluster: cell(table, row, COL_CLUSTER),
            spg: cell(table, row, COL_SPG),
            bu: cell(table, row, COL_BU),
        })
        .collect()
}

/// Extract access records with normalized identifiers, in sheet order.
/// Blank shared-header cells stay blank here; forward-fill is a
/// reconciliation step.
pub fn violations_from_table(table: &RawTable) -> Vec<ViolationRecord> {
    (0..table.row_count())
        .map(|row| ViolationRecord {
            identifier: normalize_identifier(table.get(row, COL_IDENTIFIER)),
            name: cell(table, row, COL_NAME),
            job_code: cell(table, row, COL_JOB_CODE),
            job_description: cell(table, row, COL_JOB_DESCRIPTION),
            violated_job_code: cell(table, row, COL_VIOLATION_JOB_CODE),
            violated_job_description: cell(table, row, COL_VIOLATED_JOB_DESCRIPTION),
        })
        .collect()
}
