//! Column schema for the two ERP export sheets.
//!
//! Header names are fixed by the upstream export format; both sheets are
//! addressed by these exact names after header trimming.

pub const COL_IDENTIFIER: &str = "PS No";
pub const COL_NAME: &str = "Name";
pub const COL_JOB_CODE: &str = "Emp Job Code";
pub const COL_JOB_DESCRIPTION: &str = "Emp Job Description";
pub const COL_CLUSTER: &str = "Cluster";
pub const COL_SPG: &str = "SPG";
pub const COL_BU: &str = "BU";
pub const COL_VIOLATION_JOB_CODE: &str = "Violation Job Code";
pub const COL_VIOLATED_JOB_DESCRIPTION: &str = "Violated Job Description";

/// Display names used in validation errors.
pub const ROSTER_SHEET_NAME: &str = "HR Master Sheet";
pub const ACCESS_SHEET_NAME: &str = "Access Data Sheet";

/// Spreadsheet exports emit this prefix for columns with a blank header.
pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed";

pub const REQUIRED_ROSTER_COLUMNS: [&str; 7] = [
    COL_IDENTIFIER,
    COL_NAME,
    COL_JOB_CODE,
    COL_JOB_DESCRIPTION,
    COL_CLUSTER,
    COL_SPG,
    COL_BU,
];

pub const REQUIRED_ACCESS_COLUMNS: [&str; 6] = [
    COL_IDENTIFIER,
    COL_NAME,
    COL_JOB_CODE,
    COL_JOB_DESCRIPTION,
    COL_VIOLATION_JOB_CODE,
    COL_VIOLATED_JOB_DESCRIPTION,
];

/// The header block shared by consecutive rows of one employee in the
/// access sheet; forward-filled during reconciliation.
pub const SHARED_HEADER_COLUMNS: [&str; 4] = [
    COL_IDENTIFIER,
    COL_NAME,
    COL_JOB_CODE,
    COL_JOB_DESCRIPTION,
];

/// Column order of the summary view, shared fields first.
pub const SUMMARY_COLUMNS: [&str; 9] = [
    COL_IDENTIFIER,
    COL_NAME,
    COL_JOB_CODE,
    COL_JOB_DESCRIPTION,
    COL_SPG,
    COL_BU,
    COL_CLUSTER,
    COL_VIOLATION_JOB_CODE,
    COL_VIOLATED_JOB_DESCRIPTION,
];
