//! Schema validation for the two input sheets.
//!
//! Validation is an explicit outcome checked by the caller, not a
//! control-flow escape: the pipeline inspects the result and halts with
//! the exact missing-column list before any reconciliation work.

use crate::core::errors::{Error, Result};
use crate::core::RawTable;

/// Outcome of checking one sheet against its required column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    MissingColumns(Vec<String>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Check that every required column is present, collecting the missing
/// ones in required-list order.
pub fn validate_columns(table: &RawTable, required: &[&str]) -> Validation {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect();
    if missing.is_empty() {
        Validation::Valid
    } else {
        Validation::MissingColumns(missing)
    }
}

/// Validate a named sheet, turning a failure into the terminal
/// missing-columns error for this session.
pub fn require_columns(table: &RawTable, required: &[&str], sheet_name: &str) -> Result<()> {
    match validate_columns(table, required) {
        Validation::Valid => Ok(()),
        Validation::MissingColumns(columns) => {
            log::warn!("{sheet_name} is missing columns: {}", columns.join(", "));
            Err(Error::missing_columns(sheet_name, columns))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REQUIRED_ACCESS_COLUMNS;

    fn table_with(columns: &[&str]) -> RawTable {
        RawTable::new(columns.iter().map(|c| c.to_string()).collect(), vec![])
    }

    #[test]
    fn all_columns_present_is_valid() {
        let table = table_with(&REQUIRED_ACCESS_COLUMNS);
        assert_eq!(
            validate_columns(&table, &REQUIRED_ACCESS_COLUMNS),
            Validation::Valid
        );
    }

    #[test]
    fn missing_columns_are_reported_in_required_order() {
        let table = table_with(&["PS No", "Emp Job Code"]);
        let validation = validate_columns(&table, &REQUIRED_ACCESS_COLUMNS);
        assert_eq!(
            validation,
            Validation::MissingColumns(vec![
                "Name".to_string(),
                "Emp Job Description".to_string(),
                "Violation Job Code".to_string(),
                "Violated Job Description".to_string(),
            ])
        );
    }

    #[test]
    fn require_columns_surfaces_the_sheet_name() {
        let table = table_with(&["PS No"]);
        let err = require_columns(&table, &["PS No", "BU"], "HR Master Sheet").unwrap_err();
        assert_eq!(
            err.to_string(),
            "HR Master Sheet file is missing columns: BU"
        );
    }

    #[test]
    fn whitespace_padded_headers_match_after_trimming() {
        let table = RawTable::new(
            vec![" PS No ".to_string(), "Name\t".to_string()],
            vec![],
        );
        assert!(validate_columns(&table, &["PS No", "Name"]).is_valid());
    }
}
