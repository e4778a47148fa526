//! CSV ingestion: one sheet per file, header row required.

use std::path::Path;

use crate::core::errors::{Error, Result};
use crate::core::RawTable;

/// Read a CSV sheet into a [`RawTable`]. Headers are trimmed by the
/// table constructor; cell values keep their whitespace, but a cell
/// that is empty after trimming counts as blank.
pub fn read_table(path: &Path, sheet_name: &str) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if headers.is_empty() {
        return Err(Error::EmptyTable(sheet_name.to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|cell| {
                    if cell.trim().is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect(),
        );
    }

    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_headers_and_blank_cells() {
        let file = write_csv("PS No , Name\n1001,Ada\n,\n1002,Bob\n");
        let table = read_table(file.path(), "HR Master Sheet").unwrap();
        assert_eq!(table.columns(), &["PS No", "Name"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.get(0, "PS No"), Some("1001"));
        assert_eq!(table.get(1, "PS No"), None);
        assert_eq!(table.get(2, "Name"), Some("Bob"));
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let file = write_csv("A,B,C\n1,2\n");
        let table = read_table(file.path(), "Access Data Sheet").unwrap();
        assert_eq!(table.get(0, "C"), None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/nonexistent/sheet.csv");
        assert!(read_table(path, "HR Master Sheet").is_err());
    }
}
