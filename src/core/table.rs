//! Column-addressed tabular data as parsed from a spreadsheet export.
//!
//! Cells are `Option<String>`: a blank cell in the export becomes `None`,
//! matching how forward-fill and blank-fill treat missing values. Columns
//! are always addressed by header name, never by position.

/// A raw sheet: ordered headers plus rows of optional cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Build a table from headers and rows. Headers are trimmed of
    /// surrounding whitespace; rows shorter than the header list are
    /// padded with missing cells, longer rows are truncated.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(|c| c.trim().to_string()).collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by trimmed header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell value at (row, column name); `None` for blank cells or
    /// unknown columns.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Remove columns whose header carries the spreadsheet-export
    /// placeholder prefix for blank headers ("Unnamed: 3" and friends).
    pub fn drop_unnamed_columns(&mut self, prefix: &str) {
        let keep: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.starts_with(prefix))
            .map(|(i, _)| i)
            .collect();
        if keep.len() == self.columns.len() {
            return;
        }
        self.columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        for row in &mut self.rows {
            *row = keep.iter().map(|&i| row[i].take()).collect();
        }
    }
}
