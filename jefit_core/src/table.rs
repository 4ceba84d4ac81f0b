//! Named-column string tables built from section lines.
//!
//! The first line of a section is its header; the rest are data rows. The
//! session section is split naively on `,` (its fields are known clean),
//! while the log section needs RFC 4180 quote-aware splitting because
//! exercise names and packed set logs can contain literal commas.

use crate::{Error, Result};

/// A table of string cells with named columns
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the index of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Find the index of a required column, or fail naming it
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::Parse(format!("missing required column {:?}", name)))
    }

    /// Look up a cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

/// Build the workout-session table from its section lines.
///
/// Header and data rows are split identically on `,`. A row whose field
/// count differs from the header's is rejected rather than silently
/// misaligned. An empty section yields an empty table.
pub fn build_session_table(lines: &[String]) -> Result<Table> {
    let Some((header, data)) = lines.split_first() else {
        return Ok(Table::default());
    };

    let columns: Vec<String> = header.split(',').map(str::to_string).collect();

    let mut rows = Vec::with_capacity(data.len());
    for line in data {
        let row: Vec<String> = line.split(',').map(str::to_string).collect();
        if row.len() != columns.len() {
            return Err(Error::RowArity {
                expected: columns.len(),
                found: row.len(),
                line: line.clone(),
            });
        }
        rows.push(row);
    }

    tracing::debug!("Built session table with {} rows", rows.len());
    Ok(Table { columns, rows })
}

/// Build the exercise-log table from its section lines.
///
/// Fields wrapped in double quotes may contain literal commas, so splitting
/// goes through a real CSV reader. Rows with a field count differing from
/// the header's surface as CSV errors. An empty section yields an empty
/// table.
pub fn build_log_table(lines: &[String]) -> Result<Table> {
    if lines.is_empty() {
        return Ok(Table::default());
    }

    let joined = lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(joined.as_bytes());

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Ok(Table::default()),
    };
    let columns: Vec<String> = header.iter().map(str::to_string).collect();

    let mut rows = Vec::with_capacity(lines.len() - 1);
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!("Built log table with {} rows", rows.len());
    Ok(Table { columns, rows })
}
