//! Semicolon-separated table reader shared by the rule and message loaders.
//!
//! Both tables are a header line followed by rows of `;`-separated fields.
//! A row that cannot be used is skipped and logged; only failures that make
//! the whole table unusable are returned as errors.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, RuleLoadError};

const DELIMITER: u8 = b';';

/// Outcome of loading one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// File path or label of the loaded source.
    pub source: String,
    pub loaded: usize,
    pub skipped: usize,
}

impl LoadSummary {
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Why a single row was rejected.
#[derive(Debug)]
pub(crate) struct RowRejected {
    pub field: &'static str,
    pub value: String,
}

impl RowRejected {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Open a table file, distinguishing a missing file from other I/O errors.
pub(crate) fn open(path: &Path) -> Result<std::fs::File> {
    if !path.exists() {
        return Err(RuleLoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::File::open(path).map_err(|e| RuleLoadError::io(path, e))
}

/// Read every row of a table with `parse_row`.
///
/// Rows with fewer than `min_fields` fields, or rejected by `parse_row`, are
/// skipped with a warning. Returns an error when the header is missing or
/// every data row was rejected. A header-only table loads as empty.
pub(crate) fn read_table<R: Read, T>(
    reader: R,
    source: &str,
    min_fields: usize,
    mut parse_row: impl FnMut(&csv::StringRecord) -> std::result::Result<T, RowRejected>,
) -> Result<(Vec<T>, LoadSummary)> {
    let path = PathBuf::from(source);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| RuleLoadError::csv(&path, e))?;
    if headers.iter().all(str::is_empty) {
        return Err(RuleLoadError::MissingHeader { path });
    }

    let mut rows = Vec::new();
    let mut summary = LoadSummary {
        source: source.to_string(),
        ..LoadSummary::default()
    };

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(RuleLoadError::csv(&path, e)),
            Err(e) => {
                let line = e.position().map(csv::Position::line);
                tracing::warn!(source, ?line, error = %e, "Skipping unreadable row");
                summary.skipped += 1;
                continue;
            }
        };
        let line = record.position().map(csv::Position::line);

        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() < min_fields {
            tracing::warn!(
                source,
                ?line,
                fields = record.len(),
                expected = min_fields,
                "Skipping row with missing fields"
            );
            summary.skipped += 1;
            continue;
        }

        match parse_row(&record) {
            Ok(row) => {
                rows.push(row);
                summary.loaded += 1;
            }
            Err(rejected) => {
                tracing::warn!(
                    source,
                    ?line,
                    field = rejected.field,
                    value = %rejected.value,
                    "Skipping row with invalid field"
                );
                summary.skipped += 1;
            }
        }
    }

    if rows.is_empty() {
        if summary.skipped > 0 {
            return Err(RuleLoadError::Empty {
                path,
                skipped: summary.skipped,
            });
        }
        tracing::warn!(source, "Table has no data rows");
        return Ok((rows, summary));
    }

    tracing::info!(
        source,
        loaded = summary.loaded,
        skipped = summary.skipped,
        "Loaded table"
    );
    Ok((rows, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(content: &str) -> Result<(Vec<String>, LoadSummary)> {
        read_table(content.as_bytes(), "test.csv", 2, |record| {
            let value = &record[1];
            if value == "bad" {
                return Err(RowRejected::new("value", value));
            }
            Ok(value.to_string())
        })
    }

    #[test]
    fn skips_short_and_rejected_rows() {
        let (rows, summary) = read("key;value\na;1\nb\nc;bad\nd; 4 \n").unwrap();
        assert_eq!(rows, vec!["1".to_string(), "4".to_string()]);
        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.skipped, 2);
        assert!(!summary.is_complete());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (rows, summary) = read("key;value\n\na;1\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert!(summary.is_complete());
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(read(""), Err(RuleLoadError::MissingHeader { .. })));
    }

    #[test]
    fn header_only_loads_no_rows() {
        let (rows, summary) = read("key;value\n").unwrap();
        assert!(rows.is_empty());
        assert_eq!(summary.loaded, 0);
        assert!(summary.is_complete());
    }

    #[test]
    fn every_row_rejected_is_empty() {
        assert!(matches!(
            read("key;value\na;bad\n"),
            Err(RuleLoadError::Empty { skipped: 1, .. })
        ));
    }
}
