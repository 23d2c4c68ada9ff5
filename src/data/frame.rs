//! CSV dataset parsing and feature encoding

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// An immutable tabular dataset parsed from CSV
///
/// Cells are kept as raw strings until `split_label` encodes them; encoding
/// decisions are per-column, so the whole table must be in memory first.
#[derive(Debug, Clone)]
pub struct DataFrame {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataFrame {
    /// Parse a CSV file with a header row
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut lines = content.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| Error::Dataset("empty dataset file".to_string()))?;
        let columns = parse_record(header);

        let mut rows = Vec::new();
        for (lineno, line) in lines.enumerate() {
            let record = parse_record(line);
            if record.len() != columns.len() {
                return Err(Error::Dataset(format!(
                    "row {} has {} fields, header has {}",
                    lineno + 2,
                    record.len(),
                    columns.len()
                )));
            }
            rows.push(record);
        }

        Ok(Self { columns, rows })
    }

    /// Column names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Separate the label column from the features.
    ///
    /// Returns `(X, y)`: the encoded feature matrix (row-major, one `f64`
    /// per cell) and the 0/1 label vector. Label cells must be numeric;
    /// any nonzero value maps to 1.
    pub fn split_label(&self, label: &str) -> Result<(Vec<Vec<f64>>, Vec<u8>)> {
        let label_idx = self
            .column_index(label)
            .ok_or_else(|| Error::ColumnNotFound(label.to_string()))?;

        let mut labels = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let cell = row[label_idx].trim();
            let value: f64 = cell.parse().map_err(|_| {
                Error::Dataset(format!(
                    "label '{cell}' in row {} is not numeric",
                    i + 2
                ))
            })?;
            labels.push(u8::from(value != 0.0));
        }

        let feature_idx: Vec<usize> = (0..self.columns.len()).filter(|&i| i != label_idx).collect();
        let mut matrix: Vec<Vec<f64>> = (0..self.rows.len())
            .map(|_| Vec::with_capacity(feature_idx.len()))
            .collect();
        for &col in &feature_idx {
            let encoded = self.encode_column(col);
            for (row, value) in matrix.iter_mut().zip(encoded) {
                row.push(value);
            }
        }

        Ok((matrix, labels))
    }

    /// Encode one feature column to `f64` values.
    ///
    /// A column where every non-empty cell parses as `f64` is numeric, with
    /// empty cells encoded as 0.0. Any other column is categorical and is
    /// label-encoded by sorted distinct value, so the encoding is independent
    /// of row order.
    fn encode_column(&self, col: usize) -> Vec<f64> {
        let cells: Vec<&str> = self.rows.iter().map(|r| r[col].trim()).collect();

        let numeric: Option<Vec<f64>> = cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    Some(0.0)
                } else {
                    c.parse::<f64>().ok()
                }
            })
            .collect();

        if let Some(values) = numeric {
            return values;
        }

        let distinct: BTreeSet<&str> = cells.iter().copied().collect();
        let codes: Vec<&str> = distinct.into_iter().collect();
        cells
            .iter()
            .map(|c| codes.iter().position(|d| d == c).unwrap_or(0) as f64)
            .collect()
    }
}

/// Split one CSV record into fields, honoring double-quoted fields with
/// embedded commas and `""` escapes.
fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            '\r' => {}
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}
