use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::info;

use crate::error::AnalysisError;

pub const COMPANY_COLUMN: &str = "Company";
pub const EMAIL_COLUMN: &str = "Email";

/// Columns every roster export must carry. Names are case-sensitive,
/// matching the upstream HR export headers.
pub const REQUIRED_COLUMNS: &[&str] = &[COMPANY_COLUMN, EMAIL_COLUMN];

/// An employee roster materialized in memory. Rows and columns keep
/// their worksheet order; the table is read-only after load.
#[derive(Debug)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RecordTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Iterate one column top to bottom. Blank cells, and rows shorter
    /// than the header, yield `None`.
    pub fn column<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = Option<&'a str>> + 'a> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(index).and_then(|cell| cell.as_deref())),
        )
    }

    #[cfg(test)]
    pub(crate) fn from_rows(columns: &[&str], rows: Vec<Vec<Option<&str>>>) -> Self {
        RecordTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.map(str::to_string)).collect())
                .collect(),
        }
    }
}

/// Load the roster spreadsheet into a [`RecordTable`]. The first row
/// of the worksheet is the header; every later row is one record.
pub fn load_record_table(path: &Path, sheet: Option<&str>) -> Result<RecordTable, AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::FileNotFound(path.to_path_buf()));
    }

    info!(action = "open", component = "sheet_loader", path = ?path, "Opening roster spreadsheet");

    let mut workbook =
        open_workbook_auto(path).map_err(|e| AnalysisError::Parse(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => {
            let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
            sheet_names
                .first()
                .cloned()
                .ok_or_else(|| AnalysisError::Parse("workbook contains no sheets".to_string()))?
        }
    };

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        AnalysisError::Parse(format!("failed to read sheet '{}': {}", sheet_name, e))
    })?;

    let mut worksheet_rows = range.rows();
    let header = worksheet_rows.next().ok_or_else(|| {
        AnalysisError::Parse(format!("sheet '{}' has no header row", sheet_name))
    })?;

    let columns: Vec<String> = header
        .iter()
        .map(|cell| cell_to_value(cell).unwrap_or_default())
        .collect();

    let rows: Vec<Vec<Option<String>>> = worksheet_rows
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();

    info!(
        action = "loaded",
        component = "sheet_loader",
        sheet = %sheet_name,
        column_count = columns.len(),
        row_count = rows.len(),
        "Roster table materialized"
    );

    Ok(RecordTable { columns, rows })
}

/// Gate between load and aggregation: both required columns must be
/// present (all missing names reported together) and the table must
/// have at least one data row.
pub fn validate(table: &RecordTable) -> Result<(), AnalysisError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AnalysisError::Schema(missing));
    }

    if table.row_count() == 0 {
        return Err(AnalysisError::EmptyData);
    }

    Ok(())
}

fn cell_to_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        // Integral floats drop the trailing ".0" so numeric-looking
        // company names survive the spreadsheet round trip intact.
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(n.to_string())
            }
        }
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}
