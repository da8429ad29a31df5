//! Spreadsheet and CSV readers.
//!
//! Both formats are treated as a header row followed by data rows. The link
//! column is the first one whose header mentions a link keyword, falling
//! back to the first column.

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::config::LINK_COLUMN_KEYWORDS;
use crate::error_handling::IngestionError;

/// Picks the link column from a header row.
pub(crate) fn select_link_column<S: AsRef<str>>(headers: &[S]) -> usize {
    headers
        .iter()
        .position(|header| {
            let lower = header.as_ref().to_lowercase();
            LINK_COLUMN_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .unwrap_or(0)
}

/// Reads every non-empty cell of the link column of a CSV file.
///
/// Rows that fail to decode, or are too short to reach the link column,
/// are skipped.
pub fn read_csv(path: &Path) -> Result<Vec<String>, IngestionError> {
    let file = File::open(path).map_err(|source| IngestionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| IngestionError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let headers: Vec<&str> = headers.iter().collect();
    let column = select_link_column(&headers);

    let links = reader
        .records()
        .filter_map(Result::ok)
        .filter_map(|record| {
            let value = record.get(column)?.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
        .collect();
    Ok(links)
}

/// Reads every non-empty cell of the link column of the first worksheet of
/// an `.xlsx` or `.xls` workbook.
pub fn read_spreadsheet(path: &Path) -> Result<Vec<String>, IngestionError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestionError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestionError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(|source| IngestionError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();
    let column = select_link_column(&headers);

    Ok(rows
        .filter_map(|row| row.get(column))
        .filter_map(cell_text)
        .collect())
}

/// Renders a cell as text; empty and error cells yield nothing.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        other => Some(other.to_string()),
    }
}
