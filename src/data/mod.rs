pub mod creature;
pub mod normalize;
pub mod type_chart;
pub mod validate;

use csv::StringRecord;

use crate::error::{Result, TeamError};

/// Position of `column` in a CSV header row.
pub(crate) fn column_index(headers: &StringRecord, column: &str, source_name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| TeamError::MissingColumn {
            source_name: source_name.to_string(),
            column: column.to_string(),
        })
}
