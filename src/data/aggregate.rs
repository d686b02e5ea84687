use std::cmp::Ordering;

use super::error::PipelineError;
use super::model::{Dataset, Record};

/// Return the record holding the largest numeric value of `column`.
///
/// The scan replaces its candidate only on a strictly greater value, so
/// when several records share the maximum the earliest one wins. Integer
/// and float fields both count as numeric; anything else is a field error.
pub fn max_by_field(dataset: &Dataset, column: &str) -> Result<Record, PipelineError> {
    extreme_by_field(dataset, column, "max_by_field", Ordering::Greater)
}

/// Return the record holding the smallest numeric value of `column`.
/// Mirror image of [`max_by_field`]: ties go to the earliest record.
pub fn min_by_field(dataset: &Dataset, column: &str) -> Result<Record, PipelineError> {
    extreme_by_field(dataset, column, "min_by_field", Ordering::Less)
}

fn extreme_by_field(
    dataset: &Dataset,
    column: &str,
    operation: &'static str,
    keep: Ordering,
) -> Result<Record, PipelineError> {
    dataset.ensure_column(column)?;
    if dataset.records.is_empty() {
        return Err(PipelineError::EmptyInput { operation });
    }

    let mut best_row = 0;
    let mut best_value = numeric_field(&dataset.records[0], column, 0)?;
    for (row, record) in dataset.records.iter().enumerate().skip(1) {
        let value = numeric_field(record, column, row)?;
        // Equal values never displace the current candidate.
        if value.total_cmp(&best_value) == keep {
            best_value = value;
            best_row = row;
        }
    }

    Ok(dataset.records[best_row].clone())
}

fn numeric_field(record: &Record, column: &str, row: usize) -> Result<f64, PipelineError> {
    let value = record.get(column).ok_or_else(|| PipelineError::Field {
        column: column.to_string(),
        reason: format!("missing on row {row}"),
    })?;
    value.as_f64().ok_or_else(|| PipelineError::Field {
        column: column.to_string(),
        reason: format!("row {row} holds {} '{value}', not a number", value.type_name()),
    })
}
