use log::debug;

use super::error::PipelineError;
use super::model::{Dataset, FieldValue};

/// Rewrite a percentage-string column (`"95%"`) into its numeric value
/// (`95.0`).
///
/// Each record is copied with only the named field replaced: one trailing
/// `%` is stripped if present and the remainder parsed as a base-10 float.
/// A record whose field is missing, not text, or not a number after
/// stripping aborts the whole conversion. The input dataset is left
/// untouched; the result has the same length and order.
pub fn normalize_percentages(dataset: &Dataset, column: &str) -> Result<Dataset, PipelineError> {
    let conversion_err = |row: usize, detail: String| PipelineError::Conversion {
        row,
        column: column.to_string(),
        detail,
    };

    let mut records = Vec::with_capacity(dataset.records.len());
    for (row, record) in dataset.records.iter().enumerate() {
        let value = record
            .get(column)
            .ok_or_else(|| conversion_err(row, String::from("field is missing")))?;

        let raw = match value {
            FieldValue::Text(s) => s,
            other => {
                return Err(conversion_err(
                    row,
                    format!("expected text, found {} '{other}'", other.type_name()),
                ))
            }
        };

        let stripped = raw.strip_suffix('%').unwrap_or(raw);
        let number = stripped
            .parse::<f64>()
            .ok()
            .filter(|n| !n.is_nan())
            .ok_or_else(|| conversion_err(row, format!("'{raw}' is not a percentage")))?;

        records.push(record.with_field(column, FieldValue::Float(number)));
    }

    debug!("normalized '{column}' on {} records", records.len());
    Ok(Dataset::new(dataset.columns.clone(), records))
}
