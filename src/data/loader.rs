use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use super::error::PipelineError;
use super::model::{Dataset, FieldValue, Record};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a dataset from a comma-delimited file with a header row.
///
/// The field schema is taken from the header line, in header order. Each
/// cell goes through best-effort type inference; a row whose field count
/// differs from the header is treated as malformed input.
pub fn load_csv(path: &Path) -> Result<Dataset, PipelineError> {
    let load_err = |source: csv::Error| PipelineError::Load {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(load_err)?;
    let columns: Vec<String> = reader
        .headers()
        .map_err(load_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(load_err)?;
        let mut fields = BTreeMap::new();
        for (column, raw) in columns.iter().zip(row.iter()) {
            fields.insert(column.clone(), infer_value(raw));
        }
        records.push(Record { fields });
    }

    debug!(
        "loaded {} records with {} columns from {}",
        records.len(),
        columns.len(),
        path.display()
    );
    Ok(Dataset::new(columns, records))
}

/// Best-effort inference for one raw cell: integer- and decimal-looking
/// strings become numbers, exactly `true`/`false` becomes a boolean,
/// the empty cell becomes null, everything else stays text.
fn infer_value(raw: &str) -> FieldValue {
    if raw.is_empty() {
        return FieldValue::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return FieldValue::Integer(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return FieldValue::Float(f);
    }
    if raw == "true" || raw == "false" {
        return FieldValue::Bool(raw == "true");
    }
    FieldValue::Text(raw.to_string())
}
