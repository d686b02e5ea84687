use std::fs;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use log::info;

use super::error::PipelineError;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// CSV serialization
// ---------------------------------------------------------------------------

/// Render a dataset as comma-delimited text: header line first, every
/// field double-quoted (embedded quotes doubled), rows separated by a
/// single newline, nothing after the last row.
///
/// A dataset with zero records has no rows to derive a header from and is
/// an empty-input error.
pub fn to_delimited_text(dataset: &Dataset) -> Result<String, PipelineError> {
    if dataset.records.is_empty() {
        return Err(PipelineError::EmptyInput {
            operation: "to_delimited_text",
        });
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(&dataset.columns)?;
    for record in &dataset.records {
        writer.write_record(
            dataset
                .columns
                .iter()
                .map(|column| record.get(column).map(|v| v.to_string()).unwrap_or_default()),
        )?;
    }

    let bytes = writer.into_inner().map_err(|e| PipelineError::Render {
        detail: e.to_string(),
    })?;
    let mut text = String::from_utf8(bytes).map_err(|e| PipelineError::Render {
        detail: e.to_string(),
    })?;

    // The writer terminates every row; the contract wants none after the last.
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Persist a dataset as CSV at `path`, byte-for-byte the text of
/// [`to_delimited_text`].
pub fn save_csv(dataset: &Dataset, path: &Path) -> Result<(), PipelineError> {
    let text = to_delimited_text(dataset)?;
    fs::write(path, text.as_bytes()).map_err(|source| PipelineError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} records to {}", dataset.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::loader::load_csv;
    use super::super::model::{FieldValue, Record};
    use super::*;

    #[test]
    fn test_renders_quoted_rows_without_trailing_newline() {
        let dataset = Dataset::new(
            vec!["Faktor".into(), "Value".into()],
            vec![
                Record::from_pairs([
                    ("Faktor", FieldValue::Text("A".into())),
                    ("Value", FieldValue::Integer(70)),
                ]),
                Record::from_pairs([
                    ("Faktor", FieldValue::Text("B \"x\"".into())),
                    ("Value", FieldValue::Float(12.5)),
                ]),
            ],
        );

        let text = to_delimited_text(&dataset).unwrap();
        assert_eq!(
            text,
            "\"Faktor\",\"Value\"\n\"A\",\"70\"\n\"B \"\"x\"\"\",\"12.5\""
        );
    }

    #[test]
    fn test_header_follows_schema_order_not_map_order() {
        let dataset = Dataset::new(
            vec!["Value".into(), "Faktor".into()],
            vec![Record::from_pairs([
                ("Faktor", FieldValue::Text("A".into())),
                ("Value", FieldValue::Integer(1)),
            ])],
        );
        let text = to_delimited_text(&dataset).unwrap();
        assert_eq!(text, "\"Value\",\"Faktor\"\n\"1\",\"A\"");
    }

    #[test]
    fn test_empty_dataset_is_an_empty_input_error() {
        let empty = Dataset::new(vec!["Value".into()], Vec::new());
        let err = to_delimited_text(&empty).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput { .. }));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dataset = Dataset::new(
            vec!["Faktor".into(), "anzahl".into(), "quote".into(), "aktiv".into(), "frei".into()],
            vec![
                Record::from_pairs([
                    ("Faktor", FieldValue::Text("Migrationshintergrund".into())),
                    ("anzahl", FieldValue::Integer(12)),
                    ("quote", FieldValue::Float(95.0)),
                    ("aktiv", FieldValue::Bool(true)),
                    ("frei", FieldValue::Null),
                ]),
                Record::from_pairs([
                    ("Faktor", FieldValue::Text("mit, Komma".into())),
                    ("anzahl", FieldValue::Integer(-3)),
                    ("quote", FieldValue::Float(12.5)),
                    ("aktiv", FieldValue::Bool(false)),
                    ("frei", FieldValue::Text("ein \"Zitat\"".into())),
                ]),
            ],
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        save_csv(&dataset, &path).unwrap();

        let reloaded = load_csv(&path).unwrap();
        assert_eq!(reloaded, dataset);
    }
}
