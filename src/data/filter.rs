use super::error::PipelineError;
use super::model::{Dataset, FieldValue, Record};

/// Keep only the records whose `column` value equals `expected` exactly:
/// same tag and same value, no coercion. Kept records preserve their
/// relative order. An empty result is a valid dataset, not an error; a
/// `column` outside the schema is.
pub fn filter_by_value(
    dataset: &Dataset,
    column: &str,
    expected: &FieldValue,
) -> Result<Dataset, PipelineError> {
    dataset.ensure_column(column)?;

    let records: Vec<Record> = dataset
        .records
        .iter()
        .filter(|record| record.get(column) == Some(expected))
        .cloned()
        .collect();

    Ok(Dataset::new(dataset.columns.clone(), records))
}

/// Partition the dataset by a column's value, one group per distinct
/// value, in order of first appearance. Records keep their relative order
/// within each group.
pub fn group_by_field(
    dataset: &Dataset,
    column: &str,
) -> Result<Vec<(FieldValue, Dataset)>, PipelineError> {
    dataset.ensure_column(column)?;

    let mut groups: Vec<(FieldValue, Vec<Record>)> = Vec::new();
    for record in &dataset.records {
        let key = record.get(column).cloned().unwrap_or(FieldValue::Null);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((key, vec![record.clone()])),
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, members)| (key, Dataset::new(dataset.columns.clone(), members)))
        .collect())
}
