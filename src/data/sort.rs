use std::cmp::Ordering;

use super::error::PipelineError;
use super::model::{Dataset, FieldValue, Record};

/// Sort order for [`sort_by_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Comparable view of one cell. Extraction rejects null cells and, via the
/// class check in [`sort_by_field`], any column mixing classes; there is
/// no cross-class ordering.
enum SortKey {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl SortKey {
    fn class_name(&self) -> &'static str {
        match self {
            SortKey::Number(_) => "number",
            SortKey::Text(_) => "text",
            SortKey::Bool(_) => "boolean",
        }
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            // Unreachable: classes are checked during extraction.
            _ => Ordering::Equal,
        }
    }
}

fn sort_key(record: &Record, column: &str, row: usize) -> Result<SortKey, PipelineError> {
    let value = record.get(column).ok_or_else(|| PipelineError::Field {
        column: column.to_string(),
        reason: format!("missing on row {row}"),
    })?;
    match value {
        FieldValue::Integer(i) => Ok(SortKey::Number(*i as f64)),
        FieldValue::Float(v) => Ok(SortKey::Number(*v)),
        FieldValue::Text(s) => Ok(SortKey::Text(s.clone())),
        FieldValue::Bool(b) => Ok(SortKey::Bool(*b)),
        FieldValue::Null => Err(PipelineError::Field {
            column: column.to_string(),
            reason: format!("row {row} is null and cannot be ordered"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Stable keyed sort
// ---------------------------------------------------------------------------

/// Return a copy of the dataset ordered by `column`.
///
/// The sort is stable: records comparing equal keep their input order, in
/// both directions. Numbers order numerically (integers and floats mix),
/// text lexicographically, booleans false-before-true; a column mixing
/// those classes is a field error.
pub fn sort_by_field(
    dataset: &Dataset,
    column: &str,
    direction: SortDirection,
) -> Result<Dataset, PipelineError> {
    dataset.ensure_column(column)?;

    let mut keyed: Vec<(SortKey, Record)> = Vec::with_capacity(dataset.records.len());
    for (row, record) in dataset.records.iter().enumerate() {
        let key = sort_key(record, column, row)?;
        if let Some((first, _)) = keyed.first() {
            if std::mem::discriminant(first) != std::mem::discriminant(&key) {
                return Err(PipelineError::Field {
                    column: column.to_string(),
                    reason: format!(
                        "mixed value classes ({} on row 0, {} on row {row})",
                        first.class_name(),
                        key.class_name()
                    ),
                });
            }
        }
        keyed.push((key, record.clone()));
    }

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let records = keyed.into_iter().map(|(_, record)| record).collect();
    Ok(Dataset::new(dataset.columns.clone(), records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_value(values: &[(i64, f64)]) -> Dataset {
        Dataset::from_records(
            values
                .iter()
                .map(|(id, v)| {
                    Record::from_pairs([
                        ("id", FieldValue::Integer(*id)),
                        ("Value", FieldValue::Float(*v)),
                    ])
                })
                .collect(),
        )
    }

    fn ids(dataset: &Dataset) -> Vec<i64> {
        dataset
            .records
            .iter()
            .map(|r| match r.get("id") {
                Some(FieldValue::Integer(i)) => *i,
                other => panic!("unexpected id: {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_ascending_orders_numerically() {
        let dataset = by_value(&[(0, 95.0), (1, 50.0), (2, 70.0)]);
        let sorted = sort_by_field(&dataset, "Value", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&sorted), vec![1, 2, 0]);
    }

    #[test]
    fn test_descending_reverses_distinct_keys() {
        let dataset = by_value(&[(0, 95.0), (1, 50.0), (2, 70.0)]);
        let asc = sort_by_field(&dataset, "Value", SortDirection::Ascending).unwrap();
        let desc = sort_by_field(&dataset, "Value", SortDirection::Descending).unwrap();

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(reversed, ids(&desc));
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let dataset = by_value(&[(0, 2.0), (1, 1.0), (2, 2.0), (3, 1.0)]);

        let asc = sort_by_field(&dataset, "Value", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&asc), vec![1, 3, 0, 2]);

        let desc = sort_by_field(&dataset, "Value", SortDirection::Descending).unwrap();
        assert_eq!(ids(&desc), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let dataset = by_value(&[(0, 3.0), (1, 1.0), (2, 2.0), (3, 1.0)]);
        let once = sort_by_field(&dataset, "Value", SortDirection::Ascending).unwrap();
        let twice = sort_by_field(&once, "Value", SortDirection::Ascending).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_dataset_is_not_mutated() {
        let dataset = by_value(&[(0, 2.0), (1, 1.0)]);
        let _sorted = sort_by_field(&dataset, "Value", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&dataset), vec![0, 1]);
    }

    #[test]
    fn test_text_orders_lexicographically() {
        let dataset = Dataset::from_records(
            ["b", "a", "c"]
                .iter()
                .map(|s| Record::from_pairs([("Faktor", FieldValue::Text((*s).into()))]))
                .collect(),
        );
        let sorted = sort_by_field(&dataset, "Faktor", SortDirection::Ascending).unwrap();
        let names: Vec<_> = sorted
            .records
            .iter()
            .map(|r| r.get("Faktor").cloned().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                FieldValue::Text("a".into()),
                FieldValue::Text("b".into()),
                FieldValue::Text("c".into())
            ]
        );
    }

    #[test]
    fn test_mixed_classes_are_a_field_error() {
        let dataset = Dataset::from_records(vec![
            Record::from_pairs([("Value", FieldValue::Float(1.0))]),
            Record::from_pairs([("Value", FieldValue::Text("zwei".into()))]),
        ]);
        let err = sort_by_field(&dataset, "Value", SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, PipelineError::Field { .. }));
    }

    #[test]
    fn test_unknown_column_is_a_field_error() {
        let dataset = by_value(&[(0, 1.0)]);
        let err = sort_by_field(&dataset, "Wert", SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, PipelineError::Field { .. }));
    }
}
