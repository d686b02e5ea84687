use std::collections::BTreeMap;
use std::fmt;

use super::error::PipelineError;

// ---------------------------------------------------------------------------
// FieldValue – a single cell of a record
// ---------------------------------------------------------------------------

/// A dynamically-typed field value, produced by the loader's type
/// inference. Comparisons are always tag-aware: an `Integer(95)` never
/// equals a `Text("95")`, and operations that need an ordering refuse
/// mixed tags instead of inventing one.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Empty source cell.
    Null,
}

impl FieldValue {
    /// Try to interpret the value as an `f64` for numeric aggregation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Human-readable tag name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Null => "null",
        }
    }
}

/// Renders exactly what the serializer writes into a cell. Floats keep at
/// least one fractional digit so a re-loaded float stays a float; nulls
/// render as the empty cell they came from.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single row: field name → value.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Build a record from `(name, value)` pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        Record {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// Copy of this record with one field replaced. The receiver is left
    /// untouched.
    pub fn with_field(&self, column: &str, value: FieldValue) -> Record {
        let mut fields = self.fields.clone();
        fields.insert(column.to_string(), value);
        Record { fields }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (column, value) in &self.fields {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{column}={value}")?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An ordered sequence of records sharing one field schema.
///
/// `columns` keeps the source header order, which the records themselves
/// (sorted maps) cannot; serialization depends on it. Every record is
/// expected to carry exactly the fields named in `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Field schema, in source header order.
    pub columns: Vec<String>,
    /// All rows, in source order.
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { columns, records }
    }

    /// Derive the schema from the first record's field names.
    pub fn from_records(records: Vec<Record>) -> Self {
        let columns = records
            .first()
            .map(|r| r.fields.keys().cloned().collect())
            .unwrap_or_default();
        Dataset { columns, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check that `column` is part of the schema.
    pub fn ensure_column(&self, column: &str) -> Result<(), PipelineError> {
        if self.columns.iter().any(|c| c == column) {
            Ok(())
        } else {
            Err(PipelineError::Field {
                column: column.to_string(),
                reason: String::from("not in the dataset schema"),
            })
        }
    }
}
