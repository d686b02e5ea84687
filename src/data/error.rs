use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the pipeline stages.
///
/// Every stage fails fast: the first bad record aborts the stage and the
/// error travels up to the caller. No stage substitutes a default for a
/// missing or malformed field, and nothing downstream of a failed stage
/// runs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source file could not be read or parsed as delimited text.
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A percentage cell could not be rewritten as a number.
    #[error("row {row}, field '{column}': {detail}")]
    Conversion {
        row: usize,
        column: String,
        detail: String,
    },

    /// A referenced field is absent from the schema, or holds values the
    /// requested operation cannot order.
    #[error("field '{column}': {reason}")]
    Field { column: String, reason: String },

    /// An operation that needs at least one record was given none.
    #[error("{operation}: dataset has no records")]
    EmptyInput { operation: &'static str },

    /// Rendering the dataset to CSV text failed.
    #[error("failed to render CSV text: {detail}")]
    Render { detail: String },

    /// The rendered export could not be written out.
    #[error("failed to write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<csv::Error> for PipelineError {
    fn from(source: csv::Error) -> Self {
        PipelineError::Render {
            detail: source.to_string(),
        }
    }
}
