//! # umfrage
//!
//! A small survey-data pipeline: load a comma-delimited file into a
//! dynamically-typed [`Dataset`], normalize a percentage column, select a
//! factor group, pick the extreme record, sort stably, and render the
//! result back to delimited text.
//!
//! Every stage is a pure function from dataset to dataset (or record):
//! nothing is mutated in place, and the first failing stage aborts the
//! run.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use umfrage::data::filter::filter_by_value;
//! use umfrage::data::loader::load_csv;
//! use umfrage::data::sort::{sort_by_field, SortDirection};
//! use umfrage::data::transform::normalize_percentages;
//! use umfrage::FieldValue;
//!
//! # fn main() -> Result<(), umfrage::PipelineError> {
//! let raw = load_csv(Path::new("data/selbstwirksamkeit.csv"))?;
//! let dataset = normalize_percentages(&raw, "Value")?;
//! let group = filter_by_value(
//!     &dataset,
//!     "Faktor",
//!     &FieldValue::Text("Migrationshintergrund".into()),
//! )?;
//! let sorted = sort_by_field(&group, "Value", SortDirection::Ascending)?;
//! assert_eq!(sorted.len(), group.len());
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod pipeline;

pub use data::error::PipelineError;
pub use data::model::{Dataset, FieldValue, Record};
