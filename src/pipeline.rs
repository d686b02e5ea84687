use std::path::{Path, PathBuf};

use log::info;

use crate::data::aggregate::max_by_field;
use crate::data::error::PipelineError;
use crate::data::export::save_csv;
use crate::data::filter::filter_by_value;
use crate::data::loader::load_csv;
use crate::data::model::{Dataset, FieldValue, Record};
use crate::data::sort::{sort_by_field, SortDirection};
use crate::data::transform::normalize_percentages;

/// Column holding the percentage readings.
pub const VALUE_COLUMN: &str = "Value";
/// Column holding the grouping key.
pub const FACTOR_COLUMN: &str = "Faktor";

// ---------------------------------------------------------------------------
// One full pipeline run
// ---------------------------------------------------------------------------

/// Results of one run, kept as plain values for the caller to inspect.
pub struct RunReport {
    /// The loaded dataset with `Value` normalized to numbers.
    pub dataset: Dataset,
    /// Records of the selected factor group.
    pub group: Dataset,
    /// The group's record with the highest `Value`.
    pub highest: Record,
    /// The group sorted by `Value`, ascending.
    pub sorted: Dataset,
    /// Where the sorted group was exported.
    pub export_path: PathBuf,
}

/// Run the whole flow over one source file: load, normalize the `Value`
/// percentages, select the given `Faktor` group, find its highest
/// reading, sort ascending and export the sorted group next to the
/// source as `export.csv`.
///
/// Every stage result lives in a local binding that flows into the next
/// stage; the first failing stage aborts the run and nothing after it
/// executes.
pub fn run(source: &Path, factor: &str) -> Result<RunReport, PipelineError> {
    let raw = load_csv(source)?;
    info!("loaded {} records from {}", raw.len(), source.display());

    let dataset = normalize_percentages(&raw, VALUE_COLUMN)?;

    let group = filter_by_value(
        &dataset,
        FACTOR_COLUMN,
        &FieldValue::Text(factor.to_string()),
    )?;
    info!("{} records in group '{factor}'", group.len());

    let highest = max_by_field(&group, VALUE_COLUMN)?;
    info!("highest reading: {highest}");

    let sorted = sort_by_field(&group, VALUE_COLUMN, SortDirection::Ascending)?;

    let export_path = source.with_file_name("export.csv");
    save_csv(&sorted, &export_path)?;

    Ok(RunReport {
        dataset,
        group,
        highest,
        sorted,
        export_path,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const FIXTURE: &str = "\
Faktor,Value
Migrationshintergrund,70%
Migrationshintergrund,95%
Other,50%
";

    fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("selbstwirksamkeit.csv");
        fs::write(&path, FIXTURE).unwrap();
        path
    }

    fn values(dataset: &Dataset) -> Vec<FieldValue> {
        dataset
            .records
            .iter()
            .map(|r| r.get(VALUE_COLUMN).cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_reference_flow_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_fixture(&dir);

        let report = run(&source, "Migrationshintergrund").unwrap();

        assert_eq!(report.dataset.len(), 3);
        assert_eq!(
            values(&report.group),
            vec![FieldValue::Float(70.0), FieldValue::Float(95.0)]
        );
        assert_eq!(
            report.highest.get(VALUE_COLUMN),
            Some(&FieldValue::Float(95.0))
        );
        assert_eq!(
            values(&report.sorted),
            vec![FieldValue::Float(70.0), FieldValue::Float(95.0)]
        );

        // The export lands next to the source and loads back as the
        // sorted group.
        assert_eq!(report.export_path, dir.path().join("export.csv"));
        let reloaded = crate::data::loader::load_csv(&report.export_path).unwrap();
        assert_eq!(reloaded, report.sorted);
    }

    #[test]
    fn test_absent_group_fails_on_aggregation() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_fixture(&dir);

        let err = run(&source, "Sozialstatus").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput { .. }));
        // A failed stage prevents the export from being written.
        assert!(!dir.path().join("export.csv").exists());
    }

    #[test]
    fn test_missing_source_fails_to_load() {
        let err = run(Path::new("no/such/file.csv"), "Other").unwrap_err();
        assert!(matches!(err, PipelineError::Load { .. }));
    }
}
