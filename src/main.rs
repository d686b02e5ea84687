use std::path::PathBuf;

use anyhow::Context;
use umfrage::pipeline;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/selbstwirksamkeit.csv"));
    let factor = args
        .next()
        .unwrap_or_else(|| String::from("Migrationshintergrund"));

    let report = pipeline::run(&source, &factor)
        .with_context(|| format!("pipeline run over {} failed", source.display()))?;

    println!(
        "{} records loaded, {} in group '{factor}'",
        report.dataset.len(),
        report.group.len()
    );
    println!("highest reading: {}", report.highest);
    println!("sorted export written to {}", report.export_path.display());
    Ok(())
}
