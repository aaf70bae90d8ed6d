use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::pool::Pool;
use crate::services::capacity_simulation::CapacityRun;

pub const DEFAULT_CSV_FILE_NAME: &str = "capacity_simulation.csv";

#[derive(Error, Debug)]
pub enum SamplesCsvError {
    #[error("failed to create csv file {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("failed to write csv: {0}")]
    Write(#[from] io::Error),
}

/// Writes one row per trial: demand followed by the required hours of each
/// pool. There is no index column. Values always carry a decimal point
/// (`7500.0`), as float columns do in spreadsheet exports.
pub fn write_samples_csv<W: Write>(
    writer: &mut W,
    run: &CapacityRun,
) -> Result<(), SamplesCsvError> {
    let header: Vec<&str> = std::iter::once("Demand")
        .chain(Pool::ALL.iter().map(|pool| pool.hours_column()))
        .collect();
    writeln!(writer, "{}", header.join(","))?;

    for row in run.rows() {
        writeln!(
            writer,
            "{:?},{:?},{:?},{:?}",
            row.demand, row.analyst_hours, row.adjuster_hours, row.registration_hours
        )?;
    }
    Ok(())
}

pub fn write_samples_csv_file<P: AsRef<Path>>(
    path: P,
    run: &CapacityRun,
) -> Result<(), SamplesCsvError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| SamplesCsvError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_samples_csv(&mut writer, run)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = run.samples.len(), "wrote sample table");
    Ok(())
}
