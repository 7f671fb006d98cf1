//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use solar_transfer::LaunchWindow;
use thiserror::Error;

/// Errors raised while writing exported tables.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Row emitted by the launch-window exporters; field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchWindowRow {
    pub year: i32,
    pub date: String,
    pub distance_au: f64,
    pub radius_origin_au: f64,
    pub radius_destination_au: f64,
    pub semi_major_axis_au: f64,
    pub transfer_days: f64,
    pub transfer_label: String,
    pub dv_depart_km_s: f64,
    pub dv_arrive_km_s: f64,
}

impl From<&LaunchWindow> for LaunchWindowRow {
    fn from(window: &LaunchWindow) -> Self {
        let approach = &window.approach;
        let transfer = &window.transfer;
        Self {
            year: approach.year,
            date: approach.date.format("%Y-%m-%d").to_string(),
            distance_au: approach.distance_au,
            radius_origin_au: transfer.radius_origin_au,
            radius_destination_au: transfer.radius_destination_au,
            semi_major_axis_au: transfer.semi_major_axis_au,
            transfer_days: transfer.duration_days,
            transfer_label: transfer.label(),
            dv_depart_km_s: transfer.dv_depart_km_s,
            dv_arrive_km_s: transfer.dv_arrive_km_s,
        }
    }
}

/// Write launch windows as CSV with a header row.
pub fn write_csv(writer: impl Write, windows: &[LaunchWindow]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for window in windows {
        csv.serialize(LaunchWindowRow::from(window))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write launch windows as a pretty-printed JSON array.
pub fn write_json(mut writer: impl Write, windows: &[LaunchWindow]) -> Result<(), ExportError> {
    let rows: Vec<LaunchWindowRow> = windows.iter().map(LaunchWindowRow::from).collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a CSV file (or stdout for `-`).
pub fn export_csv(path: &Path, windows: &[LaunchWindow]) -> Result<(), ExportError> {
    write_csv(writer_for_path(path)?, windows)
}

/// Write a JSON file (or stdout for `-`).
pub fn export_json(path: &Path, windows: &[LaunchWindow]) -> Result<(), ExportError> {
    write_json(writer_for_path(path)?, windows)
}
