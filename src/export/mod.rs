mod fs_utils;
mod json_csv;
pub mod map;

use crate::core::grid::Grid;
use crate::core::map::MapReport;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MapFormat {
    Html,
    Geojson,
}

/// Write the grid rows to `file`.
pub fn export_grid(grid: &Grid, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
    let path = Path::new(file);
    fs_utils::ensure_writable(path, force)?;

    if grid.is_empty() {
        warning("No events match the selected filters; writing an empty export.");
    }

    match format {
        ExportFormat::Csv => json_csv::export_csv(grid, path),
        ExportFormat::Json => json_csv::export_json(grid, path),
    }
}

/// Write the map markers to `file`.
pub fn export_map(
    report: &MapReport,
    format: MapFormat,
    file: &str,
    title: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    fs_utils::ensure_writable(path, force)?;

    match format {
        MapFormat::Html => map::export_html(report, path, title),
        MapFormat::Geojson => map::export_geojson(report, path),
    }
}
