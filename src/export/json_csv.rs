use crate::core::grid::Grid;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export grid rows as a pretty-printed JSON array of objects.
pub(crate) fn export_json(grid: &Grid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&grid.rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export grid rows as CSV, header first, columns in grid order.
pub(crate) fn export_csv(grid: &Grid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&grid.columns)?;

    for rec in &grid.rows {
        wtr.write_record(
            grid.columns
                .iter()
                .map(|c| rec.get(c).map(|v| v.to_string()).unwrap_or_default()),
        )?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
