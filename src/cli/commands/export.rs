use crate::cli::commands::{open_store, report_date_issues};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::load_filtered;
use crate::core::grid::Grid;
use crate::errors::AppResult;
use crate::export::export_grid;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filters,
        file,
        format,
        columns,
        force,
    } = cmd
    {
        let selection = filters.selection()?;
        let pool = open_store(cfg)?;
        let (filtered, issues) = load_filtered(&pool, &selection)?;
        report_date_issues(&issues);

        let grid = Grid::from_events(&filtered, columns.as_deref())?;
        export_grid(&grid, *format, file, *force)?;
    }
    Ok(())
}
