//! One full page render: load → derive → filter → {map, grid, selection}.

use crate::core::derive::derive_features;
use crate::core::filter::FilterSelection;
use crate::core::grid::Grid;
use crate::core::map::{MapOptions, MapReport, render_map};
use crate::core::selection::{SelectedView, SelectionSet, project_selected};
use crate::db::pool::DbPool;
use crate::db::queries::{EVENTS_QUERY, load_data};
use crate::errors::AppResult;
use crate::models::events::EventTable;
use crate::models::issue::ParseIssue;
use tracing::debug;

/// How the grid should be laid out.
#[derive(Debug, Clone, Default)]
pub struct GridOptions {
    pub columns: Option<Vec<String>>,
    pub sort: Option<(String, bool)>, // (column, descending)
}

/// Everything a page shows, produced fresh on each render.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub total_rows: usize,
    pub filtered: EventTable,
    pub date_issues: Vec<ParseIssue>,
    pub map: MapReport,
    pub grid: Grid,
    pub selected: SelectedView,
}

/// Load and derive the whole table. Shared by every command.
pub fn load_table(pool: &DbPool) -> AppResult<(EventTable, Vec<ParseIssue>)> {
    let mut table = load_data(pool, EVENTS_QUERY)?;
    let issues = derive_features(&mut table);
    Ok((table, issues))
}

/// Load, derive and filter in one go.
pub fn load_filtered(
    pool: &DbPool,
    filters: &FilterSelection,
) -> AppResult<(EventTable, Vec<ParseIssue>)> {
    let (table, issues) = load_table(pool)?;
    let filtered = filters.apply(&table);
    debug!(total = table.len(), kept = filtered.len(), "filters applied");
    Ok((filtered, issues))
}

pub fn render(
    pool: &DbPool,
    filters: &FilterSelection,
    selection: &SelectionSet,
    map_options: MapOptions,
    grid_options: &GridOptions,
) -> AppResult<DashboardView> {
    let (table, date_issues) = load_table(pool)?;
    let filtered = filters.apply(&table);

    let map = render_map(&filtered, map_options);

    let mut grid = Grid::from_events(&filtered, grid_options.columns.as_deref())?;
    if let Some((column, desc)) = &grid_options.sort {
        grid.sort_by(column, *desc)?;
    }

    let selected = project_selected(&selection.checked(&grid));

    debug!(
        total = table.len(),
        kept = filtered.len(),
        markers = map.markers.len(),
        "dashboard rendered"
    );

    Ok(DashboardView {
        total_rows: table.len(),
        filtered,
        date_issues,
        map,
        grid,
        selected,
    })
}
