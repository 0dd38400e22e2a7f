use crate::cli::commands::{map_options, open_store, report_date_issues};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{self, DashboardView, GridOptions};
use crate::core::map::MapReport;
use crate::core::selection::{SELECTED_COLUMNS, SelectedView, SelectionSet};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        filters,
        select,
        columns,
        sort,
        desc,
        no_map,
    } = cmd
    {
        let selection_filters = filters.selection()?;
        let selection = match select {
            Some(raw) => SelectionSet::parse(raw)?,
            None => SelectionSet::default(),
        };
        let grid_options = GridOptions {
            columns: columns.clone(),
            sort: sort.clone().map(|c| (c, *desc)),
        };

        let pool = open_store(cfg)?;
        let view = dashboard::render(
            &pool,
            &selection_filters,
            &selection,
            map_options(cfg),
            &grid_options,
        )?;

        print_view(cfg, &view, &selection, *no_map);
    }
    Ok(())
}

fn print_view(cfg: &Config, view: &DashboardView, selection: &SelectionSet, no_map: bool) {
    header(&cfg.title);
    report_date_issues(&view.date_issues);
    info(format!(
        "Showing {} of {} events",
        view.filtered.len(),
        view.total_rows
    ));

    println!("\n{}", view.grid.render(selection));

    if !no_map {
        header("Event Locations on Map");
        print_markers(&view.map);
    }

    header("Selected");
    print_selected(&view.selected);
}

fn print_markers(report: &MapReport) {
    let (lat, lon) = report.options.center;
    println!("center ({lat}, {lon}) zoom {}", report.options.zoom);

    for m in &report.markers {
        println!("  📍 {} ({}, {})", m.label, m.lat, m.lon);
    }
    for issue in &report.issues {
        warning(issue);
    }
    if report.missing > 0 {
        info(format!("{} events without geolocation", report.missing));
    }
}

fn print_selected(view: &SelectedView) {
    match view {
        SelectedView::Placeholder => println!("No selected yet"),
        SelectedView::Table(rows) => {
            let mut table = Table::new(SELECTED_COLUMNS.as_slice());
            for row in rows {
                table.add_row(row.iter().map(|c| c.to_string()).collect());
            }
            print!("{}", table.render());
        }
    }
}
