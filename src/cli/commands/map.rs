use crate::cli::commands::{map_options, open_store, report_date_issues};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::load_filtered;
use crate::core::map::render_map;
use crate::errors::AppResult;
use crate::export::export_map;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Map {
        filters,
        out,
        format,
        force,
    } = cmd
    {
        let selection = filters.selection()?;
        let pool = open_store(cfg)?;
        let (filtered, issues) = load_filtered(&pool, &selection)?;
        report_date_issues(&issues);

        let report = render_map(&filtered, map_options(cfg));
        for issue in &report.issues {
            warning(issue);
        }

        info(format!(
            "{} markers from {} events",
            report.markers.len(),
            filtered.len()
        ));
        export_map(&report, *format, out, &cfg.title, *force)?;
    }
    Ok(())
}
