use crate::cli::commands::{open_store, report_date_issues};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{count_by, render_chart};
use crate::core::dashboard::load_filtered;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { filters, by } = cmd {
        let selection = filters.selection()?;
        let pool = open_store(cfg)?;
        let (filtered, issues) = load_filtered(&pool, &selection)?;
        report_date_issues(&issues);

        let bars = count_by(&filtered, *by);
        print!("{}", render_chart(by.title(), &bars));
    }
    Ok(())
}
