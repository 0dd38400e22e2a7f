pub mod chart;
pub mod chat;
pub mod config;
pub mod export;
pub mod init;
pub mod map;
pub mod options;
pub mod show;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::filter::FilterSelection;
use crate::core::map::MapOptions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::issue::ParseIssue;
use crate::ui::messages::warning;

impl FilterArgs {
    pub fn selection(&self) -> AppResult<FilterSelection> {
        FilterSelection::from_inputs(
            self.category.as_deref(),
            self.range.as_deref(),
            self.location.as_deref(),
            self.weather.as_deref(),
        )
    }
}

pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    Ok(DbPool::open_read_only(&cfg.database)?)
}

pub(crate) fn map_options(cfg: &Config) -> MapOptions {
    MapOptions {
        center: cfg.map_center(),
        zoom: cfg.map_zoom,
    }
}

pub(crate) fn report_date_issues(issues: &[ParseIssue]) {
    for issue in issues {
        warning(issue);
    }
}
