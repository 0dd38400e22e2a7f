use crate::cli::commands::{open_store, report_date_issues};
use crate::config::Config;
use crate::core::dashboard::load_table;
use crate::core::filter::filter_options;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Print the selector choices, the way the dashboard's drop-downs list them.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let (table, issues) = load_table(&pool)?;
    report_date_issues(&issues);

    let opts = filter_options(&table);

    header("Categories");
    print_list(&opts.categories);
    header("Locations");
    print_list(&opts.locations);
    header("Weather conditions");
    print_list(&opts.weather);

    Ok(())
}

fn print_list(values: &[String]) {
    for v in values {
        println!("  - {v}");
    }
}
