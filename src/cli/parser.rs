use crate::core::chart::ChartAxis;
use crate::export::{ExportFormat, MapFormat};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for eventboard
#[derive(Parser)]
#[command(
    name = "eventboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Events dashboard: filter a local events table, map it, grid it and ask an AI about it",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The four dashboard selectors. `All` (or omitting the flag) means no filter.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, help = "Category to filter (or All)")]
    pub category: Option<String>,

    /// Date range to filter, inclusive.
    ///
    /// Supported formats:
    /// - YYYY, YYYY-MM, YYYY-MM-DD
    /// - start:end in the same format (e.g. "2024-01-01:2024-01-31")
    #[arg(long, value_name = "RANGE")]
    pub range: Option<String>,

    #[arg(long, help = "Location to filter (or All)")]
    pub location: Option<String>,

    #[arg(long, help = "Weather condition to filter (or All)")]
    pub weather: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the events table
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Render the dashboard: grid, map markers and selected rows
    Show {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(
            long,
            value_name = "IDS",
            help = "Comma separated event ids to tick in the grid"
        )]
        select: Option<String>,

        #[arg(
            long,
            value_name = "COLS",
            value_delimiter = ',',
            help = "Grid columns to show (default: all)"
        )]
        columns: Option<Vec<String>>,

        #[arg(long, value_name = "COL", help = "Sort the grid by a column")]
        sort: Option<String>,

        #[arg(long, requires = "sort", help = "Sort descending")]
        desc: bool,

        #[arg(long = "no-map", help = "Skip the marker listing")]
        no_map: bool,
    },

    /// List the choices available for each selector
    Options,

    /// Write the filtered events as an interactive map
    Map {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, value_enum, default_value = "html")]
        format: MapFormat,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Export the filtered grid
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "COLS",
            value_delimiter = ',',
            help = "Columns to export (default: all)"
        )]
        columns: Option<Vec<String>>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Bar chart of event counts
    Chart {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "category")]
        by: ChartAxis,
    },

    /// Chat with the AI assistant
    Chat {
        #[arg(
            long,
            value_name = "PROMPT",
            help = "Ask a single question and exit (otherwise interactive)"
        )]
        ask: Option<String>,
    },
}
