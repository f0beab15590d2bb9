use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to record daily work entries and build reports
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: record work entries, compute worked hours, overtime and deficit",
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
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Report filter shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive part of the employee name
    #[arg(long = "employee", short = 'e')]
    pub employee: Option<String>,

    /// First date included (YYYY-MM-DD)
    #[arg(long = "from")]
    pub from: Option<String>,

    /// Last date included (YYYY-MM-DD)
    #[arg(long = "to")]
    pub to: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record a work entry
    Add {
        /// Employee name
        employee: String,

        /// Date of the entry (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: String,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: String,

        /// Break in minutes
        #[arg(
            long = "break",
            conflicts_with_all = ["lunch_in", "lunch_out"],
            help = "Break duration in minutes"
        )]
        break_min: Option<String>,

        /// Lunch start (HH:MM)
        #[arg(long = "lunch-in", help = "Lunch start (HH:MM), requires --lunch-out")]
        lunch_in: Option<String>,

        /// Lunch end (HH:MM)
        #[arg(long = "lunch-out", help = "Lunch end (HH:MM), requires --lunch-in")]
        lunch_out: Option<String>,

        /// Free text notes
        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Show the report (filtered and sorted by date, employee)
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "json", help = "Print the entries as JSON")]
        json: bool,
    },

    /// Export the report to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: value of `export_file` in the configuration)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Delete all entries
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Add two demo entries dated today
    Seed,

    /// Record a one-shot check-in and print the confirmation
    Checkin {
        /// Employee name
        employee: String,

        #[arg(long = "lat", requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long = "lon", requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}
