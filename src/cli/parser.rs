use crate::core::payments::StatusFilter;
use crate::core::recurrence::RepeatKind;
use crate::core::summary::Span;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Plantões
/// CLI application to schedule shifts and track their payments with SQLite
#[derive(Parser)]
#[command(
    name = "plantoes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule shifts (plantões) at your work locations and track what has been paid",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage work locations
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Manage shifts
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Month view: the selected day, upcoming and past shifts
    Calendar {
        #[arg(long, help = "Month to show (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, help = "Selected day (YYYY-MM-DD, default: today)")]
        day: Option<String>,
    },

    /// Payments of a month with paid/pending totals
    Payments {
        #[arg(long, help = "Month to show (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
    },

    /// Per-month hours and earnings
    Summary {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM or YYYY-MM:YYYY-MM (default: current month)"
        )]
        period: Option<String>,

        #[arg(
            long,
            value_enum,
            default_value_t = Span::Month,
            help = "Months to cover when the period is a single month"
        )]
        span: Span,
    },

    /// Export data to JSON (full backup) or CSV (shifts)
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            help = "Only shifts in YYYY, YYYY-MM, YYYY-MM-DD or a START:END range"
        )]
        range: Option<String>,

        #[arg(long, help = "Overwrite the file without asking")]
        force: bool,
    },

    /// Replace all data with the content of a JSON export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Do not ask before overwriting existing data")]
        force: bool,
    },

    /// Delete every location and shift
    Clear {
        #[arg(long, help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum LocationAction {
    /// Add a location
    Add {
        /// Location name
        name: String,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long, help = "Display color #RRGGBB (default from config)")]
        color: Option<String>,
    },

    /// List locations
    List,

    /// Change some fields of a location
    Edit {
        /// Location id (a unique prefix is enough)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a location (its shifts are kept)
    Del {
        /// Location id (a unique prefix is enough)
        id: String,

        #[arg(long, help = "Do not ask for confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Add a shift, optionally repeated
    Add {
        #[arg(long, short, help = "Location id (a unique prefix is enough)")]
        location: String,

        #[arg(long, short, help = "Date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "start", help = "Start time HH:MM (default from config)")]
        start: Option<String>,

        #[arg(long = "end", help = "End time HH:MM (default from config)")]
        end: Option<String>,

        #[arg(long, short, help = "Pay value, e.g. 1200 or 1200,50")]
        amount: String,

        #[arg(long, help = "Title (default: location name)")]
        title: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "Record as already paid")]
        paid: bool,

        #[arg(long, value_enum, default_value_t = RepeatKind::None)]
        repeat: RepeatKind,

        #[arg(
            long,
            help = "Weekdays for --repeat weekdays, e.g. mon,wed,fri or seg,qua,sex"
        )]
        weekdays: Option<String>,
    },

    /// Change some fields of a shift
    Edit {
        /// Shift id (a unique prefix is enough)
        id: String,

        #[arg(long, short)]
        location: Option<String>,

        #[arg(long, short)]
        date: Option<String>,

        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long, short)]
        amount: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, help = "New notes; an empty value clears them")]
        notes: Option<String>,

        #[arg(long, help = "Set the paid status (true/false)")]
        paid: Option<bool>,
    },

    /// Delete a shift
    Del {
        /// Shift id (a unique prefix is enough)
        id: String,

        #[arg(long, help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Mark a shift as paid
    Paid {
        /// Shift id (a unique prefix is enough)
        id: String,
    },

    /// Flip the paid status of a shift
    Toggle {
        /// Shift id (a unique prefix is enough)
        id: String,
    },

    /// Show every field of a shift
    Show {
        /// Shift id (a unique prefix is enough)
        id: String,
    },
}
