use crate::export::ExportFormat;
use crate::models::period::PeriodKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Shiftledger
/// CLI application to log work sessions and report earnings with SQLite
#[derive(Parser)]
#[command(
    name = "shiftledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-session ledger: start/stop sessions, track an hourly rate, report hours and earnings",
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start a work session now
    Start {
        #[arg(long, help = "Optional notes attached to the session")]
        notes: Option<String>,

        #[arg(
            long = "at",
            help = "Start timestamp (RFC 3339 or 'YYYY-MM-DDTHH:MM'), defaults to now"
        )]
        at: Option<String>,
    },

    /// Stop the running work session and file it into the ledger
    Stop {
        #[arg(
            long = "at",
            help = "End timestamp (RFC 3339 or 'YYYY-MM-DDTHH:MM'), defaults to now"
        )]
        at: Option<String>,
    },

    /// Show the running session, if any
    Status {
        #[arg(long, help = "Refresh the elapsed time every second until interrupted")]
        watch: bool,
    },

    /// Add a completed entry, or replace an existing one
    Add {
        /// Start timestamp (RFC 3339 or 'YYYY-MM-DDTHH:MM')
        start: String,

        /// End timestamp (RFC 3339 or 'YYYY-MM-DDTHH:MM')
        end: String,

        #[arg(long, help = "Optional notes attached to the entry")]
        notes: Option<String>,

        #[arg(long = "edit", value_name = "ID", help = "Replace the entry with this id")]
        edit: Option<String>,
    },

    /// Delete an entry by id
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List logged entries, most recent first
    List {
        #[arg(long, help = "Show at most N entries")]
        limit: Option<usize>,
    },

    /// Show or update the hourly rate
    Rate {
        #[arg(long = "set", value_name = "RATE", help = "New hourly rate")]
        set: Option<String>,
    },

    /// Aggregate hours and earnings for a calendar period
    Report {
        #[arg(long, value_enum, default_value = "weekly")]
        period: PeriodKind,

        #[arg(long, help = "Print a single plain-text summary line")]
        share: bool,
    },

    /// Export the ledger (JSON backup document or CSV rows)
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file; defaults to a dated name")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Import a backup document, replacing entries and settings
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Create a raw copy of the database file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
