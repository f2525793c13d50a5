use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for walklog
/// CLI application to track walking sessions stored as a plain JSON array
#[derive(Parser)]
#[command(
    name = "walklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple walking tracker CLI: log sessions, watch your progress, and get the next recommended duration",
    long_about = None
)]
pub struct Cli {
    /// Override session store path (useful for tests or custom locations)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the session store and configuration
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

    /// Manage the session store (inspection, consistency checks)
    Store {
        #[arg(long = "check", help = "Check the session store for inconsistencies")]
        check: bool,

        #[arg(long = "info", help = "Show session store information")]
        info: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print entries from the operations log")]
        print: bool,
    },

    /// Record a finished walking session
    Add {
        /// Time actually walked (seconds, MM:SS, or forms like 5m / 1h10m)
        duration: String,

        /// Session target; the walk counts as completed when the duration
        /// reaches it (defaults to the configured target)
        #[arg(long = "target", short = 't')]
        target: Option<String>,

        /// When the session ended: RFC 3339, "YYYY-MM-DD HH:MM", or a bare
        /// date taken as local noon (defaults to now)
        #[arg(long = "date")]
        date: Option<String>,

        /// Attach a GPS track from a JSON file of {lat, lng, timestamp} points
        #[arg(long = "track", value_name = "FILE")]
        track: Option<String>,
    },

    /// Delete recorded sessions for a date
    Del {
        #[arg(
            long = "index",
            help = "1-based session number within the date to delete"
        )]
        index: Option<usize>,

        date: String,
    },

    /// List recorded sessions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's sessions")]
        now: bool,

        #[arg(long = "completed", help = "Show only completed sessions")]
        completed: bool,
    },

    /// Show progress statistics over the whole history
    Stats,

    /// Recommend the duration for the next walk
    Recommend,

    /// Create a backup copy of the session store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export walking session data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
