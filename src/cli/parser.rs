use crate::core::calculator::stats::TimeRange;
use crate::export::ExportFormat;
use crate::models::settings::{Section, Theme};
use clap::{Parser, Subcommand};

/// Command-line interface definition for daylog
/// CLI application to journal your days with SQLite
#[derive(Parser)]
#[command(
    name = "daylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily journaling CLI: track ratings, energy levels, accomplishments and streaks",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Create or update the journal entry for a date
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// How was your day? (1=Terrible .. 5=Amazing)
        #[arg(
            long = "rating",
            value_parser = clap::value_parser!(u8).range(1..=5),
            help = "Day rating, 1 (Terrible) to 5 (Amazing)"
        )]
        rating: Option<u8>,

        /// Log an energy sample: LEVEL or LEVEL@HH:MM (level 1-5)
        #[arg(
            long = "energy",
            value_name = "SPEC",
            help = "Energy sample as LEVEL or LEVEL@HH:MM, e.g. 4@09:30 (repeatable)"
        )]
        energy: Vec<String>,

        /// Record an accomplishment (repeatable)
        #[arg(long = "done", value_name = "TEXT")]
        done: Vec<String>,

        /// Record a challenge (repeatable)
        #[arg(long = "challenge", value_name = "TEXT")]
        challenge: Vec<String>,

        /// Free-form notes for the day (replaces existing notes)
        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// List journal entries
    List {
        #[arg(long, short, help = "Filter by year (YYYY), month (YYYY-MM) or day (YYYY-MM-DD)")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's entry")]
        now: bool,

        #[arg(long = "details", help = "Show lists, notes and energy samples")]
        details: bool,
    },

    /// Delete the journal entry for a date
    Del {
        /// Date of the entry to delete (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show a month calendar with entry markers
    Calendar {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Show statistics over a lookback window
    Stats {
        #[arg(long, value_enum, help = "Lookback window (default from config)")]
        range: Option<TimeRange>,
    },

    /// View or change user settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print_settings: bool,

        /// Set the color theme
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Enable a form section (repeatable)
        #[arg(long, value_enum, value_name = "SECTION")]
        enable: Vec<Section>,

        /// Disable a form section (repeatable)
        #[arg(long, value_enum, value_name = "SECTION")]
        disable: Vec<Section>,

        /// Set the daily reminder time (HH:MM)
        #[arg(long, value_name = "HH:MM", conflicts_with = "no_reminder")]
        reminder: Option<String>,

        /// Clear the daily reminder
        #[arg(long = "no-reminder")]
        no_reminder: bool,
    },

    /// Export journal data
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import journal data from an export document
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Manage the database (integrity checks, maintenance)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "clear", help = "Delete ALL entries and settings")]
        clear: bool,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
