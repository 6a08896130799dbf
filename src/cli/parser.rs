use crate::config::{Theme, UpdateFrequency};
use crate::models::location::Location;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tzglance
#[derive(Parser)]
#[command(
    name = "tzglance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Local time, workday progress and overlapping hours between UKI and Pune",
    long_about = None
)]
pub struct Cli {
    /// Override the settings file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Evaluate at a fixed instant instead of now (RFC 3339)
    #[arg(global = true, long = "at", value_name = "INSTANT", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the settings file with default schedules
    Init,

    /// Print the dashboard once
    Show {
        #[arg(long = "json", help = "Print the snapshot as JSON")]
        json: bool,
    },

    /// Keep the dashboard on screen, refreshing on every tick
    Watch {
        #[arg(long = "ticks", help = "Stop after this many refreshes")]
        ticks: Option<usize>,

        #[arg(
            long = "frequency",
            value_enum,
            help = "Refresh rate for this session only (standard = 60s, smooth = 1s)"
        )]
        frequency: Option<UpdateFrequency>,
    },

    /// Show today's overlapping working hours
    Overlap,

    /// View, check or change the settings
    Config {
        #[arg(long = "print", help = "Print the effective settings")]
        print_config: bool,

        #[arg(long = "check", help = "Check the settings file for missing or inconsistent fields")]
        check: bool,

        #[arg(long = "reset", help = "Restore the default settings")]
        reset: bool,

        #[arg(
            long = "edit",
            help = "Edit the settings file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,

        /// Schedule to change (ireland|uki, pune)
        #[arg(long = "location", value_enum)]
        location: Option<Location>,

        #[arg(long = "start", help = "Work start (HH:MM)", requires = "location")]
        start: Option<String>,

        #[arg(long = "lunch-start", help = "Lunch start (HH:MM)", requires = "location")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", help = "Lunch end (HH:MM)", requires = "location")]
        lunch_end: Option<String>,

        #[arg(long = "end", help = "Work end (HH:MM)", requires = "location")]
        end: Option<String>,

        #[arg(long = "use-24h", value_name = "BOOL", help = "24-hour clock display")]
        use_24h: Option<bool>,

        #[arg(long = "show-seconds", value_name = "BOOL", help = "Show seconds on the clocks")]
        show_seconds: Option<bool>,

        #[arg(long = "theme", value_enum)]
        theme: Option<Theme>,

        #[arg(long = "frequency", value_enum, help = "standard = 60s tick, smooth = 1s tick")]
        frequency: Option<UpdateFrequency>,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print entries from the activity log")]
        print: bool,
    },
}
