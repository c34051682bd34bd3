use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock: clock in and out of named clocks and plot your days",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Override the storage directory (useful for tests or separate clock sets)
    #[arg(global = true, long = "root", value_name = "DIR")]
    pub root: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clock into the clock NAME (offers to create it when missing)
    #[command(visible_alias = "i")]
    In {
        name: String,

        /// Create a missing clock without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Clock out of the clock NAME
    #[command(visible_alias = "o")]
    Out { name: String },

    /// Show the most recent entry of NAME, or every clock when NAME is omitted
    #[command(visible_alias = "s")]
    Show { name: Option<String> },

    /// Show all existing clocks
    #[command(visible_alias = "l")]
    List,

    /// Show all clocks currently clocked into
    #[command(visible_alias = "r")]
    Running,

    /// Delete the clock NAME
    #[command(visible_alias = "d")]
    Delete { name: String },

    /// Plot the most recent populated days of NAME
    #[command(visible_alias = "p")]
    Plot {
        name: String,

        /// Number of populated days to show (default from config)
        #[arg(long)]
        days: Option<usize>,
    },

    /// Plot NAME between START and END (both included)
    #[command(visible_alias = "pd")]
    PlotDates {
        name: String,
        start: String,
        end: String,
    },

    /// Total time clocked into NAME since SINCE
    #[command(visible_alias = "t")]
    Total { name: String, since: String },

    /// Print this help
    #[command(visible_alias = "h")]
    Help,

    /// Initialize the configuration file and the storage directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
