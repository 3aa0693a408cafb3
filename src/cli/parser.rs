use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeclock
/// Employee time clock with SQLite storage and an HTTP front end
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A minimal employee time clock: record entrance/exit events and export them to a spreadsheet",
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

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Run the HTTP server
    Serve {
        #[arg(long, help = "Address to bind (overrides config)")]
        bind: Option<String>,

        #[arg(long, short, help = "Port to listen on (overrides config)")]
        port: Option<u16>,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record an entrance or exit for an employee
    Clock {
        /// Employee id
        employee_id: i64,

        /// Event kind: entrance | exit
        kind: String,
    },

    /// List clock records (newest first)
    Records {
        #[arg(long = "clear", help = "Delete every clock record")]
        clear: bool,

        #[arg(
            long = "raw",
            conflicts_with = "clear",
            help = "List raw event rows, including events of deleted or unknown employees"
        )]
        raw: bool,
    },

    /// Export clock records (oldest first)
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add a new employee
    Add {
        name: String,
        badge_number: String,
        role: String,
    },

    /// List employees
    List,

    /// Delete an employee and all of its clock records
    Del { id: i64 },
}
