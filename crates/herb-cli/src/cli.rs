use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `hrb` binary.
#[derive(Debug, Parser)]
#[command(name = "hrb", version, about = "Herbaria - leaf identification companion")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Global flags shared by every command handler.
#[derive(Debug, Clone, Copy)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account and sign in
    Register {
        /// Display name
        name: String,
        email: String,
        password: String,
    },

    /// Sign in to an existing account
    Login { email: String, password: String },

    /// Clear the signed-in session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Classify a leaf image and record the result
    Identify {
        /// Path to the image file
        image: PathBuf,
    },

    /// Identification history of the signed-in account
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Look up display metadata for a classifier label
    Lookup { label: String },

    /// Probe the classification service
    Ping,
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List records, most recent first
    List,
    /// Delete a record by id
    Delete { id: String },
}
