//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use patient_registry_cli::clock::parse_today;

#[derive(Parser)]
#[command(
    name = "patient-registry",
    version,
    about = "In-memory patient record manager with a text menu",
    long_about = "Create, list, look up, update and delete patient records from an \
                  interactive menu.\n\nRecords live in memory only and are lost on exit."
)]
pub struct Cli {
    /// Pin the date used for age calculation (dd-mm-yyyy).
    #[arg(long = "today", value_name = "DATE", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Log level for diagnostics written to stderr or the log file.
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevelArg,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable ANSI colors in log output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
