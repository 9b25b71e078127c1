//! Patient registry CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use patient_registry_cli::logging::{init_logging, LogConfig, LogFormat};
use patient_registry_cli::{menu, Clock, Console};
use patient_registry_core::PatientStore;
use tracing::Level;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli)).context("failed to initialize logging")?;

    let clock = cli.today.map_or(Clock::System, Clock::Fixed);
    let mut store = PatientStore::new();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    menu::run(&mut console, &mut store, clock).context("console I/O failed")?;
    Ok(())
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        LogLevelArg::Error => Level::ERROR,
        LogLevelArg::Warn => Level::WARN,
        LogLevelArg::Info => Level::INFO,
        LogLevelArg::Debug => Level::DEBUG,
        LogLevelArg::Trace => Level::TRACE,
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    LogConfig::default()
        .with_level(level)
        .with_format(format)
        .with_ansi(!cli.no_color && io::stderr().is_terminal())
        .with_log_file(cli.log_file.clone())
}
